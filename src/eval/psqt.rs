//! Piece-square tables.
//!
//! Each piece kind has 32 tuned entries in white orientation; file symmetry
//! maps them onto all 64 squares. Expansion into the full per-colour table
//! happens in const context, folding the piece base values in and negating
//! plus rank-mirroring the black half. The board's incremental material
//! accumulator is the only consumer of the expanded table.

use crate::board::masks::relative_square32;
use crate::eval::params::{
    Term, BISHOP_VALUE, KING_VALUE, KNIGHT_VALUE, PAWN_VALUE, QUEEN_VALUE, ROOK_VALUE,
};
use crate::eval::score::{Score, S};

const PAWN_PSQT32: [Score; 32] = [
    S(0, 0),
    S(0, 0),
    S(0, 0),
    S(0, 0),
    S(-16, 7),
    S(9, 1),
    S(-6, 4),
    S(-3, -3),
    S(-20, 3),
    S(-1, 0),
    S(-6, -4),
    S(-4, -13),
    S(-14, 14),
    S(-1, 7),
    S(16, -10),
    S(12, -19),
    S(-2, 19),
    S(7, 8),
    S(6, 0),
    S(16, -18),
    S(0, 27),
    S(10, 25),
    S(16, 3),
    S(25, -20),
    S(-43, 6),
    S(-34, 8),
    S(-1, -16),
    S(1, -31),
    S(0, 0),
    S(0, 0),
    S(0, 0),
    S(0, 0),
];

const KNIGHT_PSQT32: [Score; 32] = [
    S(-39, -47),
    S(-2, -37),
    S(-11, -15),
    S(2, -7),
    S(3, -48),
    S(6, -11),
    S(4, -22),
    S(12, -3),
    S(0, -23),
    S(22, -18),
    S(14, 1),
    S(28, 12),
    S(6, 5),
    S(27, 7),
    S(34, 31),
    S(45, 31),
    S(28, 5),
    S(43, 12),
    S(44, 40),
    S(49, 43),
    S(-27, 8),
    S(25, 4),
    S(40, 37),
    S(48, 33),
    S(-33, -21),
    S(-35, 4),
    S(40, -32),
    S(13, -1),
    S(-169, -34),
    S(-102, -30),
    S(-156, -6),
    S(-39, -26),
];

const BISHOP_PSQT32: [Score; 32] = [
    S(24, -22),
    S(19, -27),
    S(-7, -9),
    S(16, -15),
    S(33, -28),
    S(27, -25),
    S(23, -13),
    S(10, -2),
    S(22, -11),
    S(30, -11),
    S(19, 0),
    S(24, 6),
    S(9, -5),
    S(18, 0),
    S(18, 13),
    S(31, 17),
    S(-13, 10),
    S(34, 2),
    S(4, 16),
    S(29, 19),
    S(0, 5),
    S(0, 7),
    S(26, 7),
    S(21, 6),
    S(-68, 1),
    S(-3, -3),
    S(-8, -10),
    S(-39, 0),
    S(-49, 0),
    S(-61, -1),
    S(-125, 3),
    S(-110, 10),
];

const ROOK_PSQT32: [Score; 32] = [
    S(-3, -30),
    S(-9, -17),
    S(4, -19),
    S(10, -26),
    S(-41, -25),
    S(-7, -29),
    S(-2, -24),
    S(4, -32),
    S(-18, -19),
    S(4, -14),
    S(-3, -20),
    S(0, -21),
    S(-15, 0),
    S(-9, 4),
    S(-1, 2),
    S(0, 3),
    S(-9, 12),
    S(-7, 11),
    S(17, 5),
    S(21, 7),
    S(-14, 15),
    S(15, 9),
    S(10, 13),
    S(18, 12),
    S(-1, 15),
    S(-6, 16),
    S(33, 0),
    S(20, 7),
    S(0, 23),
    S(11, 14),
    S(-21, 23),
    S(3, 27),
];

const QUEEN_PSQT32: [Score; 32] = [
    S(0, -46),
    S(-13, -30),
    S(-4, -21),
    S(8, -40),
    S(7, -46),
    S(13, -37),
    S(19, -54),
    S(8, -14),
    S(5, -21),
    S(22, -16),
    S(5, 5),
    S(1, 0),
    S(4, -4),
    S(10, 4),
    S(-4, 15),
    S(-6, 45),
    S(-9, 10),
    S(-12, 33),
    S(-7, 21),
    S(-21, 51),
    S(-11, 3),
    S(-4, 18),
    S(0, 20),
    S(-9, 45),
    S(-3, 12),
    S(-73, 55),
    S(21, 10),
    S(-19, 65),
    S(-19, -21),
    S(2, -11),
    S(8, -3),
    S(-17, 9),
];

const KING_PSQT32: [Score; 32] = [
    S(79, -106),
    S(96, -80),
    S(35, -33),
    S(21, -39),
    S(66, -54),
    S(54, -43),
    S(5, -1),
    S(-16, 5),
    S(0, -41),
    S(44, -28),
    S(16, 2),
    S(-11, 20),
    S(-52, -33),
    S(33, -20),
    S(1, 17),
    S(-44, 37),
    S(-18, -19),
    S(53, 0),
    S(8, 30),
    S(-29, 37),
    S(37, -18),
    S(83, -1),
    S(74, 18),
    S(9, 16),
    S(14, -17),
    S(49, -4),
    S(33, 0),
    S(7, 0),
    S(26, -81),
    S(83, -67),
    S(-21, -34),
    S(-15, -35),
];

const PIECE_TABLES: [(&[Score; 32], Term); 6] = [
    (&PAWN_PSQT32, PAWN_VALUE),
    (&KNIGHT_PSQT32, KNIGHT_VALUE),
    (&BISHOP_PSQT32, BISHOP_VALUE),
    (&ROOK_PSQT32, ROOK_VALUE),
    (&QUEEN_PSQT32, QUEEN_VALUE),
    (&KING_PSQT32, KING_VALUE),
];

/// Expanded table: `PSQT[colour][piece][square]`, white positive, black
/// negated and rank-mirrored, piece base value included.
pub static PSQT: [[[Score; 64]; 6]; 2] = {
    let mut table = [[[Score::ZERO; 64]; 6]; 2];
    let mut piece = 0;
    while piece < 6 {
        let positional = PIECE_TABLES[piece].0;
        let value = PIECE_TABLES[piece].1;
        let mut sq = 0;
        while sq < 64 {
            let w32 = relative_square32(0, sq);
            let b32 = relative_square32(1, sq);
            table[0][piece][sq] = S(
                value.mg + positional[w32].mg(),
                value.eg + positional[w32].eg(),
            );
            table[1][piece][sq] = S(
                -(value.mg + positional[b32].mg()),
                -(value.eg + positional[b32].eg()),
            );
            sq += 1;
        }
        piece += 1;
    }
    table
};
