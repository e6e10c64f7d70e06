//! King pass: defender count, the king-danger polynomial, and pawn
//! shelter.

use crate::board::masks::{file_of, rank_of, FILES};
use crate::board::{Bitboard, Board, Color, Piece};

use super::params::{
    KING_DEFENDERS, KING_SAFETY_EXPONENT, KING_SAFETY_POLYNOMIAL, KING_SAFETY_SCALE, KING_SHELTER,
};
use super::EvalInfo;

pub(super) fn evaluate_kings(ei: &mut EvalInfo, board: &Board, colour: usize) {
    let us = colour;
    let them = 1 - colour;

    let my_pawns = board.pieces[us][Piece::Pawn.index()].0;
    let my_kings = board.pieces[us][Piece::King.index()].0;
    let my_defenders = my_pawns
        | board.pieces[us][Piece::Knight.index()].0
        | board.pieces[us][Piece::Bishop.index()].0;

    let king_sq = board.king_square(Color::BOTH[us]);
    let king_file = file_of(king_sq);
    let king_rank = rank_of(king_sq);

    // Pawns and minors sheltering inside the king area, capped so the
    // whole army is not drawn to the king
    let defenders = (my_defenders & ei.king_areas[us]).count_ones().min(7) as usize;
    ei.add(us, KING_DEFENDERS[defenders]);
    trace!(ei.king_defenders[us][defenders] += 1);

    // The danger term arms only once two or more enemy pieces bear on the
    // king area. The schedule and truncation points below are part of the
    // evaluation's observable contract; keep them bit-for-bit.
    if ei.attacker_counts[them] >= 2 {
        let mut x = ei.attack_counts[them] * 2;

        let attackers = ei.attacker_counts[them].min(7) as usize;
        x = (x as f32 * KING_SAFETY_SCALE[attackers]) as i32;

        // Attacks without heavy pieces behind them are mostly noise
        if board.pieces[them][Piece::Queen.index()].0 == 0 {
            x = (f64::from(x) * 0.25) as i32;
        }
        if board.pieces[them][Piece::Rook.index()].0 == 0 {
            x = (f64::from(x) * 0.80) as i32;
        }

        let (linear_mg, linear_eg) = KING_SAFETY_POLYNOMIAL[0];
        ei.midgame[us] = (ei.midgame[us] as f32 + x as f32 * linear_mg) as i32;
        ei.endgame[us] = (ei.endgame[us] as f32 + x as f32 * linear_eg) as i32;

        let (quad_mg, quad_eg) = KING_SAFETY_POLYNOMIAL[1];
        let x_pow = f64::from(x).powf(KING_SAFETY_EXPONENT);
        ei.midgame[us] = (f64::from(ei.midgame[us]) + x_pow * f64::from(quad_mg)) as i32;
        ei.endgame[us] = (f64::from(ei.endgame[us]) + x_pow * f64::from(quad_eg)) as i32;

        trace!(ei.king_safety[us][0] += f64::from(x));
        trace!(ei.king_safety[us][1] += x_pow);
    }

    // Pawn shelter on the king's file and its neighbours, scored by the
    // rank distance to the backmost own pawn of each file; 0 means the
    // file has no pawn at all
    let centre = usize::from(my_kings & (Bitboard::FILE_D.0 | Bitboard::FILE_E.0) != 0);
    for file in king_file.saturating_sub(1)..=(king_file + 1).min(7) {
        let file_pawns = my_pawns & FILES[file];

        let distance = if file_pawns == 0 {
            0
        } else {
            let pawn_rank = if us == 0 {
                rank_of(file_pawns.trailing_zeros() as usize)
            } else {
                rank_of(63 - file_pawns.leading_zeros() as usize)
            };
            (king_rank as i32 - pawn_rank as i32).unsigned_abs().max(1) as usize
        };

        let own_file = usize::from(file == king_file);
        ei.add(us, KING_SHELTER[own_file][centre][distance]);
        trace!(ei.king_shelter[us][own_file][centre][distance] += 1);
    }
}
