//! Pawn pass: structure scoring, passed-pawn marking, and the aggregate
//! pawn contribution to the king-attack counters.

use crate::board::masks::{
    file_of, relative_square32, ADJACENT_FILES, FILES, PASSED_PAWN_MASK, PAWN_CONNECTED_MASK,
};
use crate::board::{pop_lsb, Board, Piece};

use super::params::{PAWN_BACKWARDS, PAWN_CONNECTED32, PAWN_ISOLATED, PAWN_STACKED};
use super::EvalInfo;

pub(super) fn evaluate_pawns(ei: &mut EvalInfo, board: &Board, colour: usize) {
    let us = colour;
    let them = 1 - colour;
    let forward: i32 = if us == 0 { 8 } else { -8 };

    // Publish the pawn attack maps before any later pass runs. The by-two
    // set is computed against the pre-pawn attack map, so squares covered
    // only by two pawns do not count as doubly attacked.
    let attacks = ei.pawn_attacks[us] & ei.king_areas[them];
    ei.attacked_by2[us] = ei.attacked[us] & ei.pawn_attacks[us];
    ei.attacked[us] |= ei.pawn_attacks[us];
    ei.attacked_no_queen[us] |= attacks;

    // Pawns feed the king-attack counters once in aggregate rather than
    // per pawn.
    if attacks != 0 {
        ei.attack_counts[us] += 2 * attacks.count_ones() as i32;
        ei.attacker_counts[us] += 1;
    }

    // A cache hit supplies the structure scores and the passed mask
    if ei.pentry.is_some() {
        return;
    }

    let pawns = board.kind_bb(Piece::Pawn).0;
    let my_pawns = pawns & board.occupied[us].0;
    let enemy_pawns = pawns & board.occupied[them].0;

    let mut remaining = my_pawns;
    while remaining != 0 {
        let sq = pop_lsb(&mut remaining);

        trace!(ei.pawn_counts[us] += 1);

        if PASSED_PAWN_MASK[us][sq] & enemy_pawns == 0 {
            ei.passed_pawns |= 1u64 << sq;
        }

        if ADJACENT_FILES[file_of(sq)] & my_pawns == 0 {
            ei.add_pawn(us, PAWN_ISOLATED);
            trace!(ei.pawn_isolated[us] += 1);
        }

        // Doubled: another own pawn still ahead on the file
        if FILES[file_of(sq)] & remaining != 0 {
            ei.add_pawn(us, PAWN_STACKED);
            trace!(ei.pawn_stacked[us] += 1);
        }

        // Backward: no own pawn can guard the stop square and an enemy
        // pawn attacks it
        let stop = (sq as i32 + forward) as usize;
        if PASSED_PAWN_MASK[them][sq] & my_pawns == 0
            && ei.pawn_attacks[them] & (1u64 << stop) != 0
        {
            let semi = usize::from(FILES[file_of(sq)] & enemy_pawns == 0);
            ei.add_pawn(us, PAWN_BACKWARDS[semi]);
            trace!(ei.pawn_backwards[us][semi] += 1);
        }
        // Connected and not backward: phalanx neighbour or defender
        else if PAWN_CONNECTED_MASK[us][sq] & my_pawns != 0 {
            let rel32 = relative_square32(us, sq);
            ei.add_pawn(us, PAWN_CONNECTED32[rel32]);
            trace!(ei.pawn_connected[us][rel32] += 1);
        }
    }
}
