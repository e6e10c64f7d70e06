//! Per-term hit counters collected while the `tune` feature is active.
//!
//! The tuner fits the evaluation constants from these coefficients; the
//! counters mirror the terms of the per-piece passes one to one. With the
//! feature disabled none of this exists and the passes carry no overhead.

/// Count of how often each evaluation term fired, per colour.
#[derive(Clone, Debug)]
pub struct EvalTrace {
    pub pawn_counts: [i32; 2],
    pub pawn_isolated: [i32; 2],
    pub pawn_stacked: [i32; 2],
    pub pawn_backwards: [[i32; 2]; 2],
    pub pawn_connected: [[i32; 32]; 2],
    pub knight_attacked_by_pawn: [i32; 2],
    pub knight_outpost: [[i32; 2]; 2],
    pub knight_mobility: [[i32; 9]; 2],
    pub bishop_wings: [i32; 2],
    pub bishop_pair: [i32; 2],
    pub bishop_attacked_by_pawn: [i32; 2],
    pub bishop_outpost: [[i32; 2]; 2],
    pub bishop_mobility: [[i32; 14]; 2],
    pub rook_file: [[i32; 2]; 2],
    pub rook_on_seventh: [i32; 2],
    pub rook_mobility: [[i32; 15]; 2],
    pub queen_checked: [i32; 2],
    pub queen_checked_by_pawn: [i32; 2],
    pub queen_mobility: [[i32; 28]; 2],
    pub king_defenders: [[i32; 8]; 2],
    pub king_shelter: [[[[i32; 8]; 2]; 2]; 2],
    /// Accumulated linear and superlinear king-safety inputs.
    pub king_safety: [[f64; 2]; 2],
    pub passed_pawn: [[[[i32; 8]; 2]; 2]; 2],
}

impl Default for EvalTrace {
    fn default() -> Self {
        EvalTrace {
            pawn_counts: [0; 2],
            pawn_isolated: [0; 2],
            pawn_stacked: [0; 2],
            pawn_backwards: [[0; 2]; 2],
            pawn_connected: [[0; 32]; 2],
            knight_attacked_by_pawn: [0; 2],
            knight_outpost: [[0; 2]; 2],
            knight_mobility: [[0; 9]; 2],
            bishop_wings: [0; 2],
            bishop_pair: [0; 2],
            bishop_attacked_by_pawn: [0; 2],
            bishop_outpost: [[0; 2]; 2],
            bishop_mobility: [[0; 14]; 2],
            rook_file: [[0; 2]; 2],
            rook_on_seventh: [0; 2],
            rook_mobility: [[0; 15]; 2],
            queen_checked: [0; 2],
            queen_checked_by_pawn: [0; 2],
            queen_mobility: [[0; 28]; 2],
            king_defenders: [[0; 8]; 2],
            king_shelter: [[[[0; 8]; 2]; 2]; 2],
            king_safety: [[0.0; 2]; 2],
            passed_pawn: [[[[0; 8]; 2]; 2]; 2],
        }
    }
}
