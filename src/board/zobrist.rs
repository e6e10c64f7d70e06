//! Zobrist key material for position hashing.
//!
//! Two hashes are derived from the same key set: the full position hash
//! used by the transposition table, and a pawn-only hash used by the pawn
//! structure cache.

use once_cell::sync::Lazy;
use rand::prelude::*;

pub(crate) struct ZobristKeys {
    /// piece_keys[color][piece][square]
    pub(crate) piece_keys: [[[u64; 64]; 6]; 2],
    pub(crate) black_to_move_key: u64,
    /// castling_keys[color][side]: 0 = kingside, 1 = queenside
    pub(crate) castling_keys: [[u64; 2]; 2],
    /// en_passant_keys[file]
    pub(crate) en_passant_keys: [u64; 8],
}

impl ZobristKeys {
    fn new() -> Self {
        // Fixed seed keeps hashes reproducible across runs
        let mut rng = StdRng::seed_from_u64(0xC1D0_2717_0B57_ACE5);
        let mut piece_keys = [[[0u64; 64]; 6]; 2];
        let mut castling_keys = [[0u64; 2]; 2];
        let mut en_passant_keys = [0u64; 8];

        for colour in &mut piece_keys {
            for piece in colour.iter_mut() {
                for key in piece.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let black_to_move_key = rng.gen();

        for colour in &mut castling_keys {
            for key in colour.iter_mut() {
                *key = rng.gen();
            }
        }

        for key in &mut en_passant_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            black_to_move_key,
            castling_keys,
            en_passant_keys,
        }
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);
