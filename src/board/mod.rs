//! Position representation: bitboards, masks, attack lookups, hashing,
//! and FEN construction.
//!
//! The board is the evaluator's read-only collaborator. It exposes piece
//! placement, the side to move, two Zobrist hashes (full and pawn-only),
//! and the incrementally maintained material + piece-square total.

pub(crate) mod attack_tables;
mod error;
mod fen;
pub(crate) mod masks;
mod state;
mod types;
pub(crate) mod zobrist;

pub use error::FenError;
pub use state::Board;
pub use types::{Bitboard, Color, Move, Piece, Square};

pub(crate) use types::pop_lsb;
