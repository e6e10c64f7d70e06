//! Per-thread search context.
//!
//! Each search thread owns its pawn cache, history, and counter-move
//! tables and borrows the one shared transposition table. The table
//! outlives every worker; workers never talk to each other directly.

use crate::board::Board;
use crate::eval;
use crate::history::{CounterMoveTable, HistoryTable};
use crate::pawn_table::PawnTable;
use crate::tt::TranspositionTable;

/// Thread-owned evaluation and ordering state around the shared
/// transposition table.
pub struct Worker<'a> {
    tt: &'a TranspositionTable,
    pub pawn_table: PawnTable,
    pub history: HistoryTable,
    pub counters: CounterMoveTable,
}

impl<'a> Worker<'a> {
    #[must_use]
    pub fn new(tt: &'a TranspositionTable) -> Self {
        Worker {
            tt,
            pawn_table: PawnTable::default(),
            history: HistoryTable::new(),
            counters: CounterMoveTable::new(),
        }
    }

    /// The shared transposition table.
    #[must_use]
    pub fn tt(&self) -> &'a TranspositionTable {
        self.tt
    }

    /// Evaluate a position using this worker's pawn cache.
    pub fn evaluate(&mut self, board: &Board) -> i32 {
        eval::evaluate(board, &mut self.pawn_table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workers_share_one_table() {
        let tt = TranspositionTable::new(1);
        let mut first = Worker::new(&tt);
        let second = Worker::new(&tt);

        first
            .tt()
            .store(77, 4, 120, 60, crate::board::Move::NONE, crate::tt::Bound::Exact);
        assert_eq!(second.tt().probe(77).unwrap().value, 120);
    }

    #[test]
    fn test_worker_evaluation_matches_free_function() {
        let tt = TranspositionTable::new(1);
        let mut worker = Worker::new(&tt);
        let board = Board::new();

        let mut pawn_table = PawnTable::default();
        assert_eq!(
            worker.evaluate(&board),
            eval::evaluate(&board, &mut pawn_table)
        );
    }

    #[test]
    fn test_parallel_workers_evaluate_consistently() {
        let tt = TranspositionTable::new(1);
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
        let baseline = {
            let mut worker = Worker::new(&tt);
            worker.evaluate(&Board::from_fen(fen))
        };

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    let mut worker = Worker::new(&tt);
                    let board = Board::from_fen(fen);
                    for _ in 0..50 {
                        assert_eq!(worker.evaluate(&board), baseline);
                    }
                });
            }
        });
    }
}
