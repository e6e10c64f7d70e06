//! Benchmarks for the evaluator and the shared tables.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use cinder::board::{Board, Move};
use cinder::eval::evaluate;
use cinder::history::HistoryTable;
use cinder::pawn_table::PawnTable;
use cinder::tt::{Bound, TranspositionTable};

const POSITIONS: &[(&str, &str)] = &[
    (
        "startpos",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    ),
    (
        "kiwipete",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    ),
    (
        "endgame",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    ),
];

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for (name, fen) in POSITIONS {
        let board = Board::from_fen(fen);

        let mut cold_table = PawnTable::new(1);
        group.bench_with_input(BenchmarkId::new("cold_pawn_cache", name), &board, |b, board| {
            b.iter(|| {
                cold_table.clear();
                evaluate(black_box(board), &mut cold_table)
            })
        });

        let mut warm_table = PawnTable::default();
        evaluate(&board, &mut warm_table);
        group.bench_with_input(BenchmarkId::new("warm_pawn_cache", name), &board, |b, board| {
            b.iter(|| evaluate(black_box(board), &mut warm_table))
        });
    }

    group.finish();
}

fn bench_tt(c: &mut Criterion) {
    let mut group = c.benchmark_group("transposition_table");

    let tt = TranspositionTable::new(16);
    group.bench_function("store", |b| {
        let mut key = 1u64;
        b.iter(|| {
            key = key.wrapping_mul(0x9E37_79B9_7F4A_7C15);
            tt.store(black_box(key), 8, 50, 25, Move::new(12, 28), Bound::Exact);
        })
    });

    for key in 0..100_000u64 {
        tt.store(key.wrapping_mul(0x9E37_79B9_7F4A_7C15), 8, 50, 25, Move::NONE, Bound::Exact);
    }
    group.bench_function("probe", |b| {
        let mut key = 1u64;
        b.iter(|| {
            key = key.wrapping_mul(0x9E37_79B9_7F4A_7C15);
            black_box(tt.probe(black_box(key)))
        })
    });

    group.finish();
}

fn bench_history(c: &mut Criterion) {
    let mut group = c.benchmark_group("history");

    let mut history = HistoryTable::new();
    group.bench_function("update", |b| {
        let mut sq = 0usize;
        b.iter(|| {
            sq = (sq + 1) & 63;
            history.update(
                cinder::board::Color::White,
                Move::new(sq, 63 - sq),
                black_box(200),
            );
        })
    });

    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_tt, bench_history);
criterion_main!(benches);
