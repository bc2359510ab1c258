//! Benchmarks for running complete matches.
//!
//! This benchmarks the match loop the tournament runner spends its time in.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use parchis::game::Board;
use parchis::tournament::run_game;
use parchis::{FieldSize, Match, MatchConfig, Side, StepRule};

fn rolled(size: u32) -> MatchConfig {
    MatchConfig {
        field_size: FieldSize::new(size).unwrap_or_default(),
        step_rule: StepRule::Rolled,
        max_turns: 2000,
    }
}

fn bench_single_game(c: &mut Criterion) {
    let config = rolled(11);

    c.bench_function("single_game_11x11", |b| {
        b.iter(|| black_box(run_game(black_box(42), black_box(&config))));
    });
}

fn bench_fixed_rule_to_cap(c: &mut Criterion) {
    // Fixed steps never finish, so this always plays the full cap.
    let config = MatchConfig::default();

    c.bench_function("fixed_rule_1000_turns", |b| {
        b.iter(|| black_box(run_game(black_box(7), black_box(&config))));
    });
}

fn bench_game_batch(c: &mut Criterion) {
    let config = rolled(7);

    c.bench_function("10_games_sequential_7x7", |b| {
        b.iter(|| {
            for seed in 0..10u64 {
                black_box(run_game(black_box(seed), black_box(&config)));
            }
        });
    });
}

fn bench_single_turn(c: &mut Criterion) {
    let config = rolled(21);
    let mut game = Match::seeded(3, config);
    for _ in 0..20 {
        game.make_move(&mut ());
    }

    c.bench_function("single_turn_21x21", |b| {
        b.iter_batched(
            || game.clone(),
            |mut g| black_box(g.play_turn()),
            criterion::BatchSize::SmallInput,
        );
    });
}

fn bench_path(c: &mut Criterion) {
    let board = Board::new(FieldSize::new(21).unwrap_or_default());

    c.bench_function("path_21x21", |b| {
        b.iter(|| black_box(board.path(black_box(Side::A)).count()));
    });
}

criterion_group!(
    benches,
    bench_single_game,
    bench_fixed_rule_to_cap,
    bench_game_batch,
    bench_single_turn,
    bench_path
);
criterion_main!(benches);
