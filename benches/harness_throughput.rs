use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetris_cupkit::core::{apply_move, TetrisGame};
use tetris_cupkit::harness::{
    request_decision, SupervisorConfig, TimedPlayoutSupervisor, ValidityHarness,
};
use tetris_cupkit::sandbox::{AlwaysDown, CorridorGame, CountdownGame, SandboxFactory};
use tetris_cupkit::types::Move;

fn bench_apply_move(c: &mut Criterion) {
    let mut game = CorridorGame::new(12345);
    game.step();

    c.bench_function("apply_move_rotate", |b| {
        b.iter(|| apply_move(&mut game, black_box(Move::RotateCw)))
    });
}

fn bench_validity_run(c: &mut Criterion) {
    let harness = ValidityHarness::new(SandboxFactory::default());

    c.bench_function("validity_run_100", |b| {
        b.iter(|| harness.run(black_box(9315)).ok())
    });
}

fn bench_decision_round_trip(c: &mut Criterion) {
    c.bench_function("decision_round_trip", |b| {
        b.iter(|| request_decision(AlwaysDown, 0u64, Duration::from_secs(1), 0).ok())
    });
}

fn bench_timed_playout(c: &mut Criterion) {
    let config = SupervisorConfig::default().with_step_limit(100);

    c.bench_function("timed_playout_100_steps", |b| {
        b.iter(|| {
            let mut supervisor = TimedPlayoutSupervisor::new(config);
            let mut game = CountdownGame::new(u64::MAX);
            supervisor.playout(&mut game, AlwaysDown).ok()
        })
    });
}

criterion_group!(
    benches,
    bench_apply_move,
    bench_validity_run,
    bench_decision_round_trip,
    bench_timed_playout
);
criterion_main!(benches);
