//! Benchmarks for the solving pipeline.
//!
//! This suite measures single rule sweeps, a full propagation run, and the
//! complete solve on representative puzzles.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use solvoku_core::Grid;
use solvoku_solver::{Propagator, Solver, rule};

// Falls to deduction alone.
const PROPAGATION_ONLY: &str =
    "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
// Stalls the rules early and leans on the search.
const SEARCH_HEAVY: &str =
    "600008940900006100070040000200610000000000200089002000000060005000000030800001600";

fn bench_rule_sweep(c: &mut Criterion) {
    let grid: Grid = PROPAGATION_ONLY.parse().unwrap();

    for rule in rule::standard_rules() {
        c.bench_with_input(
            BenchmarkId::new("rule_sweep", rule.name()),
            &grid,
            |b, grid| {
                b.iter_batched_ref(
                    || hint::black_box(grid.clone()),
                    |grid| {
                        let changed = rule.apply(grid);
                        hint::black_box(changed)
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_propagator_run(c: &mut Criterion) {
    let propagator = Propagator::with_standard_rules();
    let grid: Grid = PROPAGATION_ONLY.parse().unwrap();

    c.bench_function("propagator_run", |b| {
        b.iter_batched_ref(
            || hint::black_box(grid.clone()),
            |grid| {
                let stats = propagator.run(grid);
                hint::black_box(stats)
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_solve(c: &mut Criterion) {
    let puzzles = [
        ("propagation_only", PROPAGATION_ONLY),
        ("search_heavy", SEARCH_HEAVY),
    ];
    let solver = Solver::with_standard_rules();

    for (param, line) in puzzles {
        let grid: Grid = line.parse().unwrap();
        c.bench_with_input(BenchmarkId::new("solve", param), &grid, |b, grid| {
            b.iter(|| {
                let solution = solver.solve(hint::black_box(grid)).unwrap();
                hint::black_box(solution)
            });
        });
    }
}

criterion_group!(
    benches,
    bench_rule_sweep,
    bench_propagator_run,
    bench_solve
);
criterion_main!(benches);
