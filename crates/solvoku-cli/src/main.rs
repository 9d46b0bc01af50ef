//! Command-line Sudoku solver.
//!
//! Reads an 81-cell puzzle in reading order (`1`-`9` for clues; `0`, `.`, or
//! `_` for blanks; whitespace ignored), solves it, and prints the solution
//! with timing and per-rule statistics.
//!
//! # Usage
//!
//! Solve a puzzle given as an argument:
//!
//! ```sh
//! solvoku 530070000600195000098000060800060003400803001700020006060000280000419005000080079
//! ```
//!
//! Read from a file or stdin, comparing against a known answer:
//!
//! ```sh
//! solvoku --file puzzle.txt --expect 534678912672195348198342567859761423426853791713924856961537284287419635345286179
//! solvoku < puzzle.txt
//! ```
//!
//! Exit codes: 0 when solved, 1 when no solution exists, 2 on malformed
//! input or arguments. `RUST_LOG=debug` surfaces engine progress.

use std::{
    error::Error,
    fs,
    io::{self, Read as _},
    path::PathBuf,
    process,
    time::Instant,
};

use clap::Parser;
use solvoku_core::Grid;
use solvoku_solver::{SolveError, SolveStats, Solver};

/// Solves a 9x9 Sudoku puzzle by candidate elimination and backtracking.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle as 81 cells in reading order (`0`, `.`, or `_` for blanks).
    #[arg(value_name = "PUZZLE", conflicts_with = "file")]
    puzzle: Option<String>,

    /// Read the puzzle from a file (stdin when neither is given).
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Known solution to compare the result against.
    #[arg(long, value_name = "GRID")]
    expect: Option<String>,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();

    let grid = match load_puzzle(&args) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };
    let expected = match args.expect.as_deref().map(str::parse::<Grid>).transpose() {
        Ok(expected) => expected,
        Err(err) => {
            eprintln!("error: invalid --expect grid: {err}");
            process::exit(2);
        }
    };
    log::info!("loaded puzzle with {} clues", 81 - grid.undetermined_count());

    println!("Puzzle:");
    println!("{grid}");
    println!();

    let solver = Solver::with_standard_rules();
    let mut stats = solver.new_stats();
    let start = Instant::now();
    let outcome = solver.solve_with_stats(&grid, &mut stats);
    let elapsed = start.elapsed().as_secs_f64();

    match outcome {
        Ok(solution) => {
            println!("Solution:");
            println!("{solution}");
            println!();
            print_stats(&solver, &stats);
            print_verdict(&solution, expected.as_ref());
            println!("Time: {elapsed:.3} seconds");
        }
        Err(SolveError::Contradiction(conflict)) => {
            print_stats(&solver, &stats);
            println!("No solution possible. ({conflict})");
            println!("Time: {elapsed:.3} seconds");
            process::exit(1);
        }
        Err(SolveError::Unsolvable) => {
            print_stats(&solver, &stats);
            println!("No solution possible.");
            println!("Time: {elapsed:.3} seconds");
            process::exit(1);
        }
    }
}

/// Reads the puzzle from the argument, the file, or stdin, in that order.
fn load_puzzle(args: &Args) -> Result<Grid, Box<dyn Error>> {
    let text = if let Some(puzzle) = &args.puzzle {
        puzzle.clone()
    } else if let Some(path) = &args.file {
        fs::read_to_string(path)?
    } else {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        text
    };
    Ok(text.parse()?)
}

fn print_stats(solver: &Solver, stats: &SolveStats) {
    let propagation = stats.propagation();

    println!("Stats:");
    for (i, count) in propagation.applications().iter().enumerate() {
        let name = solver.propagator().rules()[i].name();
        println!("  {name}: {count}");
    }
    println!("  rounds: {}", propagation.rounds());
    println!("  search nodes: {}", stats.search().nodes());
    println!("  backtracks: {}", stats.search().backtracks());
    println!();
}

fn print_verdict(solution: &Grid, expected: Option<&Grid>) {
    let Some(expected) = expected else {
        println!("Solution found.");
        return;
    };

    let matches = solution
        .digits()
        .iter()
        .zip(expected.digits())
        .filter(|&(&found, wanted)| found == wanted)
        .count();
    if matches == 81 {
        println!("Solution found. Matches: {matches}/81");
    } else {
        println!("Alternate solution found. Matches: {matches}/81");
    }
}
