//! Example demonstrating basic nonogram puzzle generation.
//!
//! This example shows how to:
//! - Configure `GeneratorOptions` and pick a shape policy
//! - Generate a random puzzle or replay a seed
//! - Display the grid, clues, difficulty, and seed
//! - Sample for a puzzle matching a target difficulty tier
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick a shape and dimensions:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --shape symmetric --width 15 --height 15
//! ```
//!
//! Replay a seed printed by an earlier run:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <64-hex-chars>
//! ```
//!
//! Sample for a difficulty tier within a budget (default: 1000):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty 4 --max-tries 5000
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use nonolace_generator::{
    GeneratedPuzzle, GeneratorOptions, PuzzleGenerator, PuzzleSeed, ShapeKind,
};
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ShapeArg {
    Uniform,
    Symmetric,
    Striped,
    Clustered,
}

impl From<ShapeArg> for ShapeKind {
    fn from(arg: ShapeArg) -> Self {
        match arg {
            ShapeArg::Uniform => ShapeKind::Uniform,
            ShapeArg::Symmetric => ShapeKind::Symmetric,
            ShapeArg::Striped => ShapeKind::Striped,
            ShapeArg::Clustered => ShapeKind::Clustered,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Shape policy to generate with.
    #[arg(long, value_name = "SHAPE", default_value = "symmetric")]
    shape: ShapeArg,

    /// Grid width (1-50).
    #[arg(long, value_name = "CELLS", default_value_t = 10)]
    width: usize,

    /// Grid height (1-50).
    #[arg(long, value_name = "CELLS", default_value_t = 10)]
    height: usize,

    /// Fill probability for the uniform and symmetric shapes.
    #[arg(long, value_name = "RATIO", default_value_t = 0.5)]
    fill_ratio: f64,

    /// Cluster count for the clustered shape.
    #[arg(long, value_name = "COUNT", default_value_t = 4)]
    cluster_count: usize,

    /// Maximum cluster radius for the clustered shape.
    #[arg(long, value_name = "CELLS", default_value_t = 3)]
    cluster_size: usize,

    /// Seed to replay (64 hex characters).
    #[arg(long, value_name = "SEED")]
    seed: Option<PuzzleSeed>,

    /// Target difficulty tier (1-5) to sample for.
    #[arg(long, value_name = "TIER")]
    difficulty: Option<u8>,

    /// Maximum puzzles to sample when filtering by difficulty.
    #[arg(long, value_name = "COUNT", default_value_t = 1_000)]
    max_tries: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let options = GeneratorOptions {
        width: args.width,
        height: args.height,
        fill_ratio: args.fill_ratio,
        cluster_count: args.cluster_count,
        cluster_size: args.cluster_size,
        ..GeneratorOptions::default()
    };
    let generator = match PuzzleGenerator::new(args.shape.into(), &options) {
        Ok(generator) => generator,
        Err(err) => {
            eprintln!("Invalid options: {err}");
            process::exit(2);
        }
    };

    let Some(target) = args.difficulty else {
        let generated = match args.seed {
            Some(seed) => generator.generate_with_seed(seed),
            None => generator.generate(),
        };
        match generated {
            Ok(generated) => print_puzzle(&generated),
            Err(err) => {
                eprintln!("Generation failed: {err}");
                process::exit(1);
            }
        }
        return;
    };

    if !(1..=5).contains(&target) {
        eprintln!("--difficulty must be between 1 and 5.");
        process::exit(2);
    }
    if args.max_tries == 0 {
        eprintln!("--max-tries must be at least 1.");
        process::exit(1);
    }

    let found = (0..args.max_tries)
        .into_par_iter()
        .filter_map(|_| generator.generate().ok())
        .find_any(|generated| generated.puzzle.difficulty().value() == target);

    if let Some(generated) = found {
        print_puzzle(&generated);
        return;
    }

    eprintln!(
        "No puzzle reached difficulty {target} within {} tries.",
        args.max_tries
    );
    process::exit(1);
}

fn print_puzzle(generated: &GeneratedPuzzle) {
    let puzzle = &generated.puzzle;

    println!("Seed:");
    println!("  {}", generated.seed);
    println!();

    println!("Difficulty:");
    println!("  {}", puzzle.difficulty());
    println!();

    println!("Grid:");
    for line in puzzle.grid().to_string().lines() {
        println!("  {line}");
    }
    println!();

    println!("Row clues:");
    for clues in puzzle.row_clues() {
        println!("  {clues:?}");
    }
    println!();

    println!("Column clues:");
    for clues in puzzle.column_clues() {
        println!("  {clues:?}");
    }
}
