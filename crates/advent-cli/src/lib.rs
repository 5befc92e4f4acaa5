//! CLI logic for the Advent puzzle solver.
//!
//! This module contains the core CLI logic: load the configuration, read
//! the puzzle input and print the answers.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use advent::{AdventError, Part, PuzzleRunner, Solution};

/// Run the Advent CLI application
///
/// This function solves the requested parts of the puzzle input and prints
/// one `Day NN part N: <answer>` line per part to stdout.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `AdventError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
/// - Inputs that parse but cannot be solved
pub fn run(args: &Args) -> Result<Solution, AdventError> {
    info!(
        day:% = args.day,
        input_path = args.input;
        "Processing puzzle input"
    );

    // Load configuration, then let command-line overrides win
    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(connections) = args.connections {
        app_config.playground = app_config.playground.with_connections(connections);
    }
    if let Some(largest) = args.largest {
        app_config.playground = app_config.playground.with_largest(largest);
    }
    config::validate(&app_config)?;

    let source = fs::read_to_string(&args.input)?;

    let parts = match args.part {
        Some(part) => vec![part],
        None => Part::BOTH.to_vec(),
    };
    let solution = PuzzleRunner::new(app_config).solve_parts(args.day, &parts, &source)?;

    for (part, answer) in solution.answers() {
        println!("Day {:02} {part}: {answer}", solution.day().number());
    }

    info!(answers = solution.answers().len(); "Puzzle solved successfully");

    Ok(solution)
}
