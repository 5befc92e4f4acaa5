//! Command-line argument definitions for the Advent CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments pick the puzzle and input file, override
//! puzzle rules, select a configuration file and control logging verbosity.

use clap::Parser;

use advent::{Day, Part};

/// Command-line arguments for the Advent puzzle solver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Puzzle day to solve (1-9)
    #[arg(value_parser = parse_day)]
    pub day: Day,

    /// Path to the puzzle input file
    #[arg(help = "Path to the puzzle input file")]
    pub input: String,

    /// Solve only this part (1 or 2); both parts when omitted
    #[arg(short, long, value_parser = parse_part)]
    pub part: Option<Part>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Number of closest junction box pairs to wire (day 8)
    #[arg(long)]
    pub connections: Option<usize>,

    /// Number of largest circuits to multiply (day 8)
    #[arg(long)]
    pub largest: Option<usize>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

fn parse_day(value: &str) -> Result<Day, String> {
    let number: u8 = value
        .parse()
        .map_err(|_| format!("`{value}` is not a day number"))?;
    Day::try_from(number).map_err(|err| err.to_string())
}

fn parse_part(value: &str) -> Result<Part, String> {
    let number: u8 = value
        .parse()
        .map_err(|_| format!("`{value}` is not a part number"))?;
    Part::try_from(number).map_err(|err| err.to_string())
}
