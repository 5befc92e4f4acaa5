//! Advent - parse and solve Advent puzzle inputs
//!
//! This library ties the input parsers of `advent-parser` to the solvers of
//! `advent-core`. A [`PuzzleRunner`] takes the text of a puzzle input and
//! produces the answers for the requested parts.

pub mod config;

mod error;
mod puzzles;

pub use advent_core::{
    SolveError,
    puzzle::{Answer, Day, Part, Solution, UnknownDay, UnknownPart},
};

pub use error::AdventError;

use log::{debug, info};

use config::AppConfig;

/// Runner for parsing and solving puzzle inputs.
///
/// # Examples
///
/// ```rust
/// use advent::{Day, Part, PuzzleRunner, config::AppConfig};
///
/// let source = "L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82\n";
///
/// let runner = PuzzleRunner::new(AppConfig::default());
/// let answer = runner
///     .solve(Day::SecretEntrance, Part::One, source)
///     .expect("Failed to solve");
/// assert_eq!(answer.value(), 3);
///
/// // Or solve both parts at once
/// let solution = PuzzleRunner::default()
///     .solve_all(Day::SecretEntrance, source)
///     .expect("Failed to solve");
/// assert_eq!(solution.answers().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct PuzzleRunner {
    config: AppConfig,
}

impl PuzzleRunner {
    /// Create a new runner with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Puzzle rule overrides such as the dial size or the
    ///   number of playground connections
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// The configuration this runner solves with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Solve one part of a day.
    ///
    /// # Errors
    ///
    /// Returns `AdventError::Parse` when the input is malformed and
    /// `AdventError::Solve` when it parses but has no answer.
    pub fn solve(&self, day: Day, part: Part, source: &str) -> Result<Answer, AdventError> {
        let puzzle = puzzles::parse(day, source)?;
        self.answer(puzzle.as_ref(), part)
    }

    /// Solve several parts of a day, parsing the input only once.
    ///
    /// Answers appear in the solution in the order of `parts`.
    ///
    /// # Errors
    ///
    /// Returns the first error met, see [`PuzzleRunner::solve`].
    pub fn solve_parts(
        &self,
        day: Day,
        parts: &[Part],
        source: &str,
    ) -> Result<Solution, AdventError> {
        info!(day:% = day, parts = parts.len(); "Solving puzzle");
        let puzzle = puzzles::parse(day, source)?;
        debug!(day:% = day; "Input parsed successfully");

        parts.iter().try_fold(Solution::new(day), |solution, &part| {
            let answer = self.answer(puzzle.as_ref(), part)?;
            Ok(solution.with_answer(part, answer))
        })
    }

    /// Solve both parts of a day.
    ///
    /// # Errors
    ///
    /// See [`PuzzleRunner::solve`].
    pub fn solve_all(&self, day: Day, source: &str) -> Result<Solution, AdventError> {
        self.solve_parts(day, &Part::BOTH, source)
    }

    fn answer(&self, puzzle: &dyn puzzles::Puzzle, part: Part) -> Result<Answer, AdventError> {
        let day = puzzle.day();
        let value = puzzle
            .answer(&self.config, part)
            .map_err(|source| AdventError::Solve { day, part, source })?;
        info!(day:% = day, part:% = part, answer = value; "Puzzle solved");
        Ok(Answer::new(value))
    }
}
