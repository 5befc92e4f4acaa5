//! Paper roll grid in the printing department.
//!
//! Forklifts can reach a roll when it is not crowded, meaning fewer than
//! a threshold number of its eight neighbours hold rolls.

use log::{debug, trace};
use serde::Deserialize;

use crate::SolveError;

/// Neighbour count at which a roll becomes unreachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CrowdingRule {
    #[serde(default = "CrowdingRule::default_threshold")]
    crowded_threshold: u32,
}

impl CrowdingRule {
    pub fn new(crowded_threshold: u32) -> Self {
        Self { crowded_threshold }
    }

    pub fn crowded_threshold(&self) -> u32 {
        self.crowded_threshold
    }

    fn default_threshold() -> u32 {
        4
    }
}

impl Default for CrowdingRule {
    fn default() -> Self {
        Self::new(Self::default_threshold())
    }
}

/// A rectangular grid; `true` cells hold a roll of paper.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaperRollGrid {
    rows: Vec<Vec<bool>>,
    width: usize,
}

impl PaperRollGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row and return the number of rolls it holds.
    ///
    /// The first row fixes the grid width.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::RaggedGrid`] when the row width differs from
    /// the rows already present.
    pub fn push_row(&mut self, row: Vec<bool>) -> Result<usize, SolveError> {
        if self.rows.is_empty() {
            self.width = row.len();
        } else if row.len() != self.width {
            return Err(SolveError::RaggedGrid {
                row: self.rows.len() + 1,
                expected: self.width,
                found: row.len(),
            });
        }
        let rolls = row.iter().filter(|cell| **cell).count();
        self.rows.push(row);
        Ok(rolls)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether the cell holds a roll, or `None` outside the grid.
    pub fn has_roll(&self, row: usize, col: usize) -> Option<bool> {
        self.rows.get(row).and_then(|cells| cells.get(col)).copied()
    }

    pub fn roll_count(&self) -> usize {
        self.rows.iter().flatten().filter(|cell| **cell).count()
    }

    /// Number of the (up to eight) neighbouring cells that hold rolls.
    ///
    /// Returns `None` if the cell is not within the grid.
    pub fn count_neighboring_rolls(&self, row: usize, col: usize) -> Option<u32> {
        self.has_roll(row, col)?;

        let mut count = 0;
        for r in row.saturating_sub(1)..=row + 1 {
            for c in col.saturating_sub(1)..=col + 1 {
                if (r, c) != (row, col) && self.has_roll(r, c) == Some(true) {
                    count += 1;
                }
            }
        }
        Some(count)
    }

    /// Positions of every roll a forklift can currently reach.
    pub fn accessible_rolls(&self, rule: CrowdingRule) -> Vec<(usize, usize)> {
        let mut accessible = Vec::new();
        for (r, cells) in self.rows.iter().enumerate() {
            for (c, has_roll) in cells.iter().enumerate() {
                if !has_roll {
                    continue;
                }
                let crowd = self.count_neighboring_rolls(r, c).unwrap_or(0);
                if crowd < rule.crowded_threshold {
                    accessible.push((r, c));
                }
            }
        }
        accessible
    }

    /// Remove reachable rolls until none remain reachable.
    ///
    /// Returns the total number of rolls removed.
    pub fn clear_accessible(&mut self, rule: CrowdingRule) -> usize {
        let mut removed = 0;
        let mut round = 0;
        loop {
            let accessible = self.accessible_rolls(rule);
            if accessible.is_empty() {
                break;
            }
            round += 1;
            trace!(round, removing = accessible.len(); "Removing accessible rolls");
            for (r, c) in &accessible {
                self.rows[*r][*c] = false;
            }
            removed += accessible.len();
        }
        debug!(rounds = round, removed; "No accessible rolls remain");
        removed
    }
}
