//! Tachyon manifold in the teleporter laboratory.
//!
//! A beam enters at the source and travels straight down. A splitter
//! stops the beam and emits two new beams from the columns immediately to
//! its left and right. Beams landing on the same column merge into one,
//! but the number of distinct particle paths (timelines) keeps growing.

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, trace};

use crate::SolveError;

/// A manifold: the source column and the splitters below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TachyonManifold {
    width: usize,
    source: usize,
    /// Splitter columns for each row below the source, top to bottom.
    splitters: Vec<BTreeSet<usize>>,
}

impl TachyonManifold {
    /// Create a manifold `width` columns wide.
    ///
    /// Splitter columns outside the manifold are ignored.
    pub fn new(width: usize, source: usize, splitters: Vec<BTreeSet<usize>>) -> Self {
        let splitters = splitters
            .into_iter()
            .map(|row| row.into_iter().filter(|col| *col < width).collect())
            .collect();
        Self {
            width,
            source,
            splitters,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn source(&self) -> usize {
        self.source
    }

    /// Send a beam through the manifold.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Overflow`] when the timeline count exceeds `u64`.
    pub fn fire(&self) -> Result<BeamReport, SolveError> {
        // timelines arriving at each column of the current row
        let mut beams: BTreeMap<usize, u64> = BTreeMap::new();
        if self.source < self.width {
            beams.insert(self.source, 1);
        }
        let mut splits = 0u64;

        for (depth, row) in self.splitters.iter().enumerate() {
            let mut next: BTreeMap<usize, u64> = BTreeMap::new();
            for (&col, &timelines) in &beams {
                if !row.contains(&col) {
                    add_timelines(&mut next, col, timelines)?;
                    continue;
                }

                splits += 1;
                if let Some(left) = col.checked_sub(1) {
                    add_timelines(&mut next, left, timelines)?;
                }
                if col + 1 < self.width {
                    add_timelines(&mut next, col + 1, timelines)?;
                }
            }
            trace!(depth, beams = next.len(); "Beam row advanced");
            beams = next;
        }

        let timelines = beams
            .values()
            .try_fold(0u64, |total, count| total.checked_add(*count))
            .ok_or(SolveError::Overflow)?;

        debug!(splits, timelines; "Beam left the manifold");
        Ok(BeamReport { splits, timelines })
    }
}

fn add_timelines(
    beams: &mut BTreeMap<usize, u64>,
    col: usize,
    timelines: u64,
) -> Result<(), SolveError> {
    let entry = beams.entry(col).or_insert(0);
    *entry = entry.checked_add(timelines).ok_or(SolveError::Overflow)?;
    Ok(())
}

/// What happened to the beam on its way through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeamReport {
    splits: u64,
    timelines: u64,
}

impl BeamReport {
    /// Number of splitters that were hit by a beam.
    pub fn splits(&self) -> u64 {
        self.splits
    }

    /// Number of distinct paths a single particle could take.
    pub fn timelines(&self) -> u64 {
        self.timelines
    }
}
