//! Ingredient freshness database for the cafeteria.

use std::fmt;

use log::debug;

use crate::SolveError;

/// An inclusive range of fresh ingredient IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FreshRange {
    start: u64,
    end: u64,
}

impl FreshRange {
    /// Create a range. Callers guarantee `start <= end`.
    pub fn new(start: u64, end: u64) -> Self {
        debug_assert!(start <= end, "range start must not exceed its end");
        Self { start, end }
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    /// Number of IDs in the range; `None` for the full `u64` span.
    pub fn len(&self) -> Option<u64> {
        (self.end - self.start).checked_add(1)
    }
}

impl fmt::Display for FreshRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Sorted, disjoint, non-adjacent ranges built from possibly overlapping ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeIndex {
    merged: Vec<FreshRange>,
}

impl RangeIndex {
    pub fn new(ranges: &[FreshRange]) -> Self {
        let mut sorted = ranges.to_vec();
        sorted.sort_unstable();

        let mut merged: Vec<FreshRange> = Vec::with_capacity(sorted.len());
        for range in sorted {
            match merged.last_mut() {
                Some(last) if range.start <= last.end.saturating_add(1) => {
                    last.end = last.end.max(range.end);
                }
                _ => merged.push(range),
            }
        }

        debug!(input = ranges.len(), merged = merged.len(); "Merged fresh ranges");
        Self { merged }
    }

    pub fn ranges(&self) -> &[FreshRange] {
        &self.merged
    }

    pub fn contains(&self, id: u64) -> bool {
        // first range starting beyond `id`; the one before it may hold `id`
        let idx = self.merged.partition_point(|range| range.start <= id);
        idx > 0 && self.merged[idx - 1].end >= id
    }

    /// Count of distinct IDs covered by the index.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Overflow`] when the count exceeds `u64`.
    pub fn covered(&self) -> Result<u64, SolveError> {
        self.merged.iter().try_fold(0u64, |total, range| {
            range
                .len()
                .and_then(|len| total.checked_add(len))
                .ok_or(SolveError::Overflow)
        })
    }
}

/// The database: fresh ranges plus the IDs currently in stock.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    fresh: Vec<FreshRange>,
    available: Vec<u64>,
}

impl Inventory {
    pub fn new(fresh: Vec<FreshRange>, available: Vec<u64>) -> Self {
        Self { fresh, available }
    }

    pub fn fresh(&self) -> &[FreshRange] {
        &self.fresh
    }

    pub fn available(&self) -> &[u64] {
        &self.available
    }

    /// How many available ingredients are fresh.
    pub fn fresh_available(&self) -> u64 {
        let index = RangeIndex::new(&self.fresh);
        let count = self.available.iter().filter(|id| index.contains(**id)).count();
        u64::try_from(count).unwrap_or(u64::MAX)
    }

    /// How many distinct IDs the fresh ranges consider fresh.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Overflow`] when the count exceeds `u64`.
    pub fn fresh_id_count(&self) -> Result<u64, SolveError> {
        RangeIndex::new(&self.fresh).covered()
    }
}
