//! Battery banks powering the lobby escalator.
//!
//! Each bank is a row of batteries with joltages 1 to 9. Turning on `k`
//! batteries produces the `k`-digit number formed by their joltages in
//! bank order, and the goal is the largest possible output.

use log::debug;

use crate::SolveError;

/// One bank of batteries, in the order they appear on the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatteryBank {
    joltages: Vec<u8>,
}

impl BatteryBank {
    pub fn new(joltages: Vec<u8>) -> Self {
        Self { joltages }
    }

    pub fn joltages(&self) -> &[u8] {
        &self.joltages
    }

    pub fn len(&self) -> usize {
        self.joltages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joltages.is_empty()
    }

    /// Choose `count` batteries giving the largest output joltage.
    ///
    /// Returns the chosen joltages in bank order, or `None` if the bank
    /// holds fewer than `count` batteries.
    pub fn select(&self, count: usize) -> Option<Vec<u8>> {
        if count > self.joltages.len() {
            return None;
        }

        let mut chosen = Vec::with_capacity(count);
        let mut from = 0;
        for remaining in (1..=count).rev() {
            // leave room for the batteries still to choose
            let last = self.joltages.len() - remaining;

            let mut best = from;
            for idx in from..=last {
                if self.joltages[idx] > self.joltages[best] {
                    best = idx;
                }
            }

            chosen.push(self.joltages[best]);
            from = best + 1;
        }
        Some(chosen)
    }

    /// The largest output joltage for `count` batteries.
    ///
    /// Returns `None` when the bank is too small or the number overflows.
    pub fn max_joltage(&self, count: usize) -> Option<u64> {
        self.select(count).and_then(|digits| to_number(&digits))
    }
}

/// Sum of the best output joltage of every bank.
///
/// # Errors
///
/// Returns [`SolveError::BankTooSmall`] naming the first bank (1-based)
/// with fewer than `count` batteries, or [`SolveError::Overflow`].
pub fn total_output_joltage(banks: &[BatteryBank], count: usize) -> Result<u64, SolveError> {
    let total = banks.iter().enumerate().try_fold(0u64, |total, (idx, bank)| {
        let digits = bank.select(count).ok_or(SolveError::BankTooSmall {
            bank: idx + 1,
            available: bank.len(),
            required: count,
        })?;
        let joltage = to_number(&digits).ok_or(SolveError::Overflow)?;
        total.checked_add(joltage).ok_or(SolveError::Overflow)
    })?;

    debug!(banks = banks.len(), count, total; "Computed output joltage");
    Ok(total)
}

fn to_number(digits: &[u8]) -> Option<u64> {
    digits.iter().try_fold(0u64, |acc, digit| {
        acc.checked_mul(10)?.checked_add(u64::from(*digit))
    })
}
