//! Product ID ranges from the gift shop database.
//!
//! An ID is invalid when its decimal digits are one shorter sequence
//! repeated. The invalid IDs of one digit length and one period form an
//! arithmetic series `pattern * multiplier`, where the multiplier is a
//! repunit such as `1001` or `10101`. Ranges are totalled series by series
//! in closed form, so their width never matters.

use std::fmt;

use log::debug;

use crate::SolveError;

/// How often the digit pattern must repeat for an ID to be invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepeatRule {
    /// Exactly two copies: `6464`, `123123`.
    Twice,
    /// Two or more copies: `6464`, `111`, `565656`.
    AtLeastTwice,
}

impl RepeatRule {
    fn accepts(self, copies: u32) -> bool {
        match self {
            RepeatRule::Twice => copies == 2,
            RepeatRule::AtLeastTwice => copies >= 2,
        }
    }

    /// Pattern lengths to total for IDs of `len` digits, each with the sign
    /// it is counted with.
    ///
    /// An ID repeating with periods `a` and `b` also repeats with period
    /// `gcd(a, b)`, so for [`RepeatRule::AtLeastTwice`] inclusion-exclusion
    /// over `len / q` for the prime factors `q` of `len` counts every ID
    /// exactly once.
    fn periods(self, len: u32) -> Vec<(u32, i128)> {
        match self {
            RepeatRule::Twice if len % 2 == 0 => vec![(len / 2, 1)],
            RepeatRule::Twice => Vec::new(),
            RepeatRule::AtLeastTwice => {
                let primes = prime_factors(len);
                (1..1u32 << primes.len())
                    .map(|mask| {
                        let product: u32 = primes
                            .iter()
                            .enumerate()
                            .filter(|(bit, _)| mask & (1 << bit) != 0)
                            .map(|(_, prime)| prime)
                            .product();
                        let sign = if mask.count_ones() % 2 == 1 { 1 } else { -1 };
                        (len / product, sign)
                    })
                    .collect()
            }
        }
    }
}

/// How many invalid IDs a range holds and what they add up to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InvalidIds {
    count: u128,
    sum: u128,
}

impl InvalidIds {
    pub fn count(&self) -> u128 {
        self.count
    }

    pub fn sum(&self) -> u128 {
        self.sum
    }
}

/// An inclusive range of product IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdRange {
    start: u64,
    end: u64,
}

impl IdRange {
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

    pub fn contains(&self, id: u64) -> bool {
        self.start <= id && id <= self.end
    }

    /// Count and sum of the invalid IDs within the range.
    pub fn invalid_ids(&self, rule: RepeatRule) -> InvalidIds {
        let mut count = 0i128;
        let mut sum = 0i128;
        for len in digit_count(self.start)..=digit_count(self.end) {
            for (period, sign) in rule.periods(len) {
                let (series_count, series_sum) = self.series(len, period);
                count += sign * series_count;
                sum += sign * series_sum;
            }
        }
        InvalidIds {
            count: count.unsigned_abs(),
            sum: sum.unsigned_abs(),
        }
    }

    /// Count and sum of the `len` digit IDs in range that repeat a
    /// `period` digit pattern.
    fn series(&self, len: u32, period: u32) -> (i128, i128) {
        let multiplier = (pow10(len) - 1) / (pow10(period) - 1);
        let smallest_pattern = pow10(period - 1);
        let largest_pattern = pow10(period) - 1;

        let low = smallest_pattern.max((i128::from(self.start) + multiplier - 1) / multiplier);
        let high = largest_pattern.min(i128::from(self.end) / multiplier);
        if low > high {
            return (0, 0);
        }

        let count = high - low + 1;
        (count, multiplier * ((low + high) * count / 2))
    }
}

impl fmt::Display for IdRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Returns `true` when `id` is invalid under `rule`.
pub fn is_invalid(id: u64, rule: RepeatRule) -> bool {
    let digits = id.to_string();
    let digits = digits.as_bytes();
    let len = digits.len();

    (1..len).any(|pattern_len| {
        let copies = u32::try_from(len / pattern_len).unwrap_or(u32::MAX);
        len % pattern_len == 0
            && rule.accepts(copies)
            && digits
                .chunks(pattern_len)
                .all(|chunk| chunk == &digits[..pattern_len])
    })
}

/// Sum of all invalid IDs across `ranges`.
///
/// # Errors
///
/// Returns [`SolveError::Overflow`] if the sum exceeds `u64`.
pub fn sum_invalid_ids(ranges: &[IdRange], rule: RepeatRule) -> Result<u64, SolveError> {
    ranges.iter().try_fold(0u64, |total, range| {
        let invalid = range.invalid_ids(rule);
        debug!(range:% = range, rule:?, invalid = invalid.count(); "Scanned ID range");
        u64::try_from(invalid.sum())
            .ok()
            .and_then(|sum| total.checked_add(sum))
            .ok_or(SolveError::Overflow)
    })
}

fn digit_count(value: u64) -> u32 {
    value.checked_ilog10().map_or(1, |log| log + 1)
}

fn pow10(exponent: u32) -> i128 {
    10i128.pow(exponent)
}

fn prime_factors(mut value: u32) -> Vec<u32> {
    let mut primes = Vec::new();
    let mut candidate = 2;
    while candidate * candidate <= value {
        if value % candidate == 0 {
            primes.push(candidate);
            while value % candidate == 0 {
                value /= candidate;
            }
        }
        candidate += 1;
    }
    if value > 1 {
        primes.push(value);
    }
    primes
}
