//! Cephalopod math worksheet from the trash compactor.
//!
//! The worksheet is a grid of characters. Problems sit side by side,
//! separated by columns that are blank on every line, with the operator
//! for each problem on the bottom line. Humans read each problem's
//! numbers across the rows; cephalopods read them down the columns,
//! right to left.

use std::fmt;

use log::{debug, trace};

use crate::SolveError;

/// The operator applied to every number of a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Multiply,
}

impl Operation {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operation::Add),
            '*' => Some(Operation::Multiply),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Multiply => '*',
        }
    }
}

/// How numbers are read out of a problem's block of columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reading {
    /// One number per line, read left to right.
    Rows,
    /// One number per column, digits top to bottom, columns right to left.
    Columns,
}

/// A single problem: an operator and its numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    operation: Operation,
    numbers: Vec<u64>,
}

impl Problem {
    pub fn new(operation: Operation, numbers: Vec<u64>) -> Self {
        Self { operation, numbers }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn numbers(&self) -> &[u64] {
        &self.numbers
    }

    /// Apply the operation across all numbers; `None` on overflow.
    pub fn solve(&self) -> Option<u64> {
        let (first, rest) = self.numbers.split_first()?;
        rest.iter().try_fold(*first, |acc, n| match self.operation {
            Operation::Add => acc.checked_add(*n),
            Operation::Multiply => acc.checked_mul(*n),
        })
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = format!(" {} ", self.operation.symbol());
        let terms: Vec<String> = self.numbers.iter().map(u64::to_string).collect();
        write!(f, "{}", terms.join(&sep))
    }
}

/// The worksheet as a character grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Worksheet {
    number_rows: Vec<Vec<char>>,
    operator_row: Vec<char>,
}

impl Worksheet {
    pub fn new<S: AsRef<str>>(number_rows: &[S], operator_row: &str) -> Self {
        Self {
            number_rows: number_rows
                .iter()
                .map(|row| row.as_ref().chars().collect())
                .collect(),
            operator_row: operator_row.chars().collect(),
        }
    }

    fn width(&self) -> usize {
        self.number_rows
            .iter()
            .chain(std::iter::once(&self.operator_row))
            .map(Vec::len)
            .max()
            .unwrap_or(0)
    }

    fn cell(row: &[char], col: usize) -> char {
        row.get(col).copied().unwrap_or(' ')
    }

    fn is_blank_column(&self, col: usize) -> bool {
        self.number_rows
            .iter()
            .chain(std::iter::once(&self.operator_row))
            .all(|row| Self::cell(row, col).is_whitespace())
    }

    /// Column ranges of each problem, left to right.
    fn blocks(&self) -> Vec<std::ops::Range<usize>> {
        let mut blocks = Vec::new();
        let mut start = None;
        for col in 0..self.width() {
            match (self.is_blank_column(col), start) {
                (false, None) => start = Some(col),
                (true, Some(from)) => {
                    blocks.push(from..col);
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(from) = start {
            blocks.push(from..self.width());
        }
        blocks
    }

    /// Split the worksheet into problems.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::BadOperator`] when a problem does not have
    /// exactly one operator, or [`SolveError::Overflow`] for numbers that
    /// do not fit in `u64`.
    pub fn problems(&self, reading: Reading) -> Result<Vec<Problem>, SolveError> {
        self.blocks()
            .into_iter()
            .enumerate()
            .map(|(idx, block)| {
                let operators: Vec<Operation> = block
                    .clone()
                    .filter_map(|col| Operation::from_symbol(Self::cell(&self.operator_row, col)))
                    .collect();
                let [operation] = operators[..] else {
                    return Err(SolveError::BadOperator {
                        problem: idx + 1,
                        found: operators.len(),
                    });
                };

                let numbers = match reading {
                    Reading::Rows => self.read_rows(block)?,
                    Reading::Columns => self.read_columns(block)?,
                };
                trace!(problem = idx + 1, numbers:?; "Read problem");
                Ok(Problem::new(operation, numbers))
            })
            .collect()
    }

    fn read_rows(&self, block: std::ops::Range<usize>) -> Result<Vec<u64>, SolveError> {
        let mut numbers = Vec::new();
        for row in &self.number_rows {
            let text: String = block.clone().map(|col| Self::cell(row, col)).collect();
            for token in text.split_whitespace() {
                numbers.push(token.parse().map_err(|_| SolveError::Overflow)?);
            }
        }
        Ok(numbers)
    }

    fn read_columns(&self, block: std::ops::Range<usize>) -> Result<Vec<u64>, SolveError> {
        let mut numbers = Vec::new();
        for col in block.rev() {
            let digits: String = self
                .number_rows
                .iter()
                .map(|row| Self::cell(row, col))
                .filter(char::is_ascii_digit)
                .collect();
            if !digits.is_empty() {
                numbers.push(digits.parse().map_err(|_| SolveError::Overflow)?);
            }
        }
        Ok(numbers)
    }

    /// Sum of the answers to every problem.
    ///
    /// # Errors
    ///
    /// See [`Worksheet::problems`]; overflow while solving is also reported.
    pub fn grand_total(&self, reading: Reading) -> Result<u64, SolveError> {
        let problems = self.problems(reading)?;
        let total = problems.iter().try_fold(0u64, |total, problem| {
            problem
                .solve()
                .and_then(|answer| total.checked_add(answer))
                .ok_or(SolveError::Overflow)
        })?;
        debug!(reading:?, problems = problems.len(), total; "Solved worksheet");
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example() -> Worksheet {
        Worksheet::new(
            &["123 328  51 64 ", " 45 64  387 23 ", "  6 98  215 314"],
            "*   +   *   +  ",
        )
    }

    #[test]
    fn test_problems_by_rows() {
        let problems = example().problems(Reading::Rows).unwrap();
        assert_eq!(problems.len(), 4);
        assert_eq!(problems[0], Problem::new(Operation::Multiply, vec![123, 45, 6]));
        assert_eq!(problems[1], Problem::new(Operation::Add, vec![328, 64, 98]));
        assert_eq!(problems[3].solve(), Some(401));
    }

    #[test]
    fn test_problems_by_columns() {
        let problems = example().problems(Reading::Columns).unwrap();
        assert_eq!(problems[3], Problem::new(Operation::Add, vec![4, 431, 623]));
        assert_eq!(problems[3].solve(), Some(1058));
        assert_eq!(problems[0], Problem::new(Operation::Multiply, vec![356, 24, 1]));
    }

    #[test]
    fn test_worked_example() {
        assert_eq!(example().grand_total(Reading::Rows), Ok(4277556));
        assert_eq!(example().grand_total(Reading::Columns), Ok(3263827));
    }

    #[test]
    fn test_missing_operator() {
        let sheet = Worksheet::new(&["12 34", " 5 6 "], "+    ");
        assert_eq!(
            sheet.grand_total(Reading::Rows),
            Err(SolveError::BadOperator {
                problem: 2,
                found: 0
            })
        );
    }

    #[test]
    fn test_two_operators_in_one_problem() {
        let sheet = Worksheet::new(&["123"], "+* ");
        assert_eq!(
            sheet.problems(Reading::Rows),
            Err(SolveError::BadOperator {
                problem: 1,
                found: 2
            })
        );
    }

    #[test]
    fn test_short_lines_are_padded() {
        let sheet = Worksheet::new(&["10 20", "5"], "*  +");
        assert_eq!(sheet.grand_total(Reading::Rows), Ok(50 + 20));
    }

    #[test]
    fn test_problem_display() {
        let problem = Problem::new(Operation::Multiply, vec![123, 45, 6]);
        assert_eq!(problem.to_string(), "123 * 45 * 6");
    }

    #[test]
    fn test_empty_problem_has_no_answer() {
        assert_eq!(Problem::new(Operation::Add, vec![]).solve(), None);
    }
}
