//! Identifiers shared by every puzzle: which day, which part, and the answer.

use std::fmt;

use thiserror::Error;

/// A supported puzzle day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Day {
    SecretEntrance,
    GiftShop,
    Lobby,
    PrintingDepartment,
    Cafeteria,
    TrashCompactor,
    Laboratories,
    Playground,
    MovieTheater,
}

impl Day {
    /// All supported days in calendar order.
    pub const ALL: [Day; 9] = [
        Day::SecretEntrance,
        Day::GiftShop,
        Day::Lobby,
        Day::PrintingDepartment,
        Day::Cafeteria,
        Day::TrashCompactor,
        Day::Laboratories,
        Day::Playground,
        Day::MovieTheater,
    ];

    /// Returns the calendar number of this day (1-based).
    pub fn number(self) -> u8 {
        match self {
            Day::SecretEntrance => 1,
            Day::GiftShop => 2,
            Day::Lobby => 3,
            Day::PrintingDepartment => 4,
            Day::Cafeteria => 5,
            Day::TrashCompactor => 6,
            Day::Laboratories => 7,
            Day::Playground => 8,
            Day::MovieTheater => 9,
        }
    }

    /// Returns the puzzle title.
    pub fn title(self) -> &'static str {
        match self {
            Day::SecretEntrance => "Secret Entrance",
            Day::GiftShop => "Gift Shop",
            Day::Lobby => "Lobby",
            Day::PrintingDepartment => "Printing Department",
            Day::Cafeteria => "Cafeteria",
            Day::TrashCompactor => "Trash Compactor",
            Day::Laboratories => "Laboratories",
            Day::Playground => "Playground",
            Day::MovieTheater => "Movie Theater",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {:02}", self.number())
    }
}

/// Error returned when a number does not name a supported day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no puzzle for day {0}, supported days are 1 to 9")]
pub struct UnknownDay(pub u8);

impl TryFrom<u8> for Day {
    type Error = UnknownDay;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Day::ALL
            .into_iter()
            .find(|day| day.number() == number)
            .ok_or(UnknownDay(number))
    }
}

/// One half of a puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Part {
    One,
    Two,
}

impl Part {
    pub const BOTH: [Part; 2] = [Part::One, Part::Two];

    pub fn number(self) -> u8 {
        match self {
            Part::One => 1,
            Part::Two => 2,
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "part {}", self.number())
    }
}

/// Error returned when a number does not name a puzzle part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no part {0}, puzzles have parts 1 and 2")]
pub struct UnknownPart(pub u8);

impl TryFrom<u8> for Part {
    type Error = UnknownPart;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        match number {
            1 => Ok(Part::One),
            2 => Ok(Part::Two),
            other => Err(UnknownPart(other)),
        }
    }
}

/// A puzzle answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Answer(u64);

impl Answer {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for Answer {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The answers produced for one day, in part order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    day: Day,
    answers: Vec<(Part, Answer)>,
}

impl Solution {
    pub fn new(day: Day) -> Self {
        Self {
            day,
            answers: Vec::new(),
        }
    }

    pub fn with_answer(mut self, part: Part, answer: Answer) -> Self {
        self.answers.push((part, answer));
        self
    }

    pub fn day(&self) -> Day {
        self.day
    }

    pub fn answers(&self) -> &[(Part, Answer)] {
        &self.answers
    }

    /// Returns the answer for `part`, if it was solved.
    pub fn answer(&self, part: Part) -> Option<Answer> {
        self.answers
            .iter()
            .find(|(solved, _)| *solved == part)
            .map(|(_, answer)| *answer)
    }
}
