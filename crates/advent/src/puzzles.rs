//! One parsed input per day, each able to answer both parts.

use log::debug;

use advent_core::{
    SolveError,
    cafeteria::Inventory,
    compactor::{Reading, Worksheet},
    dial::{self, Rotation},
    gift_shop::{self, IdRange, RepeatRule},
    laboratory::TachyonManifold,
    lobby::{self, BatteryBank},
    playground::Playground,
    printing::PaperRollGrid,
    puzzle::{Day, Part},
    theater::TileLoop,
};
use advent_parser::ParseError;

use crate::{AdventError, config::AppConfig};

/// A day's parsed input.
pub(crate) trait Puzzle {
    fn parse(source: &str) -> Result<Self, ParseError>
    where
        Self: Sized;

    fn day(&self) -> Day;

    fn answer(&self, config: &AppConfig, part: Part) -> Result<u64, SolveError>;
}

struct SecretEntrance(Vec<Rotation>);

impl Puzzle for SecretEntrance {
    fn parse(source: &str) -> Result<Self, ParseError> {
        advent_parser::parse_rotations(source).map(Self)
    }

    fn day(&self) -> Day {
        Day::SecretEntrance
    }

    fn answer(&self, config: &AppConfig, part: Part) -> Result<u64, SolveError> {
        let dial = dial::run(config.dial, &self.0)?;
        Ok(match part {
            Part::One => dial.zero_stops(),
            Part::Two => dial.zero_clicks(),
        })
    }
}

struct GiftShop(Vec<IdRange>);

impl Puzzle for GiftShop {
    fn parse(source: &str) -> Result<Self, ParseError> {
        advent_parser::parse_id_ranges(source).map(Self)
    }

    fn day(&self) -> Day {
        Day::GiftShop
    }

    fn answer(&self, _config: &AppConfig, part: Part) -> Result<u64, SolveError> {
        let rule = match part {
            Part::One => RepeatRule::Twice,
            Part::Two => RepeatRule::AtLeastTwice,
        };
        gift_shop::sum_invalid_ids(&self.0, rule)
    }
}

struct Lobby(Vec<BatteryBank>);

impl Puzzle for Lobby {
    fn parse(source: &str) -> Result<Self, ParseError> {
        advent_parser::parse_battery_banks(source).map(Self)
    }

    fn day(&self) -> Day {
        Day::Lobby
    }

    fn answer(&self, config: &AppConfig, part: Part) -> Result<u64, SolveError> {
        lobby::total_output_joltage(&self.0, config.lobby.batteries(part))
    }
}

struct PrintingDepartment(PaperRollGrid);

impl Puzzle for PrintingDepartment {
    fn parse(source: &str) -> Result<Self, ParseError> {
        advent_parser::parse_paper_grid(source).map(Self)
    }

    fn day(&self) -> Day {
        Day::PrintingDepartment
    }

    fn answer(&self, config: &AppConfig, part: Part) -> Result<u64, SolveError> {
        let removed = match part {
            Part::One => self.0.accessible_rolls(config.printing).len(),
            // clearing consumes the grid, keep the parsed one for other parts
            Part::Two => self.0.clone().clear_accessible(config.printing),
        };
        u64::try_from(removed).map_err(|_| SolveError::Overflow)
    }
}

struct Cafeteria(Inventory);

impl Puzzle for Cafeteria {
    fn parse(source: &str) -> Result<Self, ParseError> {
        advent_parser::parse_inventory(source).map(Self)
    }

    fn day(&self) -> Day {
        Day::Cafeteria
    }

    fn answer(&self, _config: &AppConfig, part: Part) -> Result<u64, SolveError> {
        match part {
            Part::One => Ok(self.0.fresh_available()),
            Part::Two => self.0.fresh_id_count(),
        }
    }
}

struct TrashCompactor(Worksheet);

impl Puzzle for TrashCompactor {
    fn parse(source: &str) -> Result<Self, ParseError> {
        advent_parser::parse_worksheet(source).map(Self)
    }

    fn day(&self) -> Day {
        Day::TrashCompactor
    }

    fn answer(&self, _config: &AppConfig, part: Part) -> Result<u64, SolveError> {
        let reading = match part {
            Part::One => Reading::Rows,
            Part::Two => Reading::Columns,
        };
        self.0.grand_total(reading)
    }
}

struct Laboratories(TachyonManifold);

impl Puzzle for Laboratories {
    fn parse(source: &str) -> Result<Self, ParseError> {
        advent_parser::parse_manifold(source).map(Self)
    }

    fn day(&self) -> Day {
        Day::Laboratories
    }

    fn answer(&self, _config: &AppConfig, part: Part) -> Result<u64, SolveError> {
        let report = self.0.fire()?;
        Ok(match part {
            Part::One => report.splits(),
            Part::Two => report.timelines(),
        })
    }
}

struct PlaygroundPuzzle(Playground);

impl Puzzle for PlaygroundPuzzle {
    fn parse(source: &str) -> Result<Self, ParseError> {
        advent_parser::parse_junction_boxes(source).map(|boxes| Self(Playground::new(boxes)))
    }

    fn day(&self) -> Day {
        Day::Playground
    }

    fn answer(&self, config: &AppConfig, part: Part) -> Result<u64, SolveError> {
        match part {
            Part::One => self.0.largest_circuits_product(config.playground),
            Part::Two => self.0.final_connection_product(),
        }
    }
}

struct MovieTheater(TileLoop);

impl Puzzle for MovieTheater {
    fn parse(source: &str) -> Result<Self, ParseError> {
        advent_parser::parse_red_tiles(source).map(|tiles| Self(TileLoop::new(tiles)))
    }

    fn day(&self) -> Day {
        Day::MovieTheater
    }

    fn answer(&self, _config: &AppConfig, part: Part) -> Result<u64, SolveError> {
        match part {
            Part::One => self.0.largest_rectangle(),
            Part::Two => self.0.largest_enclosed_rectangle(),
        }
    }
}

fn parse_as<P: Puzzle + 'static>(source: &str) -> Result<Box<dyn Puzzle>, AdventError> {
    P::parse(source)
        .map(|puzzle| Box::new(puzzle) as Box<dyn Puzzle>)
        .map_err(|err| AdventError::new_parse_error(err, source))
}

/// Parse `source` as the input of `day`.
pub(crate) fn parse(day: Day, source: &str) -> Result<Box<dyn Puzzle>, AdventError> {
    debug!(day:% = day, bytes = source.len(); "Parsing puzzle input");
    match day {
        Day::SecretEntrance => parse_as::<SecretEntrance>(source),
        Day::GiftShop => parse_as::<GiftShop>(source),
        Day::Lobby => parse_as::<Lobby>(source),
        Day::PrintingDepartment => parse_as::<PrintingDepartment>(source),
        Day::Cafeteria => parse_as::<Cafeteria>(source),
        Day::TrashCompactor => parse_as::<TrashCompactor>(source),
        Day::Laboratories => parse_as::<Laboratories>(source),
        Day::Playground => parse_as::<PlaygroundPuzzle>(source),
        Day::MovieTheater => parse_as::<MovieTheater>(source),
    }
}
