//! Integration tests for the PuzzleRunner API
//!
//! These tests solve the worked examples in `puzzles/` through the public API.

use std::{fs, path::PathBuf};

use advent::{AdventError, Day, Part, PuzzleRunner, SolveError, config::AppConfig};
use advent_core::playground::WiringPlan;

fn puzzle(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../puzzles")
        .join(name);
    fs::read_to_string(path).expect("Failed to read puzzle input")
}

fn example_runner() -> PuzzleRunner {
    let mut config = AppConfig::default();
    // the playground example wires up only ten pairs
    config.playground = WiringPlan::default().with_connections(10);
    PuzzleRunner::new(config)
}

#[test]
fn test_examples_solve_to_known_answers() {
    let expected: [(Day, u64, u64); 9] = [
        (Day::SecretEntrance, 3, 6),
        (Day::GiftShop, 1227775554, 4174379265),
        (Day::Lobby, 357, 3121910778619),
        (Day::PrintingDepartment, 13, 43),
        (Day::Cafeteria, 3, 14),
        (Day::TrashCompactor, 4277556, 3263827),
        (Day::Laboratories, 21, 40),
        (Day::Playground, 40, 25272),
        (Day::MovieTheater, 50, 24),
    ];
    let runner = example_runner();

    for (day, part_one, part_two) in expected {
        let source = puzzle(&format!("day{:02}.txt", day.number()));
        let solution = runner
            .solve_all(day, &source)
            .unwrap_or_else(|err| panic!("{day} failed: {err}"));

        assert_eq!(solution.day(), day);
        assert_eq!(
            solution.answer(Part::One).map(|a| a.value()),
            Some(part_one),
            "{day} part 1"
        );
        assert_eq!(
            solution.answer(Part::Two).map(|a| a.value()),
            Some(part_two),
            "{day} part 2"
        );
    }
}

#[test]
fn test_solve_single_part() {
    let source = puzzle("day03.txt");
    let answer = PuzzleRunner::default()
        .solve(Day::Lobby, Part::Two, &source)
        .expect("Failed to solve");

    assert_eq!(answer.value(), 3121910778619);
    assert_eq!(answer.to_string(), "3121910778619");
}

#[test]
fn test_parts_keep_requested_order() {
    let source = puzzle("day01.txt");
    let solution = PuzzleRunner::default()
        .solve_parts(Day::SecretEntrance, &[Part::Two, Part::One], &source)
        .expect("Failed to solve");

    let parts: Vec<_> = solution.answers().iter().map(|(part, _)| *part).collect();
    assert_eq!(parts, vec![Part::Two, Part::One]);
}

#[test]
fn test_config_changes_rules() {
    let source = puzzle("day03.txt");
    let mut config = AppConfig::default();
    config.lobby.part_one_batteries = 1;

    let answer = PuzzleRunner::new(config)
        .solve(Day::Lobby, Part::One, &source)
        .expect("Failed to solve");

    // best single battery per bank: 9 + 9 + 8 + 9
    assert_eq!(answer.value(), 35);
}

#[test]
fn test_parse_error_keeps_source() {
    let source = puzzle("errors/day01_bad_direction.txt");
    let err = PuzzleRunner::default()
        .solve(Day::SecretEntrance, Part::One, &source)
        .unwrap_err();

    match err {
        AdventError::Parse { err, src } => {
            assert_eq!(src, source);
            assert_eq!(err.diagnostics().len(), 1);
        }
        other => panic!("Expected parse error, got {other:?}"),
    }
}

#[test]
fn test_solve_error_names_day_and_part() {
    let source = puzzle("errors/day03_short_bank.txt");
    let runner = PuzzleRunner::default();

    assert!(runner.solve(Day::Lobby, Part::One, &source).is_ok());

    let err = runner.solve(Day::Lobby, Part::Two, &source).unwrap_err();
    assert!(matches!(
        err,
        AdventError::Solve {
            day: Day::Lobby,
            part: Part::Two,
            source: SolveError::BankTooSmall { bank: 2, .. },
        }
    ));
    assert!(err.to_string().starts_with("day 03 part 2: "));
}

#[test]
fn test_default_playground_needs_more_boxes() {
    let source = puzzle("day08.txt");
    let err = PuzzleRunner::default()
        .solve(Day::Playground, Part::One, &source)
        .unwrap_err();

    assert!(matches!(err, AdventError::Solve { .. }));
}

#[test]
fn test_largest_rotation_solves() {
    let answer = PuzzleRunner::default()
        .solve(Day::SecretEntrance, Part::Two, "R18446744073709551615\n")
        .expect("Failed to solve");
    assert_eq!(answer.value(), 184_467_440_737_095_516);
}
