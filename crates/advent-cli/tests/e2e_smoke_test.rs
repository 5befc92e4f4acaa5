use std::{fs, path::PathBuf};

use tempfile::tempdir;

use advent::{Day, Part};
use advent_cli::{Args, run};

/// Collects all .txt files from a directory
fn collect_txt_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("txt")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

/// Puzzles are at workspace root, relative to workspace not the crate
fn puzzles_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("puzzles")
}

/// Reads the day from a file name such as `day07.txt` or `day07_no_source.txt`
fn day_of(path: &std::path::Path) -> Day {
    let stem = path.file_stem().unwrap().to_string_lossy();
    let number: u8 = stem
        .strip_prefix("day")
        .and_then(|rest| rest.get(..2))
        .and_then(|digits| digits.parse().ok())
        .unwrap_or_else(|| panic!("no day number in {}", path.display()));
    Day::try_from(number).unwrap()
}

fn args_for(path: &std::path::Path, config: Option<String>) -> Args {
    Args {
        day: day_of(path),
        input: path.to_string_lossy().to_string(),
        part: None,
        config,
        connections: None,
        largest: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_puzzles() {
    // The playground example wires ten pairs instead of a thousand
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[playground]\nconnections = 10\n").unwrap();

    let valid_puzzles = collect_txt_files(puzzles_dir());

    assert_eq!(valid_puzzles.len(), 9, "Expected one example per day in puzzles/");

    let mut failed_puzzles = Vec::new();

    for puzzle_path in &valid_puzzles {
        let args = args_for(puzzle_path, Some(config_path.to_string_lossy().to_string()));

        match run(&args) {
            Ok(solution) => assert_eq!(solution.answers().len(), 2),
            Err(e) => failed_puzzles.push((puzzle_path.clone(), e)),
        }
    }

    if !failed_puzzles.is_empty() {
        eprintln!("\nValid puzzles that failed:");
        for (path, err) in &failed_puzzles {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} valid puzzle(s) failed unexpectedly", failed_puzzles.len());
    }

    println!("✅ All {} valid puzzles passed", valid_puzzles.len());
}

#[test]
fn e2e_smoke_test_error_puzzles() {
    let error_puzzles = collect_txt_files(puzzles_dir().join("errors"));

    assert!(
        !error_puzzles.is_empty(),
        "No error puzzles found in puzzles/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for puzzle_path in &error_puzzles {
        if run(&args_for(puzzle_path, None)).is_ok() {
            unexpectedly_succeeded.push(puzzle_path.clone());
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError puzzles that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error puzzle(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }

    println!(
        "✅ All {} error puzzles failed as expected",
        error_puzzles.len()
    );
}

#[test]
fn e2e_command_line_overrides() {
    let mut args = args_for(&puzzles_dir().join("day08.txt"), None);
    args.part = Some(Part::One);
    args.connections = Some(10);
    args.largest = Some(2);

    let solution = run(&args).expect("Failed to solve");

    // the two largest circuits after ten connections hold 5 and 4 boxes
    assert_eq!(solution.answers().len(), 1);
    assert_eq!(solution.answer(Part::One).map(|a| a.value()), Some(20));
}

#[test]
fn e2e_connections_override_beats_config_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[playground]\nconnections = 1000\n").unwrap();

    let mut args = args_for(
        &puzzles_dir().join("day08.txt"),
        Some(config_path.to_string_lossy().to_string()),
    );
    args.connections = Some(10);

    let solution = run(&args).expect("Failed to solve");

    assert_eq!(solution.answer(Part::One).map(|a| a.value()), Some(40));
    assert_eq!(solution.answer(Part::Two).map(|a| a.value()), Some(25272));
}

#[test]
fn e2e_zero_largest_override_is_rejected() {
    let mut args = args_for(&puzzles_dir().join("day08.txt"), None);
    args.connections = Some(10);
    args.largest = Some(0);

    let err = run(&args).unwrap_err();
    assert!(err.to_string().contains("playground.largest"));
}

#[test]
fn e2e_missing_input_file() {
    let args = args_for(&puzzles_dir().join("day01_missing.txt"), None);
    assert!(run(&args).is_err());
}
