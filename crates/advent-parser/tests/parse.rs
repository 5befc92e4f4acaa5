use advent_core::{
    cafeteria::FreshRange,
    compactor::Reading,
    dial::{self, DialSpec, Rotation},
    gift_shop::{IdRange, RepeatRule, sum_invalid_ids},
    lobby::total_output_joltage,
    playground::{JunctionBox, Playground, WiringPlan},
    printing::CrowdingRule,
    theater::TileLoop,
};
use advent_parser::{
    Span,
    error::{ErrorCode, Severity},
    parse_battery_banks, parse_id_ranges, parse_inventory, parse_junction_boxes, parse_manifold,
    parse_paper_grid, parse_red_tiles, parse_rotations, parse_worksheet,
};

fn puzzle(name: &str) -> String {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../puzzles")
        .join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("Failed to read {}: {err}", path.display()))
}

#[test]
fn test_day01_example() {
    let rotations = parse_rotations(&puzzle("day01.txt")).expect("Failed to parse");

    assert_eq!(rotations.len(), 10);
    assert_eq!(rotations[0], Rotation::left(68));

    let dial = dial::run(DialSpec::default(), &rotations).unwrap();
    assert_eq!(dial.zero_stops(), 3);
    assert_eq!(dial.zero_clicks(), 6);
}

#[test]
fn test_day02_example() {
    let ranges = parse_id_ranges(&puzzle("day02.txt")).expect("Failed to parse");

    assert_eq!(ranges.len(), 11);
    assert_eq!(ranges[3], IdRange::new(1188511880, 1188511890));
    assert_eq!(sum_invalid_ids(&ranges, RepeatRule::Twice), Ok(1227775554));
    assert_eq!(
        sum_invalid_ids(&ranges, RepeatRule::AtLeastTwice),
        Ok(4174379265)
    );
}

#[test]
fn test_day03_example() {
    let banks = parse_battery_banks(&puzzle("day03.txt")).expect("Failed to parse");

    assert_eq!(total_output_joltage(&banks, 2), Ok(357));
    assert_eq!(total_output_joltage(&banks, 12), Ok(3121910778619));
}

#[test]
fn test_day04_example() {
    let mut grid = parse_paper_grid(&puzzle("day04.txt")).expect("Failed to parse");
    let rule = CrowdingRule::default();

    assert_eq!(grid.accessible_rolls(rule).len(), 13);
    assert_eq!(grid.clear_accessible(rule), 43);
}

#[test]
fn test_day05_example() {
    let inventory = parse_inventory(&puzzle("day05.txt")).expect("Failed to parse");

    assert_eq!(inventory.fresh()[3], FreshRange::new(12, 18));
    assert_eq!(inventory.available().len(), 6);
    assert_eq!(inventory.fresh_available(), 3);
    assert_eq!(inventory.fresh_id_count(), Ok(14));
}

#[test]
fn test_day06_example() {
    let worksheet = parse_worksheet(&puzzle("day06.txt")).expect("Failed to parse");

    assert_eq!(worksheet.grand_total(Reading::Rows), Ok(4277556));
    assert_eq!(worksheet.grand_total(Reading::Columns), Ok(3263827));
}

#[test]
fn test_day07_example() {
    let manifold = parse_manifold(&puzzle("day07.txt")).expect("Failed to parse");
    let report = manifold.fire().unwrap();

    assert_eq!(manifold.source(), 7);
    assert_eq!(report.splits(), 21);
    assert_eq!(report.timelines(), 40);
}

#[test]
fn test_day08_example() {
    let boxes = parse_junction_boxes(&puzzle("day08.txt")).expect("Failed to parse");
    assert_eq!(boxes[0], JunctionBox::new(162, 817, 812));

    let playground = Playground::new(boxes);
    let plan = WiringPlan::default().with_connections(10);
    assert_eq!(playground.largest_circuits_product(plan), Ok(40));
    assert_eq!(playground.final_connection_product(), Ok(25272));
}

#[test]
fn test_day09_example() {
    let tiles = parse_red_tiles(&puzzle("day09.txt")).expect("Failed to parse");
    let tile_loop = TileLoop::new(tiles);

    assert_eq!(tile_loop.largest_rectangle(), Ok(50));
    assert_eq!(tile_loop.largest_enclosed_rectangle(), Ok(24));
}

#[test]
fn test_error_files_report_expected_codes() {
    let cases: [(&str, fn(&str) -> Option<ErrorCode>); 8] = [
        ("day01_bad_direction.txt", |s| first_code(parse_rotations(s).err())),
        ("day02_reversed_range.txt", |s| first_code(parse_id_ranges(s).err())),
        ("day04_bad_grid.txt", |s| first_code(parse_paper_grid(s).err())),
        ("day05_third_section.txt", |s| first_code(parse_inventory(s).err())),
        ("day06_missing_operators.txt", |s| first_code(parse_worksheet(s).err())),
        ("day07_no_source.txt", |s| first_code(parse_manifold(s).err())),
        ("day08_missing_coordinate.txt", |s| first_code(parse_junction_boxes(s).err())),
        ("day09_diagonal_run.txt", |s| first_code(parse_red_tiles(s).err())),
    ];
    let expected = [
        ErrorCode::E001,
        ErrorCode::E200,
        ErrorCode::E001,
        ErrorCode::E103,
        ErrorCode::E102,
        ErrorCode::E201,
        ErrorCode::E001,
        ErrorCode::E203,
    ];

    for ((name, parse), code) in cases.into_iter().zip(expected) {
        let source = puzzle(&format!("errors/{name}"));
        assert_eq!(parse(&source), Some(code), "unexpected result for {name}");
    }
}

fn first_code(err: Option<advent_parser::ParseError>) -> Option<ErrorCode> {
    err.and_then(|err| err.diagnostics().first().and_then(|diag| diag.code()))
}

#[test]
fn test_bad_grid_reports_every_row() {
    let err = parse_paper_grid(&puzzle("errors/day04_bad_grid.txt")).unwrap_err();
    let codes: Vec<_> = err.diagnostics().iter().map(|d| d.code()).collect();

    assert_eq!(codes, vec![Some(ErrorCode::E001), Some(ErrorCode::E101)]);
    assert!(err.to_string().ends_with("(+1 more)"));
}

#[test]
fn test_diagonal_runs_point_at_both_tiles() {
    let err = parse_red_tiles(&puzzle("errors/day09_diagonal_run.txt")).unwrap_err();

    assert_eq!(err.diagnostics().len(), 2);
    for diag in err.diagnostics() {
        assert_eq!(diag.severity(), Severity::Error);
        assert_eq!(diag.labels().len(), 2);
    }
    assert_eq!(err.diagnostics()[0].labels()[0].span(), Span::new(9..12));
}

#[test]
fn test_crlf_input() {
    let rotations = parse_rotations("L68\r\nR1\r\n").expect("Failed to parse");
    assert_eq!(rotations, vec![Rotation::left(68), Rotation::right(1)]);
}
