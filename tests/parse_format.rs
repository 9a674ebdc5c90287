use std::path::Path;

use gridlock::board::{BoardError, Pos};
use gridlock::parse::{parse_puzzle, read_puzzle, ParseError};
use gridlock::puzzles;

const CORNER_ESCAPE_TEXT: &str = "3\n2\n0 h 2 1 2\n1 v 1 3 2\n";

#[test]
fn fixture_parses_to_the_catalog_board() {
    let parsed = parse_puzzle(CORNER_ESCAPE_TEXT).unwrap();
    assert_eq!(parsed.board, puzzles::corner_escape().unwrap());
    assert!(parsed.skipped.is_empty());
    assert_eq!(parsed.count_mismatch, None);
}

#[test]
fn column_comes_before_row_on_the_wire() {
    // Fields 4 and 5 are column then row. A 2-long horizontal vehicle at
    // column 2, row 1 fits a 3x3 grid; the transposed reading would not
    // change validity here, so pin the anchor directly.
    let parsed = parse_puzzle("3\n1\n0 h 2 2 1\n").unwrap();
    assert_eq!(parsed.board.positions()[0], Pos::new(2, 1));
}

#[test]
fn malformed_lines_are_skipped_with_line_numbers() {
    let text = "3\n2\n0 h 2 1 2\nnot enough\n1 q 1 3 2\n1 v 1 3 2\n";
    let parsed = parse_puzzle(text).unwrap();

    // The good lines still form the catalog board.
    assert_eq!(parsed.board, puzzles::corner_escape().unwrap());
    assert_eq!(parsed.count_mismatch, None);

    assert_eq!(parsed.skipped.len(), 2);
    assert_eq!(parsed.skipped[0].line, 4);
    assert!(parsed.skipped[0].reason.contains("expected 5 fields"));
    assert_eq!(parsed.skipped[1].line, 5);
    assert!(parsed.skipped[1].reason.contains("orientation"));
}

#[test]
fn numeric_fields_must_parse() {
    let text = "3\n2\n0 h two 1 2\nx v 1 3 2\n0 h 2 1 2\n1 v 1 3 2\n";
    let parsed = parse_puzzle(text).unwrap();

    assert_eq!(parsed.skipped.len(), 2);
    assert!(parsed.skipped[0].reason.contains("length"));
    assert!(parsed.skipped[1].reason.contains("index"));
    assert_eq!(parsed.board, puzzles::corner_escape().unwrap());
}

#[test]
fn headers_are_required_and_numeric() {
    assert!(matches!(
        parse_puzzle(""),
        Err(ParseError::BadHeader { line: 0, .. })
    ));
    assert!(matches!(
        parse_puzzle("x\n"),
        Err(ParseError::BadHeader { line: 1, .. })
    ));
    assert!(matches!(
        parse_puzzle("3\n"),
        Err(ParseError::BadHeader { line: 0, .. })
    ));
    assert!(matches!(
        parse_puzzle("3\nmany\n0 h 2 1 2\n"),
        Err(ParseError::BadHeader { line: 2, .. })
    ));
}

#[test]
fn count_mismatch_is_diagnosed_not_fatal() {
    let parsed = parse_puzzle("3\n5\n0 h 2 1 2\n1 v 1 3 2\n").unwrap();
    assert_eq!(parsed.count_mismatch, Some((5, 2)));
    // The parsed list wins over the declared count.
    assert_eq!(parsed.board, puzzles::corner_escape().unwrap());
}

#[test]
fn index_tokens_are_ignored_for_numbering() {
    // Indices 9 and 4 on the wire; line order still numbers the vehicles
    // 0 and 1, so the board matches the catalog fixture.
    let parsed = parse_puzzle("3\n2\n9 h 2 1 2\n4 v 1 3 2\n").unwrap();
    assert_eq!(parsed.board, puzzles::corner_escape().unwrap());
    assert!(parsed.skipped.is_empty());
}

#[test]
fn blank_lines_are_ignored_everywhere() {
    let text = "\n3\n\n2\n\n0 h 2 1 2\n\n1 v 1 3 2\n\n";
    let parsed = parse_puzzle(text).unwrap();
    assert_eq!(parsed.board, puzzles::corner_escape().unwrap());
    assert!(parsed.skipped.is_empty());
    assert_eq!(parsed.count_mismatch, None);
}

#[test]
fn layout_validation_failures_are_fatal() {
    let result = parse_puzzle("3\n2\n0 h 2 1 2\n1 h 2 1 2\n");
    assert!(matches!(
        result,
        Err(ParseError::Board(BoardError::Overlap { vehicle: 1 }))
    ));
}

#[test]
fn read_puzzle_reports_io_failures() {
    let result = read_puzzle(Path::new("no_such_directory/no_such_puzzle.txt"));
    assert!(matches!(result, Err(ParseError::Io { .. })));
}
