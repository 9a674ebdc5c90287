//! Puzzle text format.
//!
//! ```text
//! 3
//! 2
//! 0 h 2 1 2
//! 1 v 1 3 2
//! ```
//!
//! Line 1 is the grid size and line 2 the declared vehicle count. Every
//! following non-empty line describes one vehicle: list index, orientation
//! (`h` or `v`), length, then the 1-indexed column and row of its leftmost
//! or topmost cell (column before row on the wire). Vehicles are numbered
//! by line order; the index token must parse but its value is ignored.
//!
//! A bad header is fatal. A bad body line is skipped and surfaced as a
//! [`SkippedLine`] diagnostic, and a header count that disagrees with the
//! number of lines that parsed is reported the same non-fatal way, with the
//! parsed list winning.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::board::{Board, BoardError, Orientation, Pos, Vehicle};

#[derive(Debug)]
/// Fatal parse failures. Skipped body lines are not errors; see
/// [`ParsedPuzzle::skipped`].
pub enum ParseError {
    /// The size or vehicle-count header is missing or not a number.
    BadHeader {
        line: usize,
        content: String,
        reason: &'static str,
    },
    /// The parsed layout was rejected by board validation.
    Board(BoardError),
    /// Reading the input failed.
    Io { path: String, error: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::BadHeader {
                line,
                content,
                reason,
            } => {
                if content.is_empty() {
                    write!(f, "line {line}: {reason}")
                } else {
                    write!(f, "line {line}: {reason} (`{content}`)")
                }
            }
            ParseError::Board(e) => write!(f, "invalid board: {e}"),
            ParseError::Io { path, error } => write!(f, "cannot read {path}: {error}"),
        }
    }
}

impl std::error::Error for ParseError {}

/// A body line the parser had to ignore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the input.
    pub line: usize,
    pub content: String,
    pub reason: String,
}

/// A successful parse: the board plus non-fatal diagnostics.
#[derive(Debug)]
pub struct ParsedPuzzle {
    pub board: Board,
    /// Body lines that were ignored, with reasons.
    pub skipped: Vec<SkippedLine>,
    /// `Some((declared, parsed))` when the header vehicle count disagrees
    /// with the number of vehicle lines that parsed.
    pub count_mismatch: Option<(usize, usize)>,
}

pub fn parse_puzzle(text: &str) -> Result<ParsedPuzzle, ParseError> {
    let mut lines = text.lines().enumerate();

    let size: i32 = parse_header(
        &mut lines,
        "missing grid size header",
        "grid size header is not a number",
    )?;
    let declared: usize = parse_header(
        &mut lines,
        "missing vehicle count header",
        "vehicle count header is not a number",
    )?;

    let mut vehicles: Vec<Vehicle> = Vec::new();
    let mut positions: Vec<Pos> = Vec::new();
    let mut skipped: Vec<SkippedLine> = Vec::new();

    for (idx, raw) in lines {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        match parse_vehicle_line(line) {
            Ok((vehicle, pos)) => {
                vehicles.push(vehicle);
                positions.push(pos);
            }
            Err(reason) => skipped.push(SkippedLine {
                line: idx + 1,
                content: raw.to_string(),
                reason,
            }),
        }
    }

    let count_mismatch = if declared != vehicles.len() {
        Some((declared, vehicles.len()))
    } else {
        None
    };

    let board = Board::new(size, vehicles, positions).map_err(ParseError::Board)?;

    Ok(ParsedPuzzle {
        board,
        skipped,
        count_mismatch,
    })
}

/// Read and parse a puzzle file.
pub fn read_puzzle(path: &Path) -> Result<ParsedPuzzle, ParseError> {
    let text = fs::read_to_string(path).map_err(|e| ParseError::Io {
        path: path.display().to_string(),
        error: e.to_string(),
    })?;
    parse_puzzle(&text)
}

fn parse_header<'a, T: std::str::FromStr>(
    lines: &mut impl Iterator<Item = (usize, &'a str)>,
    missing: &'static str,
    not_a_number: &'static str,
) -> Result<T, ParseError> {
    let Some((idx, raw)) = lines.find(|(_, l)| !l.trim().is_empty()) else {
        return Err(ParseError::BadHeader {
            line: 0,
            content: String::new(),
            reason: missing,
        });
    };

    let content = raw.trim();
    content.parse().map_err(|_| ParseError::BadHeader {
        line: idx + 1,
        content: content.to_string(),
        reason: not_a_number,
    })
}

fn parse_vehicle_line(line: &str) -> Result<(Vehicle, Pos), String> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != 5 {
        return Err(format!("expected 5 fields, found {}", fields.len()));
    }

    // The index field must parse; line order decides the actual numbering.
    fields[0]
        .parse::<usize>()
        .map_err(|_| format!("index field `{}` is not a number", fields[0]))?;

    let orientation = match fields[1] {
        "h" => Orientation::Horizontal,
        "v" => Orientation::Vertical,
        other => return Err(format!("orientation field `{other}` is not `h` or `v`")),
    };

    let length = fields[2]
        .parse::<i32>()
        .map_err(|_| format!("length field `{}` is not a number", fields[2]))?;

    let col = fields[3]
        .parse::<i32>()
        .map_err(|_| format!("column field `{}` is not a number", fields[3]))?;
    let row = fields[4]
        .parse::<i32>()
        .map_err(|_| format!("row field `{}` is not a number", fields[4]))?;

    Ok((Vehicle::new(orientation, length), Pos::new(col, row)))
}
