//! Built-in boards for demos, tests and benches.

use crate::board::{Board, BoardError, Orientation, Pos, Vehicle};

fn h(length: i32) -> Vehicle {
    Vehicle::new(Orientation::Horizontal, length)
}

fn v(length: i32) -> Vehicle {
    Vehicle::new(Orientation::Vertical, length)
}

/// 3x3 grid, target one slide short of the exit behind a single one-cell
/// blocker. Solvable in two moves: the blocker slides up, the target slides
/// right.
pub fn corner_escape() -> Result<Board, BoardError> {
    Board::new(
        3,
        vec![h(2), v(1)],
        vec![Pos::new(1, 2), Pos::new(3, 2)],
    )
}

/// 2x2 grid whose only vehicle is the target, already parked at the exit.
pub fn already_home() -> Result<Board, BoardError> {
    Board::new(2, vec![h(2)], vec![Pos::new(1, 1)])
}

/// 4x4 grid where the target and a horizontal blocker pin each other in the
/// exit row. No vehicle can move at all; there is no solution.
pub fn gridlocked() -> Result<Board, BoardError> {
    Board::new(
        4,
        vec![h(2), h(2)],
        vec![Pos::new(1, 2), Pos::new(3, 2)],
    )
}

/// 6x6 grid with two vertical blockers in the exit row. Minimum solution is
/// exactly three moves: clear each blocker, then slide the target out.
pub fn three_step() -> Result<Board, BoardError> {
    Board::new(
        6,
        vec![h(2), v(2), v(3)],
        vec![Pos::new(1, 3), Pos::new(4, 2), Pos::new(6, 3)],
    )
}

/// 6x6 grid with eight vehicles in a rush-hour knot; solvable, used as the
/// deeper demo and the bench workload.
pub fn morning_jam() -> Result<Board, BoardError> {
    Board::new(
        6,
        vec![h(2), v(3), h(2), v(2), h(2), v(2), h(3), v(2)],
        vec![
            Pos::new(1, 3),
            Pos::new(3, 1),
            Pos::new(4, 1),
            Pos::new(4, 2),
            Pos::new(5, 4),
            Pos::new(2, 5),
            Pos::new(3, 6),
            Pos::new(6, 5),
        ],
    )
}

pub fn available_names() -> [&'static str; 5] {
    [
        "corner_escape",
        "already_home",
        "gridlocked",
        "three_step",
        "morning_jam",
    ]
}

pub fn by_name(name: &str) -> Result<Option<Board>, BoardError> {
    match name {
        "corner_escape" => corner_escape().map(Some),
        "already_home" => already_home().map(Some),
        "gridlocked" => gridlocked().map(Some),
        "three_step" => three_step().map(Some),
        "morning_jam" => morning_jam().map(Some),
        _ => Ok(None),
    }
}
