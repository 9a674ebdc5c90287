//! Search-graph nodes: a board plus the move history that produced it.

use std::hash::{Hash, Hasher};

use crate::board::{Board, Orientation};

/// One slide action: `vehicle` moves along its axis in the `step` direction
/// (-1 = left/up, +1 = right/down). The slide distance is not recorded; a
/// slide of any length is one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub vehicle: usize,
    pub step: i32,
}

impl Move {
    pub fn new(vehicle: usize, step: i32) -> Self {
        Self { vehicle, step }
    }

    /// Human-readable direction for a vehicle of the given orientation.
    pub fn direction(self, orientation: Orientation) -> &'static str {
        match (orientation, self.step < 0) {
            (Orientation::Horizontal, true) => "left",
            (Orientation::Horizontal, false) => "right",
            (Orientation::Vertical, true) => "up",
            (Orientation::Vertical, false) => "down",
        }
    }
}

/// A node in the search space.
///
/// Equality and hashing delegate to the board alone: two states that reach
/// the same configuration by different routes are the same node, so visited
/// sets collapse them and keep whichever path got there first. `moves` and
/// `path` ride along as bookkeeping.
#[derive(Debug, Clone)]
pub struct SearchState {
    pub board: Board,
    pub moves: u32,
    pub path: Vec<Move>,
}

impl SearchState {
    /// The start of a search: zero moves, empty history.
    pub fn root(board: Board) -> Self {
        Self {
            board,
            moves: 0,
            path: Vec::new(),
        }
    }

    /// A successor one move deeper, with `mv` appended to the history.
    pub fn child(&self, board: Board, mv: Move) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(mv);
        Self {
            board,
            moves: self.moves + 1,
            path,
        }
    }
}

impl PartialEq for SearchState {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
    }
}

impl Eq for SearchState {}

impl Hash for SearchState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.board.hash(state);
    }
}
