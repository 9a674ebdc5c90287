//! Pluggable state evaluation for the best-first driver.

use crate::board::Board;
use crate::state::SearchState;

/// Strategy names accepted on the command line.
///
/// Only `blocking` has a non-zero implementation. `trivial` and
/// `distance_to_exit` are advertised but evaluate to zero, as does any
/// unrecognised name; the fallback is the explicit [`Heuristic::Zero`]
/// variant rather than a silent default.
pub const ADVERTISED: [&str; 3] = ["blocking", "trivial", "distance_to_exit"];

/// An estimate of the moves remaining from a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    /// Occupied cells in the target's row between its trailing edge and the
    /// right boundary.
    Blocking,
    /// Constant zero: best-first degenerates to cost-only ordering.
    Zero,
}

impl Heuristic {
    /// Map a strategy name to an evaluator. Anything but `blocking` is
    /// [`Heuristic::Zero`].
    pub fn from_name(name: &str) -> Heuristic {
        match name {
            "blocking" => Heuristic::Blocking,
            _ => Heuristic::Zero,
        }
    }

    pub fn evaluate(self, board: &Board) -> u32 {
        match self {
            Heuristic::Blocking => blocking_cells(board),
            Heuristic::Zero => 0,
        }
    }

    /// Priority of a state: moves spent so far plus the estimate, recomputed
    /// on every request.
    pub fn priority(self, state: &SearchState) -> u32 {
        state.moves + self.evaluate(&state.board)
    }
}

/// Count occupied cells in the target's row strictly beyond its trailing
/// edge. Cells, not vehicles: a blocker lying along the row counts once per
/// cell it covers.
fn blocking_cells(board: &Board) -> u32 {
    let target = board.target();
    let vehicle = board.vehicles()[target];
    let pos = board.positions()[target];

    let mut count = 0;
    for col in (pos.col + vehicle.length)..=board.size() {
        if !board.is_free(col, pos.row) {
            count += 1;
        }
    }
    count
}
