//! Legal-move enumeration: one successor per reachable resting position.

use rustc_hash::FxHashSet;

use crate::board::{Board, Orientation};
use crate::state::{Move, SearchState};

/// Directions are walked negative first so driver output is deterministic.
const STEPS: [i32; 2] = [-1, 1];

/// Enumerate every state reachable from `from` by sliding exactly one
/// vehicle one or more free cells.
///
/// Each resting position along a slide is its own successor, all at
/// `from.moves + 1`: sliding three cells costs the same one move as sliding
/// one, and the intermediate stops are legal states in their own right.
///
/// Every one-cell advance tests the cell beyond the working copy's leading
/// edge against `from`'s occupancy grid, the pre-move snapshot, so a vehicle
/// only sees the world as it stood before its slide began. The advanced copy
/// is then recomputed from scratch; a failed recomputation ends the walk.
///
/// The result keeps enumeration order (vehicle index ascending, negative
/// step before positive) and is deduplicated by board identity.
pub fn successors(from: &SearchState) -> Vec<SearchState> {
    let board = &from.board;
    let mut out: Vec<SearchState> = Vec::new();

    for (i, vehicle) in board.vehicles().iter().enumerate() {
        for step in STEPS {
            let mut work = board.clone();
            loop {
                let pos = work.positions()[i];
                let (lead_col, lead_row) = match vehicle.orientation {
                    Orientation::Horizontal => {
                        let col = if step > 0 { pos.col + vehicle.length } else { pos.col - 1 };
                        (col, pos.row)
                    }
                    Orientation::Vertical => {
                        let row = if step > 0 { pos.row + vehicle.length } else { pos.row - 1 };
                        (pos.col, row)
                    }
                };

                if !board.is_free(lead_col, lead_row) {
                    break;
                }

                work.shift(i, step);
                if work.recompute_free().is_err() {
                    break;
                }
                out.push(from.child(work.clone(), Move::new(i, step)));
            }
        }
    }

    let mut seen: FxHashSet<Board> = FxHashSet::default();
    out.retain(|s| seen.insert(s.board.clone()));
    out
}
