//! Search drivers over the puzzle state space.
//!
//! Both drivers share the same machine: a frontier of discovered states, a
//! visited set keyed by board identity, a goal test at dequeue time, and
//! exhaustion as the no-solution signal. They differ in frontier order and
//! in when a board counts as visited: [`bfs`] marks boards at enqueue, so
//! nothing is queued twice; [`best_first`] marks them at dequeue, accepting
//! duplicate frontier entries in exchange for a simpler loop.

mod best_first;
mod bfs;

pub use best_first::best_first;
pub use bfs::bfs;

use crate::state::Move;

/// What a driver found and how much work it did.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// `Some` with the move list when a goal was reached (empty when the
    /// start was already solved), `None` when the space was exhausted.
    pub path: Option<Vec<Move>>,
    /// States dequeued from the frontier.
    pub expanded: u64,
    /// Successor states produced by move generation.
    pub generated: u64,
}

impl SearchOutcome {
    /// Number of moves in the found path, if one was found.
    pub fn move_count(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len())
    }
}
