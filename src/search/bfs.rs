//! Breadth-first driver: uniform layers, visited marked at enqueue.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use crate::board::Board;
use crate::movegen::successors;
use crate::search::SearchOutcome;
use crate::state::SearchState;

/// Explore outward from `start` one move layer at a time and return the
/// first goal reached. Every edge costs one move, so the first goal is a
/// minimum-move solution.
///
/// Boards enter the visited set the moment they are queued, the root
/// included, so no board ever sits in the frontier twice.
pub fn bfs(start: &Board) -> SearchOutcome {
    let mut visited: FxHashSet<Board> = FxHashSet::default();
    let mut frontier: VecDeque<SearchState> = VecDeque::new();

    visited.insert(start.clone());
    frontier.push_back(SearchState::root(start.clone()));

    let mut expanded: u64 = 0;
    let mut generated: u64 = 0;

    while let Some(state) = frontier.pop_front() {
        expanded += 1;

        if state.board.is_solved() {
            return SearchOutcome {
                path: Some(state.path),
                expanded,
                generated,
            };
        }

        for succ in successors(&state) {
            generated += 1;
            if visited.insert(succ.board.clone()) {
                frontier.push_back(succ);
            }
        }
    }

    SearchOutcome {
        path: None,
        expanded,
        generated,
    }
}
