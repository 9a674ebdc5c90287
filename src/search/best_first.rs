//! Best-first driver: lowest `moves + h` first, visited marked at dequeue.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::FxHashSet;

use crate::board::Board;
use crate::heuristic::Heuristic;
use crate::movegen::successors;
use crate::search::SearchOutcome;
use crate::state::SearchState;

struct Entry {
    priority: u32,
    seq: u64,
    state: SearchState,
}

// Reversed on (priority, seq) so the std max-heap pops the lowest priority
// first and breaks ties by insertion order.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl Eq for Entry {}

/// Expand states in ascending `moves + h` order until a goal is dequeued or
/// the frontier runs out.
///
/// Boards only count as visited once dequeued, so the same board can be
/// queued several times through different parents. A board dequeued again
/// after it was already expanded is expanded again; its successors are all
/// filtered by the visited set, so the repeat costs work but changes
/// nothing. The returned path is the first-expanded route to the goal.
pub fn best_first(start: &Board, heuristic: Heuristic) -> SearchOutcome {
    let mut visited: FxHashSet<Board> = FxHashSet::default();
    let mut frontier: BinaryHeap<Entry> = BinaryHeap::new();
    let mut seq: u64 = 0;

    let root = SearchState::root(start.clone());
    frontier.push(Entry {
        priority: heuristic.priority(&root),
        seq,
        state: root,
    });
    seq += 1;

    let mut expanded: u64 = 0;
    let mut generated: u64 = 0;

    while let Some(entry) = frontier.pop() {
        let state = entry.state;
        expanded += 1;
        visited.insert(state.board.clone());

        if state.board.is_solved() {
            return SearchOutcome {
                path: Some(state.path),
                expanded,
                generated,
            };
        }

        for succ in successors(&state) {
            generated += 1;
            if visited.contains(&succ.board) {
                continue;
            }
            frontier.push(Entry {
                priority: heuristic.priority(&succ),
                seq,
                state: succ,
            });
            seq += 1;
        }
    }

    SearchOutcome {
        path: None,
        expanded,
        generated,
    }
}
