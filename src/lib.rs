//! A solver for Rush Hour style sliding-block puzzles: board/occupancy
//! model, move generation, and breadth-first or heuristic best-first search
//! over the state space.

pub mod board;
pub mod state;
pub mod movegen;
pub mod heuristic;
pub mod search;
pub mod parse;
pub mod report;
pub mod puzzles;
