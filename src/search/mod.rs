//! Shortest-path search over word graphs
//!
//! Three interchangeable strategies (BFS, uniform-cost, A*) run through one
//! shared expansion loop, plus a path-free reachability check.

mod engine;
mod frontier;
pub mod strategy;

pub use engine::{PathFinder, SearchError, SearchResult, SearchStats};
pub use strategy::{SearchStrategy, heuristic};
