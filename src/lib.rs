//! Word Ladder
//!
//! Turn one word into another by changing a single letter at a time, with
//! every intermediate step a dictionary word. Includes breadth-first,
//! uniform-cost and A* solvers over a Hamming-distance word graph, and a game
//! with difficulty tiers and challenge obstacles.
//!
//! # Quick Start
//!
//! ```rust
//! use word_ladder::core::{Dictionary, Word};
//! use word_ladder::graph::WordGraph;
//! use word_ladder::search::{PathFinder, SearchStrategy};
//!
//! let dictionary = Dictionary::from_strs(&["cold", "cord", "card", "ward", "warm"]).unwrap();
//! let graph = WordGraph::build(&dictionary, None);
//!
//! let start = Word::new("cold").unwrap();
//! let goal = Word::new("warm").unwrap();
//! let result = PathFinder::new(&graph)
//!     .find_path(&start, &goal, SearchStrategy::AStar)
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(result.cost, 4);
//! ```

// Core domain types
pub mod core;

// Word graph construction
pub mod graph;

// Path search strategies
pub mod search;

// Game rules and round state
pub mod game;

// Tiers and scoring constants
pub mod config;

// Tracing setup
pub mod logging;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
