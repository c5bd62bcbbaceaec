//! Word graph construction
//!
//! Builds the one-letter adjacency relation over a dictionary, honoring an
//! optional exclusion policy.

mod analysis;
mod word_graph;

pub use analysis::GraphSummary;
pub use word_graph::WordGraph;
