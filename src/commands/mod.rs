//! Command implementations
//!
//! Each command computes a report; printing lives in `output`.

pub mod benchmark;
pub mod compare;
pub mod graph;
pub mod simple;
pub mod solve;

use crate::core::{Word, WordError};
use crate::search::SearchError;
use thiserror::Error;

pub use benchmark::{BenchmarkResult, StrategyTotals, run_benchmark};
pub use compare::{Comparison, StrategyRun, compare_strategies};
pub use graph::{GraphReport, describe_graph};
pub use simple::run_simple;
pub use solve::{SolveReport, solve_pair};

/// Error type for one-shot path queries from the command line
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Invalid word '{text}': {source}")]
    InvalidWord {
        text: String,
        #[source]
        source: WordError,
    },
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Parse a start/goal pair typed by the user
///
/// # Errors
/// Returns `QueryError::InvalidWord` for the first word that fails to parse.
pub fn parse_pair(start: &str, goal: &str) -> Result<(Word, Word), QueryError> {
    let parse = |text: &str| {
        Word::new(text).map_err(|source| QueryError::InvalidWord {
            text: text.to_string(),
            source,
        })
    };
    Ok((parse(start)?, parse(goal)?))
}
