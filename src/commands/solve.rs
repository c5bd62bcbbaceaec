//! Path solving command
//!
//! Finds a shortest ladder between two words with one strategy.

use super::{QueryError, parse_pair};
use crate::core::Word;
use crate::graph::WordGraph;
use crate::search::{PathFinder, SearchResult, SearchStats, SearchStrategy};
use std::time::{Duration, Instant};

/// Result of solving one word pair
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub start: Word,
    pub goal: Word,
    pub strategy: SearchStrategy,
    /// `None` when the goal is unreachable
    pub result: Option<SearchResult>,
    pub stats: SearchStats,
    pub duration: Duration,
}

/// Solve a start/goal pair typed by the user
///
/// # Errors
///
/// Returns an error if either word is malformed, the lengths differ, or a
/// word has the wrong length for the graph.
pub fn solve_pair(
    graph: &WordGraph,
    start: &str,
    goal: &str,
    strategy: SearchStrategy,
) -> Result<SolveReport, QueryError> {
    let (start, goal) = parse_pair(start, goal)?;

    let timer = Instant::now();
    let (result, stats) = PathFinder::new(graph).find_path_with_stats(&start, &goal, strategy)?;

    Ok(SolveReport {
        start,
        goal,
        strategy,
        result,
        stats,
        duration: timer.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dictionary;
    use crate::search::SearchError;

    fn graph() -> WordGraph {
        let dictionary = Dictionary::from_strs(&["cat", "bat", "hat", "hot", "dot", "elk"]).unwrap();
        WordGraph::build(&dictionary, None)
    }

    #[test]
    fn solve_finds_path() {
        let report = solve_pair(&graph(), "cat", "dot", SearchStrategy::AStar).unwrap();

        let result = report.result.unwrap();
        assert_eq!(result.cost, 3);
        assert_eq!(result.path.first().map(Word::text), Some("cat"));
        assert_eq!(result.path.last().map(Word::text), Some("dot"));
        assert!(report.stats.expanded > 0);
    }

    #[test]
    fn solve_unreachable_goal() {
        let report = solve_pair(&graph(), "cat", "elk", SearchStrategy::Bfs).unwrap();
        assert!(report.result.is_none());
    }

    #[test]
    fn solve_rejects_mismatched_lengths() {
        let err = solve_pair(&graph(), "cat", "cart", SearchStrategy::Ucs).unwrap_err();
        assert!(matches!(
            err,
            QueryError::Search(SearchError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn solve_same_word_is_trivial() {
        let report = solve_pair(&graph(), "zzz", "zzz", SearchStrategy::Bfs).unwrap();
        assert_eq!(report.result.unwrap().cost, 0);
    }
}
