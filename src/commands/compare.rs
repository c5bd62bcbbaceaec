//! Strategy comparison command
//!
//! Runs every search strategy on the same pair in parallel. The graph is
//! only read, so the runs share it without locking.

use super::{QueryError, parse_pair};
use crate::core::Word;
use crate::graph::WordGraph;
use crate::search::{PathFinder, SearchResult, SearchStats, SearchStrategy};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// One strategy's outcome
#[derive(Debug, Clone)]
pub struct StrategyRun {
    pub strategy: SearchStrategy,
    pub result: Option<SearchResult>,
    pub stats: SearchStats,
    pub duration: Duration,
}

impl StrategyRun {
    #[must_use]
    pub fn cost(&self) -> Option<usize> {
        self.result.as_ref().map(|r| r.cost)
    }
}

#[derive(Debug, Clone)]
pub struct Comparison {
    pub start: Word,
    pub goal: Word,
    /// In `SearchStrategy::ALL` order
    pub runs: Vec<StrategyRun>,
}

impl Comparison {
    /// Whether every strategy found the same cost (or all found none)
    #[must_use]
    pub fn costs_agree(&self) -> bool {
        self.runs.windows(2).all(|pair| pair[0].cost() == pair[1].cost())
    }

    /// The run that expanded the fewest nodes
    #[must_use]
    pub fn most_efficient(&self) -> Option<&StrategyRun> {
        self.runs.iter().min_by_key(|run| run.stats.expanded)
    }
}

/// Run all strategies on one start/goal pair
///
/// # Errors
///
/// Returns an error if either word is malformed or fails validation.
pub fn compare_strategies(graph: &WordGraph, start: &str, goal: &str) -> Result<Comparison, QueryError> {
    let (start, goal) = parse_pair(start, goal)?;
    let finder = PathFinder::new(graph);

    let runs = SearchStrategy::ALL
        .par_iter()
        .map(|&strategy| {
            let timer = Instant::now();
            let (result, stats) = finder.find_path_with_stats(&start, &goal, strategy)?;
            Ok(StrategyRun {
                strategy,
                result,
                stats,
                duration: timer.elapsed(),
            })
        })
        .collect::<Result<Vec<_>, QueryError>>()?;

    Ok(Comparison { start, goal, runs })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dictionary;
    use crate::wordlists::ADVANCED;

    #[test]
    fn all_strategies_agree_on_cost() {
        let dictionary = Dictionary::from_strs(ADVANCED).unwrap();
        let graph = WordGraph::build(&dictionary, None);

        let comparison = compare_strategies(&graph, "stone", "scale").unwrap();

        assert_eq!(comparison.runs.len(), 3);
        assert!(comparison.costs_agree());
        for (run, strategy) in comparison.runs.iter().zip(SearchStrategy::ALL) {
            assert_eq!(run.strategy, strategy);
            assert!(run.cost().is_some());
        }
    }

    #[test]
    fn astar_expands_no_more_than_ucs() {
        let dictionary = Dictionary::from_strs(ADVANCED).unwrap();
        let graph = WordGraph::build(&dictionary, None);

        let comparison = compare_strategies(&graph, "stone", "shale").unwrap();
        let ucs = &comparison.runs[1];
        let astar = &comparison.runs[2];

        assert!(astar.stats.expanded <= ucs.stats.expanded);
        assert!(comparison.most_efficient().is_some());
    }

    #[test]
    fn unreachable_pair_agrees_on_none() {
        let dictionary = Dictionary::from_strs(&["cat", "elk"]).unwrap();
        let graph = WordGraph::build(&dictionary, None);

        let comparison = compare_strategies(&graph, "cat", "elk").unwrap();
        assert!(comparison.costs_agree());
        assert!(comparison.runs.iter().all(|run| run.result.is_none()));
    }

    #[test]
    fn invalid_input_is_reported_once() {
        let dictionary = Dictionary::from_strs(&["cat", "hat"]).unwrap();
        let graph = WordGraph::build(&dictionary, None);

        assert!(compare_strategies(&graph, "cat", "hats").is_err());
    }
}
