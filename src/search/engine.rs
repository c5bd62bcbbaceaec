//! Shortest-path engine over a word graph

use super::frontier::Frontier;
use super::SearchStrategy;
use crate::core::Word;
use crate::graph::WordGraph;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;
use thiserror::Error;
use tracing::{debug, trace};

/// A shortest transformation path and its cost
///
/// `cost` is always `path.len() - 1`; every edge costs 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub cost: usize,
    pub path: Vec<Word>,
}

impl SearchResult {
    fn trivial(word: &Word) -> Self {
        Self {
            cost: 0,
            path: vec![word.clone()],
        }
    }

    /// The word following the start, if the path has at least one step
    #[must_use]
    pub fn next_step(&self) -> Option<&Word> {
        self.path.get(1)
    }
}

/// Bookkeeping collected during a search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Words taken off the frontier and expanded
    pub expanded: usize,
    /// Frontier insertions, excluding the start
    pub generated: usize,
    /// Largest frontier size
    pub frontier_peak: usize,
}

/// Malformed query
///
/// Kept distinct from "no path" so callers can tell a bad query from a
/// disconnected pair.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("Start '{start}' and goal '{goal}' have different lengths")]
    LengthMismatch { start: String, goal: String },
    #[error("Word '{word}' has {found} letters, but the graph uses {expected}-letter words")]
    WrongWordLength {
        word: String,
        expected: usize,
        found: usize,
    },
}

/// Path finder over a read-only word graph
///
/// Holds no state besides the graph reference; every query is independent and
/// several finders may share one graph across threads.
#[derive(Debug, Clone, Copy)]
pub struct PathFinder<'g> {
    graph: &'g WordGraph,
}

impl<'g> PathFinder<'g> {
    #[must_use]
    pub const fn new(graph: &'g WordGraph) -> Self {
        Self { graph }
    }

    #[must_use]
    pub const fn graph(&self) -> &'g WordGraph {
        self.graph
    }

    /// Find a shortest path from `start` to `goal`
    ///
    /// Returns `Ok(None)` when the goal is unreachable. `start == goal` yields a
    /// zero-cost single-word path without consulting the graph.
    ///
    /// # Errors
    /// Returns `SearchError` if the words differ in length from each other or
    /// from the graph's words.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::{Dictionary, Word};
    /// use word_ladder::graph::WordGraph;
    /// use word_ladder::search::{PathFinder, SearchStrategy};
    ///
    /// let dictionary = Dictionary::from_strs(&["cat", "bat", "hat", "hot", "dot"]).unwrap();
    /// let graph = WordGraph::build(&dictionary, None);
    /// let finder = PathFinder::new(&graph);
    ///
    /// let start = Word::new("cat").unwrap();
    /// let goal = Word::new("hot").unwrap();
    /// let result = finder.find_path(&start, &goal, SearchStrategy::AStar).unwrap().unwrap();
    ///
    /// assert_eq!(result.cost, 2);
    /// assert_eq!(result.path.len(), 3);
    /// ```
    pub fn find_path(
        &self,
        start: &Word,
        goal: &Word,
        strategy: SearchStrategy,
    ) -> Result<Option<SearchResult>, SearchError> {
        self.find_path_with_stats(start, goal, strategy)
            .map(|(result, _)| result)
    }

    /// Find a shortest path and report search statistics
    ///
    /// # Errors
    /// Same as [`PathFinder::find_path`].
    pub fn find_path_with_stats(
        &self,
        start: &Word,
        goal: &Word,
        strategy: SearchStrategy,
    ) -> Result<(Option<SearchResult>, SearchStats), SearchError> {
        if start == goal {
            return Ok((Some(SearchResult::trivial(start)), SearchStats::default()));
        }

        self.validate(start, goal)?;

        let (result, stats) = self.search(start, goal, strategy);

        debug!(
            %strategy,
            %start,
            %goal,
            cost = result.as_ref().map(|r| r.cost),
            expanded = stats.expanded,
            generated = stats.generated,
            "search finished"
        );

        Ok((result, stats))
    }

    /// Check whether any path connects `start` and `goal`
    ///
    /// Breadth-first with only a visited set; no paths are materialized.
    ///
    /// # Errors
    /// Same as [`PathFinder::find_path`].
    pub fn exists_path(&self, start: &Word, goal: &Word) -> Result<bool, SearchError> {
        if start == goal {
            return Ok(true);
        }

        self.validate(start, goal)?;

        let mut visited: FxHashSet<&Word> = FxHashSet::default();
        visited.insert(start);
        let mut queue = VecDeque::from([start]);

        while let Some(word) = queue.pop_front() {
            for neighbor in self.graph.neighbors(word.text()) {
                if neighbor == goal {
                    return Ok(true);
                }
                if visited.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        trace!(%start, %goal, visited = visited.len(), "no path exists");
        Ok(false)
    }

    /// The word to move to next on a shortest path, if the goal is reachable
    ///
    /// Returns `Ok(None)` when unreachable or when `start == goal`.
    ///
    /// # Errors
    /// Same as [`PathFinder::find_path`].
    pub fn next_step(
        &self,
        start: &Word,
        goal: &Word,
        strategy: SearchStrategy,
    ) -> Result<Option<Word>, SearchError> {
        let result = self.find_path(start, goal, strategy)?;
        Ok(result.and_then(|r| r.next_step().cloned()))
    }

    fn validate(&self, start: &Word, goal: &Word) -> Result<(), SearchError> {
        if start.len() != goal.len() {
            return Err(SearchError::LengthMismatch {
                start: start.text().to_string(),
                goal: goal.text().to_string(),
            });
        }

        if let Some(expected) = self.graph.word_length() {
            for word in [start, goal] {
                if word.len() != expected {
                    return Err(SearchError::WrongWordLength {
                        word: word.text().to_string(),
                        expected,
                        found: word.len(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Shared expansion loop for every strategy
    ///
    /// BFS settles a word when it is enqueued; the prioritized strategies settle
    /// it when it is popped, skipping stale heap entries.
    fn search<'a>(
        &'a self,
        start: &'a Word,
        goal: &'a Word,
        strategy: SearchStrategy,
    ) -> (Option<SearchResult>, SearchStats) {
        let settle_on_push = !strategy.is_prioritized();
        let mut frontier = Frontier::new(strategy);
        // Settled words and the word each was reached from
        let mut parents: FxHashMap<&'a Word, Option<&'a Word>> = FxHashMap::default();
        let mut stats = SearchStats::default();

        if settle_on_push {
            parents.insert(start, None);
        }
        frontier.push(strategy.priority(0, start, goal), 0, start, None);

        while let Some(node) = frontier.pop() {
            if !settle_on_push {
                if parents.contains_key(node.word) {
                    continue;
                }
                parents.insert(node.word, node.parent);
            }

            if node.word == goal {
                stats.frontier_peak = frontier.peak();
                return (Some(reconstruct_path(&parents, goal, node.cost)), stats);
            }

            stats.expanded += 1;
            let next_cost = node.cost + 1;

            for neighbor in self.graph.neighbors(node.word.text()) {
                if parents.contains_key(neighbor) {
                    continue;
                }
                if settle_on_push {
                    parents.insert(neighbor, Some(node.word));
                }

                stats.generated += 1;
                frontier.push(
                    strategy.priority(next_cost, neighbor, goal),
                    next_cost,
                    neighbor,
                    Some(node.word),
                );
            }
        }

        stats.frontier_peak = frontier.peak();
        (None, stats)
    }
}

/// Walk the predecessor chain back from the goal
fn reconstruct_path<'a>(
    parents: &FxHashMap<&'a Word, Option<&'a Word>>,
    goal: &'a Word,
    cost: usize,
) -> SearchResult {
    let mut path = vec![goal.clone()];
    let mut current = goal;

    while let Some(&Some(parent)) = parents.get(current) {
        path.push(parent.clone());
        current = parent;
    }

    path.reverse();
    debug_assert_eq!(path.len(), cost + 1);

    SearchResult { cost, path }
}
