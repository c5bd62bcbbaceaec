//! Search strategies
//!
//! All three strategies share one expansion loop and differ only in how the
//! frontier is ordered.

use crate::core::Word;
use std::fmt;

/// Path-finding strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum SearchStrategy {
    /// Breadth-first search with a FIFO frontier
    #[default]
    Bfs,
    /// Uniform-cost search ordered by accumulated cost
    Ucs,
    /// A* ordered by accumulated cost plus Hamming distance to the goal
    #[value(name = "astar", aliases = ["a*", "a-star"])]
    AStar,
}

impl SearchStrategy {
    /// Every strategy, in comparison order
    pub const ALL: [Self; 3] = [Self::Bfs, Self::Ucs, Self::AStar];

    /// Display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Ucs => "UCS",
            Self::AStar => "A*",
        }
    }

    /// Parse a strategy from its name
    ///
    /// Supported names: "bfs", "ucs", "astar", "a*", "a-star" (case-insensitive).
    ///
    /// # Examples
    /// ```
    /// use word_ladder::search::SearchStrategy;
    ///
    /// assert_eq!(SearchStrategy::from_name("A*"), Some(SearchStrategy::AStar));
    /// assert_eq!(SearchStrategy::from_name("dfs"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "bfs" | "breadth-first" => Some(Self::Bfs),
            "ucs" | "uniform-cost" => Some(Self::Ucs),
            "astar" | "a*" | "a-star" => Some(Self::AStar),
            _ => None,
        }
    }

    /// Whether the frontier is priority-ordered rather than FIFO
    #[inline]
    #[must_use]
    pub const fn is_prioritized(self) -> bool {
        !matches!(self, Self::Bfs)
    }

    /// Frontier priority of a node reached at `cost`
    ///
    /// For BFS this is just the depth; it does not influence FIFO ordering.
    #[must_use]
    pub fn priority(self, cost: usize, word: &Word, goal: &Word) -> usize {
        match self {
            Self::Bfs | Self::Ucs => cost,
            Self::AStar => cost + heuristic(word, goal),
        }
    }

    /// The strategy after this one, wrapping around
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Bfs => Self::Ucs,
            Self::Ucs => Self::AStar,
            Self::AStar => Self::Bfs,
        }
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A* heuristic: Hamming distance between a word and the goal
///
/// Each edge changes exactly one letter, so one step lowers the distance by at
/// most 1. That makes the heuristic admissible and consistent for unit costs.
#[inline]
#[must_use]
pub fn heuristic(word: &Word, goal: &Word) -> usize {
    word.hamming_distance(goal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_variants() {
        assert_eq!(SearchStrategy::from_name("bfs"), Some(SearchStrategy::Bfs));
        assert_eq!(SearchStrategy::from_name("UCS"), Some(SearchStrategy::Ucs));
        assert_eq!(SearchStrategy::from_name("astar"), Some(SearchStrategy::AStar));
        assert_eq!(SearchStrategy::from_name(" a-star "), Some(SearchStrategy::AStar));
        assert_eq!(SearchStrategy::from_name("greedy"), None);
    }

    #[test]
    fn default_is_bfs() {
        assert_eq!(SearchStrategy::default(), SearchStrategy::Bfs);
        assert!(!SearchStrategy::Bfs.is_prioritized());
        assert!(SearchStrategy::Ucs.is_prioritized());
    }

    #[test]
    fn astar_priority_adds_heuristic() {
        let cat = Word::new("cat").unwrap();
        let dog = Word::new("dog").unwrap();

        assert_eq!(SearchStrategy::Ucs.priority(2, &cat, &dog), 2);
        assert_eq!(SearchStrategy::AStar.priority(2, &cat, &dog), 5);
        assert_eq!(SearchStrategy::AStar.priority(0, &dog, &dog), 0);
    }

    #[test]
    fn next_cycles_through_all() {
        let mut strategy = SearchStrategy::Bfs;
        for expected in [SearchStrategy::Ucs, SearchStrategy::AStar, SearchStrategy::Bfs] {
            strategy = strategy.next();
            assert_eq!(strategy, expected);
        }
    }

    #[test]
    fn display_names() {
        let names: Vec<String> = SearchStrategy::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, vec!["BFS", "UCS", "A*"]);
    }
}
