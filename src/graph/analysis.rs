//! Structural analysis of a word graph
//!
//! Connected components and summary statistics, used for the textual graph view.

use super::WordGraph;
use crate::core::Word;
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Reverse;
use std::collections::VecDeque;

/// Summary statistics of a built graph
#[derive(Debug, Clone, PartialEq)]
pub struct GraphSummary {
    pub words: usize,
    pub edges: usize,
    pub components: usize,
    pub largest_component: usize,
    pub isolated_words: usize,
    pub average_degree: f64,
}

impl WordGraph {
    /// Undirected view of the adjacency: every arc in both directions
    fn undirected(&self) -> FxHashMap<&Word, Vec<&Word>> {
        let mut links: FxHashMap<&Word, Vec<&Word>> = FxHashMap::default();
        for word in self.words() {
            for neighbor in self.neighbors(word.text()) {
                links.entry(word).or_default().push(neighbor);
                links.entry(neighbor).or_default().push(word);
            }
        }
        links
    }

    /// Connected components, largest first
    ///
    /// Components are weak: a one-way edge (from a banned letter) still joins
    /// its two words. Words within a component are sorted; components of equal
    /// size are ordered by their first word.
    #[must_use]
    pub fn connected_components(&self) -> Vec<Vec<&Word>> {
        let links = self.undirected();
        let mut seen: FxHashSet<&Word> = FxHashSet::default();
        let mut components = Vec::new();

        for root in self.sorted_words() {
            if !seen.insert(root) {
                continue;
            }

            let mut component = vec![root];
            let mut queue = VecDeque::from([root]);

            while let Some(word) = queue.pop_front() {
                for &neighbor in links.get(word).into_iter().flatten() {
                    if seen.insert(neighbor) {
                        component.push(neighbor);
                        queue.push_back(neighbor);
                    }
                }
            }

            component.sort_unstable();
            components.push(component);
        }

        components.sort_by_key(|component| (Reverse(component.len()), component[0]));
        components
    }

    /// Compute summary statistics
    #[must_use]
    pub fn summary(&self) -> GraphSummary {
        let components = self.connected_components();
        let words = self.word_count();
        let edges = self.edge_count();

        GraphSummary {
            words,
            edges,
            components: components.len(),
            largest_component: components.first().map_or(0, Vec::len),
            isolated_words: components.iter().filter(|c| c.len() == 1).count(),
            average_degree: if words == 0 {
                0.0
            } else {
                (2 * edges) as f64 / words as f64
            },
        }
    }
}
