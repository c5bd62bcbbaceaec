//! Textual graph view
//!
//! Summary statistics plus, on request, every adjacency list.

use crate::config::Tier;
use crate::core::{ExclusionPolicy, Word};
use crate::graph::{GraphSummary, WordGraph};

/// What the `graph` command prints
#[derive(Debug, Clone)]
pub struct GraphReport {
    pub tier: Tier,
    pub summary: GraphSummary,
    pub banned_words: Vec<String>,
    pub banned_letters: String,
    /// Sorted by word; empty unless a listing was requested
    pub adjacency: Vec<(Word, Vec<Word>)>,
}

/// Describe a built graph
#[must_use]
pub fn describe_graph(graph: &WordGraph, tier: Tier, policy: &ExclusionPolicy, list: bool) -> GraphReport {
    let adjacency = if list {
        graph
            .sorted_words()
            .into_iter()
            .map(|word| (word.clone(), graph.neighbors(word.text()).to_vec()))
            .collect()
    } else {
        Vec::new()
    };

    GraphReport {
        tier,
        summary: graph.summary(),
        banned_words: policy.banned_words().map(|w| w.text().to_string()).collect(),
        banned_letters: policy.banned_letters().collect(),
        adjacency,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dictionary;

    fn graph() -> WordGraph {
        let dictionary = Dictionary::from_strs(&["cat", "bat", "hat", "hot", "elk"]).unwrap();
        WordGraph::build(&dictionary, None)
    }

    #[test]
    fn summary_only_by_default() {
        let report = describe_graph(&graph(), Tier::Beginner, &ExclusionPolicy::default(), false);

        assert_eq!(report.summary.words, 5);
        assert_eq!(report.summary.isolated_words, 1);
        assert!(report.adjacency.is_empty());
        assert!(report.banned_letters.is_empty());
    }

    #[test]
    fn listing_is_sorted() {
        let report = describe_graph(&graph(), Tier::Beginner, &ExclusionPolicy::default(), true);

        let words: Vec<&str> = report.adjacency.iter().map(|(w, _)| w.text()).collect();
        assert_eq!(words, ["bat", "cat", "elk", "hat", "hot"]);

        let (_, hat) = &report.adjacency[3];
        let neighbors: Vec<&str> = hat.iter().map(Word::text).collect();
        assert_eq!(neighbors, ["bat", "cat", "hot"]);
    }

    #[test]
    fn policy_is_reported() {
        let policy = ExclusionPolicy::new([Word::new("hat").unwrap()], *b"zq");
        let report = describe_graph(&graph(), Tier::Challenge, &policy, false);

        assert_eq!(report.banned_words, ["hat"]);
        assert_eq!(report.banned_letters, "qz");
    }
}
