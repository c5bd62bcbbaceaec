//! Implicit one-letter adjacency graph over a dictionary
//!
//! Two words are adjacent iff they have the same length and differ in exactly
//! one position. The graph is always rebuilt from scratch when the dictionary
//! or exclusion policy changes.

use crate::core::{ALPHABET, Dictionary, ExclusionPolicy, Word};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::Instant;
use tracing::debug;

/// Adjacency mapping from each usable word to its one-letter neighbors
///
/// Every word of the filtered dictionary has an entry, possibly empty. Banned
/// words have no entry and are never reachable.
#[derive(Debug, Clone, Default)]
pub struct WordGraph {
    adjacency: FxHashMap<Word, Vec<Word>>,
    word_length: Option<usize>,
}

impl WordGraph {
    /// Build the graph for a dictionary and optional exclusion policy
    ///
    /// For every usable word, each position is substituted with every allowed
    /// letter and the result is looked up in the usable set, giving
    /// O(words × length × 26) membership checks. Each word's neighbor list is
    /// computed independently, so edges come out symmetric.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Dictionary;
    /// use word_ladder::graph::WordGraph;
    ///
    /// let dictionary = Dictionary::from_strs(&["cat", "bat", "hat", "hot", "dot"]).unwrap();
    /// let graph = WordGraph::build(&dictionary, None);
    ///
    /// assert_eq!(graph.word_count(), 5);
    /// assert_eq!(graph.edge_count(), 5);
    /// assert!(graph.is_adjacent("hat", "hot"));
    /// ```
    #[must_use]
    pub fn build(dictionary: &Dictionary, policy: Option<&ExclusionPolicy>) -> Self {
        let start = Instant::now();

        let usable: FxHashMap<&str, &Word> = dictionary
            .iter()
            .filter(|word| policy.is_none_or(|p| !p.bans_word(word.text())))
            .map(|word| (word.text(), word))
            .collect();

        let letters = policy.map_or_else(|| ALPHABET.to_vec(), ExclusionPolicy::allowed_letters);

        let adjacency: FxHashMap<Word, Vec<Word>> = usable
            .par_iter()
            .map(|(_, &word)| (word.clone(), substitution_neighbors(word, &usable, &letters)))
            .collect();

        let graph = Self {
            adjacency,
            word_length: dictionary.word_length(),
        };

        debug!(
            words = graph.word_count(),
            edges = graph.edge_count(),
            banned_words = dictionary.len() - graph.word_count(),
            allowed_letters = letters.len(),
            elapsed = ?start.elapsed(),
            "word graph built"
        );

        graph
    }

    /// Neighbors of a word; empty for words not in the graph
    #[inline]
    #[must_use]
    pub fn neighbors(&self, word: &str) -> &[Word] {
        self.adjacency.get(word).map_or(&[], Vec::as_slice)
    }

    /// Check whether a word is a vertex of the graph
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.adjacency.contains_key(word)
    }

    /// Check whether `to` appears in the adjacency list of `from`
    #[must_use]
    pub fn is_adjacent(&self, from: &str, to: &str) -> bool {
        self.neighbors(from).iter().any(|w| w.text() == to)
    }

    /// Word length of the source dictionary, `None` if it was empty
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> Option<usize> {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of word pairs joined in at least one direction
    ///
    /// Banned letters make some edges one-way; such a pair still counts once.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency
            .iter()
            .flat_map(|(word, neighbors)| neighbors.iter().map(move |neighbor| (word, neighbor)))
            .filter(|&(word, neighbor)| word < neighbor || !self.is_adjacent(neighbor.text(), word.text()))
            .count()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Iterate over the vertices in unspecified order
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.adjacency.keys()
    }

    /// Vertices in lexicographic order
    #[must_use]
    pub fn sorted_words(&self) -> Vec<&Word> {
        let mut words: Vec<&Word> = self.adjacency.keys().collect();
        words.sort_unstable();
        words
    }
}

/// All usable words reachable from `word` by one allowed letter substitution
fn substitution_neighbors(word: &Word, usable: &FxHashMap<&str, &Word>, letters: &[u8]) -> Vec<Word> {
    let mut buffer = word.bytes().to_vec();
    let mut neighbors = Vec::new();

    for position in 0..buffer.len() {
        let original = buffer[position];

        for &letter in letters {
            if letter == original {
                continue;
            }
            buffer[position] = letter;

            let candidate = std::str::from_utf8(&buffer)
                .ok()
                .and_then(|text| usable.get(text));
            if let Some(&neighbor) = candidate {
                neighbors.push(neighbor.clone());
            }
        }

        buffer[position] = original;
    }

    neighbors.sort_unstable();
    neighbors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_of(words: &[&str], policy: Option<&ExclusionPolicy>) -> WordGraph {
        let dictionary = Dictionary::from_strs(words).unwrap();
        WordGraph::build(&dictionary, policy)
    }

    fn neighbor_texts<'a>(graph: &'a WordGraph, word: &str) -> Vec<&'a str> {
        graph.neighbors(word).iter().map(Word::text).collect()
    }

    #[test]
    fn builds_expected_adjacency() {
        let graph = graph_of(&["cat", "bat", "hat", "hot", "dot"], None);

        assert_eq!(neighbor_texts(&graph, "cat"), vec!["bat", "hat"]);
        assert_eq!(neighbor_texts(&graph, "bat"), vec!["cat", "hat"]);
        assert_eq!(neighbor_texts(&graph, "hat"), vec!["bat", "cat", "hot"]);
        assert_eq!(neighbor_texts(&graph, "hot"), vec!["dot", "hat"]);
        assert_eq!(neighbor_texts(&graph, "dot"), vec!["hot"]);
        assert_eq!(graph.edge_count(), 5);
    }

    #[test]
    fn edges_are_symmetric() {
        let graph = graph_of(
            &["word", "ward", "warm", "worm", "worn", "corn", "coin", "cold", "bold", "hold"],
            None,
        );

        for word in graph.words() {
            for neighbor in graph.neighbors(word.text()) {
                assert!(
                    graph.is_adjacent(neighbor.text(), word.text()),
                    "{neighbor} -> {word} missing"
                );
            }
        }
    }

    #[test]
    fn every_edge_is_a_single_substitution() {
        let graph = graph_of(
            &["stone", "store", "score", "scare", "spare", "spade", "shade", "shake", "shale", "scale"],
            None,
        );

        for word in graph.words() {
            for neighbor in graph.neighbors(word.text()) {
                assert_ne!(word, neighbor);
                assert_eq!(word.hamming_distance(neighbor), 1);
            }
        }
    }

    #[test]
    fn empty_dictionary_gives_empty_graph() {
        let graph = WordGraph::build(&Dictionary::default(), None);
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.word_length(), None);
    }

    #[test]
    fn isolated_words_have_empty_entries() {
        let graph = graph_of(&["cat", "dog"], None);
        assert!(graph.contains("cat"));
        assert!(graph.contains("dog"));
        assert!(graph.neighbors("cat").is_empty());
        assert!(graph.neighbors("dog").is_empty());
    }

    #[test]
    fn unknown_words_have_no_neighbors() {
        let graph = graph_of(&["cat", "bat"], None);
        assert!(!graph.contains("zzz"));
        assert!(graph.neighbors("zzz").is_empty());
    }

    #[test]
    fn single_letter_words_are_adjacent() {
        let graph = graph_of(&["a", "b", "c"], None);
        assert_eq!(neighbor_texts(&graph, "a"), vec!["b", "c"]);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn banned_words_are_removed() {
        let policy = ExclusionPolicy::new([Word::new("hat").unwrap()], Vec::new());
        let graph = graph_of(&["cat", "bat", "hat", "hot"], Some(&policy));

        assert!(!graph.contains("hat"));
        assert_eq!(graph.word_count(), 3);
        assert_eq!(neighbor_texts(&graph, "cat"), vec!["bat"]);
        assert!(graph.neighbors("hot").is_empty());
        // Length comes from the dictionary, not the filtered set
        assert_eq!(graph.word_length(), Some(3));
    }

    #[test]
    fn banned_letter_blocks_substitutions_into_it() {
        let policy = ExclusionPolicy::new(Vec::new(), *b"o");
        let graph = graph_of(&["hot", "hat", "cat"], Some(&policy));

        // hat -> hot would put an 'o' in, so it is gone
        assert!(!graph.is_adjacent("hat", "hot"));
        // hot -> hat substitutes 'a', which is allowed
        assert!(graph.is_adjacent("hot", "hat"));
        assert!(graph.is_adjacent("cat", "hat"));
        assert!(graph.is_adjacent("hat", "cat"));
        // hot-hat is one-way but still one edge
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn banned_letters_respected_on_every_edge() {
        let policy = ExclusionPolicy::new(Vec::new(), *b"aeo");
        let graph = graph_of(&["cat", "cot", "cut", "hut", "hot", "hat", "bet", "bit"], Some(&policy));

        for word in graph.words() {
            for neighbor in graph.neighbors(word.text()) {
                let position = word.differing_position(neighbor).unwrap();
                assert!(!policy.bans_letter(neighbor.bytes()[position]));
            }
        }
    }

    #[test]
    fn sorted_words_are_ordered() {
        let graph = graph_of(&["hot", "cat", "dot"], None);
        let words: Vec<&str> = graph.sorted_words().into_iter().map(Word::text).collect();
        assert_eq!(words, vec!["cat", "dot", "hot"]);
    }
}
