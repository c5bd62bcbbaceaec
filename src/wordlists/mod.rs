//! Word lists for each difficulty tier
//!
//! Provides dictionaries compiled into the binary for zero-cost access, plus a
//! loader for the same sectioned format at runtime.

pub mod loader;

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/dictionary.rs"));

pub use loader::Dictionaries;

use crate::config::Tier;

/// Embedded word list for a tier
#[must_use]
pub const fn embedded_words(tier: Tier) -> &'static [&'static str] {
    match tier {
        Tier::Beginner => BEGINNER,
        Tier::Advanced => ADVANCED,
        Tier::Challenge => CHALLENGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_match_consts() {
        assert_eq!(BEGINNER.len(), BEGINNER_COUNT);
        assert_eq!(CHALLENGE.len(), CHALLENGE_COUNT);
        assert_eq!(ADVANCED.len(), ADVANCED_COUNT);
    }

    #[test]
    fn embedded_words_match_tier_length() {
        for tier in Tier::ALL {
            let length = tier.config().word_length;
            let words = embedded_words(tier);
            assert!(!words.is_empty(), "{tier} list is empty");
            for &word in words {
                assert_eq!(word.len(), length, "Word '{word}' does not fit {tier}");
                assert!(
                    word.chars().all(|c| c.is_ascii_lowercase()),
                    "Word '{word}' contains non-lowercase chars"
                );
            }
        }
    }

    #[test]
    fn default_ladders_present() {
        for word in ["cat", "bat", "hat", "hot", "dot", "dog", "bog", "big", "bag", "tag"] {
            assert!(BEGINNER.contains(&word), "{word}");
        }
        for word in ["word", "ward", "warm", "worm", "worn", "corn", "coin", "cold", "bold", "hold"] {
            assert!(CHALLENGE.contains(&word), "{word}");
        }
        for word in ["stone", "store", "score", "scare", "spare", "spade", "shade", "shake", "shale", "scale"] {
            assert!(ADVANCED.contains(&word), "{word}");
        }
    }

    #[test]
    fn embedded_lists_form_one_ladder() {
        use crate::core::Dictionary;
        use crate::graph::WordGraph;

        for tier in Tier::ALL {
            let words = embedded_words(tier);
            let graph = WordGraph::build(&Dictionary::from_strs(words).unwrap(), None);
            let summary = graph.summary();
            assert_eq!(summary.components, 1, "{tier}");
            assert_eq!(summary.isolated_words, 0, "{tier}");
        }
    }
}
