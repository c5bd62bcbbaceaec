//! Word ladder word representation
//!
//! A Word is a non-empty lowercase ASCII string; equality and adjacency are
//! purely positional.

use std::borrow::Borrow;
use std::fmt;
use thiserror::Error;

/// The 26-letter alphabet candidate substitutions are drawn from
pub const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// A validated, immutable puzzle word
///
/// Hashes and compares exactly like its text, so a `&str` can be used to look
/// a Word up in hash-based collections.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must not be empty")]
    Empty,
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The string is empty (after trimming)
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let word = Word::new("Cat").unwrap();
    /// assert_eq!(word.text(), "cat");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("c4t").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a validated word; provided for API symmetry with `len`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of positions at which the two words differ
    ///
    /// Both words must have the same length.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Word;
    ///
    /// let cold = Word::new("cold").unwrap();
    /// let warm = Word::new("warm").unwrap();
    /// assert_eq!(cold.hamming_distance(&warm), 3);
    /// ```
    #[must_use]
    pub fn hamming_distance(&self, other: &Self) -> usize {
        debug_assert_eq!(self.len(), other.len(), "Hamming distance needs equal lengths");
        self.bytes()
            .iter()
            .zip(other.bytes())
            .filter(|(a, b)| a != b)
            .count()
    }

    /// Position of the single differing letter, if the words differ in exactly one place
    ///
    /// Returns `None` for different lengths, identical words, or two or more differences.
    #[must_use]
    pub fn differing_position(&self, other: &Self) -> Option<usize> {
        if self.len() != other.len() {
            return None;
        }

        let mut differences = self
            .bytes()
            .iter()
            .zip(other.bytes())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(i, _)| i);

        match (differences.next(), differences.next()) {
            (Some(position), None) => Some(position),
            _ => None,
        }
    }

    /// Check whether the two words differ in exactly one position
    #[inline]
    #[must_use]
    pub fn is_adjacent_to(&self, other: &Self) -> bool {
        self.differing_position(other).is_some()
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.text
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("stone").unwrap();
        assert_eq!(word.text(), "stone");
        assert_eq!(word.bytes(), b"stone");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CAT").unwrap();
        assert_eq!(word.text(), "cat");

        let word2 = Word::new("  WoRd ").unwrap();
        assert_eq!(word2.text(), "word");
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
        assert_eq!(Word::new("   "), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("c4t"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("c t"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("ca-t"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("café"), Err(WordError::NonAscii));
    }

    #[test]
    fn hamming_distance_counts_positions() {
        let cat = Word::new("cat").unwrap();
        let hat = Word::new("hat").unwrap();
        let hot = Word::new("hot").unwrap();
        let dog = Word::new("dog").unwrap();

        assert_eq!(cat.hamming_distance(&cat), 0);
        assert_eq!(cat.hamming_distance(&hat), 1);
        assert_eq!(cat.hamming_distance(&hot), 2);
        assert_eq!(cat.hamming_distance(&dog), 3);
    }

    #[test]
    fn differing_position_single_change() {
        let cat = Word::new("cat").unwrap();
        let cot = Word::new("cot").unwrap();
        assert_eq!(cat.differing_position(&cot), Some(1));
        assert!(cat.is_adjacent_to(&cot));
    }

    #[test]
    fn differing_position_rejects_other_cases() {
        let cat = Word::new("cat").unwrap();
        let dog = Word::new("dog").unwrap();
        let cart = Word::new("cart").unwrap();

        assert_eq!(cat.differing_position(&cat), None);
        assert_eq!(cat.differing_position(&dog), None);
        assert_eq!(cat.differing_position(&cart), None);
        assert!(!cat.is_adjacent_to(&cart));
    }

    #[test]
    fn word_lookup_by_str() {
        let mut set = FxHashSet::default();
        set.insert(Word::new("cold").unwrap());

        assert!(set.contains("cold"));
        assert!(!set.contains("warm"));
    }

    #[test]
    fn word_display() {
        let word = Word::new("ladder").unwrap();
        assert_eq!(format!("{word}"), "ladder");
    }

    #[test]
    fn word_equality_case_insensitive() {
        let word1 = Word::new("cold").unwrap();
        let word2 = Word::new("COLD").unwrap();
        let word3 = Word::new("cord").unwrap();

        assert_eq!(word1, word2);
        assert_ne!(word1, word3);
    }
}
