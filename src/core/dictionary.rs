//! Dictionaries of same-length words
//!
//! One dictionary exists per difficulty tier. Tiers are never mixed, so a
//! dictionary refuses words whose length differs from the first word added.

use super::{Word, WordError};
use rustc_hash::FxHashSet;
use thiserror::Error;

/// A set of unique words sharing a single length
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: FxHashSet<Word>,
    word_length: Option<usize>,
}

/// Error type for dictionary construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictionaryError {
    #[error("Word '{word}' has {found} letters, but the dictionary uses {expected}-letter words")]
    MixedLengths {
        word: String,
        expected: usize,
        found: usize,
    },
    #[error("Invalid dictionary word '{text}': {source}")]
    InvalidWord {
        text: String,
        #[source]
        source: WordError,
    },
}

impl Dictionary {
    /// Build a dictionary from words
    ///
    /// Duplicates collapse into a single entry.
    ///
    /// # Errors
    /// Returns `DictionaryError::MixedLengths` if the words do not all share one length.
    pub fn new(words: impl IntoIterator<Item = Word>) -> Result<Self, DictionaryError> {
        let mut dictionary = Self::default();
        for word in words {
            dictionary.insert(word)?;
        }
        Ok(dictionary)
    }

    /// Build a dictionary from raw strings
    ///
    /// # Errors
    /// Returns `DictionaryError::InvalidWord` for a string that is not a valid word,
    /// or `DictionaryError::MixedLengths` if lengths differ.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::Dictionary;
    ///
    /// let dictionary = Dictionary::from_strs(&["cat", "bat", "hat"]).unwrap();
    /// assert_eq!(dictionary.len(), 3);
    /// assert_eq!(dictionary.word_length(), Some(3));
    ///
    /// assert!(Dictionary::from_strs(&["cat", "cart"]).is_err());
    /// ```
    pub fn from_strs<S: AsRef<str>>(texts: &[S]) -> Result<Self, DictionaryError> {
        let words = texts
            .iter()
            .map(|text| {
                Word::new(text).map_err(|source| DictionaryError::InvalidWord {
                    text: text.as_ref().to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(words)
    }

    fn insert(&mut self, word: Word) -> Result<(), DictionaryError> {
        match self.word_length {
            Some(expected) if expected != word.len() => {
                return Err(DictionaryError::MixedLengths {
                    found: word.len(),
                    word: word.text().to_string(),
                    expected,
                });
            }
            Some(_) => {}
            None => self.word_length = Some(word.len()),
        }

        self.words.insert(word);
        Ok(())
    }

    /// Length shared by every word, or `None` for an empty dictionary
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> Option<usize> {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.words.contains(text)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    /// Words in lexicographic order
    #[must_use]
    pub fn sorted(&self) -> Vec<&Word> {
        let mut words: Vec<&Word> = self.words.iter().collect();
        words.sort_unstable();
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dictionary_from_strs() {
        let dictionary = Dictionary::from_strs(&["cat", "bat", "hat"]).unwrap();
        assert_eq!(dictionary.len(), 3);
        assert!(dictionary.contains("bat"));
        assert!(!dictionary.contains("dog"));
    }

    #[test]
    fn dictionary_duplicates_collapse() {
        let dictionary = Dictionary::from_strs(&["cat", "CAT", "cat"]).unwrap();
        assert_eq!(dictionary.len(), 1);
    }

    #[test]
    fn dictionary_rejects_mixed_lengths() {
        let result = Dictionary::from_strs(&["cat", "cart"]);
        assert_eq!(
            result,
            Err(DictionaryError::MixedLengths {
                word: "cart".to_string(),
                expected: 3,
                found: 4,
            })
        );
    }

    #[test]
    fn dictionary_rejects_invalid_words() {
        let result = Dictionary::from_strs(&["cat", "c4t"]);
        assert!(matches!(
            result,
            Err(DictionaryError::InvalidWord { ref text, .. }) if text == "c4t"
        ));
    }

    #[test]
    fn empty_dictionary_has_no_length() {
        let dictionary = Dictionary::new(Vec::new()).unwrap();
        assert!(dictionary.is_empty());
        assert_eq!(dictionary.word_length(), None);
    }

    #[test]
    fn sorted_is_lexicographic() {
        let dictionary = Dictionary::from_strs(&["hot", "cat", "dot"]).unwrap();
        let sorted: Vec<&str> = dictionary.sorted().iter().map(|w| w.text()).collect();
        assert_eq!(sorted, vec!["cat", "dot", "hot"]);
    }
}
