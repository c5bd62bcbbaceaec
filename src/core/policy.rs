//! Exclusion policy for restrictive game variants
//!
//! A policy narrows which words may appear in a graph and which letters may be
//! substituted in. The core only consumes policies; sampling them is left to
//! the game layer.

use super::{ALPHABET, Word};
use std::collections::BTreeSet;

/// Banned words and banned substitution letters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionPolicy {
    banned_words: BTreeSet<Word>,
    banned_letters: BTreeSet<u8>,
}

impl ExclusionPolicy {
    /// Create a policy from already-resolved banned words and letters
    ///
    /// Letters are lowercased; anything outside a-z is ignored.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::core::{ExclusionPolicy, Word};
    ///
    /// let policy = ExclusionPolicy::new([Word::new("hat").unwrap()], *b"oz");
    /// assert!(policy.bans_word("hat"));
    /// assert!(policy.bans_letter(b'o'));
    /// assert_eq!(policy.allowed_letters().len(), 24);
    /// ```
    pub fn new(
        banned_words: impl IntoIterator<Item = Word>,
        banned_letters: impl IntoIterator<Item = u8>,
    ) -> Self {
        Self {
            banned_words: banned_words.into_iter().collect(),
            banned_letters: banned_letters
                .into_iter()
                .map(|letter| letter.to_ascii_lowercase())
                .filter(u8::is_ascii_lowercase)
                .collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn bans_word(&self, text: &str) -> bool {
        self.banned_words.contains(text)
    }

    #[inline]
    #[must_use]
    pub fn bans_letter(&self, letter: u8) -> bool {
        self.banned_letters.contains(&letter)
    }

    /// The alphabet minus banned letters, in order
    #[must_use]
    pub fn allowed_letters(&self) -> Vec<u8> {
        ALPHABET
            .iter()
            .copied()
            .filter(|letter| !self.bans_letter(*letter))
            .collect()
    }

    /// True when the policy bans nothing
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.banned_words.is_empty() && self.banned_letters.is_empty()
    }

    pub fn banned_words(&self) -> impl Iterator<Item = &Word> {
        self.banned_words.iter()
    }

    pub fn banned_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.banned_letters.iter().map(|&letter| char::from(letter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_empty() {
        let policy = ExclusionPolicy::default();
        assert!(policy.is_empty());
        assert_eq!(policy.allowed_letters(), ALPHABET.to_vec());
    }

    #[test]
    fn letters_are_normalized() {
        let policy = ExclusionPolicy::new(Vec::new(), *b"O1z");
        assert!(policy.bans_letter(b'o'));
        assert!(policy.bans_letter(b'z'));
        assert!(!policy.bans_letter(b'1'));
        assert_eq!(policy.banned_letters().collect::<String>(), "oz");
    }

    #[test]
    fn allowed_letters_skip_banned() {
        let policy = ExclusionPolicy::new(Vec::new(), *b"abc");
        let allowed = policy.allowed_letters();
        assert_eq!(allowed.len(), 23);
        assert_eq!(allowed[0], b'd');
    }

    #[test]
    fn banned_words_sorted() {
        let policy = ExclusionPolicy::new(
            [Word::new("worm").unwrap(), Word::new("cold").unwrap()],
            Vec::new(),
        );
        let words: Vec<&str> = policy.banned_words().map(Word::text).collect();
        assert_eq!(words, vec!["cold", "worm"]);
        assert!(!policy.is_empty());
    }
}
