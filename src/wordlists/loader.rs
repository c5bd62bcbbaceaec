//! Dictionary loading utilities
//!
//! Reads the sectioned dictionary format: comment lines (`#`) naming a word
//! length such as `# 3-letter words` open a section, and every following
//! whitespace-separated word belongs to it. Other comments and blank lines are
//! ignored.

use super::embedded_words;
use crate::config::Tier;
use crate::core::{Dictionary, DictionaryError, Word};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Error type for loading dictionaries
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read dictionary file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
}

/// One dictionary per difficulty tier
#[derive(Debug, Clone, Default)]
pub struct Dictionaries {
    beginner: Dictionary,
    advanced: Dictionary,
    challenge: Dictionary,
}

impl Dictionaries {
    /// Dictionaries compiled into the binary
    ///
    /// # Errors
    /// Returns `DictionaryError` only if the embedded lists are malformed.
    ///
    /// # Examples
    /// ```
    /// use word_ladder::config::Tier;
    /// use word_ladder::wordlists::Dictionaries;
    ///
    /// let dictionaries = Dictionaries::embedded().unwrap();
    /// assert_eq!(dictionaries.get(Tier::Beginner).word_length(), Some(3));
    /// ```
    pub fn embedded() -> Result<Self, DictionaryError> {
        let mut dictionaries = Self::default();
        for tier in Tier::ALL {
            *dictionaries.get_mut(tier) = Dictionary::from_strs(embedded_words(tier))?;
        }
        Ok(dictionaries)
    }

    /// Dictionary for a tier
    #[must_use]
    pub const fn get(&self, tier: Tier) -> &Dictionary {
        match tier {
            Tier::Beginner => &self.beginner,
            Tier::Advanced => &self.advanced,
            Tier::Challenge => &self.challenge,
        }
    }

    fn get_mut(&mut self, tier: Tier) -> &mut Dictionary {
        match tier {
            Tier::Beginner => &mut self.beginner,
            Tier::Advanced => &mut self.advanced,
            Tier::Challenge => &mut self.challenge,
        }
    }
}

/// Parse sectioned dictionary text
///
/// Tiers whose section is missing or empty fall back to the embedded list.
/// Invalid words and words of the wrong length for their section are skipped.
///
/// # Errors
/// Returns `DictionaryError` if a fallback list is malformed.
///
/// # Examples
/// ```
/// use word_ladder::config::Tier;
/// use word_ladder::wordlists::loader::parse_sections;
///
/// let text = "# 3-letter words\ncat cot\ncog dog\n";
/// let dictionaries = parse_sections(text).unwrap();
/// assert_eq!(dictionaries.get(Tier::Beginner).len(), 4);
/// ```
pub fn parse_sections(text: &str) -> Result<Dictionaries, DictionaryError> {
    let mut sections: Vec<(Tier, Vec<Word>)> = Tier::ALL.iter().map(|&t| (t, Vec::new())).collect();
    let mut current: Option<usize> = None;
    let mut skipped = 0;

    for line in text.lines() {
        let line = line.trim().to_lowercase();

        if line.starts_with('#') {
            if let Some(index) = Tier::ALL
                .iter()
                .position(|tier| line.contains(&tier.section_marker()))
            {
                current = Some(index);
            }
            continue;
        }

        let Some(index) = current else {
            continue;
        };
        let length = sections[index].0.config().word_length;

        for token in line.split_whitespace() {
            match Word::new(token) {
                Ok(word) if word.len() == length => sections[index].1.push(word),
                _ => skipped += 1,
            }
        }
    }

    if skipped > 0 {
        warn!(skipped, "skipped invalid dictionary entries");
    }

    let mut dictionaries = Dictionaries::default();
    for (tier, words) in sections {
        let dictionary = if words.is_empty() {
            debug!(%tier, "section missing, using embedded words");
            Dictionary::from_strs(embedded_words(tier))?
        } else {
            Dictionary::new(words)?
        };
        *dictionaries.get_mut(tier) = dictionary;
    }

    Ok(dictionaries)
}

/// Load dictionaries from a file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionaries, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let dictionaries = parse_sections(&content)?;
    debug!(
        path = %path.display(),
        beginner = dictionaries.get(Tier::Beginner).len(),
        challenge = dictionaries.get(Tier::Challenge).len(),
        advanced = dictionaries.get(Tier::Advanced).len(),
        "dictionaries loaded"
    );

    Ok(dictionaries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{ADVANCED, BEGINNER, CHALLENGE};

    #[test]
    fn embedded_dictionaries_load() {
        let dictionaries = Dictionaries::embedded().unwrap();

        assert_eq!(dictionaries.get(Tier::Beginner).len(), BEGINNER.len());
        assert_eq!(dictionaries.get(Tier::Challenge).len(), CHALLENGE.len());
        assert_eq!(dictionaries.get(Tier::Advanced).len(), ADVANCED.len());
        assert_eq!(dictionaries.get(Tier::Challenge).word_length(), Some(4));
    }

    #[test]
    fn parse_sections_splits_by_header() {
        let text = "\
# Words
# 3-letter words
cat bat
# a note inside the section
hat
# 4-letter words
cold
CORD

# 5-letter words
stone store
";
        let dictionaries = parse_sections(text).unwrap();

        let beginner = dictionaries.get(Tier::Beginner);
        assert_eq!(beginner.len(), 3);
        assert!(beginner.contains("hat"));

        let challenge = dictionaries.get(Tier::Challenge);
        assert_eq!(challenge.len(), 2);
        assert!(challenge.contains("cord"));

        assert_eq!(dictionaries.get(Tier::Advanced).len(), 2);
    }

    #[test]
    fn parse_sections_skips_invalid_entries() {
        let text = "# 3-letter\ncat c4t cart ca\ndog\n";
        let dictionaries = parse_sections(text).unwrap();

        let beginner = dictionaries.get(Tier::Beginner);
        assert_eq!(beginner.len(), 2);
        assert!(beginner.contains("cat"));
        assert!(beginner.contains("dog"));
    }

    #[test]
    fn words_before_any_section_are_ignored() {
        let text = "cat dog\n# 3-letter\nhat\n";
        let dictionaries = parse_sections(text).unwrap();
        assert_eq!(dictionaries.get(Tier::Beginner).len(), 1);
    }

    #[test]
    fn missing_sections_fall_back_to_embedded() {
        let dictionaries = parse_sections("# 3-letter\ncat\n").unwrap();

        assert_eq!(dictionaries.get(Tier::Beginner).len(), 1);
        assert_eq!(dictionaries.get(Tier::Advanced).len(), ADVANCED.len());
        assert_eq!(dictionaries.get(Tier::Challenge).len(), CHALLENGE.len());
    }

    #[test]
    fn load_missing_file_errors() {
        let result = load_from_file("definitely/not/here.txt");
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }
}
