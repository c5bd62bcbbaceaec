//! Random round setup
//!
//! Randomness lives here, outside the graph and search core. Callers pass in
//! the RNG so rounds can be replayed from a seed.

use super::GameError;
use crate::config::{BANNED_LETTER_COUNT, BANNED_WORD_COUNT, MAX_PAIR_ATTEMPTS};
use crate::core::{ALPHABET, Dictionary, ExclusionPolicy, Word};
use crate::search::PathFinder;
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::debug;

/// Draw a challenge-round exclusion policy
///
/// Bans up to five dictionary words and three letters of the alphabet.
pub fn sample_policy<R: Rng + ?Sized>(dictionary: &Dictionary, rng: &mut R) -> ExclusionPolicy {
    let words = dictionary.sorted();
    let banned_words: Vec<Word> = words
        .choose_multiple(rng, BANNED_WORD_COUNT)
        .map(|&word| word.clone())
        .collect();
    let banned_letters: Vec<u8> = ALPHABET
        .choose_multiple(rng, BANNED_LETTER_COUNT)
        .copied()
        .collect();

    ExclusionPolicy::new(banned_words, banned_letters)
}

/// Draw start and target pairs until one is distinct and reachable
///
/// Only candidates with at least one neighbor take part. Both words are
/// redrawn on every attempt, so one unlucky start cannot sink the round.
///
/// # Errors
/// - `GameError::NotEnoughWords` with fewer than two connected candidates
/// - `GameError::NoSolvablePair` when every attempt fails
pub fn sample_pair<R: Rng + ?Sized>(
    finder: &PathFinder<'_>,
    candidates: &[&Word],
    rng: &mut R,
) -> Result<(Word, Word), GameError> {
    let graph = finder.graph();
    let connected: Vec<&Word> = candidates
        .iter()
        .copied()
        .filter(|word| !graph.neighbors(word.text()).is_empty())
        .collect();

    if connected.len() < 2 {
        return Err(GameError::NotEnoughWords {
            available: connected.len(),
        });
    }

    for attempt in 1..=MAX_PAIR_ATTEMPTS {
        let (Some(&start), Some(&target)) = (connected.choose(rng), connected.choose(rng)) else {
            break;
        };
        if start != target && finder.exists_path(start, target)? {
            debug!(%start, %target, attempt, "sampled word pair");
            return Ok((start.clone(), target.clone()));
        }
    }

    Err(GameError::NoSolvablePair {
        attempts: MAX_PAIR_ATTEMPTS,
    })
}
