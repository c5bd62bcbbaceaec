//! A single player's (or pair of players') running game
//!
//! Owns the dictionaries, the active exclusion policy and the graph built
//! from them. Rebuilding the graph and searching it never overlap: both go
//! through `&mut self` / `&self` on the session.

use super::sampling::{sample_pair, sample_policy};
use super::scoreboard::{Player, Scoreboard};
use crate::config::{MOVE_PENALTY, STARTING_SCORE, Tier, TierConfig};
use crate::core::{Dictionary, ExclusionPolicy, Word, WordError};
use crate::graph::WordGraph;
use crate::search::{PathFinder, SearchError, SearchResult, SearchStrategy};
use crate::wordlists::Dictionaries;
use rand::Rng;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, info};

/// Errors setting up a round
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Not enough valid words available ({available})")]
    NotEnoughWords { available: usize },
    #[error("Could not find a solvable word pair after {attempts} attempts")]
    NoSolvablePair { attempts: usize },
    #[error("Words must be the same length")]
    LengthMismatch,
    #[error("'{word}' is not in the {tier} dictionary")]
    UnknownWord { word: String, tier: Tier },
    #[error("No valid path exists between '{start}' and '{target}'")]
    Unreachable { start: String, target: String },
    #[error("Invalid word: {0}")]
    InvalidWord(#[from] WordError),
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Reasons a move is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("Enter a word")]
    Empty,
    #[error("'{0}' is not a valid word")]
    InvalidWord(String),
    #[error("'{0}' is not in the dictionary")]
    NotInDictionary(String),
    #[error("'{0}' is banned this round")]
    Banned(String),
    #[error("'{word}' must differ from '{current}' in exactly one letter")]
    NotOneLetter { word: String, current: String },
    #[error("The letter '{0}' is restricted this round")]
    RestrictedLetter(char),
    #[error("This round is over; start a new game")]
    RoundOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Result of an accepted move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Continue { moves_left: usize },
    /// `player` is set in two-player mode
    Won { score: i32, player: Option<Player> },
    OutOfMoves,
}

pub struct GameSession {
    dictionaries: Dictionaries,
    tier: Tier,
    policy: ExclusionPolicy,
    graph: WordGraph,
    start: Word,
    current: Word,
    target: Word,
    moves: Vec<Word>,
    score: i32,
    status: GameStatus,
    scoreboard: Option<Scoreboard>,
}

impl GameSession {
    /// Build the tier's graph and start the first round
    ///
    /// # Errors
    /// Returns `GameError` if no solvable start/target pair can be drawn.
    pub fn new<R: Rng + ?Sized>(
        dictionaries: Dictionaries,
        tier: Tier,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let (policy, graph, (current, target)) = prepare_tier(dictionaries.get(tier), tier, rng)?;

        info!(%tier, %current, %target, "game started");

        Ok(Self {
            dictionaries,
            tier,
            policy,
            graph,
            start: current.clone(),
            current,
            target,
            moves: Vec::new(),
            score: STARTING_SCORE,
            status: GameStatus::InProgress,
            scoreboard: None,
        })
    }

    /// Start a new round on the current graph
    ///
    /// Leaves the session untouched on error.
    ///
    /// # Errors
    /// Returns `GameError` if no solvable start/target pair can be drawn.
    pub fn new_game<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        let finder = PathFinder::new(&self.graph);
        let (current, target) = sample_pair(&finder, &usable_words(self.dictionary(), &self.policy), rng)?;

        info!(tier = %self.tier, %current, %target, "game started");
        self.start_round(current, target);
        Ok(())
    }

    /// Switch tiers: draw a fresh policy, rebuild the graph, start a round
    ///
    /// Leaves the session untouched on error.
    ///
    /// # Errors
    /// Returns `GameError` if no solvable pair exists in the new tier.
    pub fn change_tier<R: Rng + ?Sized>(&mut self, tier: Tier, rng: &mut R) -> Result<(), GameError> {
        let (policy, graph, (current, target)) = prepare_tier(self.dictionaries.get(tier), tier, rng)?;

        info!(%tier, %current, %target, "tier changed");
        self.tier = tier;
        self.policy = policy;
        self.graph = graph;
        self.start_round(current, target);
        Ok(())
    }

    /// Replace the exclusion policy and rebuild the graph
    ///
    /// The current round keeps its words; call `new_game` to draw new ones.
    pub fn apply_policy(&mut self, policy: ExclusionPolicy) {
        let start = Instant::now();
        self.graph = WordGraph::build(self.dictionaries.get(self.tier), Some(&policy));
        self.policy = policy;
        crate::trace_time!(start, "graph rebuilt", words = self.graph.word_count());
    }

    /// Play a custom start/target pair
    ///
    /// # Errors
    /// Both words must be valid, the same length, in the tier dictionary and
    /// connected in the current graph.
    pub fn set_custom_pair(&mut self, start: &str, target: &str) -> Result<(), GameError> {
        let start = Word::new(start)?;
        let target = Word::new(target)?;

        if start.len() != target.len() {
            return Err(GameError::LengthMismatch);
        }

        for word in [&start, &target] {
            if !self.dictionary().contains(word.text()) {
                return Err(GameError::UnknownWord {
                    word: word.text().to_string(),
                    tier: self.tier,
                });
            }
        }

        if !self.finder().exists_path(&start, &target)? {
            return Err(GameError::Unreachable {
                start: start.text().to_string(),
                target: target.text().to_string(),
            });
        }

        debug!(%start, %target, "custom ladder");
        self.start_round(start, target);
        Ok(())
    }

    /// Validate and play a move
    ///
    /// # Errors
    /// Returns `MoveError` describing the broken rule; the round is unchanged.
    pub fn make_move(&mut self, input: &str) -> Result<MoveOutcome, MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::RoundOver);
        }

        let word = self.validate_move(input)?;

        self.moves.push(word.clone());
        self.current = word;
        self.score -= MOVE_PENALTY;

        if self.current == self.target {
            self.status = GameStatus::Won;
            let player = self
                .scoreboard
                .as_mut()
                .map(|board| board.record_win(self.score));
            info!(score = self.score, moves = self.moves.len(), "round won");
            return Ok(MoveOutcome::Won {
                score: self.score,
                player,
            });
        }

        if self.moves.len() >= self.config().max_moves {
            self.status = GameStatus::Lost;
            if let Some(board) = self.scoreboard.as_mut() {
                board.pass_turn();
            }
            info!(target = %self.target, "out of moves");
            return Ok(MoveOutcome::OutOfMoves);
        }

        Ok(MoveOutcome::Continue {
            moves_left: self.moves_left(),
        })
    }

    fn validate_move(&self, input: &str) -> Result<Word, MoveError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(MoveError::Empty);
        }

        let word = Word::new(input).map_err(|_| MoveError::InvalidWord(input.to_string()))?;

        if !self.dictionary().contains(word.text()) {
            return Err(MoveError::NotInDictionary(word.text().to_string()));
        }

        if self.policy.bans_word(word.text()) {
            return Err(MoveError::Banned(word.text().to_string()));
        }

        let Some(position) = self.current.differing_position(&word) else {
            return Err(MoveError::NotOneLetter {
                word: word.text().to_string(),
                current: self.current.text().to_string(),
            });
        };

        let letter = word.bytes()[position];
        if self.policy.bans_letter(letter) {
            return Err(MoveError::RestrictedLetter(char::from(letter)));
        }

        Ok(word)
    }

    /// Suggested next word from the current word towards the target
    ///
    /// # Errors
    /// Propagates `SearchError`; cannot occur for words drawn from the tier.
    pub fn hint(&self, strategy: SearchStrategy) -> Result<Option<Word>, SearchError> {
        self.finder().next_step(&self.current, &self.target, strategy)
    }

    /// Shortest path from the current word to the target
    ///
    /// # Errors
    /// Propagates `SearchError`; cannot occur for words drawn from the tier.
    pub fn solve(&self, strategy: SearchStrategy) -> Result<Option<SearchResult>, SearchError> {
        self.finder().find_path(&self.current, &self.target, strategy)
    }

    /// Turn two-player mode on or off; turning it on resets both scores
    pub fn set_two_player(&mut self, enabled: bool) {
        self.scoreboard = enabled.then(Scoreboard::default);
    }

    fn start_round(&mut self, current: Word, target: Word) {
        self.start = current.clone();
        self.current = current;
        self.target = target;
        self.moves.clear();
        self.score = STARTING_SCORE;
        self.status = GameStatus::InProgress;
    }

    #[must_use]
    pub const fn finder(&self) -> PathFinder<'_> {
        PathFinder::new(&self.graph)
    }

    #[must_use]
    pub const fn tier(&self) -> Tier {
        self.tier
    }

    #[must_use]
    pub const fn config(&self) -> TierConfig {
        self.tier.config()
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        self.dictionaries.get(self.tier)
    }

    #[must_use]
    pub const fn policy(&self) -> &ExclusionPolicy {
        &self.policy
    }

    #[must_use]
    pub const fn graph(&self) -> &WordGraph {
        &self.graph
    }

    /// First word of the round
    #[must_use]
    pub const fn start(&self) -> &Word {
        &self.start
    }

    #[must_use]
    pub const fn current(&self) -> &Word {
        &self.current
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn moves(&self) -> &[Word] {
        &self.moves
    }

    #[must_use]
    pub fn moves_left(&self) -> usize {
        self.config().max_moves.saturating_sub(self.moves.len())
    }

    #[must_use]
    pub const fn score(&self) -> i32 {
        self.score
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn scoreboard(&self) -> Option<&Scoreboard> {
        self.scoreboard.as_ref()
    }
}

/// Draw the tier's policy, build its graph and sample a first pair
fn prepare_tier<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    tier: Tier,
    rng: &mut R,
) -> Result<(ExclusionPolicy, WordGraph, (Word, Word)), GameError> {
    let policy = draw_policy(dictionary, tier, rng);

    let start = Instant::now();
    let graph = WordGraph::build(dictionary, Some(&policy));
    crate::trace_time!(start, "graph built", words = graph.word_count());

    let pair = sample_pair(&PathFinder::new(&graph), &usable_words(dictionary, &policy), rng)?;
    Ok((policy, graph, pair))
}

/// Challenge tiers draw a random policy; the others use none
fn draw_policy<R: Rng + ?Sized>(dictionary: &Dictionary, tier: Tier, rng: &mut R) -> ExclusionPolicy {
    if tier.config().obstacles {
        let policy = sample_policy(dictionary, rng);
        debug!(
            banned_words = ?policy.banned_words().map(Word::text).collect::<Vec<_>>(),
            banned_letters = %policy.banned_letters().collect::<String>(),
            "challenge policy drawn"
        );
        policy
    } else {
        ExclusionPolicy::default()
    }
}

/// Dictionary words minus banned words, sorted for reproducible sampling
fn usable_words<'a>(dictionary: &'a Dictionary, policy: &ExclusionPolicy) -> Vec<&'a Word> {
    dictionary
        .sorted()
        .into_iter()
        .filter(|word| !policy.bans_word(word.text()))
        .collect()
}
