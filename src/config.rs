//! Difficulty tiers and game constants

use std::fmt;

/// Points a player starts each round with
pub const STARTING_SCORE: i32 = 100;

/// Points deducted for every move
pub const MOVE_PENALTY: i32 = 5;

/// Random start/target draws before a new game gives up
pub const MAX_PAIR_ATTEMPTS: usize = 100;

/// Words banned per challenge round
pub const BANNED_WORD_COUNT: usize = 5;

/// Letters banned per challenge round
pub const BANNED_LETTER_COUNT: usize = 3;

/// Difficulty tier
///
/// Each tier has its own dictionary; tiers are never mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Tier {
    /// Three-letter words, 10 moves
    #[default]
    Beginner,
    /// Five-letter words, 15 moves
    Advanced,
    /// Four-letter words, 12 moves, banned words and letters
    Challenge,
}

/// Per-tier game parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierConfig {
    pub max_moves: usize,
    pub word_length: usize,
    /// Whether rounds draw an exclusion policy
    pub obstacles: bool,
}

impl Tier {
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Advanced, Self::Challenge];

    #[must_use]
    pub const fn config(self) -> TierConfig {
        match self {
            Self::Beginner => TierConfig {
                max_moves: 10,
                word_length: 3,
                obstacles: false,
            },
            Self::Advanced => TierConfig {
                max_moves: 15,
                word_length: 5,
                obstacles: false,
            },
            Self::Challenge => TierConfig {
                max_moves: 12,
                word_length: 4,
                obstacles: true,
            },
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Advanced => "Advanced",
            Self::Challenge => "Challenge",
        }
    }

    /// The tier whose words have this length
    #[must_use]
    pub fn for_word_length(length: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|tier| tier.config().word_length == length)
    }

    /// Dictionary file section marker, e.g. "3-letter"
    #[must_use]
    pub fn section_marker(self) -> String {
        format!("{}-letter", self.config().word_length)
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
