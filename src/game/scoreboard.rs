//! Two-player score keeping

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Player {
    #[default]
    One,
    Two,
}

impl Player {
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => f.write_str("Player 1"),
            Self::Two => f.write_str("Player 2"),
        }
    }
}

/// Running totals for two players taking turns
///
/// The turn passes after every finished round, won or lost.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scoreboard {
    scores: [i32; 2],
    current: Player,
}

impl Scoreboard {
    #[must_use]
    pub const fn current(&self) -> Player {
        self.current
    }

    #[must_use]
    pub const fn score(&self, player: Player) -> i32 {
        self.scores[player.index()]
    }

    /// Credit the current player with a round score and pass the turn
    ///
    /// Returns the player who won.
    pub fn record_win(&mut self, round_score: i32) -> Player {
        let winner = self.current;
        self.scores[winner.index()] += round_score;
        self.pass_turn();
        winner
    }

    pub fn pass_turn(&mut self) {
        self.current = self.current.other();
    }
}
