//! Game rules layered over the graph and search core
//!
//! Tiers, scoring, move validation and the random choice of start/target
//! pairs and challenge obstacles.

pub mod sampling;
mod scoreboard;
mod session;

pub use sampling::{sample_pair, sample_policy};
pub use scoreboard::{Player, Scoreboard};
pub use session::{GameError, GameSession, GameStatus, MoveError, MoveOutcome};
