//! Common types used throughout the rivalry ledger

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for teams (the team name)
pub type TeamId = String;

/// Unique identifier for coaches (the coach name)
pub type CoachId = String;

/// Unique identifier for players (the player name)
pub type PlayerId = String;

/// Unique identifier for games
pub type GameId = Uuid;

/// Final score of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

/// Result of a scored game from the home team's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    HomeWin,
    AwayWin,
    Tie,
}

impl Score {
    /// Derive the outcome of this score
    pub fn outcome(&self) -> GameOutcome {
        match self.home.cmp(&self.away) {
            std::cmp::Ordering::Greater => GameOutcome::HomeWin,
            std::cmp::Ordering::Less => GameOutcome::AwayWin,
            std::cmp::Ordering::Equal => GameOutcome::Tie,
        }
    }

    /// Absolute point margin
    pub fn margin(&self) -> u32 {
        self.home.abs_diff(self.away)
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::HomeWin => write!(f, "HomeWin"),
            GameOutcome::AwayWin => write!(f, "AwayWin"),
            GameOutcome::Tie => write!(f, "Tie"),
        }
    }
}
