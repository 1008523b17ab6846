//! A single game between two teams

use crate::error::{LeagueError, Result};
use crate::types::{GameId, GameOutcome, Score, TeamId};
use crate::utils::{current_timestamp, generate_game_id};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A pairing of two distinct teams and, once set, its final score
///
/// The score can be set exactly once. Until then the game has no winner,
/// no loser and no outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameRecord")]
pub struct Game {
    id: GameId,
    home: TeamId,
    away: TeamId,
    score: Option<Score>,
    played_at: DateTime<Utc>,
}

/// Wire shape of a `Game`, checked before it becomes one
#[derive(Deserialize)]
struct GameRecord {
    id: GameId,
    home: TeamId,
    away: TeamId,
    score: Option<Score>,
    played_at: DateTime<Utc>,
}

impl TryFrom<GameRecord> for Game {
    type Error = LeagueError;

    fn try_from(record: GameRecord) -> std::result::Result<Self, Self::Error> {
        check_pairing(&record.home, &record.away)?;

        Ok(Self {
            id: record.id,
            home: record.home,
            away: record.away,
            score: record.score,
            played_at: record.played_at,
        })
    }
}

fn check_pairing(home: &str, away: &str) -> std::result::Result<(), LeagueError> {
    if home.trim().is_empty() || away.trim().is_empty() {
        return Err(LeagueError::EmptyName);
    }
    if home == away {
        return Err(LeagueError::SameTeam {
            team: home.to_string(),
        });
    }
    Ok(())
}

impl Game {
    /// Create an unscored game between two distinct teams
    pub fn new(home: impl Into<String>, away: impl Into<String>) -> Result<Self> {
        let home = home.into();
        let away = away.into();
        check_pairing(&home, &away)?;

        Ok(Self {
            id: generate_game_id(),
            home,
            away,
            score: None,
            played_at: current_timestamp(),
        })
    }

    /// Override the kickoff timestamp
    pub fn with_played_at(mut self, played_at: DateTime<Utc>) -> Self {
        self.played_at = played_at;
        self
    }

    /// Set the final score
    ///
    /// Negative scores are rejected, as is any attempt to change a score
    /// that was already set.
    pub fn set_score(&mut self, home: i32, away: i32) -> Result<()> {
        if self.score.is_some() {
            return Err(LeagueError::ScoreAlreadySet {
                game_id: self.id.to_string(),
            }
            .into());
        }
        if home < 0 || away < 0 {
            return Err(LeagueError::InvalidScore { home, away }.into());
        }

        self.score = Some(Score {
            home: home as u32,
            away: away as u32,
        });
        Ok(())
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    pub fn home_team(&self) -> &TeamId {
        &self.home
    }

    pub fn away_team(&self) -> &TeamId {
        &self.away
    }

    pub fn score(&self) -> Option<Score> {
        self.score
    }

    pub fn played_at(&self) -> DateTime<Utc> {
        self.played_at
    }

    pub fn is_complete(&self) -> bool {
        self.score.is_some()
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.score.map(|s| s.outcome())
    }

    pub fn is_tie(&self) -> bool {
        self.outcome() == Some(GameOutcome::Tie)
    }

    /// Team with the higher score; `None` for a tie or an unscored game
    pub fn winner(&self) -> Option<&TeamId> {
        match self.outcome()? {
            GameOutcome::HomeWin => Some(&self.home),
            GameOutcome::AwayWin => Some(&self.away),
            GameOutcome::Tie => None,
        }
    }

    /// Team with the lower score; `None` for a tie or an unscored game
    pub fn loser(&self) -> Option<&TeamId> {
        match self.outcome()? {
            GameOutcome::HomeWin => Some(&self.away),
            GameOutcome::AwayWin => Some(&self.home),
            GameOutcome::Tie => None,
        }
    }

    pub fn involves(&self, team: &str) -> bool {
        self.home == team || self.away == team
    }
}
