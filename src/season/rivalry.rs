//! Head-to-head rivalries and their intensity
//!
//! A rivalry is keyed by an unordered pair of teams. The key stores the two
//! names in lexicographic order, so `(a, b)` and `(b, a)` address the same
//! rivalry no matter which side was at home.

use crate::config::RivalryConfig;
use crate::error::{LeagueError, Result};
use crate::season::game::Game;
use crate::types::{GameOutcome, TeamId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Canonical unordered pair of team ids
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "KeyRecord")]
pub struct RivalryKey {
    team_a: TeamId,
    team_b: TeamId,
}

#[derive(Deserialize)]
struct KeyRecord {
    team_a: TeamId,
    team_b: TeamId,
}

impl TryFrom<KeyRecord> for RivalryKey {
    type Error = LeagueError;

    fn try_from(record: KeyRecord) -> std::result::Result<Self, Self::Error> {
        let label = format!("{} vs {}", record.team_a, record.team_b);
        if record.team_a.trim().is_empty() || record.team_b.trim().is_empty() {
            return Err(invalid(label, "empty team name"));
        }
        // Strict order rules out both a swapped pair and a self-pairing
        if record.team_a >= record.team_b {
            return Err(invalid(label, "teams must be distinct and in sorted order"));
        }

        Ok(Self {
            team_a: record.team_a,
            team_b: record.team_b,
        })
    }
}

fn invalid(rivalry: String, reason: &str) -> LeagueError {
    LeagueError::InvalidRivalry {
        rivalry,
        reason: reason.to_string(),
    }
}

impl RivalryKey {
    pub fn new(first: &str, second: &str) -> Self {
        let (team_a, team_b) = if first <= second {
            (first, second)
        } else {
            (second, first)
        };

        Self {
            team_a: team_a.to_string(),
            team_b: team_b.to_string(),
        }
    }

    pub fn for_game(game: &Game) -> Self {
        Self::new(game.home_team(), game.away_team())
    }

    pub fn team_a(&self) -> &TeamId {
        &self.team_a
    }

    pub fn team_b(&self) -> &TeamId {
        &self.team_b
    }

    pub fn contains(&self, team: &str) -> bool {
        self.team_a == team || self.team_b == team
    }
}

impl std::fmt::Display for RivalryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} vs {}", self.team_a, self.team_b)
    }
}

/// Intensity for a record of `games_played` games with the given win margin
///
/// Non-decreasing in `games_played` and non-increasing in `win_margin`,
/// floored at zero.
pub fn calculate_intensity(games_played: u32, win_margin: u32, weights: &RivalryConfig) -> u32 {
    let raw = games_played as i64 * weights.games_weight as i64
        - win_margin as i64 * weights.margin_penalty as i64;

    raw.clamp(0, u32::MAX as i64) as u32
}

/// Cumulative head-to-head record between two teams
///
/// Deserializing checks that the counters add up and that the stored
/// intensity matches the stored weights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RivalryRecord")]
pub struct Rivalry {
    key: RivalryKey,
    games_played: u32,
    team_a_wins: u32,
    team_b_wins: u32,
    ties: u32,
    intensity: u32,
    weights: RivalryConfig,
    last_played: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct RivalryRecord {
    key: RivalryKey,
    games_played: u32,
    team_a_wins: u32,
    team_b_wins: u32,
    ties: u32,
    intensity: u32,
    weights: RivalryConfig,
    last_played: Option<DateTime<Utc>>,
}

impl TryFrom<RivalryRecord> for Rivalry {
    type Error = LeagueError;

    fn try_from(record: RivalryRecord) -> std::result::Result<Self, Self::Error> {
        let label = record.key.to_string();

        let counted =
            record.team_a_wins as u64 + record.team_b_wins as u64 + record.ties as u64;
        if counted != record.games_played as u64 {
            return Err(invalid(
                label,
                &format!(
                    "{} games played but {} wins, {} wins and {} ties",
                    record.games_played, record.team_a_wins, record.team_b_wins, record.ties
                ),
            ));
        }

        if (record.games_played == 0) != record.last_played.is_none() {
            return Err(invalid(label, "last_played does not match games played"));
        }

        let rivalry = Self {
            key: record.key,
            games_played: record.games_played,
            team_a_wins: record.team_a_wins,
            team_b_wins: record.team_b_wins,
            ties: record.ties,
            intensity: 0,
            weights: record.weights,
            last_played: record.last_played,
        };

        let expected =
            calculate_intensity(rivalry.games_played, rivalry.win_margin(), &rivalry.weights);
        if record.intensity != expected {
            return Err(invalid(
                label,
                &format!("intensity {} should be {}", record.intensity, expected),
            ));
        }

        Ok(Self {
            intensity: expected,
            ..rivalry
        })
    }
}

impl Rivalry {
    /// Create an empty rivalry between two distinct teams
    pub fn new(first: &str, second: &str) -> Result<Self> {
        Self::with_weights(first, second, RivalryConfig::default())
    }

    /// Create an empty rivalry using custom intensity weights
    pub fn with_weights(first: &str, second: &str, weights: RivalryConfig) -> Result<Self> {
        if first == second {
            return Err(LeagueError::SameTeam {
                team: first.to_string(),
            }
            .into());
        }

        Ok(Self::from_key(RivalryKey::new(first, second), weights))
    }

    /// Keys built from a `Game` always hold two distinct teams
    pub(crate) fn from_key(key: RivalryKey, weights: RivalryConfig) -> Self {
        Self {
            key,
            games_played: 0,
            team_a_wins: 0,
            team_b_wins: 0,
            ties: 0,
            intensity: 0,
            weights,
            last_played: None,
        }
    }

    /// Fold a scored game between this rivalry's teams into the record
    ///
    /// Ties count as a game played but as a win for neither side. Intensity
    /// is recomputed before returning.
    pub fn record_game_result(&mut self, game: &Game) -> Result<()> {
        let outcome = game.outcome().ok_or_else(|| LeagueError::IncompleteGame {
            game_id: game.id().to_string(),
        })?;

        if RivalryKey::for_game(game) != self.key {
            return Err(LeagueError::TeamMismatch {
                rivalry: self.key.to_string(),
                home: game.home_team().clone(),
                away: game.away_team().clone(),
            }
            .into());
        }

        let winner = match outcome {
            GameOutcome::HomeWin => Some(game.home_team()),
            GameOutcome::AwayWin => Some(game.away_team()),
            GameOutcome::Tie => None,
        };

        self.games_played += 1;
        match winner {
            Some(team) if *team == self.key.team_a => self.team_a_wins += 1,
            Some(_) => self.team_b_wins += 1,
            None => self.ties += 1,
        }

        self.last_played = Some(match self.last_played {
            Some(previous) => previous.max(game.played_at()),
            None => game.played_at(),
        });

        self.update_intensity();
        Ok(())
    }

    /// Recompute intensity from the current counters
    pub fn update_intensity(&mut self) {
        self.intensity = calculate_intensity(self.games_played, self.win_margin(), &self.weights);
    }

    pub fn key(&self) -> &RivalryKey {
        &self.key
    }

    pub fn team_a(&self) -> &TeamId {
        &self.key.team_a
    }

    pub fn team_b(&self) -> &TeamId {
        &self.key.team_b
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    pub fn team_a_wins(&self) -> u32 {
        self.team_a_wins
    }

    pub fn team_b_wins(&self) -> u32 {
        self.team_b_wins
    }

    pub fn ties(&self) -> u32 {
        self.ties
    }

    pub fn intensity(&self) -> u32 {
        self.intensity
    }

    pub fn weights(&self) -> &RivalryConfig {
        &self.weights
    }

    pub fn last_played(&self) -> Option<DateTime<Utc>> {
        self.last_played
    }

    /// Absolute difference between the two teams' win counts
    pub fn win_margin(&self) -> u32 {
        self.team_a_wins.abs_diff(self.team_b_wins)
    }

    /// Wins for `team` in this rivalry, `None` if it is not part of it
    pub fn wins_for(&self, team: &str) -> Option<u32> {
        if self.key.team_a == team {
            Some(self.team_a_wins)
        } else if self.key.team_b == team {
            Some(self.team_b_wins)
        } else {
            None
        }
    }

    /// Team with more head-to-head wins, `None` while the series is level
    pub fn leader(&self) -> Option<&TeamId> {
        match self.team_a_wins.cmp(&self.team_b_wins) {
            std::cmp::Ordering::Greater => Some(&self.key.team_a),
            std::cmp::Ordering::Less => Some(&self.key.team_b),
            std::cmp::Ordering::Equal => None,
        }
    }
}
