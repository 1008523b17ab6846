//! Thread-safe wrapper around a season and its league
//!
//! Both live behind a single lock, so recording a game (finding or creating
//! its rivalry and updating both teams) happens under one exclusive writer.

use crate::error::{LeagueError, Result};
use crate::league::legacy::LegacyProfile;
use crate::league::registry::League;
use crate::season::game::Game;
use crate::season::rivalry::Rivalry;
use crate::season::tracker::Season;
use std::sync::{Arc, RwLock};

#[derive(Debug)]
struct SeasonState {
    season: Season,
    league: League,
}

/// A season and league that can be shared across threads
#[derive(Debug, Clone)]
pub struct SharedSeason {
    state: Arc<RwLock<SeasonState>>,
}

impl SharedSeason {
    pub fn new(season: Season, league: League) -> Self {
        Self {
            state: Arc::new(RwLock::new(SeasonState { season, league })),
        }
    }

    /// Record a scored game under the write lock
    pub fn add_game(&self, game: Game) -> Result<()> {
        let mut state = self
            .state
            .write()
            .map_err(|_| LeagueError::InternalError {
                message: "Failed to acquire season write lock".to_string(),
            })?;

        let SeasonState { season, league } = &mut *state;
        season.add_game(game, league)
    }

    /// Snapshot of the rivalry between two teams, if they have played
    pub fn rivalry(&self, a: &str, b: &str) -> Result<Option<Rivalry>> {
        self.with_season(|season| season.rivalry(a, b).cloned())
    }

    /// Snapshot of a team's legacy profile
    pub fn team_legacy(&self, team: &str) -> Result<Option<LegacyProfile>> {
        self.with_league(|league| league.team(team).map(|t| *t.legacy_profile()))
    }

    /// Run a read-only closure against the season
    pub fn with_season<R>(&self, f: impl FnOnce(&Season) -> R) -> Result<R> {
        let state = self
            .state
            .read()
            .map_err(|_| LeagueError::InternalError {
                message: "Failed to acquire season read lock".to_string(),
            })?;

        Ok(f(&state.season))
    }

    /// Run a read-only closure against the league
    pub fn with_league<R>(&self, f: impl FnOnce(&League) -> R) -> Result<R> {
        let state = self
            .state
            .read()
            .map_err(|_| LeagueError::InternalError {
                message: "Failed to acquire season read lock".to_string(),
            })?;

        Ok(f(&state.league))
    }
}
