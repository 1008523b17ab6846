//! Season game log and rivalry aggregation
//!
//! A `Season` owns the chronological log of scored games and the rivalries
//! derived from it. Each accepted game is routed into the rivalry for its
//! unordered team pair, created on first meeting, and reported to a
//! `LegacyLedger` so team and coach records stay in step.

use crate::config::RivalryConfig;
use crate::error::{LeagueError, Result};
use crate::league::registry::LegacyLedger;
use crate::metrics::MetricsCollector;
use crate::season::game::Game;
use crate::season::rivalry::{Rivalry, RivalryKey};
use crate::types::{GameId, TeamId};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A single year of games and the rivalries they produced
#[derive(Debug, Clone)]
pub struct Season {
    year: i32,
    /// Append-only, in the order games were added
    games: Vec<Game>,
    game_ids: HashSet<GameId>,
    rivalries: HashMap<RivalryKey, Rivalry>,
    champion: Option<TeamId>,
    config: RivalryConfig,
    metrics: Option<Arc<MetricsCollector>>,
}

/// Serializable snapshot of a season for reporting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonSummary {
    pub year: i32,
    pub games_played: usize,
    pub ties: usize,
    pub champion: Option<TeamId>,
    /// Sorted by intensity, fiercest first
    pub rivalries: Vec<Rivalry>,
}

impl SeasonSummary {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Season {
    /// Create an empty season with default intensity weights
    pub fn new(year: i32) -> Self {
        Self::with_config(year, RivalryConfig::default())
    }

    /// Create an empty season with custom intensity weights
    pub fn with_config(year: i32, config: RivalryConfig) -> Self {
        Self {
            year,
            games: Vec::new(),
            game_ids: HashSet::new(),
            rivalries: HashMap::new(),
            champion: None,
            config,
            metrics: None,
        }
    }

    /// Attach a metrics collector
    pub fn with_metrics(mut self, metrics: Arc<MetricsCollector>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Record a scored game
    ///
    /// The game is validated before anything changes: it must be scored,
    /// both teams must be known to `ledger`, and its id must not have been
    /// seen this season. The updated rivalry is staged next, then a decisive
    /// result is handed to the ledger as a single `record_result` call.
    /// Only once that succeeds is the rivalry stored and the game appended
    /// to the log, so any error leaves the season and the ledger as they
    /// were. Ties leave both teams' records untouched.
    pub fn add_game<L>(&mut self, game: Game, ledger: &mut L) -> Result<()>
    where
        L: LegacyLedger + ?Sized,
    {
        let timer = self.metrics.as_ref().map(|m| m.start_timer());

        if !game.is_complete() {
            warn!("Rejected unscored game {} in season {}", game.id(), self.year);
            self.record_rejection("incomplete_game");
            return Err(LeagueError::IncompleteGame {
                game_id: game.id().to_string(),
            }
            .into());
        }

        if self.game_ids.contains(&game.id()) {
            warn!("Rejected duplicate game {} in season {}", game.id(), self.year);
            self.record_rejection("duplicate_game");
            return Err(LeagueError::DuplicateGame {
                game_id: game.id().to_string(),
            }
            .into());
        }

        for team in [game.home_team(), game.away_team()] {
            if !ledger.has_team(team) {
                warn!("Rejected game {} with unknown team {}", game.id(), team);
                self.record_rejection("unknown_team");
                return Err(LeagueError::TeamNotFound { team: team.clone() }.into());
            }
        }

        let key = RivalryKey::for_game(&game);
        let created = !self.rivalries.contains_key(&key);
        let mut rivalry = match self.rivalries.get(&key) {
            Some(existing) => existing.clone(),
            None => Rivalry::from_key(key.clone(), self.config),
        };
        rivalry.record_game_result(&game)?;

        if let (Some(winner), Some(loser)) = (game.winner(), game.loser()) {
            if let Err(e) = ledger.record_result(winner, loser) {
                warn!("Ledger refused result of game {}: {}", game.id(), e);
                self.record_rejection("ledger");
                return Err(e);
            }
        }

        if created {
            info!("New rivalry {} in season {}", key, self.year);
        }
        self.rivalries.insert(key, rivalry);

        debug!(
            "Recorded game {}: {} {:?} {}",
            game.id(),
            game.home_team(),
            game.score(),
            game.away_team()
        );

        if let (Some(metrics), Some(timer)) = (&self.metrics, timer) {
            metrics.record_game(game.is_tie(), timer.stop());
            if created {
                metrics.record_rivalry_created();
            }
            metrics.set_active_rivalries(self.rivalries.len());
        }

        self.game_ids.insert(game.id());
        self.games.push(game);
        Ok(())
    }

    /// Rebuild every rivalry from the game log
    ///
    /// Rivalry state is cleared and replayed in log order, so running this
    /// any number of times yields the same rivalries. Team and coach records
    /// are not touched.
    pub fn update_rivalries(&mut self) -> Result<()> {
        self.rivalries.clear();
        for game in &self.games {
            route_game(&mut self.rivalries, game, self.config)?;
        }

        debug!(
            "Rebuilt {} rivalries from {} games in season {}",
            self.rivalries.len(),
            self.games.len(),
            self.year
        );

        if let Some(metrics) = &self.metrics {
            metrics.set_active_rivalries(self.rivalries.len());
        }
        Ok(())
    }

    /// Rivalry between two teams in either order, if they have played
    pub fn rivalry(&self, a: &str, b: &str) -> Option<&Rivalry> {
        self.rivalries.get(&RivalryKey::new(a, b))
    }

    pub fn rivalries(&self) -> impl Iterator<Item = &Rivalry> {
        self.rivalries.values()
    }

    /// Every rivalry a team is part of, ordered by key
    pub fn rivalries_for(&self, team: &str) -> Vec<&Rivalry> {
        let mut rivalries: Vec<&Rivalry> = self
            .rivalries
            .values()
            .filter(|r| r.key().contains(team))
            .collect();
        rivalries.sort_by(|a, b| a.key().cmp(b.key()));
        rivalries
    }

    /// Up to `limit` rivalries, highest intensity first
    pub fn fiercest_rivalries(&self, limit: usize) -> Vec<&Rivalry> {
        let mut rivalries: Vec<&Rivalry> = self.rivalries.values().collect();
        rivalries.sort_by(|a, b| {
            b.intensity()
                .cmp(&a.intensity())
                .then_with(|| a.key().cmp(b.key()))
        });
        rivalries.truncate(limit);
        rivalries
    }

    /// Award the season's championship to a team and its coach
    pub fn crown_champion<L>(&mut self, team: &str, ledger: &mut L) -> Result<()>
    where
        L: LegacyLedger + ?Sized,
    {
        if let Some(champion) = &self.champion {
            return Err(LeagueError::ChampionAlreadyCrowned {
                year: self.year,
                team: champion.clone(),
            }
            .into());
        }
        if !ledger.has_team(team) {
            return Err(LeagueError::TeamNotFound {
                team: team.to_string(),
            }
            .into());
        }

        ledger.add_championship(team)?;
        self.champion = Some(team.to_string());

        info!("{} crowned {} champion", team, self.year);
        if let Some(metrics) = &self.metrics {
            metrics.record_championship();
        }
        Ok(())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Games in the order they were added
    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn game_count(&self) -> usize {
        self.games.len()
    }

    pub fn rivalry_count(&self) -> usize {
        self.rivalries.len()
    }

    pub fn champion(&self) -> Option<&TeamId> {
        self.champion.as_ref()
    }

    pub fn config(&self) -> &RivalryConfig {
        &self.config
    }

    pub fn summary(&self) -> SeasonSummary {
        SeasonSummary {
            year: self.year,
            games_played: self.games.len(),
            ties: self.games.iter().filter(|g| g.is_tie()).count(),
            champion: self.champion.clone(),
            rivalries: self
                .fiercest_rivalries(self.rivalries.len())
                .into_iter()
                .cloned()
                .collect(),
        }
    }

    fn record_rejection(&self, reason: &str) {
        if let Some(metrics) = &self.metrics {
            metrics.record_rejection(reason);
        }
    }
}

/// Find or create the rivalry for `game` and fold the result into it
///
/// Returns whether the rivalry was created by this call.
fn route_game(
    rivalries: &mut HashMap<RivalryKey, Rivalry>,
    game: &Game,
    config: RivalryConfig,
) -> Result<bool> {
    let key = RivalryKey::for_game(game);
    let created = !rivalries.contains_key(&key);

    rivalries
        .entry(key.clone())
        .or_insert_with(|| Rivalry::from_key(key, config))
        .record_game_result(game)?;

    Ok(created)
}
