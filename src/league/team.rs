//! Teams and their rosters

use crate::error::{LeagueError, Result};
use crate::league::legacy::LegacyProfile;
use crate::types::{CoachId, PlayerId, TeamId};
use crate::utils::validate_name;
use serde::{Deserialize, Serialize};

/// A team, identified by its name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    name: TeamId,
    coach: Option<CoachId>,
    players: Vec<PlayerId>,
    legacy: LegacyProfile,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;

        Ok(Self {
            name,
            coach: None,
            players: Vec::new(),
            legacy: LegacyProfile::new(),
        })
    }

    pub fn name(&self) -> &TeamId {
        &self.name
    }

    /// Append a player to the roster, rejecting players already on it
    pub fn add_player(&mut self, player_id: PlayerId) -> Result<()> {
        if self.has_player(&player_id) {
            return Err(LeagueError::DuplicatePlayer {
                player_id,
                scope: self.name.clone(),
            }
            .into());
        }

        self.players.push(player_id);
        Ok(())
    }

    pub fn has_player(&self, player_id: &str) -> bool {
        self.players.iter().any(|p| p == player_id)
    }

    /// Roster in signing order
    pub fn players(&self) -> &[PlayerId] {
        &self.players
    }

    pub fn coach(&self) -> Option<&CoachId> {
        self.coach.as_ref()
    }

    /// Only the league may change this, together with the coach's side
    pub(crate) fn set_coach(&mut self, coach: Option<CoachId>) {
        self.coach = coach;
    }

    pub fn record_win(&mut self) {
        self.legacy.record_win();
    }

    pub fn record_loss(&mut self) {
        self.legacy.record_loss();
    }

    pub(crate) fn add_championship(&mut self) {
        self.legacy.add_championship();
    }

    pub fn legacy_profile(&self) -> &LegacyProfile {
        &self.legacy
    }
}
