//! Head coaches

use crate::error::Result;
use crate::league::legacy::LegacyProfile;
use crate::types::{CoachId, TeamId};
use crate::utils::validate_name;
use serde::{Deserialize, Serialize};

/// A head coach and the team currently assigned to them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coach {
    name: CoachId,
    team: Option<TeamId>,
    legacy: LegacyProfile,
}

impl Coach {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;

        Ok(Self {
            name,
            team: None,
            legacy: LegacyProfile::new(),
        })
    }

    pub fn name(&self) -> &CoachId {
        &self.name
    }

    pub fn team(&self) -> Option<&TeamId> {
        self.team.as_ref()
    }

    /// Only the league may change this, together with the team's side
    pub(crate) fn assign_team(&mut self, team: Option<TeamId>) {
        self.team = team;
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
