//! Cumulative career statistics for a team or coach

use serde::{Deserialize, Serialize};

/// Win, loss and championship counters
///
/// Counters only ever grow; the only way to change them is through the
/// increment operations below.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyProfile {
    wins: u32,
    losses: u32,
    championships: u32,
}

impl LegacyProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_win(&mut self) {
        self.wins = self.wins.saturating_add(1);
    }

    pub fn record_loss(&mut self) {
        self.losses = self.losses.saturating_add(1);
    }

    pub fn add_championship(&mut self) {
        self.championships = self.championships.saturating_add(1);
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn losses(&self) -> u32 {
        self.losses
    }

    pub fn championships(&self) -> u32 {
        self.championships
    }

    /// Decided games only; ties never reach a legacy profile
    pub fn games(&self) -> u32 {
        self.wins.saturating_add(self.losses)
    }

    /// Fraction of decided games won, 0.0 with no games
    pub fn win_percentage(&self) -> f64 {
        let games = self.games();
        if games == 0 {
            0.0
        } else {
            self.wins as f64 / games as f64
        }
    }
}
