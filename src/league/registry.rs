//! League registry and the ledger interface seasons report results to
//!
//! The registry owns teams, coaches and players by id. Teams and coaches
//! refer to each other only by id, and `assign_coach`/`release_coach` are
//! the single point where both sides of that link change.

use crate::error::{LeagueError, Result};
use crate::league::coach::Coach;
use crate::league::player::Player;
use crate::league::team::Team;
use crate::types::{CoachId, PlayerId, TeamId};
use std::collections::HashMap;
use tracing::{debug, info};

/// Trait for recording game results against team and coach legacies
#[cfg_attr(test, mockall::automock)]
pub trait LegacyLedger {
    /// Whether the team is known to this ledger
    fn has_team(&self, team: &str) -> bool;

    /// Record a decisive game: a win for `winner` and a loss for `loser`,
    /// each applied to the team and its current coach
    ///
    /// Either both sides are recorded or, on error, neither is.
    fn record_result(&mut self, winner: &str, loser: &str) -> Result<()>;

    /// Add a championship to the team and its current coach
    fn add_championship(&mut self, team: &str) -> Result<()>;
}

/// In-memory registry of teams, coaches and players
#[derive(Debug, Clone, Default)]
pub struct League {
    teams: HashMap<TeamId, Team>,
    coaches: HashMap<CoachId, Coach>,
    players: HashMap<PlayerId, Player>,
}

impl League {
    /// Create an empty league
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new team by name
    pub fn add_team(&mut self, name: impl Into<String>) -> Result<()> {
        let team = Team::new(name)?;
        if self.teams.contains_key(team.name()) {
            return Err(LeagueError::DuplicateTeam {
                team: team.name().clone(),
            }
            .into());
        }

        debug!("Registered team {}", team.name());
        self.teams.insert(team.name().clone(), team);
        Ok(())
    }

    /// Register a new coach by name
    pub fn add_coach(&mut self, name: impl Into<String>) -> Result<()> {
        let coach = Coach::new(name)?;
        if self.coaches.contains_key(coach.name()) {
            return Err(LeagueError::DuplicateCoach {
                coach: coach.name().clone(),
            }
            .into());
        }

        debug!("Registered coach {}", coach.name());
        self.coaches.insert(coach.name().clone(), coach);
        Ok(())
    }

    /// Register a new player
    pub fn add_player(&mut self, player: Player) -> Result<()> {
        if self.players.contains_key(player.id()) {
            return Err(LeagueError::DuplicatePlayer {
                player_id: player.id().clone(),
                scope: "league".to_string(),
            }
            .into());
        }

        self.players.insert(player.id().clone(), player);
        Ok(())
    }

    /// Add a registered player to a team's roster
    ///
    /// A player can be on at most one roster at a time.
    pub fn sign_player(&mut self, team: &str, player_id: &str) -> Result<()> {
        if !self.players.contains_key(player_id) {
            return Err(LeagueError::PlayerNotFound {
                player_id: player_id.to_string(),
            }
            .into());
        }
        if !self.teams.contains_key(team) {
            return Err(team_not_found(team));
        }

        if let Some(current) = self.teams.values().find(|t| t.has_player(player_id)) {
            return Err(LeagueError::DuplicatePlayer {
                player_id: player_id.to_string(),
                scope: current.name().clone(),
            }
            .into());
        }

        let roster = self.teams.get_mut(team).ok_or_else(|| team_not_found(team))?;
        roster.add_player(player_id.to_string())?;

        debug!("Signed {} to {}", player_id, team);
        Ok(())
    }

    /// Update a registered player's rating
    pub fn set_player_rating(&mut self, player_id: &str, rating: i32) -> Result<()> {
        let player = self
            .players
            .get_mut(player_id)
            .ok_or_else(|| LeagueError::PlayerNotFound {
                player_id: player_id.to_string(),
            })?;

        player.set_rating(rating)
    }

    /// Make `coach` the head coach of `team`, updating both sides
    ///
    /// The team's previous coach loses their team and the coach's previous
    /// team loses its coach.
    pub fn assign_coach(&mut self, team: &str, coach: &str) -> Result<()> {
        if !self.teams.contains_key(team) {
            return Err(team_not_found(team));
        }
        if !self.coaches.contains_key(coach) {
            return Err(coach_not_found(coach));
        }

        let previous_coach = self.teams.get(team).and_then(|t| t.coach().cloned());
        let previous_team = self.coaches.get(coach).and_then(|c| c.team().cloned());

        if let Some(previous_coach) = previous_coach {
            if let Some(c) = self.coaches.get_mut(&previous_coach) {
                c.assign_team(None);
            }
        }
        if let Some(previous_team) = previous_team {
            if let Some(t) = self.teams.get_mut(&previous_team) {
                t.set_coach(None);
            }
        }

        if let Some(t) = self.teams.get_mut(team) {
            t.set_coach(Some(coach.to_string()));
        }
        if let Some(c) = self.coaches.get_mut(coach) {
            c.assign_team(Some(team.to_string()));
        }

        info!("Assigned coach {} to {}", coach, team);
        Ok(())
    }

    /// Remove the team's coach, clearing both sides; returns the released coach
    pub fn release_coach(&mut self, team: &str) -> Result<Option<CoachId>> {
        let released = self
            .teams
            .get(team)
            .ok_or_else(|| team_not_found(team))?
            .coach()
            .cloned();

        if let Some(coach) = &released {
            if let Some(t) = self.teams.get_mut(team) {
                t.set_coach(None);
            }
            if let Some(c) = self.coaches.get_mut(coach) {
                c.assign_team(None);
            }
            info!("Released coach {} from {}", coach, team);
        }

        Ok(released)
    }

    pub fn team(&self, team: &str) -> Option<&Team> {
        self.teams.get(team)
    }

    pub fn coach(&self, coach: &str) -> Option<&Coach> {
        self.coaches.get(coach)
    }

    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.players.get(player_id)
    }

    /// Players on a team's roster, in signing order
    pub fn roster(&self, team: &str) -> Result<Vec<&Player>> {
        let team = self.teams.get(team).ok_or_else(|| team_not_found(team))?;

        Ok(team
            .players()
            .iter()
            .filter_map(|id| self.players.get(id))
            .collect())
    }

    /// Coach currently assigned to the team, if any
    pub fn coach_of(&self, team: &str) -> Option<&Coach> {
        self.teams
            .get(team)
            .and_then(|t| t.coach())
            .and_then(|c| self.coaches.get(c))
    }

    pub fn teams(&self) -> impl Iterator<Item = &Team> {
        self.teams.values()
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// Update the team and, if one is assigned, its coach
    fn update_legacy(
        &mut self,
        team: &str,
        update_team: fn(&mut Team),
        update_coach: fn(&mut Coach),
    ) -> Result<()> {
        let team = self.teams.get_mut(team).ok_or_else(|| team_not_found(team))?;
        update_team(team);

        if let Some(coach) = team.coach() {
            if let Some(coach) = self.coaches.get_mut(coach) {
                update_coach(coach);
            }
        }

        Ok(())
    }
}

impl LegacyLedger for League {
    fn has_team(&self, team: &str) -> bool {
        self.teams.contains_key(team)
    }

    fn record_result(&mut self, winner: &str, loser: &str) -> Result<()> {
        for team in [winner, loser] {
            if !self.teams.contains_key(team) {
                return Err(team_not_found(team));
            }
        }

        self.update_legacy(winner, Team::record_win, Coach::record_win)?;
        self.update_legacy(loser, Team::record_loss, Coach::record_loss)
    }

    fn add_championship(&mut self, team: &str) -> Result<()> {
        self.update_legacy(team, Team::add_championship, Coach::add_championship)
    }
}

fn team_not_found(team: &str) -> anyhow::Error {
    LeagueError::TeamNotFound {
        team: team.to_string(),
    }
    .into()
}

fn coach_not_found(coach: &str) -> anyhow::Error {
    LeagueError::CoachNotFound {
        coach: coach.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_league() -> League {
        let mut league = League::new();
        league.add_team("Alpha").unwrap();
        league.add_team("Beta").unwrap();
        league.add_coach("Carter").unwrap();
        league.add_coach("Dawson").unwrap();
        league
    }

    fn error_kind(err: &anyhow::Error) -> Option<&LeagueError> {
        err.downcast_ref::<LeagueError>()
    }

    #[test]
    fn test_duplicate_registrations_rejected() {
        let mut league = create_test_league();

        let err = league.add_team("Alpha").unwrap_err();
        assert!(matches!(error_kind(&err), Some(LeagueError::DuplicateTeam { .. })));

        let err = league.add_coach("Carter").unwrap_err();
        assert!(matches!(error_kind(&err), Some(LeagueError::DuplicateCoach { .. })));

        league.add_player(Player::new("Quinn", 80).unwrap()).unwrap();
        let err = league.add_player(Player::new("Quinn", 60).unwrap()).unwrap_err();
        assert!(matches!(error_kind(&err), Some(LeagueError::DuplicatePlayer { .. })));
        assert_eq!(league.player("Quinn").unwrap().rating(), 80);
    }

    #[test]
    fn test_assign_coach_sets_both_sides() {
        let mut league = create_test_league();
        league.assign_coach("Alpha", "Carter").unwrap();

        assert_eq!(league.team("Alpha").unwrap().coach().unwrap(), "Carter");
        assert_eq!(league.coach("Carter").unwrap().team().unwrap(), "Alpha");
        assert_eq!(league.coach_of("Alpha").unwrap().name(), "Carter");
    }

    #[test]
    fn test_reassigning_coach_detaches_previous_team() {
        let mut league = create_test_league();
        league.assign_coach("Alpha", "Carter").unwrap();
        league.assign_coach("Beta", "Carter").unwrap();

        assert!(league.team("Alpha").unwrap().coach().is_none());
        assert_eq!(league.team("Beta").unwrap().coach().unwrap(), "Carter");
        assert_eq!(league.coach("Carter").unwrap().team().unwrap(), "Beta");
    }

    #[test]
    fn test_replacing_coach_detaches_previous_coach() {
        let mut league = create_test_league();
        league.assign_coach("Alpha", "Carter").unwrap();
        league.assign_coach("Alpha", "Dawson").unwrap();

        assert!(league.coach("Carter").unwrap().team().is_none());
        assert_eq!(league.coach("Dawson").unwrap().team().unwrap(), "Alpha");
        assert_eq!(league.team("Alpha").unwrap().coach().unwrap(), "Dawson");
    }

    #[test]
    fn test_assign_unknown_ids() {
        let mut league = create_test_league();

        let err = league.assign_coach("Gamma", "Carter").unwrap_err();
        assert!(matches!(error_kind(&err), Some(LeagueError::TeamNotFound { .. })));

        let err = league.assign_coach("Alpha", "Nobody").unwrap_err();
        assert!(matches!(error_kind(&err), Some(LeagueError::CoachNotFound { .. })));
        assert!(league.team("Alpha").unwrap().coach().is_none());
    }

    #[test]
    fn test_release_coach() {
        let mut league = create_test_league();
        league.assign_coach("Alpha", "Carter").unwrap();

        let released = league.release_coach("Alpha").unwrap();
        assert_eq!(released.as_deref(), Some("Carter"));
        assert!(league.team("Alpha").unwrap().coach().is_none());
        assert!(league.coach("Carter").unwrap().team().is_none());

        assert_eq!(league.release_coach("Alpha").unwrap(), None);
    }

    #[test]
    fn test_sign_player() {
        let mut league = create_test_league();
        league.add_player(Player::new("Quinn", 80).unwrap()).unwrap();
        league.add_player(Player::new("Reese", 72).unwrap()).unwrap();

        league.sign_player("Alpha", "Quinn").unwrap();
        league.sign_player("Alpha", "Reese").unwrap();

        let roster: Vec<&str> = league
            .roster("Alpha")
            .unwrap()
            .iter()
            .map(|p| p.name())
            .collect();
        assert_eq!(roster, vec!["Quinn", "Reese"]);
    }

    #[test]
    fn test_player_cannot_join_two_rosters() {
        let mut league = create_test_league();
        league.add_player(Player::new("Quinn", 80).unwrap()).unwrap();
        league.sign_player("Alpha", "Quinn").unwrap();

        let err = league.sign_player("Beta", "Quinn").unwrap_err();
        assert_eq!(
            error_kind(&err),
            Some(&LeagueError::DuplicatePlayer {
                player_id: "Quinn".to_string(),
                scope: "Alpha".to_string(),
            })
        );
        assert!(league.team("Beta").unwrap().players().is_empty());
    }

    #[test]
    fn test_sign_unknown_player() {
        let mut league = create_test_league();
        let err = league.sign_player("Alpha", "Ghost").unwrap_err();
        assert!(matches!(error_kind(&err), Some(LeagueError::PlayerNotFound { .. })));
    }

    #[test]
    fn test_set_player_rating() {
        let mut league = create_test_league();
        league.add_player(Player::new("Quinn", 80).unwrap()).unwrap();

        league.set_player_rating("Quinn", 91).unwrap();
        assert_eq!(league.player("Quinn").unwrap().rating(), 91);

        assert!(league.set_player_rating("Quinn", 150).is_err());
        assert!(league.set_player_rating("Ghost", 50).is_err());
    }

    #[test]
    fn test_ledger_updates_team_and_coach() {
        let mut league = create_test_league();
        league.assign_coach("Alpha", "Carter").unwrap();

        league.record_result("Alpha", "Beta").unwrap();
        league.add_championship("Alpha").unwrap();

        let alpha = league.team("Alpha").unwrap().legacy_profile();
        assert_eq!(alpha.wins(), 1);
        assert_eq!(alpha.championships(), 1);

        let carter = league.coach("Carter").unwrap().legacy_profile();
        assert_eq!(carter.wins(), 1);
        assert_eq!(carter.championships(), 1);

        assert_eq!(league.team("Beta").unwrap().legacy_profile().losses(), 1);
        assert_eq!(league.coach("Dawson").unwrap().legacy_profile().losses(), 0);
    }

    #[test]
    fn test_coach_keeps_legacy_after_moving() {
        let mut league = create_test_league();
        league.assign_coach("Alpha", "Carter").unwrap();
        league.record_result("Alpha", "Beta").unwrap();

        league.assign_coach("Beta", "Carter").unwrap();
        league.record_result("Alpha", "Beta").unwrap();
        league.record_result("Beta", "Alpha").unwrap();

        assert_eq!(league.coach("Carter").unwrap().legacy_profile().wins(), 2);
        assert_eq!(league.team("Alpha").unwrap().legacy_profile().wins(), 2);
    }

    #[test]
    fn test_ledger_unknown_team() {
        let mut league = create_test_league();
        assert!(!league.has_team("Gamma"));
        assert!(league.record_result("Gamma", "Alpha").is_err());
    }

    #[test]
    fn test_record_result_unknown_loser_leaves_winner_untouched() {
        let mut league = create_test_league();
        league.assign_coach("Alpha", "Carter").unwrap();

        let err = league.record_result("Alpha", "Gamma").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LeagueError>(),
            Some(LeagueError::TeamNotFound { .. })
        ));

        assert_eq!(league.team("Alpha").unwrap().legacy_profile().wins(), 0);
        assert_eq!(league.coach("Carter").unwrap().legacy_profile().wins(), 0);
    }
}
