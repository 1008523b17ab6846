//! Individual players

use crate::error::{LeagueError, Result};
use crate::types::PlayerId;
use crate::utils::validate_name;
use serde::{Deserialize, Serialize};

/// Lowest allowed skill rating
pub const MIN_RATING: u8 = 0;

/// Highest allowed skill rating
pub const MAX_RATING: u8 = 99;

/// A player with a bounded skill rating
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: PlayerId,
    rating: u8,
}

impl Player {
    /// Create a player, validating the name and rating
    pub fn new(name: impl Into<String>, rating: i32) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        let rating = check_rating(rating)?;

        Ok(Self { name, rating })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> &PlayerId {
        &self.name
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    /// Replace the rating; out-of-range values leave the player unchanged
    pub fn set_rating(&mut self, rating: i32) -> Result<()> {
        self.rating = check_rating(rating)?;
        Ok(())
    }
}

fn check_rating(rating: i32) -> Result<u8> {
    if rating < MIN_RATING as i32 || rating > MAX_RATING as i32 {
        return Err(LeagueError::InvalidRating { rating }.into());
    }
    Ok(rating as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_creation() {
        let player = Player::new("Quinn", 88).unwrap();
        assert_eq!(player.name(), "Quinn");
        assert_eq!(player.rating(), 88);
    }

    #[test]
    fn test_rating_bounds() {
        assert!(Player::new("Low", 0).is_ok());
        assert!(Player::new("High", 99).is_ok());

        let err = Player::new("TooHigh", 100).unwrap_err();
        assert_eq!(
            err.downcast_ref::<LeagueError>(),
            Some(&LeagueError::InvalidRating { rating: 100 })
        );
        assert!(Player::new("Negative", -1).is_err());
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = Player::new("", 50).unwrap_err();
        assert_eq!(err.downcast_ref::<LeagueError>(), Some(&LeagueError::EmptyName));
    }

    #[test]
    fn test_set_rating_keeps_old_value_on_error() {
        let mut player = Player::new("Quinn", 70).unwrap();
        player.set_rating(75).unwrap();
        assert_eq!(player.rating(), 75);

        assert!(player.set_rating(120).is_err());
        assert_eq!(player.rating(), 75);
    }
}
