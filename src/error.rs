//! Error types for the rivalry ledger
//!
//! All failures are caller-contract violations detected before any state
//! is mutated. Operations return the anyhow-based `Result`, and callers that
//! need the kind downcast to `LeagueError`.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific league scenarios
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeagueError {
    #[error("Invalid score: {home}-{away}")]
    InvalidScore { home: i32, away: i32 },

    #[error("Score already set for game {game_id}")]
    ScoreAlreadySet { game_id: String },

    #[error("Game {game_id} has no final score")]
    IncompleteGame { game_id: String },

    #[error("Game {game_id} was already recorded")]
    DuplicateGame { game_id: String },

    #[error("A team cannot play itself: {team}")]
    SameTeam { team: String },

    #[error("Game between {home} and {away} does not belong to rivalry {rivalry}")]
    TeamMismatch {
        rivalry: String,
        home: String,
        away: String,
    },

    #[error("Player {player_id} is already registered in {scope}")]
    DuplicatePlayer { player_id: String, scope: String },

    #[error("Team already registered: {team}")]
    DuplicateTeam { team: String },

    #[error("Coach already registered: {coach}")]
    DuplicateCoach { coach: String },

    #[error("Invalid player rating: {rating}")]
    InvalidRating { rating: i32 },

    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Team not found: {team}")]
    TeamNotFound { team: String },

    #[error("Coach not found: {coach}")]
    CoachNotFound { coach: String },

    #[error("Player not found: {player_id}")]
    PlayerNotFound { player_id: String },

    #[error("Inconsistent rivalry {rivalry}: {reason}")]
    InvalidRivalry { rivalry: String, reason: String },

    #[error("Season {year} already has a champion: {team}")]
    ChampionAlreadyCrowned { year: i32, team: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Internal error: {message}")]
    InternalError { message: String },
}
