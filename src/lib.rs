//! Rivalry Ledger - rivalry tracking and season aggregation
//!
//! This crate keeps win/loss, rivalry and legacy statistics for a league
//! of teams as scored games are recorded into a season. Everything is
//! in memory; a caller supplies games and reads the aggregated records.

pub mod config;
pub mod error;
pub mod league;
pub mod metrics;
pub mod season;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{LeagueError, Result};
pub use types::*;

// Re-export key components
pub use league::{Coach, League, LegacyLedger, LegacyProfile, Player, Team};
pub use season::{Game, Rivalry, RivalryKey, Season, SeasonSummary, SharedSeason};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
