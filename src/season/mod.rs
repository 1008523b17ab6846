//! Games, rivalries and season aggregation
//!
//! This module contains the game model, the rivalry record with its derived
//! intensity, the `Season` that routes games into rivalries, and a shared
//! wrapper for use from several threads.

pub mod game;
pub mod rivalry;
pub mod shared;
pub mod tracker;

// Re-export commonly used types
pub use game::Game;
pub use rivalry::{calculate_intensity, Rivalry, RivalryKey};
pub use shared::SharedSeason;
pub use tracker::{Season, SeasonSummary};
