//! League registry: teams, coaches, players and their legacy records
//!
//! The `League` owns every team, coach and player by id and is the only
//! place where the team/coach assignment is changed, so both sides of the
//! relationship always agree.

pub mod coach;
pub mod legacy;
pub mod player;
pub mod registry;
pub mod team;

// Re-export commonly used types
pub use coach::Coach;
pub use legacy::LegacyProfile;
pub use player::{Player, MAX_RATING, MIN_RATING};
pub use registry::{League, LegacyLedger};
pub use team::Team;
