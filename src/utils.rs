//! Utility functions for the rivalry ledger

use crate::error::Result;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Generate a new unique game ID
pub fn generate_game_id() -> Uuid {
    Uuid::new_v4()
}

/// Get the current UTC timestamp
pub fn current_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// Reject names that are empty or whitespace only
pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(crate::error::LeagueError::EmptyName.into());
    }
    Ok(())
}

/// Initialize structured logging with the configured level
///
/// `RUST_LOG` takes precedence over `log_level` when it is set.
pub fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
