//! Main application configuration
//!
//! This module defines the top-level configuration for an embedding
//! application, including environment variable loading and validation.

use crate::config::rivalry::RivalryConfig;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub rivalry: RivalryConfig,
}

/// Service-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Name used in log output
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "rivalry-ledger".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        // Service settings
        if let Ok(name) = env::var("SERVICE_NAME") {
            config.service.name = name;
        }
        if let Ok(log_level) = env::var("LOG_LEVEL") {
            config.service.log_level = log_level;
        }

        // Rivalry settings
        if let Ok(weight) = env::var("RIVALRY_GAMES_WEIGHT") {
            config.rivalry.games_weight = weight
                .parse()
                .map_err(|_| anyhow!("Invalid RIVALRY_GAMES_WEIGHT value: {}", weight))?;
        }
        if let Ok(penalty) = env::var("RIVALRY_MARGIN_PENALTY") {
            config.rivalry.margin_penalty = penalty
                .parse()
                .map_err(|_| anyhow!("Invalid RIVALRY_MARGIN_PENALTY value: {}", penalty))?;
        }

        validate_config(&config)?;
        Ok(config)
    }

    /// Parse configuration from a TOML document
    ///
    /// Missing sections and keys fall back to their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(contents).map_err(|e| {
            crate::error::LeagueError::ConfigurationError {
                message: e.to_string(),
            }
        })?;

        validate_config(&config)?;
        Ok(config)
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    if config.service.name.is_empty() {
        return Err(anyhow!("Service name cannot be empty"));
    }

    // Intensity must grow with games played
    if config.rivalry.games_weight == 0 {
        return Err(anyhow!("Rivalry games weight must be greater than 0"));
    }

    Ok(())
}
