//! Configuration management for the rivalry ledger
//!
//! This module handles configuration loading from environment variables
//! and TOML documents, validation, and default values.

pub mod app;
pub mod rivalry;

// Re-export commonly used types
pub use app::{validate_config, AppConfig, ServiceSettings};
pub use rivalry::RivalryConfig;
