//! Rivalry intensity configuration

use serde::{Deserialize, Serialize};

/// Weights used to derive a rivalry's intensity from its counters
///
/// `intensity = max(0, games_played * games_weight - |win margin| * margin_penalty)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RivalryConfig {
    /// Points added for every game played between the two teams
    pub games_weight: u32,
    /// Points removed for every win of difference in the head-to-head record
    pub margin_penalty: u32,
}

impl Default for RivalryConfig {
    fn default() -> Self {
        Self {
            games_weight: 10,
            margin_penalty: 5,
        }
    }
}
