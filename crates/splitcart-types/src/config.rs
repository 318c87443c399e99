//! Engine configuration.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::constants;

/// Tuning for the order engine and expiry scheduler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// How long an order stays open for matching.
    pub expiry_minutes: i64,
    /// Order discovery radius in meters.
    pub discovery_radius_meters: f64,
}

impl EngineConfig {
    /// The expiry window as a `chrono::Duration`.
    #[must_use]
    pub fn expiry_window(&self) -> Duration {
        Duration::minutes(self.expiry_minutes)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            expiry_minutes: constants::DEFAULT_EXPIRY_MINUTES,
            discovery_radius_meters: constants::DISCOVERY_RADIUS_METERS,
        }
    }
}
