//! # Player Configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration of the playback controller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Interval between periodic progress ticks requested from the engine.
    ///
    /// Default: 100 ms, frequent enough that lazily-reconciled fields (the
    /// committed rate after `update_rate`) converge at sub-second cadence.
    #[serde(default = "default_tick_interval")]
    pub tick_interval: Duration,

    /// Tolerance passed to the engine around seek targets, before and after.
    ///
    /// Default: zero — seeks land exactly on the requested time.
    #[serde(default = "default_seek_tolerance")]
    pub seek_tolerance: Duration,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            tick_interval: default_tick_interval(),
            seek_tolerance: default_seek_tolerance(),
        }
    }
}

impl PlayerConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.tick_interval.is_zero() {
            return Err("tick_interval must be > 0".to_string());
        }

        Ok(())
    }
}

fn default_tick_interval() -> Duration {
    Duration::from_millis(100)
}

fn default_seek_tolerance() -> Duration {
    Duration::ZERO
}
