//! Count-up statistic settings

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Count-up animation settings
#[derive(Clone, Debug, Resource, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterSettings {
    /// Visible fraction (0.0-1.0) that starts the count
    pub threshold: f32,

    /// Time from zero to the target value (milliseconds)
    pub duration_ms: u64,

    /// Length of one counting step (milliseconds)
    pub step_ms: u64,
}

impl Default for CounterSettings {
    fn default() -> Self {
        Self {
            threshold: 0.5,
            duration_ms: 2000,
            step_ms: 16,
        }
    }
}
