//! Scroll spy (navigation highlighting) settings

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::rate_limit::RateLimit;

/// Scroll spy settings
#[derive(Clone, Debug, Resource, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollSpySettings {
    /// Lookahead added to the page offset before matching regions (pixels)
    pub bias: f32,

    /// How often region matching may run while scrolling
    pub rate_limit: RateLimit,

    /// Distance kept above a region when jumping to it from a nav link (pixels)
    pub jump_offset: f32,
}

impl Default for ScrollSpySettings {
    fn default() -> Self {
        Self {
            bias: 100.0,
            rate_limit: RateLimit::Throttle(100),
            jump_offset: 20.0,
        }
    }
}
