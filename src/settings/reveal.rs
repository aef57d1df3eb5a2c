//! Staggered reveal settings

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Reveal-on-scroll settings
#[derive(Clone, Debug, Resource, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealSettings {
    /// Visible fraction (0.0-1.0) required before an element is revealed
    pub threshold: f32,

    /// Amount the viewport bottom is pulled up for intersection tests (pixels)
    pub root_margin_bottom: f32,

    /// Delay added per element revealed in the same pass (milliseconds)
    pub stagger_ms: u32,
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin_bottom: 80.0,
            stagger_ms: 100,
        }
    }
}
