//! Scroll animation settings

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Smooth scroll animation settings
#[derive(Clone, Debug, Resource, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    /// Enable smooth scrolling; when false every request jumps
    pub smooth: bool,

    /// Exponential approach rate (higher = faster)
    pub smoothness: f32,

    /// Snap to the target when closer than this (pixels)
    pub snap_distance: f32,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            smooth: true,
            smoothness: 12.0,
            snap_distance: 0.1,
        }
    }
}
