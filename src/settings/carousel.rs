//! Carousel step button and edge settings

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Carousel settings
#[derive(Clone, Debug, Resource, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselSettings {
    /// Step scrolled by a prev/next button on desktop viewports (pixels)
    pub step: f32,

    /// Step on mobile viewports (pixels)
    pub mobile_step: f32,

    /// Viewports narrower than this are mobile (pixels)
    pub mobile_breakpoint: f32,

    /// Slack when deciding whether the strip sits at an edge (pixels)
    pub edge_tolerance: f32,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            step: 430.0,
            mobile_step: 340.0,
            mobile_breakpoint: 768.0,
            edge_tolerance: 5.0,
        }
    }
}
