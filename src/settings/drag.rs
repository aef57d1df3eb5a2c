//! Drag-to-scroll and momentum settings

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::input::InputCapability;

/// Drag scrolling settings
#[derive(Clone, Debug, Resource, Serialize, Deserialize)]
#[serde(default)]
pub struct DragSettings {
    /// Force an input capability instead of detecting it at startup
    pub capability: Option<InputCapability>,

    /// Pointer strategy
    pub pointer: PointerDragSettings,

    /// Touch strategy
    pub touch: TouchFlickSettings,
}

impl Default for DragSettings {
    fn default() -> Self {
        Self {
            capability: None,
            pointer: PointerDragSettings::default(),
            touch: TouchFlickSettings::default(),
        }
    }
}

/// Continuous-sampling drag (mouse / pen)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerDragSettings {
    /// Scroll distance per unit of pointer travel
    pub multiplier: f32,

    /// Minimum release speed (units per millisecond) that triggers momentum
    pub velocity_threshold: f32,

    /// Momentum distance per unit of release speed
    pub momentum_factor: f32,
}

impl Default for PointerDragSettings {
    fn default() -> Self {
        Self {
            multiplier: 2.0,
            velocity_threshold: 1.0,
            momentum_factor: 15.0,
        }
    }
}

/// One-shot flick detection (touch)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TouchFlickSettings {
    /// Scroll distance per unit of finger travel
    pub multiplier: f32,

    /// Longest gesture (milliseconds) still treated as a flick
    pub max_duration_ms: f32,

    /// Shortest travel (pixels) treated as a flick
    pub min_distance: f32,

    /// Momentum distance per unit of average speed
    pub momentum_factor: f32,
}

impl Default for TouchFlickSettings {
    fn default() -> Self {
        Self {
            multiplier: 1.5,
            max_duration_ms: 300.0,
            min_distance: 50.0,
            momentum_factor: 300.0,
        }
    }
}
