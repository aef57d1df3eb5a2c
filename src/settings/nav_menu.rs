//! Navigation menu and anchor link settings

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Mobile menu and in-page anchor settings
#[derive(Clone, Debug, Resource, Serialize, Deserialize)]
#[serde(default)]
pub struct NavMenuSettings {
    /// Distance kept above the target when following an in-page anchor (pixels).
    /// Set it to the navbar height when a fixed header covers the page top.
    pub anchor_offset: f32,

    /// Lock page scrolling while a mobile menu is open
    pub lock_scroll_when_open: bool,
}

impl Default for NavMenuSettings {
    fn default() -> Self {
        Self {
            anchor_offset: 30.0,
            lock_scroll_when_open: true,
        }
    }
}
