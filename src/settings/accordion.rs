//! FAQ accordion settings

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Accordion settings
#[derive(Clone, Debug, Resource, Serialize, Deserialize)]
#[serde(default)]
pub struct AccordionSettings {
    /// Scroll a newly opened item into view when it sits this close to a viewport edge
    pub reveal_margin: f32,

    /// Delay before bringing an opened item into view (milliseconds)
    pub reveal_delay_ms: u64,
}

impl Default for AccordionSettings {
    fn default() -> Self {
        Self {
            reveal_margin: 100.0,
            reveal_delay_ms: 100,
        }
    }
}
