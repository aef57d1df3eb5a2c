use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Primary input capability of the device
///
/// Chosen once when the plugin is built; drag strategies and gesture sources
/// are selected from it instead of branching inside every handler.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputCapability {
    /// Mouse or pen: hover exists, drags are sampled continuously
    Pointer,
    /// Touch screen: no hover, flicks are judged on release
    Touch,
}

impl InputCapability {
    /// Best guess for the current platform
    pub fn detect() -> Self {
        if cfg!(any(target_os = "android", target_os = "ios")) {
            InputCapability::Touch
        } else {
            InputCapability::Pointer
        }
    }

    pub fn is_touch(self) -> bool {
        self == InputCapability::Touch
    }
}

impl Default for InputCapability {
    fn default() -> Self {
        Self::detect()
    }
}
