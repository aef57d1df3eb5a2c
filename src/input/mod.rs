//! Input handling for page interactions
//!
//! Converts mouse and touch input into gesture samples for drag scrolling,
//! and provides leafwing-input-manager keybindings for accordion navigation.

mod capability;
mod gestures;
mod keybindings;

// Re-export public types
pub use capability::InputCapability;
pub use gestures::{emit_pointer_gestures, emit_touch_gestures, GestureInput, GesturePhase, PointerTracking};
pub use keybindings::{AccordionAction, default_accordion_input_map};

// Re-export leafwing types for user customization
pub use leafwing_input_manager::prelude::{InputMap, ActionState, Actionlike};
