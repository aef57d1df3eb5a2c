//! Drag-to-scroll gesture strategies
//!
//! A strategy turns a stream of horizontal gesture samples into scroll
//! offsets for one container, and decides on release whether a momentum
//! scroll follows. Two strategies implement the same contract:
//!
//! - [`PointerDrag`]: continuous velocity sampling (mouse / pen)
//! - [`TouchFlick`]: one-shot duration/distance heuristic (touch)
//!
//! Momentum deltas are expressed in pointer space: positive when the gesture
//! moved toward +x.

mod session;
mod pointer;
mod touch;

pub use session::DragSession;
pub use pointer::PointerDrag;
pub use touch::TouchFlick;

use bevy::prelude::*;

use crate::input::InputCapability;
use crate::settings::DragSettings;

/// Per-gesture contract shared by all drag strategies
///
/// State machine: `Idle -> Dragging (begin) -> Idle (end / cancel)`.
/// Calling `begin` while dragging restarts the session.
pub trait DragStrategy: Send + Sync + 'static {
    /// Pointer/touch went down at `x`; `scroll_offset` is the container's offset
    fn begin(&mut self, x: f32, time_ms: f64, scroll_offset: f32);

    /// Pointer moved; returns the container offset to apply, if dragging
    fn update(&mut self, x: f32, time_ms: f64) -> Option<f32>;

    /// Gesture released at `x`; returns a momentum delta to scroll by, if any
    fn end(&mut self, x: f32, time_ms: f64) -> Option<f32>;

    /// Gesture aborted; discards the session without momentum
    fn cancel(&mut self);

    fn session(&self) -> Option<&DragSession>;

    fn is_dragging(&self) -> bool {
        self.session().is_some()
    }

    /// Whether leaving the container's bounds aborts the gesture
    fn cancels_on_leave(&self) -> bool {
        false
    }
}

/// Drag handler attached to a [`ScrollContainer`](crate::types::ScrollContainer)
///
/// The strategy is picked once from the app's [`InputCapability`].
#[derive(Component)]
pub struct DragScroller {
    strategy: Box<dyn DragStrategy>,
}

impl DragScroller {
    pub fn new(strategy: impl DragStrategy) -> Self {
        Self {
            strategy: Box::new(strategy),
        }
    }

    pub fn for_capability(capability: InputCapability, settings: &DragSettings) -> Self {
        match capability {
            InputCapability::Pointer => Self::new(PointerDrag::new(settings.pointer)),
            InputCapability::Touch => Self::new(TouchFlick::new(settings.touch)),
        }
    }

    pub fn strategy(&self) -> &dyn DragStrategy {
        self.strategy.as_ref()
    }

    pub fn strategy_mut(&mut self) -> &mut dyn DragStrategy {
        self.strategy.as_mut()
    }
}
