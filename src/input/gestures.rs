//! Platform input -> gesture samples
//!
//! Only the source matching the app's [`InputCapability`](super::InputCapability)
//! is scheduled. Hosts with their own input pipeline can write
//! [`GestureInput`] messages directly.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Phase of a single-pointer gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    Start,
    Move,
    End,
    Cancel,
}

/// One normalized gesture sample in window coordinates (origin top-left)
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct GestureInput {
    pub phase: GesturePhase,
    pub position: Vec2,
    /// Milliseconds since app start
    pub time_ms: f64,
}

impl GestureInput {
    pub fn new(phase: GesturePhase, position: Vec2, time_ms: f64) -> Self {
        Self {
            phase,
            position,
            time_ms,
        }
    }
}

/// Last pointer state seen by [`emit_pointer_gestures`]
#[derive(Default)]
pub struct PointerTracking {
    pressed: bool,
    last_position: Option<Vec2>,
}

/// System converting left mouse button drags into gesture samples
pub fn emit_pointer_gestures(
    mouse_button: Res<ButtonInput<MouseButton>>,
    window_query: Query<&Window, With<PrimaryWindow>>,
    time: Res<Time>,
    mut tracking: Local<PointerTracking>,
    mut gestures: MessageWriter<GestureInput>,
) {
    let time_ms = time.elapsed_secs_f64() * 1000.0;
    let cursor = window_query.iter().next().and_then(|window| window.cursor_position());

    if mouse_button.just_pressed(MouseButton::Left) {
        if let Some(position) = cursor {
            tracking.pressed = true;
            tracking.last_position = Some(position);
            gestures.write(GestureInput::new(GesturePhase::Start, position, time_ms));
        }
        return;
    }

    if !tracking.pressed {
        return;
    }

    let Some(position) = cursor else {
        // Pointer left the window mid-drag
        tracking.pressed = false;
        let last = tracking.last_position.take().unwrap_or_default();
        gestures.write(GestureInput::new(GesturePhase::Cancel, last, time_ms));
        return;
    };

    if mouse_button.just_released(MouseButton::Left) || !mouse_button.pressed(MouseButton::Left) {
        tracking.pressed = false;
        tracking.last_position = None;
        gestures.write(GestureInput::new(GesturePhase::End, position, time_ms));
        return;
    }

    if tracking.last_position != Some(position) {
        tracking.last_position = Some(position);
        gestures.write(GestureInput::new(GesturePhase::Move, position, time_ms));
    }
}

/// System converting the first active touch into gesture samples
pub fn emit_touch_gestures(
    touches: Res<Touches>,
    time: Res<Time>,
    mut tracked: Local<Option<u64>>,
    mut gestures: MessageWriter<GestureInput>,
) {
    let time_ms = time.elapsed_secs_f64() * 1000.0;

    if let Some(id) = *tracked {
        if touches.just_canceled(id) {
            *tracked = None;
            let position = touches
                .iter_just_canceled()
                .find(|touch| touch.id() == id)
                .map(|touch| touch.position())
                .unwrap_or_default();
            gestures.write(GestureInput::new(GesturePhase::Cancel, position, time_ms));
        } else if let Some(touch) = touches.get_released(id) {
            *tracked = None;
            gestures.write(GestureInput::new(GesturePhase::End, touch.position(), time_ms));
        } else if let Some(touch) = touches.get_pressed(id) {
            if touch.delta() != Vec2::ZERO {
                gestures.write(GestureInput::new(GesturePhase::Move, touch.position(), time_ms));
            }
        } else {
            // Touch vanished without a release event
            *tracked = None;
            gestures.write(GestureInput::new(GesturePhase::Cancel, Vec2::ZERO, time_ms));
        }
        return;
    }

    if let Some(touch) = touches.iter_just_pressed().next() {
        *tracked = Some(touch.id());
        gestures.write(GestureInput::new(GesturePhase::Start, touch.position(), time_ms));
    }
}
