use super::{DragSession, DragStrategy};
use crate::settings::TouchFlickSettings;

/// One-shot flick detection for touch input
///
/// Moves track the finger with a fixed multiplier; on release, a short and
/// long enough gesture scrolls on by `(displacement / duration) * momentum_factor`.
#[derive(Clone, Debug)]
pub struct TouchFlick {
    settings: TouchFlickSettings,
    session: Option<DragSession>,
}

impl TouchFlick {
    pub fn new(settings: TouchFlickSettings) -> Self {
        Self {
            settings,
            session: None,
        }
    }
}

impl Default for TouchFlick {
    fn default() -> Self {
        Self::new(TouchFlickSettings::default())
    }
}

impl DragStrategy for TouchFlick {
    fn begin(&mut self, x: f32, time_ms: f64, scroll_offset: f32) {
        self.session = Some(DragSession::new(x, time_ms, scroll_offset));
    }

    fn update(&mut self, x: f32, time_ms: f64) -> Option<f32> {
        let session = self.session.as_mut()?;
        session.last_x = x;
        session.last_time_ms = time_ms;
        Some(session.start_scroll + (session.start_x - x) * self.settings.multiplier)
    }

    fn end(&mut self, x: f32, time_ms: f64) -> Option<f32> {
        let session = self.session.take()?;
        let duration = session.elapsed_ms(time_ms);
        let displacement = session.displacement(x);

        if duration <= 0.0
            || duration >= self.settings.max_duration_ms as f64
            || displacement.abs() <= self.settings.min_distance
        {
            return None;
        }

        let speed = (displacement as f64 / duration) as f32;
        Some(speed * self.settings.momentum_factor)
    }

    fn cancel(&mut self) {
        self.session = None;
    }

    fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quick_flick_emits_momentum() {
        let mut flick = TouchFlick::default();
        flick.begin(500.0, 0.0, 0.0);
        flick.update(450.0, 100.0);

        // 100 px left in 200 ms -> (-100 / 200) * 300 = -150
        assert_eq!(flick.end(400.0, 200.0), Some(-150.0));
    }

    #[test]
    fn test_finger_tracking_uses_touch_multiplier() {
        let mut flick = TouchFlick::default();
        flick.begin(500.0, 0.0, 20.0);
        // 20 + (500 - 460) * 1.5 = 80
        assert_eq!(flick.update(460.0, 30.0), Some(80.0));
    }

    #[test]
    fn test_slow_gesture_has_no_momentum() {
        let mut flick = TouchFlick::default();
        flick.begin(500.0, 0.0, 0.0);
        assert_eq!(flick.end(300.0, 300.0), None);
    }

    #[test]
    fn test_short_gesture_has_no_momentum() {
        let mut flick = TouchFlick::default();
        flick.begin(500.0, 0.0, 0.0);
        assert_eq!(flick.end(460.0, 100.0), None);
    }

    #[test]
    fn test_zero_duration_has_no_momentum() {
        let mut flick = TouchFlick::default();
        flick.begin(500.0, 50.0, 0.0);
        assert_eq!(flick.end(300.0, 50.0), None);
    }
}
