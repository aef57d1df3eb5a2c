use super::{DragSession, DragStrategy};
use crate::settings::PointerDragSettings;

/// Continuous-sampling drag for mouse and pen input
///
/// Every move samples velocity; release above the threshold scrolls on by
/// `velocity * momentum_factor`.
#[derive(Clone, Debug)]
pub struct PointerDrag {
    settings: PointerDragSettings,
    session: Option<DragSession>,
}

impl PointerDrag {
    pub fn new(settings: PointerDragSettings) -> Self {
        Self {
            settings,
            session: None,
        }
    }
}

impl Default for PointerDrag {
    fn default() -> Self {
        Self::new(PointerDragSettings::default())
    }
}

impl DragStrategy for PointerDrag {
    fn begin(&mut self, x: f32, time_ms: f64, scroll_offset: f32) {
        self.session = Some(DragSession::new(x, time_ms, scroll_offset));
    }

    fn update(&mut self, x: f32, time_ms: f64) -> Option<f32> {
        let session = self.session.as_mut()?;
        let walk = session.displacement(x) * self.settings.multiplier;
        session.sample(x, time_ms);
        Some(session.start_scroll - walk)
    }

    fn end(&mut self, _x: f32, _time_ms: f64) -> Option<f32> {
        let session = self.session.take()?;
        (session.velocity.abs() > self.settings.velocity_threshold)
            .then(|| session.velocity * self.settings.momentum_factor)
    }

    fn cancel(&mut self) {
        self.session = None;
    }

    fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    fn cancels_on_leave(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_moves_opposite_to_pointer() {
        let mut drag = PointerDrag::default();
        drag.begin(300.0, 0.0, 0.0);

        // (250 - 300) * 2 = -100 -> offset 0 - (-100) = 100
        assert_eq!(drag.update(250.0, 16.0), Some(100.0));
        assert!(drag.is_dragging());
    }

    #[test]
    fn test_release_above_threshold_emits_momentum() {
        let mut drag = PointerDrag::default();
        drag.begin(300.0, 0.0, 0.0);
        drag.update(312.0, 10.0); // 12 px in 10 ms = 1.2 px/ms

        let momentum = drag.end(312.0, 12.0).unwrap();
        assert!((momentum - 18.0).abs() < 1e-4);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_slow_release_has_no_momentum() {
        let mut drag = PointerDrag::default();
        drag.begin(300.0, 0.0, 0.0);
        drag.update(305.0, 10.0); // 0.5 px/ms
        assert_eq!(drag.end(305.0, 20.0), None);
    }

    #[test]
    fn test_release_without_move() {
        let mut drag = PointerDrag::default();
        drag.begin(300.0, 0.0, 40.0);
        assert_eq!(drag.end(300.0, 500.0), None);
        assert!(drag.session().is_none());
    }

    #[test]
    fn test_idle_strategy_ignores_input() {
        let mut drag = PointerDrag::default();
        assert_eq!(drag.update(10.0, 1.0), None);
        assert_eq!(drag.end(10.0, 2.0), None);
    }

    #[test]
    fn test_cancel_discards_momentum() {
        let mut drag = PointerDrag::default();
        drag.begin(300.0, 0.0, 0.0);
        drag.update(400.0, 10.0); // 10 px/ms
        drag.cancel();
        assert_eq!(drag.end(400.0, 11.0), None);
    }

    #[test]
    fn test_begin_restarts_session() {
        let mut drag = PointerDrag::default();
        drag.begin(300.0, 0.0, 0.0);
        drag.update(200.0, 10.0);
        drag.begin(100.0, 20.0, 200.0);

        let session = drag.session().unwrap();
        assert_eq!(session.start_x, 100.0);
        assert_eq!(session.start_scroll, 200.0);
        assert_eq!(session.velocity, 0.0);
    }
}
