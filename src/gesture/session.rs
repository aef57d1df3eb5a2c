/// Transient state of one drag gesture
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession {
    /// Pointer x when the gesture started
    pub start_x: f32,
    /// Container offset when the gesture started
    pub start_scroll: f32,
    /// Timestamp of the first sample (milliseconds)
    pub start_time_ms: f64,
    /// Most recent pointer x
    pub last_x: f32,
    /// Timestamp of the most recent sample (milliseconds)
    pub last_time_ms: f64,
    /// Latest velocity estimate (units per millisecond)
    pub velocity: f32,
}

impl DragSession {
    pub fn new(x: f32, time_ms: f64, scroll_offset: f32) -> Self {
        Self {
            start_x: x,
            start_scroll: scroll_offset,
            start_time_ms: time_ms,
            last_x: x,
            last_time_ms: time_ms,
            velocity: 0.0,
        }
    }

    /// Record a sample and refresh the velocity estimate.
    ///
    /// A sample with no elapsed time yields zero velocity instead of NaN/inf.
    pub fn sample(&mut self, x: f32, time_ms: f64) {
        let dt = time_ms - self.last_time_ms;
        let velocity = if dt > 0.0 {
            ((x - self.last_x) as f64 / dt) as f32
        } else {
            0.0
        };
        self.velocity = if velocity.is_finite() { velocity } else { 0.0 };
        self.last_x = x;
        self.last_time_ms = time_ms;
    }

    /// Signed pointer travel since the gesture started
    pub fn displacement(&self, x: f32) -> f32 {
        x - self.start_x
    }

    pub fn elapsed_ms(&self, time_ms: f64) -> f64 {
        time_ms - self.start_time_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_velocity_from_samples() {
        let mut session = DragSession::new(300.0, 0.0, 0.0);
        session.sample(280.0, 10.0);
        assert_eq!(session.velocity, -2.0);
        assert_eq!(session.last_x, 280.0);
        assert_eq!(session.last_time_ms, 10.0);
    }

    #[test]
    fn test_zero_elapsed_time_gives_zero_velocity() {
        let mut session = DragSession::new(300.0, 5.0, 0.0);
        session.sample(250.0, 5.0);
        assert_eq!(session.velocity, 0.0);

        // Clock going backwards is treated the same way
        session.sample(240.0, 4.0);
        assert_eq!(session.velocity, 0.0);
    }
}
