//! Count-up statistics that animate once they scroll into view

use std::time::Duration;

use bevy::prelude::*;

use crate::settings::CounterSettings;

/// Number that counts from zero to `target` the first time it becomes visible
#[derive(Component, Clone, Debug)]
pub struct CountUp {
    pub target: u64,
    /// Appended when formatting (e.g. "+" or "%")
    pub suffix: String,
    /// Page coordinates
    pub top: f32,
    pub height: f32,
    /// Value currently shown
    pub value: u64,
    started_at: Option<Duration>,
    finished: bool,
}

impl CountUp {
    pub fn new(target: u64, top: f32, height: f32) -> Self {
        Self {
            target,
            suffix: String::new(),
            top,
            height,
            value: 0,
            started_at: None,
            finished: false,
        }
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Start counting at `now`; later calls are ignored
    pub fn start(&mut self, now: Duration) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    /// Move the shown value to where it should be at `now`.
    ///
    /// Returns true if the value changed.
    pub fn advance(&mut self, now: Duration, settings: &CounterSettings) -> bool {
        let Some(started_at) = self.started_at else {
            return false;
        };
        let (value, finished) = count_value(
            self.target,
            now.saturating_sub(started_at),
            Duration::from_millis(settings.duration_ms),
            Duration::from_millis(settings.step_ms),
        );
        self.finished = finished;
        if self.value == value {
            return false;
        }
        self.value = value;
        true
    }

    pub fn text(&self) -> String {
        format!("{}{}", self.value, self.suffix)
    }
}

/// Value shown `elapsed` after a count started, and whether it reached `target`
///
/// The count adds `target / (duration / step)` once per step, the first step
/// landing immediately, and shows the floor until the running total reaches
/// the target.
pub fn count_value(target: u64, elapsed: Duration, duration: Duration, step: Duration) -> (u64, bool) {
    if step.is_zero() || duration.is_zero() {
        return (target, true);
    }

    let steps_total = duration.as_nanos() as f64 / step.as_nanos() as f64;
    let increment = target as f64 / steps_total;
    let steps = (elapsed.as_nanos() / step.as_nanos()) as f64 + 1.0;
    let current = steps * increment;

    if current < target as f64 {
        (current.floor() as u64, false)
    } else {
        (target, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DURATION: Duration = Duration::from_millis(2000);
    const STEP: Duration = Duration::from_millis(16);

    #[test]
    fn test_count_value_steps() {
        // 1000 over 125 steps of 16ms: 8 per step
        assert_eq!(count_value(1000, Duration::ZERO, DURATION, STEP), (8, false));
        assert_eq!(count_value(1000, Duration::from_millis(160), DURATION, STEP), (88, false));
        assert_eq!(count_value(1000, Duration::from_millis(1983), DURATION, STEP), (992, false));
        assert_eq!(count_value(1000, Duration::from_millis(1984), DURATION, STEP), (1000, true));
        assert_eq!(count_value(1000, Duration::from_secs(10), DURATION, STEP), (1000, true));
    }

    #[test]
    fn test_count_value_floors() {
        // 50 over 125 steps: 0.4 per step
        assert_eq!(count_value(50, Duration::ZERO, DURATION, STEP), (0, false));
        assert_eq!(count_value(50, Duration::from_millis(48), DURATION, STEP), (1, false));
    }

    #[test]
    fn test_zero_target_finishes_at_once() {
        assert_eq!(count_value(0, Duration::ZERO, DURATION, STEP), (0, true));
    }

    #[test]
    fn test_advance_before_start_does_nothing() {
        let mut counter = CountUp::new(500, 0.0, 100.0).with_suffix("+");
        assert!(!counter.advance(Duration::from_secs(1), &CounterSettings::default()));
        assert_eq!(counter.text(), "0+");
    }

    #[test]
    fn test_advance_runs_to_target() {
        let settings = CounterSettings::default();
        let mut counter = CountUp::new(500, 0.0, 100.0).with_suffix("+");
        counter.start(Duration::from_secs(3));
        counter.start(Duration::from_secs(4));

        assert!(counter.advance(Duration::from_secs(3), &settings));
        assert_eq!(counter.value, 4);
        assert!(!counter.is_finished());

        assert!(counter.advance(Duration::from_secs(5), &settings));
        assert!(counter.is_finished());
        assert_eq!(counter.text(), "500+");
    }
}
