//! Staggered reveal-on-scroll and scroll threshold flags

use bevy::prelude::*;

/// Element that fades in the first time it scrolls into view
#[derive(Component, Clone, Debug)]
pub struct Reveal {
    /// Page order; elements revealed in the same pass are staggered by it
    pub index: usize,
    /// Page coordinates
    pub top: f32,
    pub height: f32,
    /// Set once, never cleared
    pub revealed: bool,
    /// Delay assigned when revealed: position within its batch times the stagger (milliseconds)
    pub delay_ms: u32,
}

impl Reveal {
    pub fn new(index: usize, top: f32, height: f32) -> Self {
        Self {
            index,
            top,
            height,
            revealed: false,
            delay_ms: 0,
        }
    }
}

/// Fired once per element when it is revealed
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Revealed {
    pub entity: Entity,
    pub delay_ms: u32,
}

/// Fraction of `[top, top + height)` that lies inside `[view_top, view_bottom)`
pub fn visible_fraction(top: f32, height: f32, view_top: f32, view_bottom: f32) -> f32 {
    if height <= 0.0 {
        return if top >= view_top && top < view_bottom { 1.0 } else { 0.0 };
    }
    let overlap = (top + height).min(view_bottom) - top.max(view_top);
    (overlap / height).clamp(0.0, 1.0)
}

/// True when an element should be revealed for the given viewport
pub fn should_reveal(
    top: f32,
    height: f32,
    page_offset: f32,
    viewport_height: f32,
    root_margin_bottom: f32,
    threshold: f32,
) -> bool {
    let view_bottom = page_offset + viewport_height - root_margin_bottom;
    let fraction = visible_fraction(top, height, page_offset, view_bottom);
    fraction > 0.0 && fraction >= threshold
}

/// Boolean flag that flips once the page scrolls past `threshold`
///
/// Drives states such as a condensed header or a hidden scroll hint.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct ScrollThreshold {
    pub threshold: f32,
    pub passed: bool,
}

impl ScrollThreshold {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            passed: false,
        }
    }

    pub fn evaluate(&self, page_offset: f32) -> bool {
        page_offset > self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_fraction() {
        assert_eq!(visible_fraction(0.0, 100.0, 0.0, 500.0), 1.0);
        assert_eq!(visible_fraction(450.0, 100.0, 0.0, 500.0), 0.5);
        assert_eq!(visible_fraction(600.0, 100.0, 0.0, 500.0), 0.0);
        assert_eq!(visible_fraction(-50.0, 100.0, 0.0, 500.0), 0.5);
    }

    #[test]
    fn test_bottom_margin_delays_reveal() {
        // Element top at 700 in an 800px viewport: 100px visible without margin,
        // only 20px with an 80px bottom margin
        assert!(should_reveal(700.0, 400.0, 0.0, 800.0, 0.0, 0.1));
        assert!(!should_reveal(700.0, 400.0, 0.0, 800.0, 80.0, 0.1));
        assert!(should_reveal(700.0, 400.0, 50.0, 800.0, 80.0, 0.1));
    }

    #[test]
    fn test_threshold_flag() {
        let header = ScrollThreshold::new(100.0);
        assert!(!header.evaluate(100.0));
        assert!(header.evaluate(100.5));
    }
}
