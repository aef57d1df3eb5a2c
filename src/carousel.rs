//! Carousel step buttons and edge detection

use bevy::prelude::*;

use crate::settings::CarouselSettings;

/// Direction of a carousel button
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CarouselDirection {
    Previous,
    Next,
}

impl CarouselDirection {
    pub fn sign(self) -> f32 {
        match self {
            CarouselDirection::Previous => -1.0,
            CarouselDirection::Next => 1.0,
        }
    }
}

/// Prev/next button pressed for a container
#[derive(Message, Clone, Copy, Debug)]
pub struct CarouselStep {
    pub container: Entity,
    pub direction: CarouselDirection,
}

/// Whether a container sits at either end of its scroll range
///
/// Hosts dim or disable the matching button while a flag is set.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CarouselEdges {
    pub at_start: bool,
    pub at_end: bool,
}

impl CarouselEdges {
    pub fn compute(offset: f32, max_offset: f32, tolerance: f32) -> Self {
        Self {
            at_start: offset <= tolerance,
            at_end: offset >= max_offset - tolerance,
        }
    }
}

/// Signed scroll delta for one button press at the given viewport width
pub fn step_delta(settings: &CarouselSettings, viewport_width: f32, direction: CarouselDirection) -> f32 {
    let step = if viewport_width < settings.mobile_breakpoint {
        settings.mobile_step
    } else {
        settings.step
    };
    step * direction.sign()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_depends_on_viewport() {
        let settings = CarouselSettings::default();
        assert_eq!(step_delta(&settings, 1280.0, CarouselDirection::Next), 430.0);
        assert_eq!(step_delta(&settings, 375.0, CarouselDirection::Next), 340.0);
        assert_eq!(step_delta(&settings, 375.0, CarouselDirection::Previous), -340.0);
    }

    #[test]
    fn test_edges_with_tolerance() {
        assert_eq!(
            CarouselEdges::compute(3.0, 1000.0, 5.0),
            CarouselEdges { at_start: true, at_end: false }
        );
        assert_eq!(
            CarouselEdges::compute(500.0, 1000.0, 5.0),
            CarouselEdges { at_start: false, at_end: false }
        );
        assert_eq!(
            CarouselEdges::compute(996.0, 1000.0, 5.0),
            CarouselEdges { at_start: false, at_end: true }
        );
        // Nothing to scroll: both edges
        assert_eq!(
            CarouselEdges::compute(0.0, 0.0, 5.0),
            CarouselEdges { at_start: true, at_end: true }
        );
    }
}
