//! Modular settings system for page scrolling
//!
//! Each behavior has its own settings resource that can be configured independently.
//! Use `PageScrollSettingsBuilder` for convenient initialization, or load the whole
//! set from JSON with [`PageScrollSettings::load_json`].

mod scroll_spy;
mod drag;
mod carousel;
mod accordion;
mod reveal;
mod animation;
mod nav_menu;
mod counter;

pub use scroll_spy::*;
pub use drag::*;
pub use carousel::*;
pub use accordion::*;
pub use reveal::*;
pub use animation::*;
pub use nav_menu::*;
pub use counter::*;

use std::path::Path;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SettingsError};
use crate::input::InputCapability;
use crate::rate_limit::RateLimit;

/// All page scroll settings
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageScrollSettings {
    pub scroll_spy: ScrollSpySettings,
    pub drag: DragSettings,
    pub carousel: CarouselSettings,
    pub accordion: AccordionSettings,
    pub reveal: RevealSettings,
    pub animation: AnimationSettings,
    pub nav_menu: NavMenuSettings,
    pub counter: CounterSettings,
}

impl PageScrollSettings {
    /// Parse settings from JSON; missing fields fall back to defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read and parse a JSON settings file
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json).inspect_err(|err| {
            warn!("Rejected page scroll settings {}: {}", path.as_ref().display(), err);
        })
    }

    /// Reject knobs that would make the behaviors meaningless
    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("scroll_spy.bias", self.scroll_spy.bias),
            ("scroll_spy.jump_offset", self.scroll_spy.jump_offset),
            ("drag.pointer.multiplier", self.drag.pointer.multiplier),
            ("drag.pointer.velocity_threshold", self.drag.pointer.velocity_threshold),
            ("drag.pointer.momentum_factor", self.drag.pointer.momentum_factor),
            ("drag.touch.multiplier", self.drag.touch.multiplier),
            ("drag.touch.max_duration_ms", self.drag.touch.max_duration_ms),
            ("drag.touch.min_distance", self.drag.touch.min_distance),
            ("drag.touch.momentum_factor", self.drag.touch.momentum_factor),
            ("carousel.step", self.carousel.step),
            ("carousel.mobile_step", self.carousel.mobile_step),
            ("carousel.mobile_breakpoint", self.carousel.mobile_breakpoint),
            ("carousel.edge_tolerance", self.carousel.edge_tolerance),
            ("accordion.reveal_margin", self.accordion.reveal_margin),
            ("reveal.root_margin_bottom", self.reveal.root_margin_bottom),
            ("animation.smoothness", self.animation.smoothness),
            ("animation.snap_distance", self.animation.snap_distance),
            ("nav_menu.anchor_offset", self.nav_menu.anchor_offset),
        ];

        for (field, value) in checks {
            if !value.is_finite() || value < 0.0 {
                return Err(SettingsError::Invalid {
                    field,
                    reason: format!("expected a finite non-negative number, got {value}"),
                });
            }
        }

        // Zero here would freeze drags or leave smooth scrolls short of their target
        let positive = [
            ("drag.pointer.multiplier", self.drag.pointer.multiplier),
            ("drag.touch.multiplier", self.drag.touch.multiplier),
            ("animation.smoothness", self.animation.smoothness),
        ];

        for (field, value) in positive {
            if value <= 0.0 {
                return Err(SettingsError::Invalid {
                    field,
                    reason: format!("expected a positive number, got {value}"),
                });
            }
        }

        if self.counter.duration_ms == 0 || self.counter.step_ms == 0 {
            return Err(SettingsError::Invalid {
                field: "counter.step_ms",
                reason: format!(
                    "expected a positive step and duration, got {}ms in {}ms",
                    self.counter.step_ms, self.counter.duration_ms
                ),
            });
        }

        let fractions = [
            ("reveal.threshold", self.reveal.threshold),
            ("counter.threshold", self.counter.threshold),
        ];

        for (field, value) in fractions {
            if !(0.0..=1.0).contains(&value) {
                return Err(SettingsError::Invalid {
                    field,
                    reason: format!("expected a fraction in 0.0..=1.0, got {value}"),
                });
            }
        }

        Ok(())
    }

    /// Insert all settings as resources into the app
    pub fn insert_into(self, app: &mut App) {
        app.insert_resource(self.scroll_spy);
        app.insert_resource(self.drag);
        app.insert_resource(self.carousel);
        app.insert_resource(self.accordion);
        app.insert_resource(self.reveal);
        app.insert_resource(self.animation);
        app.insert_resource(self.nav_menu);
        app.insert_resource(self.counter);
    }
}

/// Builder for configuring all page scroll settings at once
///
/// # Example
/// ```no_run
/// use bevy_page_scroll::settings::PageScrollSettingsBuilder;
///
/// let settings = PageScrollSettingsBuilder::default()
///     .bias(120.0)
///     .throttle_ms(50)
///     .build();
/// ```
#[derive(Default)]
pub struct PageScrollSettingsBuilder {
    settings: PageScrollSettings,
}

impl PageScrollSettingsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    // Scroll spy
    pub fn bias(mut self, bias: f32) -> Self {
        self.settings.scroll_spy.bias = bias;
        self
    }

    pub fn throttle_ms(mut self, ms: u64) -> Self {
        self.settings.scroll_spy.rate_limit = RateLimit::Throttle(ms);
        self
    }

    pub fn debounce_ms(mut self, ms: u64) -> Self {
        self.settings.scroll_spy.rate_limit = RateLimit::Debounce(ms);
        self
    }

    pub fn rate_limit(mut self, rate_limit: RateLimit) -> Self {
        self.settings.scroll_spy.rate_limit = rate_limit;
        self
    }

    // Input capability
    pub fn capability(mut self, capability: InputCapability) -> Self {
        self.settings.drag.capability = Some(capability);
        self
    }

    // Custom settings
    pub fn scroll_spy(mut self, scroll_spy: ScrollSpySettings) -> Self {
        self.settings.scroll_spy = scroll_spy;
        self
    }

    pub fn drag(mut self, drag: DragSettings) -> Self {
        self.settings.drag = drag;
        self
    }

    pub fn carousel(mut self, carousel: CarouselSettings) -> Self {
        self.settings.carousel = carousel;
        self
    }

    pub fn accordion(mut self, accordion: AccordionSettings) -> Self {
        self.settings.accordion = accordion;
        self
    }

    pub fn reveal(mut self, reveal: RevealSettings) -> Self {
        self.settings.reveal = reveal;
        self
    }

    pub fn animation(mut self, animation: AnimationSettings) -> Self {
        self.settings.animation = animation;
        self
    }

    pub fn nav_menu(mut self, nav_menu: NavMenuSettings) -> Self {
        self.settings.nav_menu = nav_menu;
        self
    }

    pub fn counter(mut self, counter: CounterSettings) -> Self {
        self.settings.counter = counter;
        self
    }

    pub fn build(self) -> PageScrollSettings {
        self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = PageScrollSettings::from_json_str(
            r#"{ "scroll_spy": { "bias": 120.0 }, "drag": { "pointer": { "multiplier": 1.5 } } }"#,
        )
        .unwrap();

        assert_eq!(settings.scroll_spy.bias, 120.0);
        assert_eq!(settings.scroll_spy.rate_limit, RateLimit::Throttle(100));
        assert_eq!(settings.drag.pointer.multiplier, 1.5);
        assert_eq!(settings.drag.pointer.momentum_factor, 15.0);
        assert_eq!(settings.drag.touch.max_duration_ms, 300.0);
    }

    #[test]
    fn test_rate_limit_from_json() {
        let settings = PageScrollSettings::from_json_str(
            r#"{ "scroll_spy": { "rate_limit": { "Debounce": 10 } } }"#,
        )
        .unwrap();
        assert_eq!(settings.scroll_spy.rate_limit, RateLimit::Debounce(10));
    }

    #[test]
    fn test_negative_knob_rejected() {
        let err = PageScrollSettings::from_json_str(r#"{ "carousel": { "step": -1.0 } }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "carousel.step", .. }));
    }

    #[test]
    fn test_threshold_out_of_range_rejected() {
        let mut settings = PageScrollSettings::default();
        settings.reveal.threshold = 1.5;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_zero_smoothness_rejected() {
        let err = PageScrollSettings::from_json_str(r#"{ "animation": { "smoothness": 0.0 } }"#)
            .unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "animation.smoothness", .. }));
    }

    #[test]
    fn test_zero_drag_multiplier_rejected() {
        let mut settings = PageScrollSettings::default();
        settings.drag.touch.multiplier = 0.0;
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::Invalid { field: "drag.touch.multiplier", .. })
        ));

        settings.drag.touch.multiplier = 1.5;
        settings.drag.pointer.multiplier = 0.0;
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::Invalid { field: "drag.pointer.multiplier", .. })
        ));
    }

    #[test]
    fn test_counter_settings_checked() {
        let mut settings = PageScrollSettings::default();
        settings.counter.step_ms = 0;
        assert!(settings.validate().is_err());

        settings.counter.step_ms = 16;
        settings.counter.threshold = 2.0;
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::Invalid { field: "counter.threshold", .. })
        ));
    }

    #[test]
    fn test_malformed_json() {
        let err = PageScrollSettings::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_builder() {
        let settings = PageScrollSettingsBuilder::new()
            .bias(80.0)
            .debounce_ms(10)
            .capability(InputCapability::Touch)
            .build();
        assert_eq!(settings.scroll_spy.bias, 80.0);
        assert_eq!(settings.scroll_spy.rate_limit, RateLimit::Debounce(10));
        assert_eq!(settings.drag.capability, Some(InputCapability::Touch));
    }
}
