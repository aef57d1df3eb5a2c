//! Bevy plugins for page scrolling interactions
//!
//! `PageScrollPlugin` registers everything; each behavior is also available as
//! a standalone plugin.

mod animation;
mod scroll_spy;
mod drag_scroll;
mod accordion;
mod reveal;
mod nav_menu;
mod counter;

pub use animation::{ScrollAnimationPlugin, ease_toward};
pub use scroll_spy::{ScrollSpyPlugin, ScrollSpyState};
pub use drag_scroll::DragScrollPlugin;
pub use accordion::AccordionPlugin;
pub use reveal::RevealPlugin;
pub use nav_menu::NavMenuPlugin;
pub use counter::CounterPlugin;

use bevy::prelude::*;

use crate::settings::PageScrollSettings;
use crate::types::PageScroll;

/// Systems that turn input and host messages into state changes
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct InputSet;

/// Systems that move scroll offsets toward their targets
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct AnimationSet;

/// Systems that derive UI state (highlights, edges, reveals) from offsets
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrackingSet;

pub(crate) fn configure_sets(app: &mut App) {
    app.configure_sets(Update, (InputSet, AnimationSet, TrackingSet).chain());
}

/// Page scroll plugin: every page interaction at once
pub struct PageScrollPlugin {
    settings: PageScrollSettings,
}

impl PageScrollPlugin {
    /// Create the plugin with default settings
    ///
    /// # Example
    /// ```ignore
    /// use bevy::prelude::*;
    /// use bevy_page_scroll::prelude::*;
    ///
    /// App::new()
    ///     .add_plugins(DefaultPlugins)
    ///     .add_plugins(PageScrollPlugin::new())
    ///     .run();
    /// ```
    pub fn new() -> Self {
        Self {
            settings: PageScrollSettings::default(),
        }
    }

    /// Set custom settings
    pub fn with_settings(mut self, settings: PageScrollSettings) -> Self {
        self.settings = settings;
        self
    }
}

impl Default for PageScrollPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for PageScrollPlugin {
    fn build(&self, app: &mut App) {
        // Settings go in first so the sub-plugins' init_resource keeps them
        self.settings.clone().insert_into(app);
        app.init_resource::<PageScroll>();

        configure_sets(app);

        app.add_plugins((
            ScrollAnimationPlugin,
            ScrollSpyPlugin,
            DragScrollPlugin,
            AccordionPlugin,
            RevealPlugin,
            NavMenuPlugin,
            CounterPlugin,
        ));
    }
}
