//! # Bevy Page Scroll
//!
//! Scroll-driven navigation and drag scrolling for long, sectioned pages.
//!
//! ```rust,no_run
//! use bevy::prelude::*;
//! use bevy_page_scroll::prelude::*;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(PageScrollPlugin::new())
//!         .add_systems(Startup, setup_page)
//!         .run();
//! }
//!
//! fn setup_page(mut commands: Commands) {
//!     commands.spawn(Region::new("courses", 0.0, 900.0));
//!     commands.spawn(Region::new("reviews", 900.0, 700.0));
//!     commands.spawn(NavLink::new("courses"));
//!     commands.spawn(NavLink::new("reviews"));
//! }
//! ```
//!
//! ## Customization
//!
//! ```rust,no_run
//! use bevy::prelude::*;
//! use bevy_page_scroll::prelude::*;
//!
//! fn main() {
//!     let settings = PageScrollSettingsBuilder::new()
//!         .bias(120.0)
//!         .throttle_ms(50)
//!         .capability(InputCapability::Touch)
//!         .build();
//!
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(PageScrollPlugin::new().with_settings(settings))
//!         .run();
//! }
//! ```

pub mod plugin;
pub mod settings;
pub mod types;
pub mod input;
pub mod gesture;
pub mod scroll_spy;
pub mod rate_limit;
pub mod carousel;
pub mod accordion;
pub mod reveal;
pub mod nav_menu;
pub mod counter;
pub mod error;

pub mod prelude {
    //! Convenient re-exports for common usage
    pub use crate::plugin::{
        PageScrollPlugin, ScrollSpyPlugin, DragScrollPlugin, ScrollAnimationPlugin,
        AccordionPlugin, RevealPlugin, NavMenuPlugin, CounterPlugin, ScrollSpyState,
        InputSet, AnimationSet, TrackingSet,
    };
    pub use crate::settings::*;
    pub use crate::types::*;
    pub use crate::input::*;
    pub use crate::gesture::{DragScroller, DragSession, DragStrategy, PointerDrag, TouchFlick};
    pub use crate::scroll_spy::NavHighlighter;
    pub use crate::rate_limit::{RateLimit, Throttled, Debounced};
    pub use crate::carousel::{CarouselDirection, CarouselEdges, CarouselStep};
    pub use crate::accordion::{Accordion, AccordionItem, AccordionToggled, ToggleAccordionItem};
    pub use crate::reveal::{Reveal, Revealed, ScrollThreshold};
    pub use crate::nav_menu::{JumpToAnchor, MobileMenu, MobileMenuChanged, ToggleMobileMenu};
    pub use crate::counter::CountUp;
    pub use crate::error::SettingsError;
}
