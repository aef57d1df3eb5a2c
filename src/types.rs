//! Shared components, resources and messages

use std::fmt;

use bevy::prelude::*;

/// Identifier shared by a region and the nav links that point at it
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RegionId(String);

impl RegionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RegionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RegionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A labeled vertical span of the page
///
/// Geometry is in page coordinates (0 = top of the document, growing downward).
/// The host rewrites `top`/`height` whenever layout reflows.
#[derive(Component, Clone, Debug)]
pub struct Region {
    pub id: RegionId,
    pub top: f32,
    pub height: f32,
}

impl Region {
    pub fn new(id: impl Into<RegionId>, top: f32, height: f32) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Half-open containment: `top <= y < top + height`
    pub fn contains(&self, y: f32) -> bool {
        y >= self.top && y < self.bottom()
    }
}

/// Navigation entry bound to a region
///
/// Several links may target the same region (e.g. sidebar and mobile nav).
#[derive(Component, Clone, Debug)]
pub struct NavLink {
    pub target: RegionId,
    pub active: bool,
}

impl NavLink {
    pub fn new(target: impl Into<RegionId>) -> Self {
        Self {
            target: target.into(),
            active: false,
        }
    }
}

/// Vertical page scroll state
///
/// The host keeps `offset` and the viewport size current; the scroll animator
/// also writes `offset` while `target` is set.
#[derive(Resource, Clone, Debug, Default)]
pub struct PageScroll {
    /// Current vertical offset (pixels, >= 0)
    pub offset: f32,
    /// Viewport width (pixels)
    pub viewport_width: f32,
    /// Viewport height (pixels)
    pub viewport_height: f32,
    /// In-flight smooth scroll target
    pub target: Option<f32>,
    /// Set while an overlay (the mobile menu) owns the screen; hosts should
    /// ignore user scroll input meanwhile
    pub scroll_locked: bool,
}

impl PageScroll {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            viewport_width,
            viewport_height,
            ..default()
        }
    }

    /// Viewports narrower than `breakpoint` are treated as mobile
    pub fn is_mobile(&self, breakpoint: f32) -> bool {
        self.viewport_width < breakpoint
    }
}

/// Horizontally scrollable strip (e.g. a reviews carousel)
#[derive(Component, Clone, Debug, Default)]
pub struct ScrollContainer {
    /// Current horizontal offset (pixels)
    pub offset: f32,
    /// Total width of the scrollable content
    pub content_width: f32,
    /// Visible width of the strip
    pub viewport_width: f32,
    /// Screen-space hit area in window coordinates (origin top-left)
    pub bounds: Rect,
    /// In-flight smooth scroll target
    pub target: Option<f32>,
}

impl ScrollContainer {
    pub fn new(content_width: f32, viewport_width: f32, bounds: Rect) -> Self {
        Self {
            content_width,
            viewport_width,
            bounds,
            ..default()
        }
    }

    pub fn max_offset(&self) -> f32 {
        (self.content_width - self.viewport_width).max(0.0)
    }

    pub fn clamp(&self, offset: f32) -> f32 {
        offset.clamp(0.0, self.max_offset())
    }

    /// Jump to `offset`, clamped to the scrollable range
    pub fn set_offset(&mut self, offset: f32) {
        self.offset = self.clamp(offset);
    }
}

/// What a scroll request moves
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollTarget {
    Page,
    Container(Entity),
}

/// Absolute or relative motion
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollMotion {
    To(f32),
    By(f32),
}

/// How a scroll request reaches its destination
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Instant,
    #[default]
    Smooth,
}

/// Request for the scroll-animation primitive
///
/// Fire-and-forget: once written there is no handle to cancel it, but a later
/// request (or a new drag on the same container) replaces it.
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct ScrollRequest {
    pub target: ScrollTarget,
    pub motion: ScrollMotion,
    pub easing: Easing,
}

impl ScrollRequest {
    pub fn page_to(offset: f32) -> Self {
        Self {
            target: ScrollTarget::Page,
            motion: ScrollMotion::To(offset),
            easing: Easing::Smooth,
        }
    }

    pub fn container_by(container: Entity, delta: f32) -> Self {
        Self {
            target: ScrollTarget::Container(container),
            motion: ScrollMotion::By(delta),
            easing: Easing::Smooth,
        }
    }
}

/// Fired when the highlighted region changes
#[derive(Message, Clone, Debug, PartialEq)]
pub struct ActiveRegionChanged {
    pub previous: Option<RegionId>,
    pub current: RegionId,
}

/// Ask to jump the page to a region (typically a nav link click)
#[derive(Message, Clone, Debug)]
pub struct NavigateToRegion {
    pub region: RegionId,
}

impl NavigateToRegion {
    pub fn new(region: impl Into<RegionId>) -> Self {
        Self { region: region.into() }
    }
}
