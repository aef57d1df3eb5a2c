//! Mobile navigation menu and in-page anchor links

use bevy::prelude::*;

use crate::types::RegionId;

/// Collapsible navigation menu for narrow viewports
///
/// `panel` and `toggle` are window-space rectangles (origin top-left, like
/// [`GestureInput`](crate::input::GestureInput) positions). A press outside both
/// closes an open menu.
#[derive(Component, Clone, Debug, Default, PartialEq)]
pub struct MobileMenu {
    pub open: bool,
    pub panel: Rect,
    pub toggle: Rect,
}

impl MobileMenu {
    pub fn new(panel: Rect, toggle: Rect) -> Self {
        Self {
            open: false,
            panel,
            toggle,
        }
    }

    /// Flip the menu; returns the new state
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu; returns true if it was open
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    pub fn is_outside(&self, point: Vec2) -> bool {
        !self.panel.contains(point) && !self.toggle.contains(point)
    }

    /// Close for a press at `point` outside the panel and the toggle button
    pub fn close_on_outside_press(&mut self, point: Vec2) -> bool {
        self.open && self.is_outside(point) && self.close()
    }
}

/// Toggle button of a menu was clicked
#[derive(Message, Clone, Copy, Debug)]
pub struct ToggleMobileMenu {
    pub menu: Entity,
}

/// Fired whenever a menu opens or closes
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct MobileMenuChanged {
    pub menu: Entity,
    pub open: bool,
}

/// In-page link outside the nav (e.g. a hero "see courses" button)
///
/// Scrolls without touching the nav highlight; an empty id (a bare `#` link)
/// is ignored.
#[derive(Message, Clone, Debug)]
pub struct JumpToAnchor {
    pub region: RegionId,
}

impl JumpToAnchor {
    pub fn new(region: impl Into<RegionId>) -> Self {
        Self {
            region: region.into(),
        }
    }
}

/// Page offset for an anchor target at `region_top`
pub fn anchor_offset(region_top: f32, offset: f32) -> f32 {
    (region_top - offset).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> MobileMenu {
        MobileMenu::new(Rect::new(0.0, 60.0, 400.0, 600.0), Rect::new(340.0, 0.0, 400.0, 60.0))
    }

    #[test]
    fn test_toggle_and_close() {
        let mut menu = menu();
        assert!(menu.toggle());
        assert!(!menu.toggle());
        assert!(!menu.close());

        menu.toggle();
        assert!(menu.close());
        assert!(!menu.open);
    }

    #[test]
    fn test_outside_press_closes() {
        let mut menu = menu();
        menu.toggle();

        // Inside the panel, then on the toggle button
        assert!(!menu.close_on_outside_press(Vec2::new(200.0, 300.0)));
        assert!(!menu.close_on_outside_press(Vec2::new(370.0, 30.0)));
        assert!(menu.open);

        assert!(menu.close_on_outside_press(Vec2::new(800.0, 300.0)));
        assert!(!menu.open);
    }

    #[test]
    fn test_outside_press_on_closed_menu() {
        let mut menu = menu();
        assert!(!menu.close_on_outside_press(Vec2::new(800.0, 300.0)));
    }

    #[test]
    fn test_anchor_offset() {
        assert_eq!(anchor_offset(900.0, 30.0), 870.0);
        assert_eq!(anchor_offset(10.0, 30.0), 0.0);
    }
}
