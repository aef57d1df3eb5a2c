//! FAQ-style accordion: at most one item open, keyboard focus movement

use bevy::prelude::*;

use crate::rate_limit::Debounce;

/// Accordion state, attached to the accordion's root entity
///
/// Pair it with an `InputMap<AccordionAction>` and `ActionState<AccordionAction>`
/// for keyboard navigation.
#[derive(Component, Clone, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    len: usize,
    open: Option<usize>,
    focused: Option<usize>,
}

impl Accordion {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            open: None,
            focused: None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn open_item(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Open `index` (closing any other) or close it if already open.
    ///
    /// Returns the new expanded state, or `None` for an out-of-range index.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        if self.open == Some(index) {
            self.open = None;
            Some(false)
        } else {
            self.open = Some(index);
            Some(true)
        }
    }

    pub fn close_all(&mut self) {
        self.open = None;
    }

    pub fn focus(&mut self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }
        self.focused = Some(index);
        self.focused
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// Move focus down one item; stays on the last item
    pub fn focus_next(&mut self) -> Option<usize> {
        let next = match self.focused {
            Some(index) if index + 1 < self.len => index + 1,
            Some(index) => index,
            None => 0,
        };
        self.focus(next)
    }

    /// Move focus up one item; stays on the first item
    pub fn focus_previous(&mut self) -> Option<usize> {
        let previous = self.focused.map_or(0, |index| index.saturating_sub(1));
        self.focus(previous)
    }

    pub fn focus_first(&mut self) -> Option<usize> {
        self.focus(0)
    }

    pub fn focus_last(&mut self) -> Option<usize> {
        self.focus(self.len.checked_sub(1)?)
    }
}

/// One question/answer pair of an accordion
///
/// `top`/`height` are page coordinates used to bring an opened item into view.
#[derive(Component, Clone, Debug)]
pub struct AccordionItem {
    pub accordion: Entity,
    pub index: usize,
    pub expanded: bool,
    pub top: f32,
    pub height: f32,
}

impl AccordionItem {
    pub fn new(accordion: Entity, index: usize, top: f32, height: f32) -> Self {
        Self {
            accordion,
            index,
            expanded: false,
            top,
            height,
        }
    }
}

/// Item clicked (or otherwise activated) by the host
#[derive(Message, Clone, Copy, Debug)]
pub struct ToggleAccordionItem {
    pub accordion: Entity,
    pub index: usize,
}

/// Fired after an item opened or closed
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccordionToggled {
    pub accordion: Entity,
    pub index: usize,
    pub expanded: bool,
}

/// Deferred bring-into-view for a just-opened item
#[derive(Component, Clone, Debug)]
pub struct PendingBringIntoView {
    pub index: usize,
    pub debounce: Debounce,
}

/// Page offset that brings an item into view, if it sits within `margin` of
/// either viewport edge
pub fn bring_into_view_offset(
    item_top: f32,
    item_height: f32,
    page_offset: f32,
    viewport_height: f32,
    margin: f32,
) -> Option<f32> {
    let top = item_top - page_offset;
    let bottom = top + item_height;
    (top < margin || bottom > viewport_height - margin).then(|| (item_top - margin).max(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_one_item_open() {
        let mut accordion = Accordion::new(3);
        assert_eq!(accordion.toggle(0), Some(true));
        assert_eq!(accordion.toggle(2), Some(true));
        assert!(!accordion.is_open(0));
        assert!(accordion.is_open(2));
    }

    #[test]
    fn test_toggle_open_item_closes_it() {
        let mut accordion = Accordion::new(3);
        accordion.toggle(1);
        assert_eq!(accordion.toggle(1), Some(false));
        assert_eq!(accordion.open_item(), None);
    }

    #[test]
    fn test_toggle_out_of_range() {
        let mut accordion = Accordion::new(2);
        accordion.toggle(0);
        assert_eq!(accordion.toggle(5), None);
        assert!(accordion.is_open(0));
    }

    #[test]
    fn test_focus_movement_is_bounded() {
        let mut accordion = Accordion::new(3);
        assert_eq!(accordion.focus_next(), Some(0));
        assert_eq!(accordion.focus_next(), Some(1));
        assert_eq!(accordion.focus_next(), Some(2));
        assert_eq!(accordion.focus_next(), Some(2));
        assert_eq!(accordion.focus_previous(), Some(1));
        assert_eq!(accordion.focus_first(), Some(0));
        assert_eq!(accordion.focus_previous(), Some(0));
        assert_eq!(accordion.focus_last(), Some(2));
    }

    #[test]
    fn test_empty_accordion() {
        let mut accordion = Accordion::new(0);
        assert_eq!(accordion.focus_next(), None);
        assert_eq!(accordion.focus_last(), None);
        assert_eq!(accordion.toggle(0), None);
    }

    #[test]
    fn test_bring_into_view() {
        // Comfortably inside an 800px viewport: nothing to do
        assert_eq!(bring_into_view_offset(1300.0, 200.0, 1000.0, 800.0, 100.0), None);
        // Too close to the top
        assert_eq!(bring_into_view_offset(1050.0, 200.0, 1000.0, 800.0, 100.0), Some(950.0));
        // Runs past the bottom margin
        assert_eq!(bring_into_view_offset(1600.0, 200.0, 1000.0, 800.0, 100.0), Some(1500.0));
    }
}
