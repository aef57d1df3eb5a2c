use bevy::prelude::*;
use leafwing_input_manager::prelude::*;

/// Keyboard actions for a focused accordion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Actionlike)]
pub enum AccordionAction {
    /// Open or close the focused item
    Toggle,
    FocusNext,
    FocusPrevious,
    FocusFirst,
    FocusLast,
}

/// Create the default accordion input map
pub fn default_accordion_input_map() -> InputMap<AccordionAction> {
    let mut input_map = InputMap::default();

    input_map.insert(AccordionAction::Toggle, KeyCode::Enter);
    input_map.insert(AccordionAction::Toggle, KeyCode::Space);
    input_map.insert(AccordionAction::FocusNext, KeyCode::ArrowDown);
    input_map.insert(AccordionAction::FocusPrevious, KeyCode::ArrowUp);
    input_map.insert(AccordionAction::FocusFirst, KeyCode::Home);
    input_map.insert(AccordionAction::FocusLast, KeyCode::End);

    input_map
}
