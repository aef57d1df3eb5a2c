//! Accordion plugin: click/keyboard toggling and bring-into-view

use std::time::Duration;

use bevy::prelude::*;
use leafwing_input_manager::prelude::{ActionState, InputManagerPlugin};

use crate::accordion::*;
use crate::input::AccordionAction;
use crate::rate_limit::Debounce;
use crate::settings::AccordionSettings;
use crate::types::{PageScroll, ScrollRequest};

pub struct AccordionPlugin;

impl Plugin for AccordionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AccordionSettings>();
        app.init_resource::<PageScroll>();

        // Register leafwing-input-manager plugin for action-based input
        if !app.is_plugin_added::<InputManagerPlugin<AccordionAction>>() {
            app.add_plugins(InputManagerPlugin::<AccordionAction>::default());
        }

        app.add_message::<ToggleAccordionItem>();
        app.add_message::<AccordionToggled>();
        app.add_message::<ScrollRequest>();

        super::configure_sets(app);
        app.add_systems(
            Update,
            (
                handle_accordion_clicks,
                handle_accordion_keys,
                sync_accordion_items,
                bring_opened_items_into_view,
            )
                .chain()
                .in_set(super::InputSet),
        );
    }
}

fn toggle_item(
    entity: Entity,
    accordion: &mut Accordion,
    index: usize,
    toggled: &mut MessageWriter<AccordionToggled>,
) {
    if let Some(expanded) = accordion.toggle(index) {
        toggled.write(AccordionToggled {
            accordion: entity,
            index,
            expanded,
        });
    }
}

fn handle_accordion_clicks(
    mut clicks: MessageReader<ToggleAccordionItem>,
    mut accordions: Query<&mut Accordion>,
    mut toggled: MessageWriter<AccordionToggled>,
) {
    for click in clicks.read() {
        let Ok(mut accordion) = accordions.get_mut(click.accordion) else {
            continue;
        };
        accordion.focus(click.index);
        toggle_item(click.accordion, &mut accordion, click.index, &mut toggled);
    }
}

/// Keyboard navigation for accordions that hold focus
fn handle_accordion_keys(
    mut accordions: Query<(Entity, &mut Accordion, &ActionState<AccordionAction>)>,
    mut toggled: MessageWriter<AccordionToggled>,
) {
    for (entity, mut accordion, action_state) in &mut accordions {
        let Some(focused) = accordion.focused() else {
            continue;
        };

        if action_state.just_pressed(&AccordionAction::Toggle) {
            toggle_item(entity, &mut accordion, focused, &mut toggled);
        } else if action_state.just_pressed(&AccordionAction::FocusNext) {
            accordion.focus_next();
        } else if action_state.just_pressed(&AccordionAction::FocusPrevious) {
            accordion.focus_previous();
        } else if action_state.just_pressed(&AccordionAction::FocusFirst) {
            accordion.focus_first();
        } else if action_state.just_pressed(&AccordionAction::FocusLast) {
            accordion.focus_last();
        }
    }
}

/// Mirror accordion state onto items and schedule bring-into-view for opened ones
fn sync_accordion_items(
    mut commands: Commands,
    mut toggles: MessageReader<AccordionToggled>,
    accordions: Query<&Accordion>,
    mut items: Query<&mut AccordionItem>,
    settings: Res<AccordionSettings>,
    time: Res<Time>,
) {
    for toggle in toggles.read() {
        let Ok(accordion) = accordions.get(toggle.accordion) else {
            continue;
        };

        for mut item in &mut items {
            if item.accordion != toggle.accordion {
                continue;
            }
            let expanded = accordion.is_open(item.index);
            if item.expanded != expanded {
                item.expanded = expanded;
            }
        }

        if toggle.expanded {
            let mut debounce = Debounce::new(Duration::from_millis(settings.reveal_delay_ms));
            debounce.trigger(time.elapsed());
            commands.entity(toggle.accordion).insert(PendingBringIntoView {
                index: toggle.index,
                debounce,
            });
        }
    }
}

fn bring_opened_items_into_view(
    mut commands: Commands,
    time: Res<Time>,
    page: Res<PageScroll>,
    settings: Res<AccordionSettings>,
    mut pendings: Query<(Entity, &Accordion, &mut PendingBringIntoView)>,
    items: Query<&AccordionItem>,
    mut scrolls: MessageWriter<ScrollRequest>,
) {
    let now = time.elapsed();

    for (entity, accordion, mut pending) in &mut pendings {
        if !pending.debounce.fire(now) {
            continue;
        }
        commands.entity(entity).remove::<PendingBringIntoView>();

        // Closed again before the delay ran out
        if !accordion.is_open(pending.index) {
            continue;
        }

        let item = items
            .iter()
            .find(|item| item.accordion == entity && item.index == pending.index);
        let Some(item) = item else {
            continue;
        };

        if let Some(offset) = bring_into_view_offset(
            item.top,
            item.height,
            page.offset,
            page.viewport_height,
            settings.reveal_margin,
        ) {
            scrolls.write(ScrollRequest::page_to(offset));
        }
    }
}
