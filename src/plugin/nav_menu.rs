//! Navigation menu plugin: mobile menu state and in-page anchor jumps

use bevy::prelude::*;

use crate::input::{GestureInput, GesturePhase};
use crate::nav_menu::*;
use crate::settings::NavMenuSettings;
use crate::types::*;

pub struct NavMenuPlugin;

impl Plugin for NavMenuPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<NavMenuSettings>();
        app.init_resource::<PageScroll>();

        app.add_message::<ToggleMobileMenu>();
        app.add_message::<MobileMenuChanged>();
        app.add_message::<JumpToAnchor>();
        app.add_message::<NavigateToRegion>();
        app.add_message::<GestureInput>();
        app.add_message::<ScrollRequest>();

        super::configure_sets(app);
        app.add_systems(
            Update,
            (
                handle_menu_toggles,
                close_menus_on_navigation,
                close_menus_on_outside_press,
                lock_page_scroll,
                handle_anchor_jumps,
            )
                .chain()
                .in_set(super::InputSet),
        );
    }
}

fn handle_menu_toggles(
    mut toggles: MessageReader<ToggleMobileMenu>,
    mut menus: Query<&mut MobileMenu>,
    mut changed: MessageWriter<MobileMenuChanged>,
) {
    for toggle in toggles.read() {
        let Ok(mut menu) = menus.get_mut(toggle.menu) else {
            continue;
        };
        let open = menu.toggle();
        changed.write(MobileMenuChanged { menu: toggle.menu, open });
    }
}

/// Any nav link click closes every open menu
fn close_menus_on_navigation(
    mut jumps: MessageReader<NavigateToRegion>,
    mut menus: Query<(Entity, &mut MobileMenu)>,
    mut changed: MessageWriter<MobileMenuChanged>,
) {
    if jumps.read().count() == 0 {
        return;
    }

    for (entity, mut menu) in &mut menus {
        if menu.open {
            menu.close();
            changed.write(MobileMenuChanged { menu: entity, open: false });
        }
    }
}

fn close_menus_on_outside_press(
    mut gestures: MessageReader<GestureInput>,
    mut menus: Query<(Entity, &mut MobileMenu)>,
    mut changed: MessageWriter<MobileMenuChanged>,
) {
    for gesture in gestures.read() {
        if gesture.phase != GesturePhase::Start {
            continue;
        }
        for (entity, mut menu) in &mut menus {
            if !menu.open || !menu.is_outside(gesture.position) {
                continue;
            }
            menu.close();
            changed.write(MobileMenuChanged { menu: entity, open: false });
        }
    }
}

fn lock_page_scroll(
    settings: Res<NavMenuSettings>,
    menus: Query<&MobileMenu>,
    mut page: ResMut<PageScroll>,
) {
    let locked = settings.lock_scroll_when_open && menus.iter().any(|menu| menu.open);
    // Leave the resource untouched otherwise; offset trackers watch its change tick
    if page.scroll_locked != locked {
        page.scroll_locked = locked;
    }
}

fn handle_anchor_jumps(
    mut jumps: MessageReader<JumpToAnchor>,
    settings: Res<NavMenuSettings>,
    regions: Query<&Region>,
    mut scrolls: MessageWriter<ScrollRequest>,
) {
    for jump in jumps.read() {
        if jump.region.as_str().is_empty() {
            continue;
        }
        let Some(region) = regions.iter().find(|region| region.id == jump.region) else {
            debug!("Skipping anchor to unknown region '{}'", jump.region);
            continue;
        };
        scrolls.write(ScrollRequest::page_to(anchor_offset(region.top, settings.anchor_offset)));
    }
}
