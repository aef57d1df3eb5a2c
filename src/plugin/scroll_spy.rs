//! Scroll spy plugin: keeps `NavLink::active` in sync with the page offset

use bevy::prelude::*;

use crate::rate_limit::RateLimiter;
use crate::scroll_spy::{apply_highlight, NavHighlighter};
use crate::settings::ScrollSpySettings;
use crate::types::*;

pub struct ScrollSpyPlugin;

impl Plugin for ScrollSpyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScrollSpySettings>();
        app.init_resource::<PageScroll>();

        let settings = app.world().resource::<ScrollSpySettings>().clone();
        app.insert_resource(ScrollSpyState::new(&settings));

        app.add_message::<ActiveRegionChanged>();
        app.add_message::<NavigateToRegion>();
        app.add_message::<ScrollRequest>();

        super::configure_sets(app);
        app.add_systems(Update, handle_nav_jumps.in_set(super::InputSet));
        app.add_systems(
            Update,
            (sync_spy_settings, track_scroll_position)
                .chain()
                .in_set(super::TrackingSet),
        );
    }
}

/// Highlighter plus the limiter guarding its recomputation
#[derive(Resource, Debug)]
pub struct ScrollSpyState {
    pub highlighter: NavHighlighter,
    limiter: RateLimiter,
}

impl ScrollSpyState {
    pub fn new(settings: &ScrollSpySettings) -> Self {
        Self {
            highlighter: NavHighlighter::new(settings.bias),
            limiter: RateLimiter::new(settings.rate_limit),
        }
    }
}

/// Flag exactly the links targeting `active`; untouched links keep their change ticks
fn highlight_links(links: &mut Query<&mut NavLink>, active: &RegionId) {
    for mut link in links.iter_mut() {
        if apply_highlight(link.bypass_change_detection(), active) {
            link.set_changed();
        }
    }
}

fn sync_spy_settings(
    settings: Res<ScrollSpySettings>,
    time: Res<Time>,
    mut spy: ResMut<ScrollSpyState>,
) {
    if !settings.is_changed() {
        return;
    }
    spy.highlighter.set_bias(settings.bias);
    spy.limiter = RateLimiter::new(settings.rate_limit);
    spy.limiter.trigger(time.elapsed());
}

/// Match the page offset against regions, rate limited
pub(crate) fn track_scroll_position(
    time: Res<Time>,
    page: Res<PageScroll>,
    mut spy: ResMut<ScrollSpyState>,
    regions: Query<&Region>,
    changed_regions: Query<(), Changed<Region>>,
    mut links: Query<&mut NavLink>,
    mut changes: MessageWriter<ActiveRegionChanged>,
) {
    let now = time.elapsed();
    // `Mut::is_added` reads the tick without flagging the link as changed
    let new_links = links.iter_mut().any(|link| link.is_added());
    if page.is_changed() || !changed_regions.is_empty() || new_links {
        spy.limiter.trigger(now);
    }
    if !spy.limiter.poll(now) {
        return;
    }

    // No region under the probe: keep whatever is highlighted
    let Some((active, change)) = spy.highlighter.update(page.offset, regions.iter()) else {
        return;
    };

    highlight_links(&mut links, &active);

    if let Some(change) = change {
        debug!("Active region: {:?} -> {}", change.previous, change.current);
        changes.write(change);
    }
}

/// Jump to the region of a clicked nav link and highlight it right away
pub(crate) fn handle_nav_jumps(
    mut requests: MessageReader<NavigateToRegion>,
    settings: Res<ScrollSpySettings>,
    mut spy: ResMut<ScrollSpyState>,
    regions: Query<&Region>,
    mut links: Query<&mut NavLink>,
    mut scrolls: MessageWriter<ScrollRequest>,
    mut changes: MessageWriter<ActiveRegionChanged>,
) {
    for request in requests.read() {
        let Some(region) = regions.iter().find(|region| region.id == request.region) else {
            debug!("Skipping navigation to unknown region '{}'", request.region);
            continue;
        };

        scrolls.write(ScrollRequest::page_to((region.top - settings.jump_offset).max(0.0)));
        highlight_links(&mut links, &region.id);

        if let Some(change) = spy.highlighter.activate(region.id.clone()) {
            changes.write(change);
        }
    }
}
