//! Count-up plugin: starts counters on intersection and steps them each frame

use bevy::prelude::*;

use crate::counter::CountUp;
use crate::reveal::should_reveal;
use crate::settings::CounterSettings;
use crate::types::PageScroll;

pub struct CounterPlugin;

impl Plugin for CounterPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CounterSettings>();
        app.init_resource::<PageScroll>();

        super::configure_sets(app);
        app.add_systems(
            Update,
            (start_visible_counters, advance_counters)
                .chain()
                .in_set(super::TrackingSet),
        );
    }
}

fn start_visible_counters(
    time: Res<Time>,
    page: Res<PageScroll>,
    settings: Res<CounterSettings>,
    mut counters: Query<&mut CountUp>,
) {
    let now = time.elapsed();

    for mut counter in &mut counters {
        if counter.is_started() {
            continue;
        }
        // Counters use the plain viewport, no bottom margin
        if should_reveal(
            counter.top,
            counter.height,
            page.offset,
            page.viewport_height,
            0.0,
            settings.threshold,
        ) {
            counter.start(now);
        }
    }
}

fn advance_counters(time: Res<Time>, settings: Res<CounterSettings>, mut counters: Query<&mut CountUp>) {
    let now = time.elapsed();

    for mut counter in &mut counters {
        if !counter.is_started() || counter.is_finished() {
            continue;
        }
        if counter.bypass_change_detection().advance(now, &settings) {
            counter.set_changed();
        }
    }
}
