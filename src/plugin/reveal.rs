//! Reveal plugin: staggered fade-in triggers and scroll threshold flags

use bevy::prelude::*;

use crate::reveal::*;
use crate::settings::RevealSettings;
use crate::types::PageScroll;

pub struct RevealPlugin;

impl Plugin for RevealPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RevealSettings>();
        app.init_resource::<PageScroll>();
        app.add_message::<Revealed>();

        super::configure_sets(app);
        app.add_systems(
            Update,
            (reveal_on_scroll, update_scroll_thresholds).in_set(super::TrackingSet),
        );
    }
}

fn reveal_on_scroll(
    page: Res<PageScroll>,
    settings: Res<RevealSettings>,
    mut reveals: Query<(Entity, &mut Reveal)>,
    mut revealed: MessageWriter<Revealed>,
) {
    let new_reveals = reveals.iter_mut().any(|(_, reveal)| reveal.is_added());
    if !page.is_changed() && !new_reveals {
        return;
    }

    // Elements crossing in this pass, in page order; the stagger restarts per pass
    let mut batch: Vec<(usize, Entity)> = reveals
        .iter()
        .filter(|(_, reveal)| {
            !reveal.revealed
                && should_reveal(
                    reveal.top,
                    reveal.height,
                    page.offset,
                    page.viewport_height,
                    settings.root_margin_bottom,
                    settings.threshold,
                )
        })
        .map(|(entity, reveal)| (reveal.index, entity))
        .collect();
    batch.sort_unstable();

    let mut delay_ms = 0u32;
    for (_, entity) in batch {
        let Ok((_, mut reveal)) = reveals.get_mut(entity) else {
            continue;
        };
        reveal.revealed = true;
        reveal.delay_ms = delay_ms;
        revealed.write(Revealed { entity, delay_ms });
        delay_ms = delay_ms.saturating_add(settings.stagger_ms);
    }
}

fn update_scroll_thresholds(page: Res<PageScroll>, mut flags: Query<&mut ScrollThreshold>) {
    let new_flags = flags.iter_mut().any(|flag| flag.is_added());
    if !page.is_changed() && !new_flags {
        return;
    }

    for mut flag in &mut flags {
        let passed = flag.evaluate(page.offset);
        if flag.passed != passed {
            flag.passed = passed;
        }
    }
}
