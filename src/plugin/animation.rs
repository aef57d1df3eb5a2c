//! Default scroll-animation primitive
//!
//! Applies `ScrollRequest`s and eases offsets toward their targets. Hosts that
//! drive scrolling themselves can leave this plugin out and read the requests.

use bevy::prelude::*;

use crate::settings::AnimationSettings;
use crate::types::*;

pub struct ScrollAnimationPlugin;

impl Plugin for ScrollAnimationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AnimationSettings>();
        app.init_resource::<PageScroll>();
        app.add_message::<ScrollRequest>();

        super::configure_sets(app);
        app.add_systems(
            Update,
            (apply_scroll_requests, animate_scroll)
                .chain()
                .in_set(super::AnimationSet),
        );
    }
}

/// One exponential easing step; returns the new value and whether it snapped
pub fn ease_toward(current: f32, target: f32, t: f32, snap_distance: f32) -> (f32, bool) {
    let diff = target - current;
    if diff.abs() > snap_distance {
        (current + diff * t, false)
    } else {
        (target, true)
    }
}

fn destination(current: f32, motion: ScrollMotion) -> f32 {
    match motion {
        ScrollMotion::To(offset) => offset,
        ScrollMotion::By(delta) => current + delta,
    }
}

/// Turn scroll requests into offsets (instant) or targets (smooth)
fn apply_scroll_requests(
    mut requests: MessageReader<ScrollRequest>,
    settings: Res<AnimationSettings>,
    mut page: ResMut<PageScroll>,
    mut containers: Query<&mut ScrollContainer>,
) {
    for request in requests.read() {
        let smooth = settings.smooth && request.easing == Easing::Smooth;

        match request.target {
            ScrollTarget::Page => {
                let dest = destination(page.offset, request.motion).max(0.0);
                if smooth {
                    page.target = Some(dest);
                } else {
                    page.offset = dest;
                    page.target = None;
                }
            }
            ScrollTarget::Container(entity) => {
                let Ok(mut container) = containers.get_mut(entity) else {
                    debug!("Dropping scroll request for missing container {:?}", entity);
                    continue;
                };
                let dest = container.clamp(destination(container.offset, request.motion));
                if smooth {
                    container.target = Some(dest);
                } else {
                    container.offset = dest;
                    container.target = None;
                }
            }
        }
    }
}

/// Ease page and container offsets toward their targets
fn animate_scroll(
    time: Res<Time>,
    settings: Res<AnimationSettings>,
    mut page: ResMut<PageScroll>,
    mut containers: Query<&mut ScrollContainer>,
) {
    // Using exponential decay for natural feel
    let t = 1.0 - (-settings.smoothness * time.delta_secs()).exp();

    if let Some(target) = page.target {
        let (offset, done) = ease_toward(page.offset, target, t, settings.snap_distance);
        page.offset = offset;
        if done {
            page.target = None;
        }
    }

    for mut container in &mut containers {
        let Some(target) = container.target else {
            continue;
        };
        let (offset, done) = ease_toward(container.offset, target, t, settings.snap_distance);
        container.offset = offset;
        if done {
            container.target = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_moves_fraction_of_distance() {
        let (offset, done) = ease_toward(0.0, 100.0, 0.25, 0.1);
        assert_eq!(offset, 25.0);
        assert!(!done);
    }

    #[test]
    fn test_ease_snaps_when_close() {
        let (offset, done) = ease_toward(99.95, 100.0, 0.25, 0.1);
        assert_eq!(offset, 100.0);
        assert!(done);
    }

    #[test]
    fn test_destination() {
        assert_eq!(destination(40.0, ScrollMotion::By(18.0)), 58.0);
        assert_eq!(destination(40.0, ScrollMotion::To(10.0)), 10.0);
    }
}
