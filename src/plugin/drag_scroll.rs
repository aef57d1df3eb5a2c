//! Drag scrolling plugin: gesture dispatch, momentum and carousel buttons

use bevy::prelude::*;

use crate::carousel::{step_delta, CarouselEdges, CarouselStep};
use crate::gesture::DragScroller;
use crate::input::{emit_pointer_gestures, emit_touch_gestures, GestureInput, GesturePhase, InputCapability};
use crate::settings::{CarouselSettings, DragSettings};
use crate::types::*;

pub struct DragScrollPlugin;

impl Plugin for DragScrollPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DragSettings>();
        app.init_resource::<CarouselSettings>();
        app.init_resource::<PageScroll>();

        // Capability is fixed for the app's lifetime
        let capability = app
            .world()
            .resource::<DragSettings>()
            .capability
            .unwrap_or_else(InputCapability::detect);
        info!("Drag scrolling uses {:?} input", capability);
        app.insert_resource(capability);

        app.add_message::<GestureInput>();
        app.add_message::<ScrollRequest>();
        app.add_message::<CarouselStep>();

        super::configure_sets(app);
        match capability {
            InputCapability::Pointer => app.add_systems(
                Update,
                emit_pointer_gestures
                    .in_set(super::InputSet)
                    .before(dispatch_gestures),
            ),
            InputCapability::Touch => app.add_systems(
                Update,
                emit_touch_gestures
                    .in_set(super::InputSet)
                    .before(dispatch_gestures),
            ),
        };
        app.add_systems(
            Update,
            (attach_drag_scrollers, dispatch_gestures, handle_carousel_steps)
                .chain()
                .in_set(super::InputSet),
        );
        app.add_systems(Update, update_carousel_edges.in_set(super::TrackingSet));
    }
}

/// Give new containers a drag handler for the app's input capability
fn attach_drag_scrollers(
    mut commands: Commands,
    capability: Res<InputCapability>,
    settings: Res<DragSettings>,
    containers: Query<Entity, Added<ScrollContainer>>,
) {
    for entity in &containers {
        commands.entity(entity).insert_if_new((
            DragScroller::for_capability(*capability, &settings),
            CarouselEdges::default(),
        ));
    }
}

/// Route gesture samples to the container being dragged
pub(crate) fn dispatch_gestures(
    mut gestures: MessageReader<GestureInput>,
    mut containers: Query<(Entity, &mut ScrollContainer, &mut DragScroller)>,
    mut scrolls: MessageWriter<ScrollRequest>,
) {
    for gesture in gestures.read() {
        let x = gesture.position.x;

        match gesture.phase {
            GesturePhase::Start => {
                let mut started = false;
                for (_, mut container, mut scroller) in &mut containers {
                    // One pointer, one session
                    if scroller.strategy().is_dragging() {
                        scroller.strategy_mut().cancel();
                    }
                    if started || !container.bounds.contains(gesture.position) {
                        continue;
                    }
                    // A new grab stops any momentum still running
                    container.target = None;
                    let offset = container.offset;
                    scroller.strategy_mut().begin(x, gesture.time_ms, offset);
                    started = true;
                }
            }
            GesturePhase::Move => {
                for (_, mut container, mut scroller) in &mut containers {
                    if !scroller.strategy().is_dragging() {
                        continue;
                    }
                    if scroller.strategy().cancels_on_leave() && !container.bounds.contains(gesture.position) {
                        scroller.strategy_mut().cancel();
                        continue;
                    }
                    if let Some(offset) = scroller.strategy_mut().update(x, gesture.time_ms) {
                        container.set_offset(offset);
                    }
                }
            }
            GesturePhase::End => {
                for (entity, _, mut scroller) in &mut containers {
                    if !scroller.strategy().is_dragging() {
                        continue;
                    }
                    if let Some(momentum) = scroller.strategy_mut().end(x, gesture.time_ms) {
                        scrolls.write(ScrollRequest::container_by(entity, momentum));
                    }
                }
            }
            GesturePhase::Cancel => {
                for (_, _, mut scroller) in &mut containers {
                    if scroller.strategy().is_dragging() {
                        scroller.strategy_mut().cancel();
                    }
                }
            }
        }
    }
}

fn handle_carousel_steps(
    mut steps: MessageReader<CarouselStep>,
    settings: Res<CarouselSettings>,
    page: Res<PageScroll>,
    mut scrolls: MessageWriter<ScrollRequest>,
) {
    for step in steps.read() {
        let delta = step_delta(&settings, page.viewport_width, step.direction);
        scrolls.write(ScrollRequest::container_by(step.container, delta));
    }
}

fn update_carousel_edges(
    settings: Res<CarouselSettings>,
    mut containers: Query<(&ScrollContainer, &mut CarouselEdges), Changed<ScrollContainer>>,
) {
    for (container, mut edges) in &mut containers {
        edges.set_if_neq(CarouselEdges::compute(
            container.offset,
            container.max_offset(),
            settings.edge_tolerance,
        ));
    }
}
