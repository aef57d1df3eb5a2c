//! Carousel and scroll spy example
//!
//! Demonstrates the bevy_page_scroll plugin on a headless "page" model:
//! - Mouse wheel scrolls the page; the active nav link is logged as regions pass
//! - Dragging inside the top 200px of the window scrolls the review strip
//! - Left/Right arrows step the strip like carousel buttons
//! - Digits 1-3 jump to a region like nav link clicks
//! - M toggles the mobile menu (clicking outside it closes it again)
//! - The student count starts counting once it scrolls into view

use bevy::input::mouse::MouseWheel;
use bevy::prelude::*;
use bevy_page_scroll::prelude::*;

#[derive(Resource)]
struct Reviews(Entity);

#[derive(Resource)]
struct Menu(Entity);

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Bevy Page Scroll - Carousel".to_string(),
                resolution: (1280, 800).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PageScrollPlugin::new())
        .add_systems(Startup, setup_page)
        .add_systems(Update, (scroll_page, keyboard_shortcuts, log_changes))
        .run();
}

fn setup_page(mut commands: Commands, mut page: ResMut<PageScroll>) {
    commands.spawn(Camera2d);

    *page = PageScroll::new(1280.0, 800.0);

    for (id, top, height) in [("courses", 0.0, 900.0), ("reviews", 900.0, 700.0), ("faq", 1600.0, 1200.0)] {
        commands.spawn((Region::new(id, top, height), Name::new(format!("Region_{id}"))));
        commands.spawn((NavLink::new(id), Name::new(format!("NavLink_{id}"))));
    }

    let reviews = commands
        .spawn((
            ScrollContainer::new(3600.0, 1280.0, Rect::new(0.0, 0.0, 1280.0, 200.0)),
            Name::new("ReviewStrip"),
        ))
        .id();
    commands.insert_resource(Reviews(reviews));

    commands.spawn((ScrollThreshold::new(100.0), Name::new("NavbarScrolled")));
    commands.spawn((CountUp::new(12000, 1000.0, 120.0).with_suffix("+"), Name::new("StudentCount")));

    let menu = commands
        .spawn((
            MobileMenu::new(Rect::new(0.0, 64.0, 360.0, 800.0), Rect::new(1200.0, 0.0, 1280.0, 64.0)),
            Name::new("MobileMenu"),
        ))
        .id();
    commands.insert_resource(Menu(menu));
}

fn scroll_page(mut wheel: MessageReader<MouseWheel>, mut page: ResMut<PageScroll>) {
    if page.scroll_locked {
        wheel.clear();
        return;
    }
    for event in wheel.read() {
        page.offset = (page.offset - event.y * 40.0).max(0.0);
    }
}

fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    reviews: Res<Reviews>,
    menu: Res<Menu>,
    mut steps: MessageWriter<CarouselStep>,
    mut jumps: MessageWriter<NavigateToRegion>,
    mut toggles: MessageWriter<ToggleMobileMenu>,
) {
    if keys.just_pressed(KeyCode::KeyM) {
        toggles.write(ToggleMobileMenu { menu: menu.0 });
    }
    if keys.just_pressed(KeyCode::ArrowLeft) {
        steps.write(CarouselStep { container: reviews.0, direction: CarouselDirection::Previous });
    }
    if keys.just_pressed(KeyCode::ArrowRight) {
        steps.write(CarouselStep { container: reviews.0, direction: CarouselDirection::Next });
    }
    for (key, region) in [(KeyCode::Digit1, "courses"), (KeyCode::Digit2, "reviews"), (KeyCode::Digit3, "faq")] {
        if keys.just_pressed(key) {
            jumps.write(NavigateToRegion::new(region));
        }
    }
}

fn log_changes(
    mut changes: MessageReader<ActiveRegionChanged>,
    strips: Query<(&ScrollContainer, &CarouselEdges), Changed<CarouselEdges>>,
    flags: Query<&ScrollThreshold, Changed<ScrollThreshold>>,
    counters: Query<&CountUp, Changed<CountUp>>,
    mut menus: MessageReader<MobileMenuChanged>,
) {
    for change in changes.read() {
        info!("Now reading: {}", change.current);
    }
    for (strip, edges) in &strips {
        info!("Review strip at {:.0} (start: {}, end: {})", strip.offset, edges.at_start, edges.at_end);
    }
    for flag in &flags {
        info!("Navbar scrolled: {}", flag.passed);
    }
    for counter in &counters {
        if counter.is_finished() {
            info!("Students: {}", counter.text());
        }
    }
    for change in menus.read() {
        info!("Menu open: {}", change.open);
    }
}
