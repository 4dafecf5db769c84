mod combat;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod player;
mod props;
mod zones;

use std::time::Duration;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Kickabout".to_string(),
            resolution: (1280.0, 720.0).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    // Top-down zones: no global gravity, knockback decays through damping.
    .insert_resource(Gravity(Vec2::ZERO))
    // Boss AI and prop flight step on a fixed 16 ms tick.
    .insert_resource(Time::<Fixed>::from_duration(Duration::from_millis(16)))
    .add_plugins((
        core::CorePlugin,
        player::PlayerPlugin,
        combat::CombatPlugin,
        props::PropsPlugin,
        zones::ZonesPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
