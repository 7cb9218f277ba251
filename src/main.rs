mod config;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod level;
mod player;
mod powerup;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Blockhopper".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .insert_resource(Time::<Fixed>::from_hz(60.0))
    .insert_resource(Gravity(Vec2::NEG_Y * 9.81))
    .add_plugins((
        core::CorePlugin,
        config::ConfigPlugin,
        level::LevelPlugin,
        player::PlayerPlugin,
        powerup::PowerUpPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
