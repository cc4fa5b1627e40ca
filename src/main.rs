//! Collectibol - Entry Point
//!
//! Controls:
//! - Tap/click the goal mouth: aimed shot
//! - Tap/click the ball: unaimed shot
//! - Tap/click a collected letter: select it
//! - On the reveal card: drag to spin, tap to flip

use bevy::prelude::*;

fn main() {
    App::new()
        // Bevy default plugins
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Collectibol".to_string(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))

        // Our game plugin
        .add_plugins(collectibol::CollectibolPlugin)

        .run();
}
