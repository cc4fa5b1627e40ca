//! Scene plugin - pitch, goal frame, lighting, starfield, camera.

use bevy::prelude::*;

use super::systems::*;
use crate::core::GameState;

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            OnExit(GameState::Loading),
            (spawn_camera, spawn_lights, spawn_pitch, spawn_starfield),
        )
        .add_systems(
            Update,
            fly_camera.run_if(any_with_component::<CameraFlight>),
        );
    }
}
