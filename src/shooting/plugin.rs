//! Shooting plugin - tap resolution and ball flight.

use bevy::prelude::*;

use super::components::Ball;
use super::systems::setup_shooting_systems;
use crate::config::GameConfig;
use crate::core::GameState;

/// Shooting plugin - turns taps into flights, flights into goal hits.
pub struct ShootingPlugin;

impl Plugin for ShootingPlugin {
    fn build(&self, app: &mut App) {
        setup_shooting_systems(app);
        app.add_systems(OnExit(GameState::Loading), spawn_ball);
    }
}

/// Spawn the ball at its rest position. Runs once, after loading.
fn spawn_ball(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<GameConfig>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(0.6))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE,
            perceptual_roughness: 0.8,
            metallic: 0.1,
            ..default()
        })),
        Transform::from_translation(config.ball_rest()),
        Ball,
    ));
}
