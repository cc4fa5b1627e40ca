//! Shot resolution and flight animation systems.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::components::{Ball, BallFlight, FlightStep};
use crate::config::GameConfig;
use crate::core::{GameReset, GoalHit, GameState};
use crate::letters::{LetterVisual, SpawnRng};
use crate::store::SceneState;

/// Approximate pick radius around the ball.
const BALL_PICK_RADIUS: f32 = 0.8;

/// System set ordering for shooting: resolve input, advance the flight,
/// then handle spawns. Spawn side effects become visible the next frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ShootSet {
    Input,
    Flight,
    Spawn,
}

/// Configure shooting systems.
pub fn setup_shooting_systems(app: &mut App) {
    app.init_resource::<BallFlight>()
        .configure_sets(
            Update,
            (ShootSet::Input, ShootSet::Flight, ShootSet::Spawn)
                .chain()
                .run_if(in_state(GameState::Playing)),
        )
        .add_systems(Update, handle_taps.in_set(ShootSet::Input))
        .add_systems(
            Update,
            (begin_flight, advance_flight).chain().in_set(ShootSet::Flight),
        )
        .add_systems(
            Update,
            reset_flight
                .run_if(on_event::<GameReset>)
                .in_set(ShootSet::Flight),
        );
}

/// Resolve discrete taps into selections or shots.
///
/// Priority per tap: a letter under the pointer selects it; the ball fires
/// an unaimed shot with a randomized target; the goal plane fires an aimed
/// shot clamped to the goal mouth. One shot per gesture - coalescing of
/// shots fired mid-flight is the animator's job, not ours.
fn handle_taps(
    mouse: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    letters: Query<(&Transform, &LetterVisual)>,
    balls: Query<&Transform, With<Ball>>,
    config: Res<GameConfig>,
    mut rng: ResMut<SpawnRng>,
    mut state: ResMut<SceneState>,
) {
    let mut taps: Vec<Vec2> = Vec::new();
    if mouse.just_pressed(MouseButton::Left) {
        if let Ok(window) = windows.get_single() {
            if let Some(cursor) = window.cursor_position() {
                taps.push(cursor);
            }
        }
    }
    for touch in touches.iter_just_pressed() {
        taps.push(touch.position());
    }
    if taps.is_empty() {
        return;
    }

    let Ok((camera, camera_transform)) = cameras.get_single() else {
        return;
    };

    for tap in taps {
        let Ok(ray) = camera.viewport_to_world(camera_transform, tap) else {
            continue;
        };

        // Letters first: tapping one selects it
        if let Some(id) = pick_letter(&ray, &letters) {
            state.select_object(Some(id));
            continue;
        }

        // Then the ball: unaimed shot with a synthesized target
        if let Ok(ball_transform) = balls.get_single() {
            if ray_point_distance(&ray, ball_transform.translation) <= BALL_PICK_RADIUS {
                let target = config.random_target(rng.rng());
                state.shoot_ball(target);
                continue;
            }
        }

        // Finally the goal plane: aimed shot, clamped to the goal mouth
        if let Some(point) = goal_plane_point(&ray, config.goal_depth) {
            // Tappable region is the goal mouth itself (6 x 3 plane)
            if point.x.abs() <= config.hit_x_limit && (0.0..=config.hit_y_range.1).contains(&point.y)
            {
                state.shoot_ball(config.clamp_goal_target(point));
            }
        }
    }
}

/// Closest letter whose pick sphere the ray passes through.
fn pick_letter(ray: &Ray3d, letters: &Query<(&Transform, &LetterVisual)>) -> Option<String> {
    let mut best: Option<(f32, String)> = None;
    for (transform, visual) in letters.iter() {
        let radius = 0.75 * transform.scale.x.max(0.5);
        let distance = ray_point_distance(ray, transform.translation);
        if distance <= radius {
            let along = (transform.translation - ray.origin).dot(*ray.direction);
            if best.as_ref().map_or(true, |(t, _)| along < *t) {
                best = Some((along, visual.id.clone()));
            }
        }
    }
    best.map(|(_, id)| id)
}

/// Perpendicular distance from a ray to a point (in front of the origin).
fn ray_point_distance(ray: &Ray3d, point: Vec3) -> f32 {
    let along = (point - ray.origin).dot(*ray.direction).max(0.0);
    (point - ray.get_point(along)).length()
}

/// Intersect the pick ray with the goal plane at z = `goal_depth`.
fn goal_plane_point(ray: &Ray3d, goal_depth: f32) -> Option<Vec3> {
    let t = ray.intersect_plane(
        Vec3::new(0.0, 0.0, goal_depth),
        InfinitePlane3d::new(Vec3::Z),
    )?;
    Some(ray.get_point(t))
}

/// Start a flight for the pending target, if any.
///
/// Consuming the target clears it from the store; a target identical to the
/// last consumed one is dropped (also cleared) instead of restarting the
/// animation. Targets staged mid-flight wait here until the flight ends.
fn begin_flight(
    mut flight: ResMut<BallFlight>,
    mut state: ResMut<SceneState>,
    balls: Query<&Transform, With<Ball>>,
) {
    let Some(target) = state.touch_target else {
        return;
    };
    if flight.is_animating() {
        return;
    }
    let Ok(ball_transform) = balls.get_single() else {
        return;
    };
    flight.try_begin(target, ball_transform.translation);
    // Consumed or dropped as a duplicate - either way it is no longer pending
    state.set_touch_target(None);
}

/// Advance the active flight and place the ball.
///
/// On arrival, a target inside the goal bounds raises a GoalHit for the
/// letter spawner; the ball always returns to its rest pose.
fn advance_flight(
    time: Res<Time>,
    config: Res<GameConfig>,
    mut flight: ResMut<BallFlight>,
    mut balls: Query<&mut Transform, With<Ball>>,
    mut goal_hits: EventWriter<GoalHit>,
) {
    let Ok(mut transform) = balls.get_single_mut() else {
        return;
    };

    match flight.advance(time.delta_secs(), config.flight_rate, config.arc_height) {
        FlightStep::Resting => {
            transform.translation = config.ball_rest();
            transform.scale = Vec3::ONE;
        }
        FlightStep::InFlight { position, scale } => {
            transform.translation = position;
            transform.scale = Vec3::splat(scale);
        }
        FlightStep::Arrived { target } => {
            if config.is_goal_hit(target) {
                goal_hits.send(GoalHit { target });
            } else {
                info!("Shot at {target} missed the goal");
            }
            transform.translation = config.ball_rest();
            transform.scale = Vec3::ONE;
        }
    }
}

/// Drop any active flight and its dedup memory on game reset.
fn reset_flight(mut flight: ResMut<BallFlight>, mut state: ResMut<SceneState>) {
    flight.reset();
    state.set_touch_target(None);
}
