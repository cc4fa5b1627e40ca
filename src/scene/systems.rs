//! Static scenery and the camera fly-in.

use bevy::prelude::*;
use rand::Rng;

use crate::config::GameConfig;
use crate::core::ease_out_cubic;

const GROUND_COLOR: Color = Color::srgb(0.102, 0.227, 0.102);
const POST_RADIUS: f32 = 0.08;
const STAR_COUNT: usize = 500;

/// Camera intro flight, removed once the camera reaches its perch.
#[derive(Component)]
pub struct CameraFlight {
    pub progress: f32,
}

const CAMERA_START: Vec3 = Vec3::new(0.0, 30.0, 25.0);
const CAMERA_PERCH: Vec3 = Vec3::new(0.0, 8.0, 18.0);
const CAMERA_FOCUS: Vec3 = Vec3::new(0.0, 1.0, -3.0);
const CAMERA_FLIGHT_SECS: f32 = 3.0;

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(CAMERA_START).looking_at(CAMERA_FOCUS, Vec3::Y),
        CameraFlight { progress: 0.0 },
    ));
}

/// Ease the camera down from its opening vantage to the play perch.
pub fn fly_camera(
    mut commands: Commands,
    time: Res<Time>,
    mut cameras: Query<(Entity, &mut Transform, &mut CameraFlight)>,
) {
    let Ok((entity, mut transform, mut flight)) = cameras.get_single_mut() else {
        return;
    };
    flight.progress = (flight.progress + time.delta_secs() / CAMERA_FLIGHT_SECS).min(1.0);
    let t = ease_out_cubic(flight.progress);
    transform.translation = CAMERA_START.lerp(CAMERA_PERCH, t);
    transform.look_at(CAMERA_FOCUS, Vec3::Y);
    if flight.progress >= 1.0 {
        commands.entity(entity).remove::<CameraFlight>();
    }
}

pub fn spawn_lights(mut commands: Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 120.0,
    });

    commands.spawn((
        DirectionalLight {
            illuminance: 4_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(5.0, 10.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Overhead fill so the goal mouth reads against the night sky
    commands.spawn((
        PointLight {
            intensity: 600_000.0,
            range: 40.0,
            ..default()
        },
        Transform::from_xyz(0.0, 12.0, 0.0),
    ));

    commands.spawn((
        SpotLight {
            intensity: 1_200_000.0,
            range: 50.0,
            outer_angle: 0.6,
            ..default()
        },
        Transform::from_xyz(0.0, 10.0, 6.0).looking_at(Vec3::new(0.0, 1.0, -5.0), Vec3::Y),
    ));
}

pub fn spawn_pitch(
    mut commands: Commands,
    config: Res<GameConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let ground = materials.add(StandardMaterial {
        base_color: GROUND_COLOR,
        perceptual_roughness: 0.9,
        ..default()
    });
    commands.spawn((
        Mesh3d(meshes.add(Circle::new(18.0))),
        MeshMaterial3d(ground),
        Transform::from_xyz(0.0, -2.0, 0.0)
            .with_rotation(Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2)),
    ));

    let line = materials.add(StandardMaterial {
        base_color: Color::srgba(1.0, 1.0, 1.0, 0.6),
        perceptual_roughness: 0.8,
        alpha_mode: AlphaMode::Blend,
        ..default()
    });
    commands.spawn((
        Mesh3d(meshes.add(Torus::new(1.9, 2.0))),
        MeshMaterial3d(line),
        Transform::from_xyz(0.0, -1.98, 0.0),
    ));

    let post_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        perceptual_roughness: 0.3,
        metallic: 0.6,
        ..default()
    });
    let post_height = config.hit_y_range.1;
    let post_mesh = meshes.add(Cylinder::new(POST_RADIUS, post_height));
    for side in [-1.0, 1.0] {
        commands.spawn((
            Mesh3d(post_mesh.clone()),
            MeshMaterial3d(post_material.clone()),
            Transform::from_xyz(side * config.hit_x_limit, post_height / 2.0, config.goal_depth),
        ));
    }

    let crossbar_mesh = meshes.add(Cylinder::new(POST_RADIUS, config.hit_x_limit * 2.0));
    commands.spawn((
        Mesh3d(crossbar_mesh),
        MeshMaterial3d(post_material.clone()),
        Transform::from_xyz(0.0, post_height, config.goal_depth)
            .with_rotation(Quat::from_rotation_z(std::f32::consts::FRAC_PI_2)),
    ));

    let net = materials.add(StandardMaterial {
        base_color: Color::srgba(0.9, 0.9, 0.9, 0.15),
        alpha_mode: AlphaMode::Blend,
        double_sided: true,
        cull_mode: None,
        ..default()
    });
    commands.spawn((
        Mesh3d(meshes.add(Rectangle::new(config.hit_x_limit * 2.0, post_height))),
        MeshMaterial3d(net),
        Transform::from_xyz(0.0, post_height / 2.0, config.goal_depth - 0.3),
    ));

    // Floodlight towers behind the touchlines
    let tower_mesh = meshes.add(Cylinder::new(0.15, 6.0));
    for side in [-1.0, 1.0] {
        let base = Vec3::new(side * 8.0, 0.0, -8.0);
        commands.spawn((
            Mesh3d(tower_mesh.clone()),
            MeshMaterial3d(post_material.clone()),
            Transform::from_translation(base + Vec3::Y),
        ));
        commands.spawn((
            PointLight {
                intensity: 400_000.0,
                range: 30.0,
                color: Color::srgb(1.0, 0.98, 0.9),
                ..default()
            },
            Transform::from_translation(base + Vec3::Y * 4.5),
        ));
    }
}

/// Emissive point stars scattered on a far shell around the pitch.
pub fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mut rng = rand::thread_rng();
    let star_mesh = meshes.add(Sphere::new(0.25));

    let bright = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        emissive: LinearRgba::rgb(2.0, 2.0, 2.0),
        unlit: true,
        ..default()
    });
    let dim = materials.add(StandardMaterial {
        base_color: Color::srgb(0.31, 0.8, 0.77),
        emissive: LinearRgba::rgb(0.3, 0.8, 0.75),
        unlit: true,
        ..default()
    });

    for _ in 0..STAR_COUNT {
        let radius = rng.gen_range(60.0..100.0_f32);
        let theta = rng.gen_range(0.0..std::f32::consts::TAU);
        // Keep stars above the horizon
        let phi = rng.gen_range(0.05..std::f32::consts::FRAC_PI_2);
        let position = Vec3::new(
            radius * phi.cos() * theta.cos(),
            radius * phi.sin(),
            radius * phi.cos() * theta.sin(),
        );
        let material = if rng.gen_bool(0.7) {
            bright.clone()
        } else {
            dim.clone()
        };
        commands.spawn((
            Mesh3d(star_mesh.clone()),
            MeshMaterial3d(material),
            Transform::from_translation(position).with_scale(Vec3::splat(rng.gen_range(0.5..1.5))),
        ));
    }
}
