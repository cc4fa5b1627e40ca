//! Letter spawning and plaque animation systems.

use bevy::prelude::*;
use std::collections::HashMap;

use super::components::LetterVisual;
use super::spawner::{spawn_letter, SpawnRng};
use crate::config::GameConfig;
use crate::core::{approach, ease_out_cubic, GoalHit};
use crate::store::{IdleAnimation, SceneState};

/// Gold tint for the selected letter's plaque.
const SELECTED_COLOR: Color = Color::srgb(1.0, 0.843, 0.0);

/// Parse a "#RRGGBB" color token; falls back to the letter teal.
pub fn parse_color_token(token: &str) -> Color {
    let hex = token.trim_start_matches('#');
    if hex.len() == 6 {
        if let Ok(value) = u32::from_str_radix(hex, 16) {
            return Color::srgb_u8((value >> 16) as u8, (value >> 8) as u8, value as u8);
        }
    }
    Color::srgb_u8(0x4e, 0xcd, 0xc4)
}

/// Base color of a plaque: gold while selected, the stored token otherwise.
pub fn plaque_color(color_token: &str, selected: bool) -> Color {
    if selected {
        SELECTED_COLOR
    } else {
        parse_color_token(color_token)
    }
}

/// Spawn a letter for each goal hit, up to the word length.
pub fn handle_goal_hits(
    mut hits: EventReader<GoalHit>,
    mut state: ResMut<SceneState>,
    config: Res<GameConfig>,
    mut rng: ResMut<SpawnRng>,
) {
    for hit in hits.read() {
        if spawn_letter(&mut state, &config, rng.rng()).is_none() {
            // Collection already complete; the shot lands but spawns nothing
            continue;
        }
        let index = state.objects.len() - 1;
        info!(
            "Goal at {}! Collected letter {}/{} '{}'",
            hit.target,
            index + 1,
            config.word_len(),
            config.char_at(index)
        );
    }
}

/// Keep one plaque entity per stored object.
///
/// Spawns plaques for new objects, despawns orphans, and refreshes indices.
/// Covers fresh spawns, save hydration, and reset with the same logic.
pub fn sync_letter_visuals(
    mut commands: Commands,
    state: Res<SceneState>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut visuals: Query<(Entity, &mut LetterVisual)>,
) {
    let indices: HashMap<&str, usize> = state
        .objects
        .iter()
        .enumerate()
        .map(|(index, obj)| (obj.id.as_str(), index))
        .collect();

    let mut seen: Vec<String> = Vec::new();
    for (entity, mut visual) in visuals.iter_mut() {
        match indices.get(visual.id.as_str()) {
            Some(&index) => {
                if visual.index != index {
                    visual.index = index;
                }
                seen.push(visual.id.clone());
            }
            None => commands.entity(entity).despawn_recursive(),
        }
    }

    for (index, obj) in state.objects.iter().enumerate() {
        if seen.contains(&obj.id) {
            continue;
        }
        commands.spawn((
            Mesh3d(meshes.add(Cuboid::new(0.9, 1.1, 0.3))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: parse_color_token(&obj.color),
                perceptual_roughness: obj.roughness,
                metallic: obj.metalness,
                ..default()
            })),
            Transform {
                translation: Vec3::from_array(obj.position),
                rotation: Quat::from_euler(
                    EulerRot::XYZ,
                    obj.rotation[0],
                    obj.rotation[1],
                    obj.rotation[2],
                ),
                scale: Vec3::from_array(obj.scale),
            },
            LetterVisual::new(obj.id.clone(), index),
        ));
    }
}

/// Glide newly spawned letters from the spawn point to their slot.
pub fn settle_letters(
    time: Res<Time>,
    config: Res<GameConfig>,
    mut letters: Query<(&mut Transform, &mut LetterVisual)>,
) {
    let from = config.spawn_point();
    for (mut transform, mut visual) in letters.iter_mut() {
        if visual.settled {
            continue;
        }
        visual.settle += time.delta_secs() * config.settle_rate;
        let t = visual.settle.min(1.0);
        let eased = ease_out_cubic(t);
        let to = config.slot_position(visual.index);
        transform.translation.x = from.x + (to.x - from.x) * eased;
        transform.translation.y = from.y + (to.y - from.y) * eased;
        if t >= 1.0 {
            transform.translation = to;
            visual.settled = true;
        }
    }
}

/// Idle and selection animation for settled letters.
///
/// The selected letter turns gold, spins, and scales up; the rest run
/// their stored idle animation (rotate, float, or pulse) at their stored
/// speed.
pub fn animate_letters(
    time: Res<Time>,
    config: Res<GameConfig>,
    state: Res<SceneState>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut letters: Query<(
        &mut Transform,
        &mut LetterVisual,
        &MeshMaterial3d<StandardMaterial>,
    )>,
) {
    let dt = time.delta_secs();
    let elapsed = time.elapsed_secs();

    for (mut transform, mut visual, material_handle) in letters.iter_mut() {
        let Some(obj) = state.objects.iter().find(|obj| obj.id == visual.id) else {
            continue;
        };
        let selected = state.selected_object_id.as_deref() == Some(visual.id.as_str());

        // Retint only on selection edges; materials are per-plaque
        if selected != visual.highlighted {
            visual.highlighted = selected;
            if let Some(material) = materials.get_mut(&material_handle.0) {
                material.base_color = plaque_color(&obj.color, selected);
            }
        }

        let target_scale = if selected { 2.0 } else { 1.0 };
        visual.display_scale = approach(visual.display_scale, target_scale, 8.0, dt);

        let mut pulse = 1.0;
        if selected {
            transform.rotate_y(1.8 * dt);
        } else if visual.settled {
            match obj.idle {
                IdleAnimation::Rotate => transform.rotate_y(0.6 * obj.animation_speed * dt),
                IdleAnimation::Float => {
                    let slot = config.slot_position(visual.index);
                    transform.translation.y =
                        slot.y + (elapsed * obj.animation_speed).sin() * 0.2;
                }
                IdleAnimation::Pulse => {
                    pulse = 1.0 + (elapsed * obj.animation_speed * 2.0).sin() * 0.1;
                }
                IdleAnimation::None => {}
            }
        }

        transform.scale = Vec3::splat(obj.scale[0] * visual.display_scale * pulse);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_color_tokens() {
        let color = parse_color_token("#ff0080");
        assert_eq!(color, Color::srgb_u8(0xff, 0x00, 0x80));
    }

    #[test]
    fn selection_tints_the_plaque_gold() {
        assert_eq!(plaque_color("#4ECDC4", true), Color::srgb(1.0, 0.843, 0.0));
        // Deselection restores the stored token color
        assert_eq!(
            plaque_color("#4ECDC4", false),
            Color::srgb_u8(0x4e, 0xcd, 0xc4)
        );
    }

    #[test]
    fn bad_tokens_fall_back_to_teal() {
        let fallback = Color::srgb_u8(0x4e, 0xcd, 0xc4);
        assert_eq!(parse_color_token("not-a-color"), fallback);
        assert_eq!(parse_color_token("#12"), fallback);
        assert_eq!(parse_color_token(""), fallback);
    }
}
