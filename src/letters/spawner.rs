//! Letter spawning: capacity check, identity assignment, cosmetic rolls.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::GameConfig;
use crate::store::{now_millis, CollectibleObject, IdleAnimation, ObjectKind, SceneState};

/// Seedable RNG for spawn cosmetics.
///
/// Injected as a resource so tests can pin the seed and gameplay stays
/// deterministic under a known seed.
#[derive(Resource)]
pub struct SpawnRng(ChaCha8Rng);

impl Default for SpawnRng {
    fn default() -> Self {
        Self(ChaCha8Rng::from_entropy())
    }
}

impl SpawnRng {
    /// RNG with a fixed seed, for deterministic tests.
    pub fn seeded(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn rng(&mut self) -> &mut ChaCha8Rng {
        &mut self.0
    }
}

/// Spawn the next letter if the collection is not full.
///
/// The new object's insertion index decides which character it displays;
/// nothing about the character is stored on the object itself. Cosmetics
/// (scale, rotation jitter, material, idle animation) are randomized.
pub fn spawn_letter(
    state: &mut SceneState,
    config: &GameConfig,
    rng: &mut impl Rng,
) -> Option<CollectibleObject> {
    let index = state.objects.len();
    if index >= config.word_len() {
        return None;
    }

    let scale = rng.gen_range(0.8..=1.2);
    let idle = match rng.gen_range(0..4) {
        0 => IdleAnimation::Rotate,
        1 => IdleAnimation::Float,
        2 => IdleAnimation::Pulse,
        _ => IdleAnimation::None,
    };

    let obj = CollectibleObject {
        id: format!("letter-{index}-{}", now_millis()),
        kind: ObjectKind::Box,
        position: config.spawn_point().to_array(),
        rotation: [
            rng.gen_range(-0.1..=0.1),
            rng.gen_range(-0.1..=0.1),
            rng.gen_range(-0.1..=0.1),
        ],
        scale: [scale; 3],
        color: config.letter_color.clone(),
        roughness: rng.gen_range(0.2..=0.5),
        metalness: rng.gen_range(0.4..=0.8),
        idle,
        animation_speed: rng.gen_range(0.5..=1.5),
        created_at: now_millis(),
    };
    state.add_object(obj.clone());
    Some(obj)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawns_fill_a_prefix_of_the_word() {
        let config = GameConfig::default();
        let mut state = SceneState::default();
        let mut rng = SpawnRng::seeded(1);

        for i in 0..config.word_len() {
            let obj = spawn_letter(&mut state, &config, rng.rng()).expect("capacity left");
            assert_eq!(state.objects.len(), i + 1);
            assert!(obj.id.starts_with(&format!("letter-{i}-")));
        }
        // The Nth object displays the Nth character
        for i in 0..state.objects.len() {
            assert_eq!(
                config.char_at(i),
                config.word.chars().nth(i).unwrap()
            );
        }
    }

    #[test]
    fn capacity_is_the_word_length() {
        let config = GameConfig::default();
        let mut state = SceneState::default();
        let mut rng = SpawnRng::seeded(2);

        for _ in 0..config.word_len() {
            assert!(spawn_letter(&mut state, &config, rng.rng()).is_some());
        }
        assert!(spawn_letter(&mut state, &config, rng.rng()).is_none());
        assert_eq!(state.objects.len(), config.word_len());
    }

    #[test]
    fn cosmetics_stay_in_their_ranges() {
        let config = GameConfig::default();
        let mut state = SceneState::default();
        let mut rng = SpawnRng::seeded(3);

        for _ in 0..config.word_len() {
            let obj = spawn_letter(&mut state, &config, rng.rng()).unwrap();
            assert!((0.8..=1.2).contains(&obj.scale[0]));
            assert_eq!(obj.scale[0], obj.scale[1]);
            for axis in obj.rotation {
                assert!((-0.1..=0.1).contains(&axis));
            }
            assert!((0.2..=0.5).contains(&obj.roughness));
            assert!((0.4..=0.8).contains(&obj.metalness));
            assert!((0.5..=1.5).contains(&obj.animation_speed));
            assert_eq!(obj.position, [0.0, 4.0, -5.0]);
            assert_eq!(obj.color, "#4ECDC4");
            assert_eq!(obj.kind, ObjectKind::Box);
        }
    }

    #[test]
    fn only_valid_arrivals_grow_the_collection() {
        let config = GameConfig::default();
        let mut state = SceneState::default();
        let mut rng = SpawnRng::seeded(4);

        // The flight animator gates spawning on goal-hit validity
        let wide = Vec3::new(5.0, 1.5, -5.0);
        if config.is_goal_hit(wide) {
            spawn_letter(&mut state, &config, rng.rng());
        }
        assert!(state.objects.is_empty());

        let centered = Vec3::new(0.0, 1.5, -5.0);
        if config.is_goal_hit(centered) {
            spawn_letter(&mut state, &config, rng.rng());
        }
        assert_eq!(state.objects.len(), 1);
        assert_eq!(config.char_at(0), 'C');
    }

    #[test]
    fn same_seed_rolls_the_same_cosmetics() {
        let config = GameConfig::default();

        let mut first = SceneState::default();
        let mut second = SceneState::default();
        let a = spawn_letter(&mut first, &config, SpawnRng::seeded(42).rng()).unwrap();
        let b = spawn_letter(&mut second, &config, SpawnRng::seeded(42).rng()).unwrap();

        assert_eq!(a.scale, b.scale);
        assert_eq!(a.rotation, b.rotation);
        assert_eq!(a.roughness, b.roughness);
        assert_eq!(a.metalness, b.metalness);
        assert_eq!(a.idle, b.idle);
    }
}
