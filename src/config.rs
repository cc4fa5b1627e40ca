//! Gameplay configuration loaded from RON.
//!
//! The target word, goal bounds, and animation constants are data, not
//! literals. A missing or malformed file falls back to built-in defaults so
//! the game always starts.

use bevy::prelude::*;
use rand::Rng;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default config file path, relative to the working directory.
pub const CONFIG_PATH: &str = "assets/data/game.ron";

/// Errors that can occur when loading the game config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read.
    #[error("Failed to read config '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    /// RON parsing failed.
    #[error("Parse error in config '{path}': {source}")]
    Parse {
        path: String,
        source: ron::error::SpannedError,
    },
}

/// Gameplay tuning values.
///
/// The capacity of the collection is the length of `word`; letter `i` of the
/// collection always displays character `i` of `word`.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Target word the collected letters spell out.
    pub word: String,
    /// Display color token for spawned letters.
    pub letter_color: String,

    /// Z position of the goal mouth.
    pub goal_depth: f32,
    /// Clamp range for the x of an aimed shot.
    pub aim_x_range: (f32, f32),
    /// Clamp range for the y of an aimed shot.
    pub aim_y_range: (f32, f32),
    /// A landed shot counts as a goal when |x| is within this limit...
    pub hit_x_limit: f32,
    /// ...and y is within this range.
    pub hit_y_range: (f32, f32),

    /// X range for the synthesized target of an unaimed (ball tap) shot.
    pub random_x_range: (f32, f32),
    /// Y range for the synthesized target of an unaimed shot.
    pub random_y_range: (f32, f32),

    /// Flight progress per second (1.5 completes a shot in ~0.67 s).
    pub flight_rate: f32,
    /// Peak of the sine arc added to the flight path.
    pub arc_height: f32,
    /// Rest position of the ball between shots.
    pub ball_rest: (f32, f32, f32),

    /// Where new letters appear before settling into their slot.
    pub spawn_point: (f32, f32, f32),
    /// Horizontal spacing between letter slots.
    pub slot_spacing: f32,
    /// Settle progress per second for a newly spawned letter.
    pub settle_rate: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word: "COLLECTIBOL".to_string(),
            letter_color: "#4ECDC4".to_string(),
            goal_depth: -5.0,
            aim_x_range: (-2.8, 2.8),
            aim_y_range: (0.5, 2.8),
            hit_x_limit: 3.0,
            hit_y_range: (0.2, 3.0),
            random_x_range: (-1.5, 1.5),
            random_y_range: (0.8, 2.3),
            flight_rate: 1.5,
            arc_height: 2.0,
            ball_rest: (0.0, -1.0, 5.0),
            spawn_point: (0.0, 4.0, -5.0),
            slot_spacing: 1.2,
            settle_rate: 1.5,
        }
    }
}

impl GameConfig {
    /// Load the config from a RON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        ron::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Number of letters in the target word (= collection capacity).
    pub fn word_len(&self) -> usize {
        self.word.chars().count()
    }

    /// Character displayed by the letter at `index`.
    pub fn char_at(&self, index: usize) -> char {
        self.word.chars().nth(index).unwrap_or('?')
    }

    /// Clamp a point on the goal plane to the goal mouth.
    pub fn clamp_goal_target(&self, point: Vec3) -> Vec3 {
        Vec3::new(
            point.x.clamp(self.aim_x_range.0, self.aim_x_range.1),
            point.y.clamp(self.aim_y_range.0, self.aim_y_range.1),
            self.goal_depth,
        )
    }

    /// Synthesize a target for an unaimed shot (tap on the ball).
    pub fn random_target(&self, rng: &mut impl Rng) -> Vec3 {
        Vec3::new(
            rng.gen_range(self.random_x_range.0..=self.random_x_range.1),
            rng.gen_range(self.random_y_range.0..=self.random_y_range.1),
            self.goal_depth,
        )
    }

    /// Whether a landed shot counts as a goal.
    pub fn is_goal_hit(&self, target: Vec3) -> bool {
        target.x.abs() <= self.hit_x_limit
            && target.y >= self.hit_y_range.0
            && target.y <= self.hit_y_range.1
    }

    /// Rest position of the ball.
    pub fn ball_rest(&self) -> Vec3 {
        Vec3::from(self.ball_rest)
    }

    /// Spawn point for new letters.
    pub fn spawn_point(&self) -> Vec3 {
        Vec3::from(self.spawn_point)
    }

    /// Settled slot for the letter at `index`, centered around the goal.
    pub fn slot_position(&self, index: usize) -> Vec3 {
        let offset = (index as f32 - self.word_len() as f32 / 2.0) * self.slot_spacing;
        Vec3::new(
            self.spawn_point.0 + offset,
            self.spawn_point.1,
            self.spawn_point.2,
        )
    }
}

/// Load the config file, falling back to defaults on any failure.
pub fn load_config(mut commands: Commands) {
    let config = match GameConfig::load(CONFIG_PATH) {
        Ok(config) => {
            info!("Loaded game config: word '{}'", config.word);
            config
        }
        Err(err) => {
            warn!("{err}; using default config");
            GameConfig::default()
        }
    };
    commands.insert_resource(config);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn default_word_has_eleven_letters() {
        let config = GameConfig::default();
        assert_eq!(config.word_len(), 11);
        assert_eq!(config.char_at(0), 'C');
        assert_eq!(config.char_at(10), 'L');
        assert_eq!(config.char_at(99), '?');
    }

    #[test]
    fn aimed_targets_clamp_to_goal_mouth() {
        let config = GameConfig::default();
        let clamped = config.clamp_goal_target(Vec3::new(10.0, -4.0, 0.0));
        assert_eq!(clamped, Vec3::new(2.8, 0.5, -5.0));

        let inside = config.clamp_goal_target(Vec3::new(0.5, 1.5, -5.0));
        assert_eq!(inside, Vec3::new(0.5, 1.5, -5.0));
    }

    #[test]
    fn random_targets_stay_in_range() {
        let config = GameConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..100 {
            let target = config.random_target(&mut rng);
            assert!((-1.5..=1.5).contains(&target.x));
            assert!((0.8..=2.3).contains(&target.y));
            assert_eq!(target.z, -5.0);
        }
    }

    #[test]
    fn goal_hit_bounds() {
        let config = GameConfig::default();
        assert!(config.is_goal_hit(Vec3::new(0.0, 1.5, -5.0)));
        assert!(config.is_goal_hit(Vec3::new(-3.0, 0.2, -5.0)));
        assert!(!config.is_goal_hit(Vec3::new(5.0, 1.5, -5.0)));
        assert!(!config.is_goal_hit(Vec3::new(0.0, 0.1, -5.0)));
        assert!(!config.is_goal_hit(Vec3::new(0.0, 3.1, -5.0)));
    }

    #[test]
    fn unreadable_or_malformed_files_report_typed_errors() {
        let err = GameConfig::load("no-such-config.ron").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));

        let path = std::env::temp_dir().join(format!(
            "collectibol-config-test-{}.ron",
            std::process::id()
        ));
        fs::write(&path, "(word: 12, not even ron").unwrap();
        let err = GameConfig::load(&path).unwrap_err();
        fs::remove_file(&path).ok();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn slots_are_centered_and_spaced() {
        let config = GameConfig::default();
        let first = config.slot_position(0);
        let second = config.slot_position(1);
        assert!((second.x - first.x - 1.2).abs() < 1e-6);
        assert_eq!(first.y, 4.0);
        assert_eq!(first.z, -5.0);
    }
}
