//! Save snapshot: the persisted subset of the scene state.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

use crate::store::{now_millis, CollectibleObject, SceneState};

/// Default save file path, relative to the working directory.
pub const SAVE_PATH: &str = "collectibol_save.json";

/// Errors that can occur reading or writing the save file.
#[derive(Debug, Error)]
pub enum SaveError {
    /// File could not be read or written.
    #[error("Save file I/O failed at '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// JSON encoding or decoding failed.
    #[error("Save file '{path}' is not a valid snapshot: {source}")]
    Format {
        path: String,
        source: serde_json::Error,
    },
}

/// The persisted record: collected objects and the shot counter, nothing
/// else. Selection, pending targets, and the accepted flag are transient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveGame {
    pub objects: Vec<CollectibleObject>,
    pub shot_count: u32,
}

impl SaveGame {
    /// Capture the persisted subset of the scene state.
    pub fn capture(state: &SceneState) -> Self {
        Self {
            objects: state.objects.clone(),
            shot_count: state.shot_count,
        }
    }

    /// Read a snapshot from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SaveError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| SaveError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| SaveError::Format {
            path: path.display().to_string(),
            source,
        })
    }

    /// Write the snapshot to disk.
    ///
    /// Writes go to a uniquely named sibling file first and land with a
    /// rename, so concurrent save tasks can never leave a torn file at
    /// the save path; the last rename wins with a complete snapshot.
    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), SaveError> {
        static WRITE_SEQ: AtomicU64 = AtomicU64::new(0);

        let path = path.as_ref();
        let contents = serde_json::to_string(self).map_err(|source| SaveError::Format {
            path: path.display().to_string(),
            source,
        })?;

        let staging = path.with_extension(format!(
            "tmp{}-{}",
            std::process::id(),
            WRITE_SEQ.fetch_add(1, Ordering::Relaxed)
        ));
        let io_err = |source| SaveError::Io {
            path: path.display().to_string(),
            source,
        };
        fs::write(&staging, contents).map_err(io_err)?;
        fs::rename(&staging, path).map_err(|source| {
            fs::remove_file(&staging).ok();
            io_err(source)
        })
    }
}

/// Stale-position normalization applied after hydration.
///
/// Saved objects keep their identity and cosmetics but not their settled
/// placement: every position is rewritten to the letter spawn point and
/// every timestamp is refreshed, so reloaded letters re-run their settle
/// animation.
pub fn normalize_positions(objects: &mut [CollectibleObject], spawn_point: [f32; 3]) {
    let now = now_millis();
    for obj in objects.iter_mut() {
        obj.position = spawn_point;
        obj.created_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::letters::{spawn_letter, SpawnRng};
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("collectibol-test-{name}-{}.json", now_millis()))
    }

    fn populated_state(letters: usize) -> SceneState {
        let config = GameConfig::default();
        let mut state = SceneState::default();
        let mut rng = SpawnRng::seeded(11);
        for _ in 0..letters {
            spawn_letter(&mut state, &config, rng.rng());
        }
        state.shot_count = 20;
        state
    }

    #[test]
    fn round_trip_preserves_identity_and_cosmetics() {
        let state = populated_state(5);
        let snapshot = SaveGame::capture(&state);

        let path = temp_path("roundtrip");
        snapshot.write(&path).unwrap();
        let loaded = SaveGame::load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(loaded, snapshot);
        assert_eq!(loaded.objects.len(), 5);
        assert_eq!(loaded.shot_count, 20);
    }

    #[test]
    fn normalization_resets_placement_but_not_identity() {
        let mut state = populated_state(3);
        // Pretend the letters settled somewhere
        for obj in state.objects.iter_mut() {
            obj.position = [2.0, 4.0, -5.0];
            obj.created_at = 1;
        }
        let before: Vec<_> = state
            .objects
            .iter()
            .map(|o| (o.id.clone(), o.scale, o.roughness, o.metalness))
            .collect();

        normalize_positions(&mut state.objects, [0.0, 4.0, -5.0]);

        for (obj, (id, scale, roughness, metalness)) in state.objects.iter().zip(before) {
            assert_eq!(obj.position, [0.0, 4.0, -5.0]);
            assert!(obj.created_at > 1);
            assert_eq!(obj.id, id);
            assert_eq!(obj.scale, scale);
            assert_eq!(obj.roughness, roughness);
            assert_eq!(obj.metalness, metalness);
        }
    }

    #[test]
    fn rewrite_replaces_the_snapshot_and_leaves_no_staging_file() {
        let first = SaveGame::capture(&populated_state(2));
        let second = SaveGame::capture(&populated_state(5));

        let path = temp_path("rewrite");
        first.write(&path).unwrap();
        second.write(&path).unwrap();

        let loaded = SaveGame::load(&path).unwrap();
        assert_eq!(loaded, second);

        // Staging siblings share the file stem; none may survive a write
        let stem = path.file_stem().unwrap().to_string_lossy().into_owned();
        let leftovers = fs::read_dir(path.parent().unwrap())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| {
                let name = entry.file_name().to_string_lossy().into_owned();
                name.starts_with(&stem) && name.contains("tmp")
            })
            .count();
        fs::remove_file(&path).ok();
        assert_eq!(leftovers, 0);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = SaveGame::load(temp_path("missing")).unwrap_err();
        assert!(matches!(err, SaveError::Io { .. }));
    }

    #[test]
    fn corrupt_file_is_a_format_error() {
        let path = temp_path("corrupt");
        fs::write(&path, "{ not json ]").unwrap();
        let err = SaveGame::load(&path).unwrap_err();
        fs::remove_file(&path).ok();
        assert!(matches!(err, SaveError::Format { .. }));
    }

    #[test]
    fn capture_omits_transient_fields() {
        let mut state = populated_state(2);
        state.select_object(Some("x".to_string()));
        state.set_last_card_accepted(true);
        let snapshot = SaveGame::capture(&state);
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(!json.contains("selected"));
        assert!(!json.contains("accepted"));
        assert!(!json.contains("touch"));
    }
}
