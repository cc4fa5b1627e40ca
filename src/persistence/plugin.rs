//! Persistence plugin - hydration, normalization, and autosave.

use bevy::prelude::*;
use bevy::tasks::IoTaskPool;
use std::io::ErrorKind;

use super::snapshot::{normalize_positions, SaveError, SaveGame, SAVE_PATH};
use crate::config::GameConfig;
use crate::core::GameState;
use crate::store::SceneState;

/// Pending stale-position normalization, applied a short fixed delay after
/// hydration. Removed once it runs, so a reset cannot re-trigger it.
#[derive(Resource)]
struct HydrateNormalize {
    timer: Timer,
}

/// Persistence plugin - best-effort JSON snapshot of the collection.
///
/// Loads never fail the session (missing or corrupt saves start fresh) and
/// saves are written off-thread, fire-and-forget.
pub struct PersistencePlugin;

impl Plugin for PersistencePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Loading), hydrate_store)
            .add_systems(
                Update,
                (
                    apply_normalization.run_if(resource_exists::<HydrateNormalize>),
                    autosave.run_if(resource_changed::<SceneState>),
                )
                    .run_if(not(in_state(GameState::Loading))),
            );
    }
}

/// Populate the store from the save file, if one exists.
fn hydrate_store(mut commands: Commands, mut state: ResMut<SceneState>) {
    match SaveGame::load(SAVE_PATH) {
        Ok(snapshot) => {
            info!(
                "Hydrated {} letter(s) and {} shot(s) from {SAVE_PATH}",
                snapshot.objects.len(),
                snapshot.shot_count
            );
            state.objects = snapshot.objects;
            state.shot_count = snapshot.shot_count;
            if !state.objects.is_empty() {
                commands.insert_resource(HydrateNormalize {
                    timer: Timer::from_seconds(0.25, TimerMode::Once),
                });
            }
        }
        Err(SaveError::Io { ref source, .. }) if source.kind() == ErrorKind::NotFound => {
            info!("No save file; starting fresh");
        }
        Err(err) => {
            warn!("{err}; starting fresh");
        }
    }
}

/// Rewrite hydrated placements to the spawn point after the delay.
fn apply_normalization(
    mut commands: Commands,
    time: Res<Time>,
    config: Res<GameConfig>,
    mut pending: ResMut<HydrateNormalize>,
    mut state: ResMut<SceneState>,
) {
    if !pending.timer.tick(time.delta()).just_finished() {
        return;
    }
    normalize_positions(&mut state.objects, config.spawn_point().to_array());
    info!("Normalized {} hydrated letter placement(s)", state.objects.len());
    commands.remove_resource::<HydrateNormalize>();
}

/// Write the persisted subset whenever the store changes.
///
/// The write happens on the IO task pool; the mutating system never waits
/// on the disk. Failures are logged and swallowed.
fn autosave(state: Res<SceneState>) {
    let snapshot = SaveGame::capture(&state);
    IoTaskPool::get()
        .spawn(async move {
            if let Err(err) = snapshot.write(SAVE_PATH) {
                error!("{err}");
            }
        })
        .detach();
}
