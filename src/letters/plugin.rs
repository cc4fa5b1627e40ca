//! Letters plugin - spawner and plaque animation.

use bevy::prelude::*;

use super::spawner::SpawnRng;
use super::systems::*;
use crate::core::GameState;
use crate::shooting::ShootSet;
use crate::store::SceneState;

/// Letters plugin - appends to the collection on goal hits and keeps the
/// rendered plaques in sync with the store.
pub struct LettersPlugin;

impl Plugin for LettersPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpawnRng>()
            // Spawn side effects run after the flight step each frame
            .add_systems(Update, handle_goal_hits.in_set(ShootSet::Spawn))
            .add_systems(
                Update,
                (
                    sync_letter_visuals.run_if(resource_changed::<SceneState>),
                    settle_letters,
                    animate_letters,
                )
                    .chain()
                    .run_if(not(in_state(GameState::Loading))),
            );
    }
}
