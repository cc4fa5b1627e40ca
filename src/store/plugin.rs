//! Store plugin - owns the scene state resource and the reset path.

use bevy::prelude::*;

use super::scene_state::SceneState;
use crate::core::{GameReset, GameState};

/// Store plugin - the scene state it owns is read by every other plugin.
pub struct StorePlugin;

impl Plugin for StorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneState>()
            .add_systems(Update, handle_reset.run_if(on_event::<GameReset>));
    }
}

/// Clear the collection and return to gameplay. Sole deletion path.
fn handle_reset(
    mut state: ResMut<SceneState>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    state.clear_all_objects();
    info!("Game reset: collection cleared");
    next_state.set(GameState::Playing);
}
