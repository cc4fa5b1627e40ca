//! Progress plugin - watches for word completion.

use bevy::prelude::*;

use super::victory_ready;
use crate::config::GameConfig;
use crate::core::GameState;
use crate::store::SceneState;

/// Progress plugin - transitions to the victory screen exactly once per
/// completed collection.
pub struct ProgressPlugin;

impl Plugin for ProgressPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, detect_victory.run_if(in_state(GameState::Playing)));
    }
}

fn detect_victory(
    config: Res<GameConfig>,
    mut state: ResMut<SceneState>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    // Immutable pre-check keeps change detection quiet on idle frames
    if state.objects.len() != config.word_len() || !state.last_card_accepted {
        return;
    }
    if victory_ready(&mut state, config.word_len()) {
        info!("Word '{}' complete!", config.word);
        next_state.set(GameState::Victory);
    }
}
