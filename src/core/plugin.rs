//! Core plugin that sets up game states, events, and the loading flow.

use bevy::prelude::*;

use super::events::*;
use super::states::*;
use crate::config::load_config;

/// Core plugin - must be added first as other plugins depend on it.
///
/// This plugin sets up:
/// - Game states (Loading, Playing, CardReveal, Victory)
/// - Global events (GoalHit, GameReset)
/// - Config loading and the transition out of Loading
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            // Initialize game states
            .init_state::<GameState>()

            // Register global events
            .add_event::<GoalHit>()
            .add_event::<GameReset>()

            // Loading state: read config, then hand over to gameplay.
            // Store hydration also runs on this OnEnter (persistence plugin);
            // the state change applies after the schedule completes.
            .add_systems(OnEnter(GameState::Loading), (load_config, finish_loading));
    }
}

/// Transition from Loading to Playing once setup systems have run.
fn finish_loading(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::Playing);
}
