//! Cards plugin - modal card reveal flow.

use bevy::prelude::*;

use super::sequencer::CardReveal;
use super::systems::*;
use crate::core::{GameReset, GameState};

/// Cards plugin - presents one card per collected letter and raises the
/// accepted flag when the final card is dismissed.
pub struct CardsPlugin;

impl Plugin for CardsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CardReveal>()
            .init_resource::<CardDrag>()
            // Hydrated letters were revealed in an earlier session
            .add_systems(OnEnter(GameState::Playing), resync_card_count)
            .add_systems(
                Update,
                open_card_on_new_letter.run_if(in_state(GameState::Playing)),
            )
            .add_systems(OnEnter(GameState::CardReveal), spawn_card_ui)
            .add_systems(
                Update,
                (card_drag_input, continue_button, advance_card, update_card_ui)
                    .chain()
                    .run_if(in_state(GameState::CardReveal)),
            )
            .add_systems(OnExit(GameState::CardReveal), cleanup_card_ui)
            .add_systems(Update, reset_cards.run_if(on_event::<GameReset>));
    }
}
