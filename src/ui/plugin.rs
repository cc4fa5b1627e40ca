//! UI plugin - control panel and victory overlay.

use bevy::prelude::*;

use super::panel::*;
use super::victory::*;
use crate::core::GameState;
use crate::store::SceneState;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PanelState>()
            .add_systems(OnExit(GameState::Loading), spawn_panel)
            .add_systems(
                Update,
                (
                    toggle_panel,
                    expand_on_selection.run_if(resource_changed::<SceneState>),
                    auto_collapse,
                    deselect_button,
                    reset_button,
                    update_panel,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(OnEnter(GameState::Victory), spawn_victory_ui)
            .add_systems(
                Update,
                play_again_button.run_if(in_state(GameState::Victory)),
            )
            .add_systems(OnExit(GameState::Victory), cleanup_victory_ui);
    }
}
