//! Victory overlay shown once the word is complete.

use bevy::prelude::*;

use crate::config::GameConfig;
use crate::core::GameReset;
use crate::store::SceneState;

const TEAL: Color = Color::srgb(0.306, 0.804, 0.769);
const INK: Color = Color::srgba(0.04, 0.04, 0.10, 0.9);

#[derive(Component)]
pub struct VictoryOverlay;

#[derive(Component)]
pub struct PlayAgainButton;

pub fn spawn_victory_ui(mut commands: Commands, state: Res<SceneState>, config: Res<GameConfig>) {
    let summary = format!(
        "You spelled it in {} shot{}",
        state.shot_count,
        if state.shot_count == 1 { "" } else { "s" }
    );

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(24.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.85)),
            VictoryOverlay,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(format!("{}!", config.word)),
                TextFont {
                    font_size: 64.0,
                    ..default()
                },
                TextColor(TEAL),
            ));
            parent.spawn((
                Text::new(summary),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            parent
                .spawn((
                    Button,
                    Node {
                        padding: UiRect::axes(Val::Px(40.0), Val::Px(14.0)),
                        border: UiRect::all(Val::Px(3.0)),
                        justify_content: JustifyContent::Center,
                        align_items: AlignItems::Center,
                        ..default()
                    },
                    BackgroundColor(INK),
                    BorderColor(TEAL),
                    PlayAgainButton,
                ))
                .with_children(|button| {
                    button.spawn((
                        Text::new("Play again"),
                        TextFont {
                            font_size: 22.0,
                            ..default()
                        },
                        TextColor(TEAL),
                    ));
                });
        });
}

/// Restarting clears the store; the store plugin handles the reset event
/// and returns the game to play.
pub fn play_again_button(
    interactions: Query<&Interaction, (Changed<Interaction>, With<PlayAgainButton>)>,
    mut reset: EventWriter<GameReset>,
) {
    for interaction in interactions.iter() {
        if *interaction == Interaction::Pressed {
            reset.send(GameReset);
        }
    }
}

pub fn cleanup_victory_ui(mut commands: Commands, overlays: Query<Entity, With<VictoryOverlay>>) {
    for entity in overlays.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
