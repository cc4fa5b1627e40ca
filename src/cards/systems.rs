//! Systems bridging the card sequencer to input, UI, and game state.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::sequencer::{CardEvent, CardReveal};
use crate::config::GameConfig;
use crate::core::GameState;
use crate::store::SceneState;

/// Marker for the whole card overlay.
#[derive(Component)]
pub struct CardOverlay;

/// Marker for the card panel (receives rotation feedback).
#[derive(Component)]
pub struct CardPanel;

/// Marker for front-face content (letter + badge), hidden while flipped.
#[derive(Component)]
pub struct CardFront;

/// Marker for back-face content, shown while flipped.
#[derive(Component)]
pub struct CardBack;

/// Marker for the gesture hint line.
#[derive(Component)]
pub struct CardInstruction;

/// Marker for the continue button.
#[derive(Component)]
pub struct ContinueButton;

/// Tracks the press origin of an in-progress mouse drag.
#[derive(Resource, Default)]
pub struct CardDrag {
    origin: Option<Vec2>,
}

/// Start a presentation whenever the collection count changes.
pub fn open_card_on_new_letter(
    state: Res<SceneState>,
    mut cards: ResMut<CardReveal>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if cards.observe_count(state.objects.len()) {
        next_state.set(GameState::CardReveal);
    }
}

/// Adopt the hydrated collection count so reloaded letters do not replay
/// their card presentations.
pub fn resync_card_count(state: Res<SceneState>, mut cards: ResMut<CardReveal>) {
    cards.resync(state.objects.len());
}

/// Drop the sequencer state on game reset.
pub fn reset_cards(mut cards: ResMut<CardReveal>) {
    cards.reset();
}

/// Advance fades and snap-back; finish the presentation on fade-out.
///
/// Dismissing the final letter's card raises the one-shot accepted flag
/// that the victory detector consumes.
pub fn advance_card(
    time: Res<Time>,
    config: Res<GameConfig>,
    mut cards: ResMut<CardReveal>,
    mut state: ResMut<SceneState>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if let Some(CardEvent::Dismissed { index }) = cards.advance(time.delta_secs()) {
        if index + 1 == config.word_len() {
            state.set_last_card_accepted(true);
        }
        next_state.set(GameState::Playing);
    }
}

/// Feed pointer drags into the sequencer.
///
/// A release over a UI button cancels the drag instead of finishing it, so
/// the continue button does not double as a flip tap and the snap-back
/// spring is never left frozen mid-drag.
pub fn card_drag_input(
    mouse: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    windows: Query<&Window, With<PrimaryWindow>>,
    buttons: Query<&Interaction, With<Button>>,
    mut drag: ResMut<CardDrag>,
    mut cards: ResMut<CardReveal>,
) {
    let over_button = buttons
        .iter()
        .any(|interaction| *interaction != Interaction::None);

    if let Ok(window) = windows.get_single() {
        if let Some(cursor) = window.cursor_position() {
            if mouse.just_pressed(MouseButton::Left) && !over_button {
                drag.origin = Some(cursor);
            }
            if let Some(origin) = drag.origin {
                if mouse.pressed(MouseButton::Left) {
                    cards.drag_move(cursor - origin);
                }
                if mouse.just_released(MouseButton::Left) {
                    if over_button {
                        cards.drag_cancel();
                    } else {
                        cards.drag_release(cursor - origin);
                    }
                    drag.origin = None;
                }
            }
        }
    }

    for touch in touches.iter() {
        cards.drag_move(touch.position() - touch.start_position());
    }
    for touch in touches.iter_just_released() {
        if over_button {
            cards.drag_cancel();
        } else {
            cards.drag_release(touch.position() - touch.start_position());
        }
    }
}

/// Dismiss the card when the continue button is pressed.
pub fn continue_button(
    interactions: Query<&Interaction, (Changed<Interaction>, With<ContinueButton>)>,
    mut cards: ResMut<CardReveal>,
) {
    for interaction in interactions.iter() {
        if *interaction == Interaction::Pressed {
            cards.dismiss();
        }
    }
}

const TEAL: Color = Color::srgb(0.306, 0.804, 0.769);
const INK: Color = Color::srgb(0.04, 0.04, 0.10);

/// Build the card overlay for the active presentation.
pub fn spawn_card_ui(mut commands: Commands, cards: Res<CardReveal>, config: Res<GameConfig>) {
    let Some(card) = cards.presentation() else {
        return;
    };
    let letter = config.char_at(card.index);
    let badge = format!("{}/{}", card.index + 1, config.word_len());

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(30.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.95)),
            CardOverlay,
        ))
        .with_children(|parent| {
            // Gesture hint
            parent.spawn((
                Text::new("Drag to spin - tap to flip"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(TEAL),
                CardInstruction,
            ));

            // The card itself
            parent
                .spawn((
                    Node {
                        width: Val::Px(300.0),
                        height: Val::Px(450.0),
                        flex_direction: FlexDirection::Column,
                        justify_content: JustifyContent::Center,
                        align_items: AlignItems::Center,
                        border: UiRect::all(Val::Px(3.0)),
                        ..default()
                    },
                    BackgroundColor(INK),
                    BorderColor(TEAL),
                    CardPanel,
                ))
                .with_children(|panel| {
                    // Front: index badge + big letter
                    panel.spawn((
                        Text::new(badge),
                        TextFont {
                            font_size: 20.0,
                            ..default()
                        },
                        TextColor(TEAL),
                        Node {
                            position_type: PositionType::Absolute,
                            top: Val::Px(15.0),
                            left: Val::Px(15.0),
                            ..default()
                        },
                        CardFront,
                    ));
                    panel.spawn((
                        Text::new(letter.to_string()),
                        TextFont {
                            font_size: 220.0,
                            ..default()
                        },
                        TextColor(TEAL),
                        CardFront,
                    ));

                    // Back: backer design placeholder
                    panel.spawn((
                        Text::new("COLLECTIBOL"),
                        TextFont {
                            font_size: 28.0,
                            ..default()
                        },
                        TextColor(TEAL),
                        Visibility::Hidden,
                        CardBack,
                    ));
                });

            // Continue button
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
                    ContinueButton,
                ))
                .with_children(|button| {
                    button.spawn((
                        Text::new("Continue"),
                        TextFont {
                            font_size: 20.0,
                            ..default()
                        },
                        TextColor(TEAL),
                    ));
                });
        });
}

/// Mirror sequencer state onto the overlay: fade, flip faces, rotation
/// feedback, instruction text.
pub fn update_card_ui(
    cards: Res<CardReveal>,
    mut overlays: Query<&mut BackgroundColor, With<CardOverlay>>,
    mut panels: Query<&mut Transform, With<CardPanel>>,
    mut fronts: Query<&mut Visibility, (With<CardFront>, Without<CardBack>)>,
    mut backs: Query<&mut Visibility, With<CardBack>>,
    mut instructions: Query<&mut Text, With<CardInstruction>>,
) {
    let Some(card) = cards.presentation() else {
        return;
    };

    for mut background in overlays.iter_mut() {
        background.0 = Color::srgba(0.0, 0.0, 0.0, 0.95 * card.alpha());
    }

    // The flat overlay stands in for the 3D card: rotation squashes the
    // panel, the fade scales it in from nothing.
    for mut transform in panels.iter_mut() {
        let squash_x = card.rot_y.cos().abs().max(0.05);
        let squash_y = card.rot_x.cos().abs().max(0.05);
        transform.scale = Vec3::new(squash_x, squash_y, 1.0) * card.alpha();
    }

    let (front, back) = if card.flipped {
        (Visibility::Hidden, Visibility::Inherited)
    } else {
        (Visibility::Inherited, Visibility::Hidden)
    };
    for mut visibility in fronts.iter_mut() {
        *visibility = front;
    }
    for mut visibility in backs.iter_mut() {
        *visibility = back;
    }

    for mut text in instructions.iter_mut() {
        let hint = if card.flipped {
            "Tap the card to flip back"
        } else {
            "Drag to spin - tap to flip"
        };
        if text.0 != hint {
            text.0 = hint.to_string();
        }
    }
}

/// Tear down the overlay when leaving the card state.
pub fn cleanup_card_ui(
    mut commands: Commands,
    overlays: Query<Entity, With<CardOverlay>>,
    mut drag: ResMut<CardDrag>,
) {
    for entity in overlays.iter() {
        commands.entity(entity).despawn_recursive();
    }
    drag.origin = None;
}
