//! In-game control panel: collection counter, letter details, reset.

use bevy::prelude::*;

use crate::config::GameConfig;
use crate::core::GameReset;
use crate::store::SceneState;

const TEAL: Color = Color::srgb(0.306, 0.804, 0.769);
const INK: Color = Color::srgba(0.04, 0.04, 0.10, 0.9);
const DANGER: Color = Color::srgb(0.85, 0.3, 0.3);

/// Seconds of inactivity before an expanded panel folds away.
const AUTO_COLLAPSE_SECS: f32 = 3.0;

/// Starts expanded so the counters are visible, then auto-collapses a few
/// seconds into the session.
#[derive(Resource)]
pub struct PanelState {
    pub expanded: bool,
    idle: Timer,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            expanded: true,
            idle: Timer::from_seconds(AUTO_COLLAPSE_SECS, TimerMode::Once),
        }
    }
}

impl PanelState {
    fn expand(&mut self) {
        self.expanded = true;
        self.idle.reset();
    }
}

#[derive(Component)]
pub struct PanelRoot;

#[derive(Component)]
pub struct PanelToggle;

#[derive(Component)]
pub struct PanelBody;

#[derive(Component)]
pub struct LetterCounterText;

#[derive(Component)]
pub struct ShotCounterText;

#[derive(Component)]
pub struct SelectionText;

#[derive(Component)]
pub struct DeselectButton;

#[derive(Component)]
pub struct ResetButton;

fn panel_button(color: Color) -> impl Bundle {
    (
        Button,
        Node {
            padding: UiRect::axes(Val::Px(14.0), Val::Px(8.0)),
            border: UiRect::all(Val::Px(2.0)),
            justify_content: JustifyContent::Center,
            ..default()
        },
        BackgroundColor(INK),
        BorderColor(color),
    )
}

pub fn spawn_panel(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(12.0),
                left: Val::Px(12.0),
                flex_direction: FlexDirection::ColumnReverse,
                row_gap: Val::Px(8.0),
                ..default()
            },
            PanelRoot,
        ))
        .with_children(|root| {
            root.spawn((panel_button(TEAL), PanelToggle))
                .with_children(|button| {
                    button.spawn((
                        Text::new("="),
                        TextFont {
                            font_size: 22.0,
                            ..default()
                        },
                        TextColor(TEAL),
                    ));
                });

            root.spawn((
                Node {
                    flex_direction: FlexDirection::Column,
                    padding: UiRect::all(Val::Px(12.0)),
                    row_gap: Val::Px(8.0),
                    border: UiRect::all(Val::Px(2.0)),
                    ..default()
                },
                BackgroundColor(INK),
                BorderColor(TEAL),
                Visibility::Hidden,
                PanelBody,
            ))
            .with_children(|body| {
                body.spawn((
                    Text::new("COLLECTIBOL"),
                    TextFont {
                        font_size: 20.0,
                        ..default()
                    },
                    TextColor(TEAL),
                ));
                body.spawn((
                    Text::new("Letters: 0 / 0"),
                    TextFont {
                        font_size: 18.0,
                        ..default()
                    },
                    TextColor(TEAL),
                    LetterCounterText,
                ));
                body.spawn((
                    Text::new("Shots: 0"),
                    TextFont {
                        font_size: 16.0,
                        ..default()
                    },
                    TextColor(TEAL),
                    ShotCounterText,
                ));
                body.spawn((
                    Text::new(""),
                    TextFont {
                        font_size: 15.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                    SelectionText,
                ));
                body.spawn((panel_button(TEAL), DeselectButton))
                    .with_children(|button| {
                        button.spawn((
                            Text::new("Deselect"),
                            TextFont {
                                font_size: 15.0,
                                ..default()
                            },
                            TextColor(TEAL),
                        ));
                    });
                body.spawn((panel_button(DANGER), ResetButton))
                    .with_children(|button| {
                        button.spawn((
                            Text::new("Reset game"),
                            TextFont {
                                font_size: 15.0,
                                ..default()
                            },
                            TextColor(DANGER),
                        ));
                    });
            });
        });
}

/// Toggle button; collapsing the panel also drops any letter selection.
pub fn toggle_panel(
    interactions: Query<&Interaction, (Changed<Interaction>, With<PanelToggle>)>,
    mut panel: ResMut<PanelState>,
    mut state: ResMut<SceneState>,
) {
    for interaction in interactions.iter() {
        if *interaction == Interaction::Pressed {
            if panel.expanded {
                panel.expanded = false;
                state.select_object(None);
            } else {
                panel.expand();
            }
        }
    }
}

/// Picking a letter pops the panel open so its details are visible.
pub fn expand_on_selection(state: Res<SceneState>, mut panel: ResMut<PanelState>) {
    if state.selected_object_id.is_some() && !panel.expanded {
        panel.expand();
    }
}

/// Fold the panel away after a few idle seconds; any panel interaction
/// restarts the countdown.
pub fn auto_collapse(
    time: Res<Time>,
    interactions: Query<&Interaction, With<Button>>,
    mut panel: ResMut<PanelState>,
    mut state: ResMut<SceneState>,
) {
    if !panel.expanded {
        return;
    }
    if interactions
        .iter()
        .any(|interaction| *interaction != Interaction::None)
    {
        panel.idle.reset();
        return;
    }
    if panel.idle.tick(time.delta()).just_finished() {
        panel.expanded = false;
        if state.selected_object_id.is_some() {
            state.select_object(None);
        }
    }
}

pub fn deselect_button(
    interactions: Query<&Interaction, (Changed<Interaction>, With<DeselectButton>)>,
    mut state: ResMut<SceneState>,
) {
    for interaction in interactions.iter() {
        if *interaction == Interaction::Pressed {
            state.select_object(None);
        }
    }
}

pub fn reset_button(
    interactions: Query<&Interaction, (Changed<Interaction>, With<ResetButton>)>,
    mut reset: EventWriter<GameReset>,
) {
    for interaction in interactions.iter() {
        if *interaction == Interaction::Pressed {
            reset.send(GameReset);
        }
    }
}

/// Mirror store and panel state onto the widgets.
pub fn update_panel(
    panel: Res<PanelState>,
    state: Res<SceneState>,
    config: Res<GameConfig>,
    mut bodies: Query<&mut Visibility, (With<PanelBody>, Without<DeselectButton>)>,
    mut letter_texts: Query<
        &mut Text,
        (
            With<LetterCounterText>,
            Without<ShotCounterText>,
            Without<SelectionText>,
        ),
    >,
    mut shot_texts: Query<&mut Text, (With<ShotCounterText>, Without<SelectionText>)>,
    mut selection_texts: Query<&mut Text, With<SelectionText>>,
    mut deselect_buttons: Query<&mut Visibility, With<DeselectButton>>,
) {
    let body_visibility = if panel.expanded {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };
    for mut visibility in bodies.iter_mut() {
        *visibility = body_visibility;
    }

    let letters = format!("Letters: {} / {}", state.objects.len(), config.word_len());
    for mut text in letter_texts.iter_mut() {
        if text.0 != letters {
            text.0 = letters.clone();
        }
    }

    let shots = format!("Shots: {}", state.shot_count);
    for mut text in shot_texts.iter_mut() {
        if text.0 != shots {
            text.0 = shots.clone();
        }
    }

    let selection = match state.selected_object() {
        Some(obj) => {
            let letter = config.char_at(
                state
                    .objects
                    .iter()
                    .position(|o| o.id == obj.id)
                    .unwrap_or(usize::MAX),
            );
            format!(
                "Selected '{}'\n{}\ncolor {}  scale {:.2}\nidle {:?} x{:.2}\nrough {:.2}  metal {:.2}",
                letter, obj.id, obj.color, obj.scale[0], obj.idle, obj.animation_speed,
                obj.roughness, obj.metalness
            )
        }
        None => String::new(),
    };
    let deselect_visibility = if selection.is_empty() {
        Visibility::Hidden
    } else {
        Visibility::Inherited
    };
    for mut text in selection_texts.iter_mut() {
        if text.0 != selection {
            text.0 = selection.clone();
        }
    }
    for mut visibility in deselect_buttons.iter_mut() {
        *visibility = deselect_visibility;
    }
}
