//! Collectibol - a 3D goal-shooting collecting game in Bevy.
//!
//! Tap the goal mouth to shoot the ball. Every goal spawns a letter of the
//! target word, presented on a reveal card; spell the whole word to win.
//! The collection survives restarts through a JSON save file.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, global events, easing helpers
//! - **Config**: RON gameplay tuning (word, goal bounds, animation rates)
//! - **Store**: The persisted collection state and its operations
//! - **Persistence**: JSON save snapshot, hydration, autosave
//! - **Shooting**: Tap handling and the ball flight animation
//! - **Letters**: Spawning collected letters and their idle animations
//! - **Cards**: The reveal-card presentation and flip gesture
//! - **Progress**: Victory detection
//! - **Scene**: Pitch, goal frame, lights, starfield, camera intro
//! - **UI**: Control panel and victory overlay

pub mod cards;
pub mod config;
pub mod core;
pub mod letters;
pub mod persistence;
pub mod progress;
pub mod scene;
pub mod shooting;
pub mod store;
pub mod ui;

use bevy::prelude::*;

/// Main game plugin that adds all sub-plugins.
pub struct CollectibolPlugin;

impl Plugin for CollectibolPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)

            // Collection state and its save file
            .add_plugins(store::StorePlugin)
            .add_plugins(persistence::PersistencePlugin)

            // Gameplay
            .add_plugins(shooting::ShootingPlugin)
            .add_plugins(letters::LettersPlugin)
            .add_plugins(cards::CardsPlugin)
            .add_plugins(progress::ProgressPlugin)

            // Presentation
            .add_plugins(scene::ScenePlugin)
            .add_plugins(ui::UiPlugin);
    }
}
