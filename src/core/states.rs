//! Game state definitions that control the overall flow of the game.
//!
//! States determine which systems run at any given time. Shooting and
//! spawning only run in the Playing state; the card reveal and victory
//! overlays are modal and pause gameplay while active.

use bevy::prelude::*;

/// Main game states.
///
/// - Start in `Loading` to read config and the save snapshot
/// - `Playing` is active gameplay: aim, shoot, collect
/// - `CardReveal` presents the card for a newly collected letter
/// - `Victory` shows the completed-word screen until "play again"
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Initial state - loading config and hydrating the store
    #[default]
    Loading,
    /// Active gameplay
    Playing,
    /// Modal card presentation for the most recent letter
    CardReveal,
    /// The word is complete and the victory screen is up
    Victory,
}
