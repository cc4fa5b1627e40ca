//! Global events used for cross-system communication.
//!
//! Events keep the shooting, spawning, and UI systems decoupled: the
//! flight animator reports arrivals and the UI requests resets without
//! either referencing the other. Letter spawns are observed through store
//! change detection rather than a dedicated event.

use bevy::prelude::*;

/// Sent when a ball flight finishes inside the goal mouth.
///
/// The letter spawner listens for these and appends a letter to the
/// collection (unless it is already full).
#[derive(Event)]
pub struct GoalHit {
    /// Where the shot landed on the goal plane.
    pub target: Vec3,
}

/// Sent when the player asks to reset the game ("play again" or the panel
/// reset button). Clears the collection and returns to Playing.
#[derive(Event)]
pub struct GameReset;
