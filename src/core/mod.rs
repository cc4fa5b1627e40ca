//! Core module - game states, global events, easing helpers.

mod easing;
mod events;
mod plugin;
mod states;

pub use easing::{approach, ease_out_cubic};
pub use events::{GameReset, GoalHit};
pub use plugin::CorePlugin;
pub use states::GameState;
