//! Cards module - per-letter modal reveal sequencing.

mod plugin;
mod sequencer;
mod systems;

pub use plugin::CardsPlugin;
pub use sequencer::{CardEvent, CardReveal};
