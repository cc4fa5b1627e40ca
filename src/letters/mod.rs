//! Letters module - spawner and letter plaque visuals.

mod components;
mod plugin;
mod spawner;
mod systems;

pub use components::LetterVisual;
pub use plugin::LettersPlugin;
pub use spawner::{spawn_letter, SpawnRng};
pub use systems::parse_color_token;
