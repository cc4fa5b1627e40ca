//! Persistence module - save snapshot and hydration.

mod plugin;
mod snapshot;

pub use plugin::PersistencePlugin;
pub use snapshot::{normalize_positions, SaveError, SaveGame, SAVE_PATH};
