//! Object store - persisted collection state and its operations.

mod objects;
mod plugin;
mod scene_state;

pub use objects::{now_millis, CollectibleObject, IdleAnimation, ObjectKind, ObjectPatch};
pub use plugin::StorePlugin;
pub use scene_state::SceneState;
