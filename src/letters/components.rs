//! Components for rendered letter plaques.

use bevy::prelude::*;

/// Visual entity for one stored collectible object.
///
/// Mirrors a `CollectibleObject` by id; the index decides both the
/// displayed character and the settle slot.
#[derive(Component)]
pub struct LetterVisual {
    /// Id of the store object this entity renders.
    pub id: String,
    /// Insertion index of that object.
    pub index: usize,
    /// Settle animation progress, 0 to 1.
    pub settle: f32,
    /// Whether the letter has reached its slot.
    pub settled: bool,
    /// Current selection scale factor (springs toward 1.0 or 2.0).
    pub display_scale: f32,
    /// Whether the plaque material currently carries the selection tint.
    pub highlighted: bool,
}

impl LetterVisual {
    pub fn new(id: String, index: usize) -> Self {
        Self {
            id,
            index,
            settle: 0.0,
            settled: false,
            display_scale: 1.0,
            highlighted: false,
        }
    }
}
