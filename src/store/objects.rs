//! Collectible object data.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Shape discriminator for collectible objects.
///
/// Letters are always `Box` today; the other variants are retained for
/// possible future collectible types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    #[default]
    Box,
    Sphere,
    Torus,
    Cone,
}

/// Idle animation a letter performs after settling into its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdleAnimation {
    Rotate,
    Float,
    Pulse,
    #[default]
    None,
}

/// A spawned collectible representing one character of the target word.
///
/// Which character it displays is not stored here: it is derived at render
/// time from the object's insertion index, so insertion order is the single
/// source of truth for letter identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectibleObject {
    /// Unique id, stable for the object's lifetime.
    pub id: String,
    /// Shape discriminator (always `Box` for letters).
    pub kind: ObjectKind,
    /// Placement in scene units.
    pub position: [f32; 3],
    pub rotation: [f32; 3],
    pub scale: [f32; 3],
    /// Display color token, e.g. "#4ECDC4".
    pub color: String,
    /// Surface shading parameters in [0, 1].
    pub roughness: f32,
    pub metalness: f32,
    /// Idle animation after arrival.
    pub idle: IdleAnimation,
    /// Multiplier for the idle animation rate.
    pub animation_speed: f32,
    /// Creation timestamp in milliseconds (ordering aid only).
    pub created_at: u64,
}

/// Partial update for [`CollectibleObject`]; `None` fields are left as-is.
#[derive(Debug, Clone, Default)]
pub struct ObjectPatch {
    pub position: Option<[f32; 3]>,
    pub rotation: Option<[f32; 3]>,
    pub scale: Option<[f32; 3]>,
    pub color: Option<String>,
    pub roughness: Option<f32>,
    pub metalness: Option<f32>,
    pub idle: Option<IdleAnimation>,
    pub animation_speed: Option<f32>,
}

impl CollectibleObject {
    /// Merge a partial update into this object.
    pub fn apply(&mut self, patch: ObjectPatch) {
        if let Some(position) = patch.position {
            self.position = position;
        }
        if let Some(rotation) = patch.rotation {
            self.rotation = rotation;
        }
        if let Some(scale) = patch.scale {
            self.scale = scale;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(roughness) = patch.roughness {
            self.roughness = roughness;
        }
        if let Some(metalness) = patch.metalness {
            self.metalness = metalness;
        }
        if let Some(idle) = patch.idle {
            self.idle = idle;
        }
        if let Some(animation_speed) = patch.animation_speed {
            self.animation_speed = animation_speed;
        }
    }
}

/// Milliseconds since the Unix epoch; used for ids and `created_at`.
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
