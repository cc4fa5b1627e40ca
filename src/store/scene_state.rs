//! The scene store: process-wide game state behind named operations.
//!
//! Every other system reads and mutates the collection through these
//! methods. Bevy's single-threaded schedule makes each operation atomic
//! with respect to other systems, and resource change detection is what
//! notifies observers (UI refresh, persistence) of mutations.

use bevy::prelude::*;

use super::objects::{CollectibleObject, ObjectPatch};

/// Singleton game state.
///
/// `objects` is insertion-ordered and capacity-bounded to the word length;
/// the Nth object inserted displays the Nth character of the target word.
/// Only `objects` and `shot_count` survive a restart.
#[derive(Resource, Debug, Default)]
pub struct SceneState {
    /// Collected letters, in insertion order.
    pub objects: Vec<CollectibleObject>,
    /// Weak reference to a selected object; may point at nothing.
    pub selected_object_id: Option<String>,
    /// Total shots taken (diagnostic counter).
    pub shot_count: u32,
    /// Pending shot target awaiting the flight animator. Transient.
    pub touch_target: Option<Vec3>,
    /// One-shot flag: the most recent card was explicitly dismissed.
    pub last_card_accepted: bool,
}

impl SceneState {
    /// Append an object. Capacity is the spawner's responsibility; the
    /// store appends unconditionally.
    pub fn add_object(&mut self, obj: CollectibleObject) {
        self.objects.push(obj);
    }

    /// Remove an object by id, clearing the selection if it matched.
    pub fn remove_object(&mut self, id: &str) {
        self.objects.retain(|obj| obj.id != id);
        if self.selected_object_id.as_deref() == Some(id) {
            self.selected_object_id = None;
        }
    }

    /// Reset the game: no objects, no selection, accepted flag cleared.
    /// This is the sole deletion path during normal play.
    pub fn clear_all_objects(&mut self) {
        self.objects.clear();
        self.selected_object_id = None;
        self.last_card_accepted = false;
    }

    /// Set or clear the selection. The id is not validated; selecting a
    /// stale id is inert (lookups treat a missing match as no selection).
    pub fn select_object(&mut self, id: Option<String>) {
        self.selected_object_id = id;
    }

    /// Merge fields into the matching object; no-op if the id is unknown.
    pub fn update_object(&mut self, id: &str, patch: ObjectPatch) {
        if let Some(obj) = self.objects.iter_mut().find(|obj| obj.id == id) {
            obj.apply(patch);
        }
    }

    /// Register a shot: bump the counter and stage the target for the
    /// flight animator. Target bounds are validated by the resolver before
    /// this call and by the animator on arrival, not here.
    pub fn shoot_ball(&mut self, target: Vec3) {
        self.shot_count += 1;
        self.touch_target = Some(target);
    }

    /// Low-level target setter; the animator clears the pending target with
    /// this once it has consumed it.
    pub fn set_touch_target(&mut self, target: Option<Vec3>) {
        self.touch_target = target;
    }

    /// Set the one-shot card-accepted flag.
    pub fn set_last_card_accepted(&mut self, accepted: bool) {
        self.last_card_accepted = accepted;
    }

    /// Read and reset the card-accepted flag (edge-triggered consumption).
    pub fn take_card_accepted(&mut self) -> bool {
        std::mem::take(&mut self.last_card_accepted)
    }

    /// Look up the currently selected object, if it exists.
    pub fn selected_object(&self) -> Option<&CollectibleObject> {
        let id = self.selected_object_id.as_deref()?;
        self.objects.iter().find(|obj| obj.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::objects::{IdleAnimation, ObjectKind};

    fn letter(id: &str) -> CollectibleObject {
        CollectibleObject {
            id: id.to_string(),
            kind: ObjectKind::Box,
            position: [0.0, 4.0, -5.0],
            rotation: [0.0; 3],
            scale: [1.0; 3],
            color: "#4ECDC4".to_string(),
            roughness: 0.3,
            metalness: 0.5,
            idle: IdleAnimation::Rotate,
            animation_speed: 1.0,
            created_at: 0,
        }
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut state = SceneState::default();
        state.add_object(letter("a"));
        state.add_object(letter("b"));
        state.add_object(letter("c"));
        let ids: Vec<_> = state.objects.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn remove_clears_matching_selection() {
        let mut state = SceneState::default();
        state.add_object(letter("a"));
        state.add_object(letter("b"));
        state.select_object(Some("a".to_string()));

        state.remove_object("a");
        assert_eq!(state.objects.len(), 1);
        assert_eq!(state.selected_object_id, None);

        // Removing an unrelated object leaves the selection alone
        state.select_object(Some("b".to_string()));
        state.remove_object("nope");
        assert_eq!(state.selected_object_id.as_deref(), Some("b"));
    }

    #[test]
    fn clear_all_resets_everything_it_owns() {
        let mut state = SceneState::default();
        state.add_object(letter("a"));
        state.select_object(Some("a".to_string()));
        state.set_last_card_accepted(true);
        state.shoot_ball(Vec3::new(0.0, 1.5, -5.0));

        state.clear_all_objects();
        assert!(state.objects.is_empty());
        assert_eq!(state.selected_object_id, None);
        assert!(!state.last_card_accepted);
        // The shot counter is diagnostic and is not part of the reset
        assert_eq!(state.shot_count, 1);
    }

    #[test]
    fn stale_selection_is_stored_but_displays_nothing() {
        let mut state = SceneState::default();
        state.select_object(Some("X".to_string()));
        assert_eq!(state.selected_object_id.as_deref(), Some("X"));
        assert!(state.selected_object().is_none());
    }

    #[test]
    fn update_unknown_id_is_a_noop() {
        let mut state = SceneState::default();
        state.add_object(letter("a"));
        state.update_object(
            "missing",
            ObjectPatch {
                roughness: Some(0.9),
                ..Default::default()
            },
        );
        assert_eq!(state.objects[0].roughness, 0.3);
    }

    #[test]
    fn shoot_increments_and_stages_target() {
        let mut state = SceneState::default();
        let target = Vec3::new(1.0, 2.0, -5.0);
        state.shoot_ball(target);
        state.shoot_ball(target);
        assert_eq!(state.shot_count, 2);
        assert_eq!(state.touch_target, Some(target));

        state.set_touch_target(None);
        assert_eq!(state.touch_target, None);
    }

    #[test]
    fn card_accepted_flag_is_one_shot() {
        let mut state = SceneState::default();
        state.set_last_card_accepted(true);
        assert!(state.take_card_accepted());
        assert!(!state.take_card_accepted());
        assert!(!state.last_card_accepted);
    }
}
