//! Card reveal sequencer.
//!
//! One modal card presentation per newly collected letter, edge-triggered
//! on the collection count. The machine itself is pure: gesture deltas and
//! frame ticks go in, a dismissal event comes out. Systems map it onto the
//! overlay UI and the game state.

use bevy::prelude::*;
use std::f32::consts::PI;

use crate::core::approach;

/// Fade-in duration in seconds.
pub const FADE_IN_SECS: f32 = 0.15;
/// Fade-out duration in seconds.
pub const FADE_OUT_SECS: f32 = 0.3;
/// Total displacement under which a release counts as a tap.
pub const TAP_THRESHOLD: f32 = 10.0;
/// Drag pixels per radian of card rotation.
pub const DRAG_DIVISOR: f32 = 100.0;
/// Rotation clamp while the card shows its front.
pub const ROTATION_LIMIT: f32 = PI * 0.49;
/// Interpolation rate for the snap-back spring.
const SNAP_RATE: f32 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CardPhase {
    FadingIn,
    Shown,
    FadingOut,
}

/// A single card being presented.
#[derive(Debug)]
pub struct Presentation {
    /// Letter index this card reveals.
    pub index: usize,
    /// Back side showing; rotation is locked while flipped.
    pub flipped: bool,
    /// Y rotation (radians) from horizontal drag.
    pub rot_y: f32,
    /// X rotation (radians) from vertical drag.
    pub rot_x: f32,
    phase: CardPhase,
    fade: f32,
    dragging: bool,
}

impl Presentation {
    fn new(index: usize) -> Self {
        Self {
            index,
            flipped: false,
            rot_y: 0.0,
            rot_x: 0.0,
            phase: CardPhase::FadingIn,
            fade: 0.0,
            dragging: false,
        }
    }

    /// Overlay opacity, 0 to 1.
    pub fn alpha(&self) -> f32 {
        self.fade.clamp(0.0, 1.0)
    }

    /// Whether the continue action is still accepted.
    pub fn dismissable(&self) -> bool {
        self.phase == CardPhase::Shown
    }
}

/// Reported by [`CardReveal::advance`] when a presentation ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardEvent {
    /// The card for `index` finished fading out after "continue".
    Dismissed { index: usize },
}

/// Sequencer resource: at most one presentation at a time, keyed off the
/// last collection count it processed.
#[derive(Resource, Debug, Default)]
pub struct CardReveal {
    presentation: Option<Presentation>,
    last_processed_count: usize,
}

impl CardReveal {
    /// Edge-triggered count watcher. A count that is non-zero and distinct
    /// from the last processed one starts a presentation for the newest
    /// letter and returns true.
    pub fn observe_count(&mut self, count: usize) -> bool {
        if count == 0 || count == self.last_processed_count {
            return false;
        }
        self.last_processed_count = count;
        self.presentation = Some(Presentation::new(count - 1));
        true
    }

    /// Adopt a count without presenting a card. Used after save hydration:
    /// reloaded letters were all revealed in an earlier session.
    pub fn resync(&mut self, count: usize) {
        self.last_processed_count = count;
    }

    /// Drop any presentation and forget the processed count (game reset).
    pub fn reset(&mut self) {
        self.presentation = None;
        self.last_processed_count = 0;
    }

    pub fn presentation(&self) -> Option<&Presentation> {
        self.presentation.as_ref()
    }

    /// Apply an in-progress drag, `total` pixels since the press.
    ///
    /// Rotation follows the drag linearly; the y axis is clamped so the
    /// front never quite turns away. While flipped, drag does not rotate.
    pub fn drag_move(&mut self, total: Vec2) {
        let Some(card) = self.presentation.as_mut() else {
            return;
        };
        if card.phase != CardPhase::Shown || card.flipped {
            return;
        }
        card.dragging = true;
        card.rot_y = (total.x / DRAG_DIVISOR).clamp(-ROTATION_LIMIT, ROTATION_LIMIT);
        card.rot_x = total.y / DRAG_DIVISOR;
    }

    /// Finish a drag. A short drag is a tap and toggles the flip; any
    /// release lets the rotation spring back to zero.
    pub fn drag_release(&mut self, total: Vec2) {
        let Some(card) = self.presentation.as_mut() else {
            return;
        };
        if card.phase != CardPhase::Shown {
            return;
        }
        card.dragging = false;
        if total.x.abs() < TAP_THRESHOLD && total.y.abs() < TAP_THRESHOLD {
            card.flipped = !card.flipped;
        }
        if card.flipped {
            card.rot_y = 0.0;
            card.rot_x = 0.0;
        }
    }

    /// Abandon an in-progress drag without evaluating a tap.
    ///
    /// Used when the release lands on a UI button and is swallowed there;
    /// the rotation still springs back, and the flip state is untouched.
    pub fn drag_cancel(&mut self) {
        if let Some(card) = self.presentation.as_mut() {
            card.dragging = false;
        }
    }

    /// Begin dismissal ("continue"). Ignored unless fully shown.
    pub fn dismiss(&mut self) {
        if let Some(card) = self.presentation.as_mut() {
            if card.phase == CardPhase::Shown {
                card.phase = CardPhase::FadingOut;
            }
        }
    }

    /// Advance fades and the snap-back spring by `dt` seconds.
    pub fn advance(&mut self, dt: f32) -> Option<CardEvent> {
        let card = self.presentation.as_mut()?;
        match card.phase {
            CardPhase::FadingIn => {
                card.fade += dt / FADE_IN_SECS;
                if card.fade >= 1.0 {
                    card.fade = 1.0;
                    card.phase = CardPhase::Shown;
                }
            }
            CardPhase::Shown => {
                if !card.dragging {
                    card.rot_y = approach(card.rot_y, 0.0, SNAP_RATE, dt);
                    card.rot_x = approach(card.rot_x, 0.0, SNAP_RATE, dt);
                }
            }
            CardPhase::FadingOut => {
                card.fade -= dt / FADE_OUT_SECS;
                if card.fade <= 0.0 {
                    let index = card.index;
                    self.presentation = None;
                    return Some(CardEvent::Dismissed { index });
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn shown_card(index: usize) -> CardReveal {
        let mut cards = CardReveal::default();
        assert!(cards.observe_count(index + 1));
        while cards.presentation().unwrap().alpha() < 1.0 {
            cards.advance(DT);
        }
        cards
    }

    #[test]
    fn presents_once_per_count_change() {
        let mut cards = CardReveal::default();
        assert!(!cards.observe_count(0));
        assert!(cards.observe_count(1));
        assert_eq!(cards.presentation().unwrap().index, 0);
        // Same count again: no new presentation
        assert!(!cards.observe_count(1));
        assert!(cards.observe_count(2));
        assert_eq!(cards.presentation().unwrap().index, 1);
    }

    #[test]
    fn resynced_count_does_not_present() {
        let mut cards = CardReveal::default();
        cards.resync(5);
        assert!(!cards.observe_count(5));
        assert!(cards.presentation().is_none());
        // The next real spawn still presents
        assert!(cards.observe_count(6));
    }

    #[test]
    fn tap_flips_and_tap_flips_back() {
        let mut cards = shown_card(0);
        cards.drag_release(Vec2::new(3.0, -4.0));
        assert!(cards.presentation().unwrap().flipped);
        cards.drag_release(Vec2::new(0.0, 0.0));
        assert!(!cards.presentation().unwrap().flipped);
    }

    #[test]
    fn drag_rotates_linearly_with_clamp() {
        let mut cards = shown_card(0);
        cards.drag_move(Vec2::new(50.0, 30.0));
        let card = cards.presentation().unwrap();
        assert!((card.rot_y - 0.5).abs() < 1e-6);
        assert!((card.rot_x - 0.3).abs() < 1e-6);

        cards.drag_move(Vec2::new(1000.0, 0.0));
        assert_eq!(cards.presentation().unwrap().rot_y, ROTATION_LIMIT);

        // A long drag is not a tap
        cards.drag_release(Vec2::new(1000.0, 0.0));
        assert!(!cards.presentation().unwrap().flipped);
    }

    #[test]
    fn rotation_locks_while_flipped() {
        let mut cards = shown_card(0);
        cards.drag_release(Vec2::ZERO); // flip
        cards.drag_move(Vec2::new(200.0, 200.0));
        let card = cards.presentation().unwrap();
        assert_eq!(card.rot_y, 0.0);
        assert_eq!(card.rot_x, 0.0);
    }

    #[test]
    fn cancelled_drag_springs_back_without_flipping() {
        let mut cards = shown_card(0);
        cards.drag_move(Vec2::new(3.0, 0.0));
        // Release swallowed by a button: cancel, not release
        cards.drag_cancel();
        for _ in 0..120 {
            cards.advance(DT);
        }
        let card = cards.presentation().unwrap();
        assert!(card.rot_y.abs() < 1e-3, "spring stayed frozen");
        assert!(!card.flipped, "cancel must not count as a tap");
    }

    #[test]
    fn rotation_springs_back_after_release() {
        let mut cards = shown_card(0);
        cards.drag_move(Vec2::new(40.0, 0.0));
        cards.drag_release(Vec2::new(40.0, 0.0));
        for _ in 0..120 {
            cards.advance(DT);
        }
        assert!(cards.presentation().unwrap().rot_y.abs() < 1e-3);
    }

    #[test]
    fn dismissal_fades_out_then_reports_once() {
        let mut cards = shown_card(4);
        cards.dismiss();
        let mut dismissed = None;
        for _ in 0..60 {
            if let Some(event) = cards.advance(DT) {
                assert!(dismissed.is_none(), "dismissal reported twice");
                dismissed = Some(event);
            }
        }
        assert_eq!(dismissed, Some(CardEvent::Dismissed { index: 4 }));
        assert!(cards.presentation().is_none());
    }

    #[test]
    fn dismiss_is_ignored_while_fading_in() {
        let mut cards = CardReveal::default();
        cards.observe_count(1);
        cards.dismiss();
        assert!(cards.presentation().unwrap().phase == CardPhase::FadingIn);
    }

    #[test]
    fn reset_clears_presentation_and_count() {
        let mut cards = shown_card(2);
        cards.reset();
        assert!(cards.presentation().is_none());
        // Count 1 presents again after a reset
        assert!(cards.observe_count(1));
    }
}
