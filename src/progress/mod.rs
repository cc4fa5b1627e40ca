//! Collection progress and victory detection.

mod plugin;

pub use plugin::ProgressPlugin;

use crate::store::SceneState;

/// Check-and-consume the victory condition.
///
/// True exactly when the collection is complete and the final card was
/// just accepted; consuming resets the one-shot flag so the condition can
/// never fire twice for the same completion.
pub fn victory_ready(state: &mut SceneState, word_len: usize) -> bool {
    if state.objects.len() == word_len && state.last_card_accepted {
        state.take_card_accepted();
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::letters::{spawn_letter, SpawnRng};

    #[test]
    fn fires_exactly_once_per_completion() {
        let config = GameConfig::default();
        let mut state = SceneState::default();
        let mut rng = SpawnRng::seeded(9);

        for _ in 0..config.word_len() {
            assert!(!victory_ready(&mut state, config.word_len()));
            spawn_letter(&mut state, &config, rng.rng());
        }

        // Full collection but the final card is still up
        assert!(!victory_ready(&mut state, config.word_len()));

        state.set_last_card_accepted(true);
        assert!(victory_ready(&mut state, config.word_len()));

        // Edge-triggered: the flag was consumed
        assert!(!state.last_card_accepted);
        assert!(!victory_ready(&mut state, config.word_len()));

        // Unrelated state changes do not re-arm it
        state.select_object(Some("letter-0".to_string()));
        assert!(!victory_ready(&mut state, config.word_len()));
    }

    #[test]
    fn accepted_flag_alone_is_not_victory() {
        let config = GameConfig::default();
        let mut state = SceneState::default();
        state.set_last_card_accepted(true);
        assert!(!victory_ready(&mut state, config.word_len()));
        // Not consumed either: the collection was incomplete
        assert!(state.last_card_accepted);
    }
}
