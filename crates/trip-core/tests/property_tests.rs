//! Property-based tests for the marker layout and the guess game
//!
//! Uses proptest to check the invariants that must hold for any input.

use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use trip_core::game::{GameEvent, GameOutcome, GamePhase, GuessGame, MAX_HINT_LEVEL};
use trip_core::markers::{self, grid_dims};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Size ranges with `min <= max`, both positive
fn size_range_strategy() -> impl Strategy<Value = (f64, f64)> {
    (0.5f64..100.0, 0.0f64..50.0).prop_map(|(min, extra)| (min, min + extra))
}

/// Guesses that never contain the answer
fn wrong_guess_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 台北中南]{0,20}").expect("valid regex")
}

/// Game events excluding correct submissions
fn non_winning_event_strategy() -> impl Strategy<Value = GameEvent> {
    prop_oneof![
        2 => wrong_guess_strategy().prop_map(GameEvent::TextChanged),
        2 => Just(GameEvent::RequestHint),
        1 => wrong_guess_strategy().prop_map(GameEvent::SubmitGuess),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Exactly `count` markers, each inside the documented ranges
    #[test]
    fn markers_within_bounds(count in 0usize..200, (min, max) in size_range_strategy(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let layout = markers::generate(count, min, max, &mut rng).unwrap();

        prop_assert_eq!(layout.len(), count);
        for m in &layout {
            prop_assert!((0.0..100.0).contains(&m.top_percent));
            prop_assert!((0.0..100.0).contains(&m.left_percent));
            prop_assert!(m.size_px >= min && m.size_px <= max);
            prop_assert!((0.0..360.0).contains(&m.rotation_deg));
            prop_assert!((0.0..5.0).contains(&m.animation_delay_sec));
            prop_assert!((10.0..20.0).contains(&m.animation_duration_sec));
        }
    }

    /// Every marker lands in its own grid cell
    #[test]
    fn markers_occupy_distinct_cells(count in 1usize..150, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let layout = markers::generate(count, 10.0, 20.0, &mut rng).unwrap();
        let (cols, rows) = grid_dims(count);

        prop_assert!(cols * rows >= count);
        let cells: HashSet<usize> = layout
            .iter()
            .filter_map(|m| markers::cell_index(m, cols, rows))
            .collect();
        prop_assert_eq!(cells.len(), count);
        for m in &layout {
            prop_assert_eq!(markers::cell_index(m, cols, rows), Some(m.id));
        }
    }

    /// Any inverted size range is rejected
    #[test]
    fn inverted_sizes_rejected(count in 0usize..20, min in 1.0f64..100.0, gap in 0.001f64..50.0) {
        let mut rng = StdRng::seed_from_u64(0);
        prop_assert!(markers::generate(count, min + gap, min, &mut rng).is_err());
    }

    /// Hint level stays in 1..=3 and never decreases; non-matching input never wins
    #[test]
    fn hint_level_monotonic(events in prop::collection::vec(non_winning_event_strategy(), 0..50)) {
        let mut game = GuessGame::new("高雄").unwrap();
        let mut last = game.hint_level();

        for event in events {
            let outcome = game.handle(event);
            prop_assert_ne!(outcome, GameOutcome::Accepted);
            let level = game.hint_level();
            prop_assert!(level >= last);
            prop_assert!(level.get() >= 1 && level.get() <= MAX_HINT_LEVEL);
            last = level;
        }
        prop_assert!(game.is_active());
    }

    /// A guess containing the answer wins from any hint level
    #[test]
    fn containing_guess_accepted(hints in 0usize..5, prefix in "[a-z ]{0,5}", suffix in "[a-z ]{0,5}") {
        let mut game = GuessGame::new("高雄").unwrap();
        for _ in 0..hints {
            game.handle(GameEvent::RequestHint);
        }
        let outcome = game.handle(GameEvent::SubmitGuess(format!("{prefix}高雄{suffix}")));
        prop_assert_eq!(outcome, GameOutcome::Accepted);
        prop_assert_eq!(game.phase(), GamePhase::Accepted);
    }

    /// A text change after a wrong guess always clears the error
    #[test]
    fn text_change_clears_error(wrong in wrong_guess_strategy(), next in wrong_guess_strategy()) {
        let mut game = GuessGame::new("高雄").unwrap();
        game.handle(GameEvent::SubmitGuess(wrong));
        prop_assert!(game.last_error().is_some());
        prop_assert_eq!(game.current_guess(), "");
        game.handle(GameEvent::TextChanged(next));
        prop_assert!(game.last_error().is_none());
    }
}
