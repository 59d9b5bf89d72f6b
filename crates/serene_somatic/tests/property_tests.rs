//! Property-based tests for serene_somatic nutrition and sleep heuristics.

use proptest::prelude::*;
use serene_somatic::sleep::{sleep_window, EARLY_WINDOW, LATE_WINDOW};
use serene_somatic::NutritionEngine;

fn arb_meal() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec!["蛋白质", "蔬菜", "水果", "米饭", "汤"]),
        0..4,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    /// Balance deltas follow the per-meal keyword rules exactly.
    #[test]
    fn balance_matches_keyword_counts(meals in prop::collection::vec(arb_meal(), 0..20)) {
        let mut engine = NutritionEngine::new();
        engine.log_meals(&meals);
        let b = engine.balance();

        let protein = meals.iter().filter(|m| m.contains("蛋白质")).count() as i32;
        let veg = meals.iter().filter(|m| m.contains("蔬菜")).count() as i32;
        let fruit = meals.iter().filter(|m| m.contains("水果")).count() as i32;
        let no_veg = meals.len() as i32 - veg;

        prop_assert_eq!(b.amino_acids, protein);
        prop_assert_eq!(b.trace_elements, 2 * veg - no_veg);
        prop_assert_eq!(b.antioxidants, fruit);
    }

    /// Suggested quantities are never negative.
    #[test]
    fn suggestions_never_negative(meals in prop::collection::vec(arb_meal(), 0..20)) {
        let mut engine = NutritionEngine::new();
        engine.log_meals(&meals);
        let advice = engine.suggest_adjustment();
        prop_assert_eq!(advice.len(), 3);
        prop_assert!(!advice[0].contains("x-"));
        prop_assert!(!advice[1].contains("x-"));
    }

    #[test]
    fn sleep_window_is_one_of_two(hour in 0u32..24) {
        let w = sleep_window(hour);
        prop_assert!(w == EARLY_WINDOW || w == LATE_WINDOW);
        prop_assert_eq!(w == EARLY_WINDOW, hour < 12);
    }
}
