//! Property tests for the scoring engine (pure, no session).
//!
//! Properties tested:
//! - Scoring ignores the order of the dice
//! - No die appears in two combinations
//! - The total is the sum of combination points
//! - A full straight is the only combination when it matches
//! - Scorable ids are a subset of the input ids
//! - Another 1 never lowers the total of a set holding three or more 1s

use std::collections::BTreeSet;

use proptest::prelude::*;

use crate::domain::dice::dice_from_faces;
use crate::domain::scoring::{has_any_score, scorable_dice_ids, score, CombinationKind};
use crate::domain::{test_gens, test_prelude};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: monotonic totals
    #[test]
    fn prop_extra_one_never_lowers_the_total(faces in test_gens::faces_with_three_ones()) {
        let before = score(&dice_from_faces(&faces)).total;
        let mut more = faces.clone();
        more.push(1);
        let after = score(&dice_from_faces(&more)).total;
        prop_assert!(after >= before, "{:?}: {} then {}", faces, before, after);
    }

    /// Property: order independence
    #[test]
    fn prop_score_is_order_independent((dice, shuffled) in test_gens::dice_and_permutation()) {
        prop_assert_eq!(score(&dice), score(&shuffled));
    }

    /// Property: scoring twice yields the same breakdown
    #[test]
    fn prop_score_is_idempotent(dice in test_gens::dice()) {
        prop_assert_eq!(score(&dice), score(&dice));
    }

    /// Property: no double counting
    #[test]
    fn prop_no_die_in_two_combinations(dice in test_gens::dice()) {
        let result = score(&dice);
        let mut seen = BTreeSet::new();
        for combo in &result.combinations {
            for id in &combo.dice_ids {
                prop_assert!(seen.insert(*id), "die {} counted twice", id);
            }
        }
    }

    /// Property: total matches its parts and has_any_score agrees
    #[test]
    fn prop_total_is_sum_of_points(dice in test_gens::dice()) {
        let result = score(&dice);
        let sum: u32 = result.combinations.iter().map(|c| c.points).sum();
        prop_assert_eq!(result.total, sum);
        prop_assert_eq!(has_any_score(&dice), result.total > 0);
        prop_assert!(result.combinations.iter().all(|c| c.points > 0));
    }

    /// Property: straight exclusivity
    #[test]
    fn prop_full_straight_is_exclusive(order in Just(vec![1u8, 2, 3, 4, 5, 6]).prop_shuffle()) {
        let result = score(&dice_from_faces(&order));
        prop_assert_eq!(result.combinations.len(), 1);
        prop_assert_eq!(result.combinations[0].kind, CombinationKind::FullStraight);
        prop_assert_eq!(result.total, 1500);
    }

    /// Property: scorable ids come from the input, ascending and unique
    #[test]
    fn prop_scorable_ids_subset(dice in test_gens::dice()) {
        let ids = scorable_dice_ids(&dice);
        let input: BTreeSet<_> = dice.iter().map(|d| d.id).collect();
        prop_assert!(ids.iter().all(|id| input.contains(id)));
        prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
        // Every 1 and 5 always scores.
        for d in dice.iter().filter(|d| d.value == 1 || d.value == 5) {
            prop_assert!(ids.contains(&d.id));
        }
    }
}
