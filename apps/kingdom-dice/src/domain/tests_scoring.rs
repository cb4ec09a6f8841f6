use crate::domain::dice::dice_from_faces;
use crate::domain::scoring::{has_any_score, scorable_dice_ids, score, CombinationKind};

fn labels(faces: &[u8]) -> Vec<String> {
    score(&dice_from_faces(faces))
        .combinations
        .into_iter()
        .map(|c| c.label)
        .collect()
}

#[test]
fn three_ones_is_one_thousand() {
    let result = score(&dice_from_faces(&[1, 1, 1, 2, 3, 4]));
    assert_eq!(result.total, 1000);
    assert_eq!(result.combinations.len(), 1);
    assert_eq!(result.combinations[0].label, "3 1s");
    assert_eq!(result.combinations[0].dice_ids, vec![0, 1, 2]);
}

#[test]
fn four_fives_double_and_only_fives_score() {
    let dice = dice_from_faces(&[5, 5, 5, 5, 2, 3]);
    let result = score(&dice);
    assert_eq!(result.total, 1000);
    assert_eq!(labels(&[5, 5, 5, 5, 2, 3]), vec!["4 5s"]);
    assert_eq!(scorable_dice_ids(&dice), vec![0, 1, 2, 3]);
}

#[test]
fn loose_ones_and_fives_group_per_face() {
    let result = score(&dice_from_faces(&[1, 1, 5]));
    assert_eq!(result.total, 250);
    assert_eq!(labels(&[1, 1, 5]), vec!["2 single 1s", "1 single 5"]);
    assert_eq!(result.combinations[0].points, 200);
    assert_eq!(result.combinations[1].points, 50);
}

#[test]
fn nothing_scores() {
    let dice = dice_from_faces(&[2, 3, 4, 6]);
    let result = score(&dice);
    assert_eq!(result.total, 0);
    assert!(result.combinations.is_empty());
    assert!(!has_any_score(&dice));
    assert!(scorable_dice_ids(&dice).is_empty());
}

#[test]
fn full_straight_short_circuits() {
    let result = score(&dice_from_faces(&[6, 4, 2, 1, 3, 5]));
    assert_eq!(result.total, 1500);
    assert_eq!(result.combinations.len(), 1);
    assert_eq!(result.combinations[0].kind, CombinationKind::FullStraight);
    assert_eq!(result.combinations[0].label, "Full Straight (1-6)");
    assert_eq!(result.combinations[0].dice_ids, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn partial_straights_need_exactly_five_dice() {
    assert_eq!(score(&dice_from_faces(&[5, 4, 3, 2, 1])).total, 500);
    assert_eq!(labels(&[1, 2, 3, 4, 5]), vec!["Partial Straight (1-5)"]);
    assert_eq!(score(&dice_from_faces(&[2, 3, 4, 5, 6])).total, 750);
    assert_eq!(labels(&[6, 5, 4, 3, 2]), vec!["Partial Straight (2-6)"]);

    // With a sixth die the straight is not recognized; only singles count.
    let padded = score(&dice_from_faces(&[1, 2, 3, 4, 5, 5]));
    assert_eq!(padded.total, 100 + 100);
    assert_eq!(labels(&[1, 2, 3, 4, 5, 5]), vec!["1 single 1", "2 single 5s"]);
}

#[test]
fn multiples_by_face() {
    assert_eq!(score(&dice_from_faces(&[2, 2, 2])).total, 200);
    assert_eq!(score(&dice_from_faces(&[3, 3, 3])).total, 300);
    assert_eq!(score(&dice_from_faces(&[6, 6, 6])).total, 600);
    assert_eq!(score(&dice_from_faces(&[4, 4, 4, 4])).total, 800);
    assert_eq!(score(&dice_from_faces(&[1, 1, 1, 1])).total, 2000);
}

#[test]
fn five_of_a_kind_is_one_combination() {
    let result = score(&dice_from_faces(&[3, 3, 3, 3, 3, 2]));
    assert_eq!(result.combinations.len(), 1);
    assert_eq!(result.combinations[0].label, "5 3s");
    assert_eq!(result.total, 600);
}

#[test]
fn two_triples_both_score() {
    let result = score(&dice_from_faces(&[2, 2, 2, 5, 5, 5]));
    assert_eq!(result.total, 200 + 500);
    assert_eq!(labels(&[2, 2, 2, 5, 5, 5]), vec!["3 2s", "3 5s"]);
}

#[test]
fn triple_ones_do_not_also_count_as_singles() {
    let result = score(&dice_from_faces(&[1, 1, 1, 5, 6, 6]));
    assert_eq!(result.total, 1000 + 50);
    assert_eq!(labels(&[1, 1, 1, 5, 6, 6]), vec!["3 1s", "1 single 5"]);
}

#[test]
fn empty_set_scores_zero() {
    let result = score(&[]);
    assert_eq!(result.total, 0);
    assert!(result.combinations.is_empty());
}

#[test]
fn scorable_ids_are_greedy_union_not_best_subset() {
    // Both the triple and the loose 1 are selected together.
    let dice = dice_from_faces(&[4, 1, 4, 6, 4, 2]);
    assert_eq!(scorable_dice_ids(&dice), vec![0, 1, 2, 4]);
}

#[test]
fn combination_ids_are_reported_ascending() {
    let mut dice = dice_from_faces(&[5, 2, 5, 3, 5, 6]);
    dice.reverse();
    let result = score(&dice);
    assert_eq!(result.combinations[0].dice_ids, vec![0, 2, 4]);
}
