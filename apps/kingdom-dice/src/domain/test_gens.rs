// Proptest generators for dice and sessions.
// Faces are generated in range by construction, so no prop_assume! is needed.

use proptest::prelude::*;

use crate::domain::dice::{dice_from_faces, Die, Face};
use crate::domain::rules::{DICE_COUNT, MAX_FACE, MIN_FACE};

/// A single face 1..=6
pub fn face() -> impl Strategy<Value = Face> {
    MIN_FACE..=MAX_FACE
}

/// Between 0 and 6 faces
pub fn faces() -> impl Strategy<Value = Vec<Face>> {
    prop::collection::vec(face(), 0..=DICE_COUNT)
}

/// Up to six faces, at least three of them 1s, in any order
pub fn faces_with_three_ones() -> impl Strategy<Value = Vec<Face>> {
    prop::collection::vec(face(), 0..=DICE_COUNT - 3)
        .prop_map(|mut rest| {
            rest.extend([1, 1, 1]);
            rest
        })
        .prop_shuffle()
}

/// A full table of six faces
pub fn six_faces() -> impl Strategy<Value = [Face; 6]> {
    prop::array::uniform6(face())
}

/// Dice with positional ids
pub fn dice() -> impl Strategy<Value = Vec<Die>> {
    faces().prop_map(|f| dice_from_faces(&f))
}

/// A set of dice and a shuffled copy of it
pub fn dice_and_permutation() -> impl Strategy<Value = (Vec<Die>, Vec<Die>)> {
    dice().prop_flat_map(|d| {
        let original = d.clone();
        Just(d).prop_shuffle().prop_map(move |p| (original.clone(), p))
    })
}

/// A long stream of faces for driving whole turns
pub fn face_stream() -> impl Strategy<Value = Vec<Face>> {
    prop::collection::vec(face(), 6..200)
}
