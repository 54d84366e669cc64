// File: src/core/arms.rs
use crate::core::sides::collect;
use crate::core::types::Split;

/// Peels arms off the content around the sides.
///
/// An arm faces inward when the glyph just outside one side repeats as the
/// last (left) or first (right) glyph inside the face. Only one direction may
/// face inward: that arm is doubled into the arm slot and its inner copy is
/// dropped from the face. Otherwise both arms sit outside the sides, one glyph
/// each, empty when there is nothing to peel.
pub fn split_arms(outer_left: &str, middle: &str, outer_right: &str) -> Split {
    let left: Vec<char> = outer_left.chars().collect();
    let mid: Vec<char> = middle.chars().collect();
    let right: Vec<char> = outer_right.chars().collect();

    let left_arm = left.last().copied();
    let right_arm = right.first().copied();
    let left_facing = left_arm.is_some() && left_arm == mid.last().copied();
    let right_facing = right_arm.is_some() && right_arm == mid.first().copied();

    match (left_facing, right_facing, left_arm, right_arm) {
        (true, false, Some(arm), _) => Split::new(
            collect(&left[..left.len() - 1]),
            doubled(arm),
            collect(&mid[..mid.len() - 1]),
            String::new(),
            outer_right,
        ),
        (false, true, _, Some(arm)) => Split::new(
            outer_left,
            String::new(),
            collect(&mid[1..]),
            doubled(arm),
            collect(&right[1..]),
        ),
        _ => Split::new(
            collect(&left[..left.len().saturating_sub(1)]),
            left_arm.map(String::from).unwrap_or_default(),
            middle,
            right_arm.map(String::from).unwrap_or_default(),
            collect(right.get(1..).unwrap_or(&[])),
        ),
    }
}

fn doubled(arm: char) -> String {
    [arm, arm].iter().collect()
}
