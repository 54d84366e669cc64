// File: src/core/sides.rs
use crate::core::glyphs::{is_delimiter_pair, LEFT_SIDES, RIGHT_SIDES};
use crate::core::types::Split;

/// Splits a moji around the delimiter pair nearest its center.
///
/// The left delimiter is searched from the center towards the start, the right
/// one from the center towards the end. Each search covers half the moji,
/// rounded up, so the center of an odd-length moji is seen by both; a glyph
/// found by the left search is never reused as the right delimiter.
///
/// Returns `None` when either half has no delimiter or the two found glyphs
/// are not a matching pair.
pub fn split_sides(moji: &str) -> Option<Split> {
    let chars: Vec<char> = moji.chars().collect();
    let len = chars.len();
    let half = (len + 1) / 2;

    let left_index = (0..half).rev().find(|&i| LEFT_SIDES.contains(&chars[i]))?;
    let right_index = (len - half..len)
        .filter(|&i| i != left_index)
        .find(|&i| RIGHT_SIDES.contains(&chars[i]))?;

    let (left, right) = (chars[left_index], chars[right_index]);
    if !is_delimiter_pair(left, right) {
        return None;
    }

    Some(Split::new(
        collect(&chars[..left_index]),
        left.to_string(),
        collect(&chars[left_index + 1..right_index]),
        right.to_string(),
        collect(&chars[right_index + 1..]),
    ))
}

pub(crate) fn collect(chars: &[char]) -> String {
    chars.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::glyphs::{left_side_index, right_side_index};

    #[test]
    fn splits_around_the_innermost_pair() {
        let split = split_sides("ヽ(´ー`)ﾉ").unwrap();
        assert_eq!(split, Split::new("ヽ", "(", "´ー`", ")", "ﾉ"));
    }

    #[test]
    fn nested_brackets_pick_the_ones_nearest_the_center() {
        let split = split_sides("[(T_T)]").unwrap();
        assert_eq!(split, Split::new("[", "(", "T_T", ")", "]"));
    }

    #[test]
    fn rejects_missing_side() {
        assert_eq!(split_sides("(T_T"), None);
        assert_eq!(split_sides("T_T)"), None);
        assert_eq!(split_sides(""), None);
    }

    #[test]
    fn rejects_asymmetric_pair() {
        assert_eq!(split_sides("(T_T]"), None);
    }

    #[test]
    fn chosen_sides_share_a_table_slot() {
        for moji in ["ʕ•ᴥ•ʔ", "（＾ω＾）", "༼ つ ◕_◕ ༽つ", "|ω・)", "(T_T)"] {
            if let Some(split) = split_sides(moji) {
                let left = split.left.chars().next().unwrap();
                let right = split.right.chars().next().unwrap();
                assert_eq!(left_side_index(left), right_side_index(right));
            }
        }
    }

    #[test]
    fn center_glyph_is_not_matched_against_itself() {
        // The center `|` is found by the left search; the right search moves on.
        let split = split_sides("ab|c|").unwrap();
        assert_eq!(split, Split::new("ab", "|", "c", "|", ""));
        assert_eq!(split_sides("ab|cd"), None);
    }
}
