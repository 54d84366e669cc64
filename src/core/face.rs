// File: src/core/face.rs
use crate::core::glyphs::mirrors;
use crate::core::sides::collect;
use crate::core::types::{paired, Category, Split};

/// Anything that can answer "has this part been seen before?".
pub trait PartLookup {
    fn contains_part(&self, category: Category, part: &str) -> bool;
}

/// Prior knowledge for the face splitter: the dictionary loaded at start-up
/// and the one being built by the current run. A part is known if either has it.
#[derive(Clone, Copy)]
pub struct KnownParts<'a> {
    pub bootstrap: &'a dyn PartLookup,
    pub current: &'a dyn PartLookup,
}

impl<'a> KnownParts<'a> {
    pub fn new(bootstrap: &'a dyn PartLookup, current: &'a dyn PartLookup) -> Self {
        Self { bootstrap, current }
    }

    pub fn knows(&self, category: Category, part: &str) -> bool {
        self.bootstrap.contains_part(category, part) || self.current.contains_part(category, part)
    }
}

/// A run of glyphs paired with its mirror image further right.
#[derive(Debug, Clone)]
struct Pair {
    left: String,
    right: String,
    start: usize,
    end: usize,
}

/// Splits a face into `[inside_left, eye, mouth, eye, inside_right]`.
///
/// Faces shorter than three glyphs are rejected. A mouth already known near
/// the center wins; otherwise the face is read through its symmetric pairs.
/// Returns `None` when either eye or the mouth ends up empty.
pub fn split_face(face: &str, known: &KnownParts<'_>) -> Option<Split> {
    let chars: Vec<char> = face.chars().collect();
    if chars.len() < 3 {
        return None;
    }

    let split = match known_mouth(&chars, known) {
        Some(split) => split,
        None => symmetric_split(&chars)?,
    };

    if split.left.is_empty() || split.middle.is_empty() || split.right.is_empty() {
        return None;
    }
    Some(split)
}

/// Mouth candidates around the center, each with its starting index.
fn mouth_candidates(chars: &[char]) -> Vec<(String, usize)> {
    let mid = chars.len() / 2;
    let mut candidates = vec![(collect(&chars[mid - 1..mid + 1]), mid - 1)];
    if chars.len() % 2 == 1 {
        candidates.push((collect(&chars[mid..mid + 2]), mid));
        candidates.push((chars[mid - 1].to_string(), mid - 1));
        candidates.push((chars[mid].to_string(), mid));
        candidates.push((chars[mid + 1].to_string(), mid + 1));
    } else {
        candidates.push((chars[mid - 1].to_string(), mid - 1));
        candidates.push((chars[mid].to_string(), mid));
    }
    candidates
}

fn known_mouth(chars: &[char], known: &KnownParts<'_>) -> Option<Split> {
    let mut matched: Vec<(String, usize)> = mouth_candidates(chars)
        .into_iter()
        .filter(|(mouth, _)| known.knows(Category::Mouths, mouth))
        .collect();

    if matched.len() > 1 {
        matched.retain(|(mouth, index)| {
            let width = mouth.chars().count();
            let left = index.checked_sub(1).and_then(|i| chars.get(i));
            let right = chars.get(index + width);
            match (left, right) {
                (Some(l), Some(r)) => {
                    known.knows(Category::Eyes, &paired(&l.to_string(), &r.to_string()))
                }
                _ => false,
            }
        });
    }

    if matched.len() != 1 {
        return None;
    }
    let (mouth, index) = matched.remove(0);
    let end = index + mouth.chars().count();
    let glyph = |i: Option<usize>| {
        i.and_then(|i| chars.get(i))
            .map(|c| c.to_string())
            .unwrap_or_default()
    };

    Some(Split::new(
        collect(&chars[..index.saturating_sub(1)]),
        glyph(index.checked_sub(1)),
        mouth,
        glyph(Some(end)),
        collect(chars.get(end + 1..).unwrap_or(&[])),
    ))
}

/// Groups glyph positions into pairs of identical or mirrored glyphs,
/// innermost (rightmost start) first, with interspersed pairs merged.
fn symmetric_pairs(chars: &[char]) -> Vec<Pair> {
    let mut groups: Vec<(char, Vec<usize>)> = Vec::new();
    for (index, &c) in chars.iter().enumerate() {
        let open = groups
            .iter_mut()
            .find(|(rep, idxs)| idxs.len() < 2 && mirrors(*rep, c));
        match open {
            Some((_, idxs)) => idxs.push(index),
            None => groups.push((c, vec![index])),
        }
    }

    let mut pairs: Vec<Pair> = groups
        .into_iter()
        .filter(|(_, idxs)| idxs.len() == 2)
        .map(|(_, idxs)| Pair {
            left: chars[idxs[0]].to_string(),
            right: chars[idxs[1]].to_string(),
            start: idxs[0],
            end: idxs[1],
        })
        .collect();
    pairs.reverse();

    // A pair sitting one step right of the next pair out is the tail of a
    // multi-glyph eye; fold its glyphs into that pair.
    let mut merged = Vec::with_capacity(pairs.len());
    for i in 0..pairs.len() {
        let current = pairs[i].clone();
        match pairs.get_mut(i + 1) {
            Some(next) if current.start == next.start + 1 && current.end == next.end + 1 => {
                next.left.push_str(&current.left);
                next.right.push_str(&current.right);
            }
            _ => merged.push(current),
        }
    }
    merged
}

fn symmetric_split(chars: &[char]) -> Option<Split> {
    let pairs = symmetric_pairs(chars);

    if pairs.is_empty() {
        if chars.len() % 2 == 0 {
            return None;
        }
        let mid = chars.len() / 2;
        return Some(Split::new(
            collect(&chars[..mid - 1]),
            chars[mid - 1].to_string(),
            chars[mid].to_string(),
            chars[mid + 1].to_string(),
            collect(&chars[mid + 2..]),
        ));
    }

    // Two adjacent innermost glyphs are a mouth; the next pair out are the eyes.
    let eyes = if pairs.len() > 1 && pairs[0].end - pairs[0].start == 1 {
        &pairs[1]
    } else {
        &pairs[0]
    };

    let mouth_start = eyes.start + eyes.left.chars().count();
    let inside_start = eyes.end + eyes.right.chars().count();
    Some(Split::new(
        collect(&chars[..eyes.start]),
        eyes.left.clone(),
        collect(chars.get(mouth_start..eyes.end)?),
        eyes.right.clone(),
        collect(chars.get(inside_start..)?),
    ))
}
