// src/core/types.rs
use crate::core::glyphs::ESCAPE;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The six part categories of the dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Outsides,
    Arms,
    Sides,
    Insides,
    Eyes,
    Mouths,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Outsides,
        Category::Arms,
        Category::Sides,
        Category::Insides,
        Category::Eyes,
        Category::Mouths,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Outsides => "outsides",
            Category::Arms => "arms",
            Category::Sides => "sides",
            Category::Insides => "insides",
            Category::Eyes => "eyes",
            Category::Mouths => "mouths",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Joins the two halves of a paired part around the insertion marker.
pub fn paired(left: &str, right: &str) -> String {
    let mut part = String::with_capacity(left.len() + right.len() + 1);
    part.push_str(left);
    part.push(ESCAPE);
    part.push_str(right);
    part
}

/// One level of the five-slot decomposition:
/// `[outer_left, left, middle, right, outer_right]`.
///
/// The same shape is produced by every splitter: outsides/sides/middle,
/// outsides/arms/face and insides/eyes/mouth.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Split {
    pub outer_left: String,
    pub left: String,
    pub middle: String,
    pub right: String,
    pub outer_right: String,
}

impl Split {
    pub fn new(
        outer_left: impl Into<String>,
        left: impl Into<String>,
        middle: impl Into<String>,
        right: impl Into<String>,
        outer_right: impl Into<String>,
    ) -> Self {
        Self {
            outer_left: outer_left.into(),
            left: left.into(),
            middle: middle.into(),
            right: right.into(),
            outer_right: outer_right.into(),
        }
    }
}

/// What the face splitter found between the arms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FaceParts {
    /// A glyph that is a whole face by itself, stored as an eye entry.
    SingleGlyph(String),
    Split {
        insides: (String, String),
        eyes: (String, String),
        mouth: String,
    },
}

/// A fully decomposed moji.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub outsides: (String, String),
    pub arms: (String, String),
    pub sides: (char, char),
    pub face: FaceParts,
}

impl Analysis {
    /// Part values in tally order: face parts first, then arms, sides, outsides.
    pub fn parts(&self) -> Vec<(Category, String)> {
        let mut parts = Vec::with_capacity(6);
        match &self.face {
            FaceParts::SingleGlyph(glyph) => parts.push((Category::Eyes, glyph.clone())),
            FaceParts::Split { insides, eyes, mouth } => {
                parts.push((Category::Mouths, mouth.clone()));
                parts.push((Category::Eyes, paired(&eyes.0, &eyes.1)));
                parts.push((Category::Insides, paired(&insides.0, &insides.1)));
            }
        }
        parts.push((Category::Arms, paired(&self.arms.0, &self.arms.1)));
        let mut left = [0u8; 4];
        let mut right = [0u8; 4];
        parts.push((
            Category::Sides,
            paired(self.sides.0.encode_utf8(&mut left), self.sides.1.encode_utf8(&mut right)),
        ));
        parts.push((Category::Outsides, paired(&self.outsides.0, &self.outsides.1)));
        parts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_use_lowercase_names() {
        let json = serde_json::to_string(&Category::Mouths).unwrap();
        assert_eq!(json, "\"mouths\"");
        let parsed: Category = serde_json::from_str("\"outsides\"").unwrap();
        assert_eq!(parsed, Category::Outsides);
    }

    #[test]
    fn single_glyph_face_only_adds_an_eye_entry() {
        let analysis = Analysis {
            outsides: (String::new(), String::new()),
            arms: (String::new(), String::new()),
            sides: ('(', ')'),
            face: FaceParts::SingleGlyph("ツ".to_string()),
        };
        let categories: Vec<Category> = analysis.parts().into_iter().map(|(c, _)| c).collect();
        assert_eq!(
            categories,
            vec![Category::Eyes, Category::Arms, Category::Sides, Category::Outsides]
        );
        assert_eq!(analysis.parts()[0].1, "ツ");
        assert_eq!(analysis.parts()[2].1, "(%)");
    }
}
