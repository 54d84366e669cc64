// File: src/core/glyphs.rs
//! Fixed glyph tables used by the splitters and the rejection rules.

/// Marks the insertion point in paired part values (`"T%T"`). Any moji
/// containing it is skipped.
pub const ESCAPE: char = '%';

/// Left face delimiters. A pair is valid only when both halves sit at the
/// same index here and in [`RIGHT_SIDES`].
pub const LEFT_SIDES: [char; 22] = [
    '(', '[', '{', '༼', '|', 'ʕ', '⁽', 'ᶘ', 'ˁ', '〳', '₍', '꒰', '⌈', 'U', 'Ｕ', '∪', '⎩', '╏',
    'ᘳ', '།', 'Ꮚ', '（',
];

pub const RIGHT_SIDES: [char; 22] = [
    ')', ']', '}', '༽', '|', 'ʔ', '⁾', 'ᶅ', 'ˀ', '〵', '₎', '꒱', '⌉', 'U', 'Ｕ', '∪', '⎭', '╏',
    'ᘰ', '།', 'Ꮚ', '）',
];

/// Glyphs that are a complete face on their own.
pub const SINGLE_CHAR_FACES: [char; 7] = ['ツ', 'ᐛ', 'ᐖ', '∵', 'Ö', '⌓', '\u{308}'];

/// Glyphs drawn as mirror images of each other. Each pair is listed once;
/// [`mirrors`] treats the relation as symmetric.
pub const MIRRORED_EYES: [(char, char); 10] = [
    ('\u{301}', '\u{300}'),
    ('ˊ', 'ˋ'),
    ('´', '｀'),
    ('\u{1dc4}', '\u{1dc5}'),
    ('˃', '˂'),
    ('ó', 'ò'),
    ('<', '>'),
    ('˒', '˓'),
    ('⊂', '⊃'),
    ('╰', '╯'),
];

/// Code points known to break the splitters (combining overlays, private use
/// glyphs, halfwidth forms, the replacement character).
pub const DENIED_CODE_POINTS: [u32; 20] = [
    811, 860, 865, 2636, 3642, 3665, 4349, 8408, 8409, 8807, 9678, 9770, 9774, 10047, 11193,
    58164, 59132, 65417, 65507, 65533,
];

pub fn left_side_index(c: char) -> Option<usize> {
    LEFT_SIDES.iter().position(|&side| side == c)
}

pub fn right_side_index(c: char) -> Option<usize> {
    RIGHT_SIDES.iter().position(|&side| side == c)
}

/// True when `left` and `right` occupy the same slot of the delimiter tables.
pub fn is_delimiter_pair(left: char, right: char) -> bool {
    match (left_side_index(left), right_side_index(right)) {
        (Some(l), Some(r)) => l == r,
        _ => false,
    }
}

pub fn is_delimiter(c: char) -> bool {
    LEFT_SIDES.contains(&c) || RIGHT_SIDES.contains(&c)
}

pub fn is_single_char_face(face: &str) -> bool {
    let mut chars = face.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => SINGLE_CHAR_FACES.contains(&c),
        _ => false,
    }
}

/// Returns the mirror partner of `c`, if it has one.
pub fn mirror_of(c: char) -> Option<char> {
    MIRRORED_EYES.iter().find_map(|&(a, b)| {
        if a == c {
            Some(b)
        } else if b == c {
            Some(a)
        } else {
            None
        }
    })
}

/// Identical glyphs or mirror partners.
pub fn mirrors(a: char, b: char) -> bool {
    a == b || mirror_of(a) == Some(b)
}

pub fn is_denied(c: char) -> bool {
    DENIED_CODE_POINTS.contains(&(c as u32))
}
