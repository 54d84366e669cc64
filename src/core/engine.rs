use crate::core::arms::split_arms;
use crate::core::face::{split_face, KnownParts};
use crate::core::glyphs::{is_delimiter, is_denied, is_single_char_face, ESCAPE};
use crate::core::sides::split_sides;
use crate::core::types::{Analysis, FaceParts};
use crate::persistence::load_bootstrap;
use crate::tags::TagContext;
use crate::tally::{PartDictionary, ResolvedDictionary};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// Why a record was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rejection {
    /// Contains the `%` insertion marker.
    EscapeCharacter,
    DeniedGlyph,
    /// No matching delimiter pair around the center.
    Sides,
    EmptySide,
    /// A delimiter is left inside the face, usually a nested face.
    NestedDelimiter,
    /// Eyes and mouth could not be resolved.
    Face,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Rejection::EscapeCharacter => "escape character",
            Rejection::DeniedGlyph => "denied glyph",
            Rejection::Sides => "no matching sides",
            Rejection::EmptySide => "empty side",
            Rejection::NestedDelimiter => "delimiter inside face",
            Rejection::Face => "unresolved face",
        };
        f.write_str(reason)
    }
}

/// What happened to one corpus record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Directive,
    Accepted(Analysis),
    Rejected(Rejection),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Every record seen, directives and rejected ones included.
    pub records: usize,
    pub directives: usize,
    pub accepted: usize,
    pub rejected: BTreeMap<Rejection, usize>,
}

impl RunStats {
    pub fn rejected_total(&self) -> usize {
        self.rejected.values().sum()
    }
}

/// Drives the corpus through the splitters and the tally.
///
/// The dictionary under construction is only mutated here, in corpus order.
/// The bootstrap dictionary is read-only for the whole run.
pub struct Analyzer {
    dictionary: PartDictionary,
    bootstrap: ResolvedDictionary,
    context: TagContext,
    stats: RunStats,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    pub fn new() -> Self {
        Self::with_bootstrap(ResolvedDictionary::default())
    }

    pub fn with_bootstrap(bootstrap: ResolvedDictionary) -> Self {
        Self {
            dictionary: PartDictionary::new(),
            bootstrap,
            context: TagContext::default(),
            stats: RunStats::default(),
        }
    }

    /// Starts from the dictionary at `path`, or from nothing if it cannot be loaded.
    pub fn from_file_or_new(path: &Path) -> Self {
        Self::with_bootstrap(load_bootstrap(path))
    }

    pub fn dictionary(&self) -> &PartDictionary {
        &self.dictionary
    }

    pub fn context(&self) -> &TagContext {
        &self.context
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Decomposes one moji against the current prior knowledge without
    /// tallying it.
    pub fn analyze(&self, moji: &str) -> Result<Analysis, Rejection> {
        check_glyphs(moji)?;
        let known = KnownParts::new(&self.bootstrap, &self.dictionary);
        decompose(moji, &known)
    }

    /// Processes every record in order.
    pub fn process_corpus<I, S>(&mut self, records: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for record in records {
            self.process_record(record.as_ref());
        }
    }

    /// Applies a directive or parses and tallies a moji.
    pub fn process_record(&mut self, record: &str) -> Outcome {
        self.stats.records += 1;
        let outcome = self.classify(record);

        match &outcome {
            Outcome::Directive => self.stats.directives += 1,
            Outcome::Accepted(analysis) => {
                for (category, part) in analysis.parts() {
                    self.dictionary.tally(category, &part, &self.context);
                }
                self.stats.accepted += 1;
            }
            Outcome::Rejected(reason) => {
                tracing::trace!(record, %reason, "skipping record");
                *self.stats.rejected.entry(*reason).or_insert(0) += 1;
            }
        }
        outcome
    }

    fn classify(&mut self, record: &str) -> Outcome {
        if let Err(reason) = check_glyphs(record) {
            return Outcome::Rejected(reason);
        }
        if let Some(context) = TagContext::from_directive(record) {
            tracing::debug!(?context, "tag context changed");
            self.context = context;
            return Outcome::Directive;
        }
        let known = KnownParts::new(&self.bootstrap, &self.dictionary);
        match decompose(record, &known) {
            Ok(analysis) => Outcome::Accepted(analysis),
            Err(reason) => Outcome::Rejected(reason),
        }
    }

    /// Resolves tag votes and hands back the frozen dictionary.
    pub fn finish(self) -> (ResolvedDictionary, RunStats) {
        (self.dictionary.resolve(), self.stats)
    }
}

fn check_glyphs(record: &str) -> Result<(), Rejection> {
    if record.contains(ESCAPE) {
        return Err(Rejection::EscapeCharacter);
    }
    if record.chars().any(is_denied) {
        return Err(Rejection::DeniedGlyph);
    }
    Ok(())
}

/// Sides, then arms, then the face.
fn decompose(moji: &str, known: &KnownParts<'_>) -> Result<Analysis, Rejection> {
    let sides = split_sides(moji).ok_or(Rejection::Sides)?;
    let (left_side, right_side) = match (sides.left.chars().next(), sides.right.chars().next()) {
        (Some(l), Some(r)) => (l, r),
        _ => return Err(Rejection::EmptySide),
    };

    let arms = split_arms(&sides.outer_left, &sides.middle, &sides.outer_right);
    let face = arms.middle;
    if face.chars().any(is_delimiter) {
        return Err(Rejection::NestedDelimiter);
    }

    let face = if is_single_char_face(&face) {
        FaceParts::SingleGlyph(face)
    } else {
        let split = split_face(&face, known).ok_or(Rejection::Face)?;
        FaceParts::Split {
            insides: (split.outer_left, split.outer_right),
            eyes: (split.left, split.right),
            mouth: split.middle,
        }
    };

    Ok(Analysis {
        outsides: (arms.outer_left, arms.outer_right),
        arms: (arms.left, arms.right),
        sides: (left_side, right_side),
        face,
    })
}
