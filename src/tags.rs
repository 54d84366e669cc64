// File: src/tags.rs
//! Tag context set by directive records (`###emotion,animal,other`).

pub const DIRECTIVE_PREFIX: &str = "###";

/// Placeholder animal for directives that name none. Voted like any other
/// animal, never kept as a resolved tag.
pub const NOT_ANIMAL: &str = "NOT_ANIMAL";

/// The three places a tag can be voted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TagSlot {
    Emotion,
    Animal,
    Other,
}

/// Tags applied to every moji until the next directive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagContext {
    pub emotion: Option<String>,
    pub animal: Option<String>,
    pub other: Vec<String>,
}

impl TagContext {
    /// Parses a directive record. Returns `None` for anything without the
    /// `###` prefix.
    ///
    /// Tokens are comma separated: emotion, animal, then any number of
    /// free-form tags. Empty tokens cast no vote, except a missing animal
    /// which becomes [`NOT_ANIMAL`].
    pub fn from_directive(record: &str) -> Option<Self> {
        let body = record.strip_prefix(DIRECTIVE_PREFIX)?;
        let mut tokens = body.split(',');

        let emotion = tokens.next().filter(|t| !t.is_empty()).map(str::to_string);
        let animal = tokens
            .next()
            .filter(|t| !t.is_empty())
            .unwrap_or(NOT_ANIMAL)
            .to_string();
        let other = tokens.filter(|t| !t.is_empty()).map(str::to_string).collect();

        Some(Self { emotion, animal: Some(animal), other })
    }

    /// Each non-empty tag with the slot it votes in.
    pub fn votes(&self) -> impl Iterator<Item = (TagSlot, &str)> {
        self.emotion
            .iter()
            .map(|t| (TagSlot::Emotion, t.as_str()))
            .chain(self.animal.iter().map(|t| (TagSlot::Animal, t.as_str())))
            .chain(self.other.iter().map(|t| (TagSlot::Other, t.as_str())))
    }

    pub fn is_empty(&self) -> bool {
        self.votes().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_directive() {
        let ctx = TagContext::from_directive("###happy,cat,cute").unwrap();
        assert_eq!(ctx.emotion.as_deref(), Some("happy"));
        assert_eq!(ctx.animal.as_deref(), Some("cat"));
        assert_eq!(ctx.other, vec!["cute".to_string()]);
    }

    #[test]
    fn missing_animal_becomes_sentinel() {
        let ctx = TagContext::from_directive("###sad").unwrap();
        assert_eq!(ctx.emotion.as_deref(), Some("sad"));
        assert_eq!(ctx.animal.as_deref(), Some(NOT_ANIMAL));
        assert!(ctx.other.is_empty());

        let ctx = TagContext::from_directive("###sad,,wave").unwrap();
        assert_eq!(ctx.animal.as_deref(), Some(NOT_ANIMAL));
        assert_eq!(ctx.other, vec!["wave".to_string()]);
    }

    #[test]
    fn empty_emotion_casts_no_vote() {
        let ctx = TagContext::from_directive("###,bear").unwrap();
        let votes: Vec<_> = ctx.votes().collect();
        assert_eq!(votes, vec![(TagSlot::Animal, "bear")]);
    }

    #[test]
    fn extra_tokens_are_free_form_tags() {
        let ctx = TagContext::from_directive("###happy,dog,dance,music").unwrap();
        assert_eq!(ctx.other, vec!["dance".to_string(), "music".to_string()]);
    }

    #[test]
    fn plain_records_are_not_directives() {
        assert_eq!(TagContext::from_directive("(T_T)"), None);
        assert_eq!(TagContext::from_directive("##happy"), None);
        assert!(TagContext::default().is_empty());
    }
}
