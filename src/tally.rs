// File: src/tally.rs
use crate::core::face::PartLookup;
use crate::core::types::Category;
use crate::tags::{TagContext, TagSlot, NOT_ANIMAL};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// A tag is kept only when its votes exceed this share (3/5) of the total.
pub const MINIMUM_TAG_SHARE: (u64, u64) = (3, 5);

fn exceeds_share(votes: u64, total: u64) -> bool {
    let (num, den) = MINIMUM_TAG_SHARE;
    total > 0 && votes * den > total * num
}

/// Running count and tag votes for one part value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartRecord {
    pub count: u64,
    votes: HashMap<TagSlot, BTreeMap<String, u64>>,
}

impl PartRecord {
    pub fn votes(&self, slot: TagSlot, tag: &str) -> u64 {
        self.votes
            .get(&slot)
            .and_then(|tags| tags.get(tag))
            .copied()
            .unwrap_or(0)
    }

    fn record(&mut self, context: &TagContext) {
        self.count += 1;
        for (slot, tag) in context.votes() {
            *self
                .votes
                .entry(slot)
                .or_default()
                .entry(tag.to_string())
                .or_insert(0) += 1;
        }
    }

    /// The leading tag of a fixed slot, if it beats the share of all votes
    /// cast in that slot.
    fn majority(&self, slot: TagSlot) -> Option<&str> {
        let votes = self.votes.get(&slot)?;
        let total: u64 = votes.values().sum();
        let (tag, &count) = votes.iter().max_by_key(|(_, count)| **count)?;
        exceeds_share(count, total).then_some(tag.as_str())
    }

    /// Emotion, then animal, then every free-form tag that beats the share of
    /// the part's occurrences.
    pub fn resolve(&self) -> ResolvedPart {
        let mut tags: Vec<String> = Vec::new();
        let mut push = |tag: &str| {
            if !tags.iter().any(|t| t == tag) {
                tags.push(tag.to_string());
            }
        };

        for slot in [TagSlot::Emotion, TagSlot::Animal] {
            match self.majority(slot) {
                Some(tag) if tag != NOT_ANIMAL => push(tag),
                _ => {}
            }
        }
        if let Some(other) = self.votes.get(&TagSlot::Other) {
            for (tag, &count) in other {
                if exceeds_share(count, self.count) {
                    push(tag);
                }
            }
        }

        ResolvedPart { count: self.count, tags }
    }
}

/// The dictionary being built during a run: one map of part records per
/// category.
#[derive(Debug, Clone)]
pub struct PartDictionary {
    categories: HashMap<Category, HashMap<String, PartRecord>>,
}

impl Default for PartDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl PartDictionary {
    pub fn new() -> Self {
        Self {
            categories: Category::ALL.iter().map(|&c| (c, HashMap::new())).collect(),
        }
    }

    /// Counts one occurrence of `part` and casts a vote for every tag in
    /// `context`.
    pub fn tally(&mut self, category: Category, part: &str, context: &TagContext) {
        self.categories
            .entry(category)
            .or_default()
            .entry(part.to_string())
            .or_default()
            .record(context);
    }

    pub fn get(&self, category: Category, part: &str) -> Option<&PartRecord> {
        self.categories.get(&category)?.get(part)
    }

    pub fn len(&self, category: Category) -> usize {
        self.categories.get(&category).map_or(0, |parts| parts.len())
    }

    pub fn is_empty(&self) -> bool {
        self.categories.values().all(|parts| parts.is_empty())
    }

    /// Resolves every part's votes into its final tag list.
    pub fn resolve(&self) -> ResolvedDictionary {
        let categories = self
            .categories
            .iter()
            .map(|(&category, parts)| {
                let resolved = parts
                    .iter()
                    .map(|(part, record)| (part.clone(), record.resolve()))
                    .collect();
                (category, resolved)
            })
            .collect();
        ResolvedDictionary { categories }
    }
}

impl PartLookup for PartDictionary {
    fn contains_part(&self, category: Category, part: &str) -> bool {
        self.get(category, part).is_some()
    }
}

/// A part as written to the dictionary file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPart {
    pub count: u64,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// The finished dictionary. Also read back at start-up as prior knowledge
/// for the next run.
///
/// Serialized with every object's keys in UTF-16 code unit order, so files
/// stay byte-compatible with dictionaries written by earlier tooling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct ResolvedDictionary {
    categories: HashMap<Category, HashMap<String, ResolvedPart>>,
}

impl ResolvedDictionary {
    pub fn get(&self, category: Category, part: &str) -> Option<&ResolvedPart> {
        self.categories.get(&category)?.get(part)
    }

    pub fn len(&self, category: Category) -> usize {
        self.categories.get(&category).map_or(0, |parts| parts.len())
    }

    pub fn is_empty(&self) -> bool {
        self.categories.values().all(|parts| parts.is_empty())
    }

    /// Every distinct resolved tag, sorted.
    pub fn tags_used(&self) -> Vec<String> {
        let tags: BTreeSet<&str> = self
            .categories
            .values()
            .flat_map(|parts| parts.values())
            .flat_map(|part| part.tags.iter().map(String::as_str))
            .collect();
        tags.into_iter().map(str::to_string).collect()
    }
}

impl PartLookup for ResolvedDictionary {
    fn contains_part(&self, category: Category, part: &str) -> bool {
        self.get(category, part).is_some()
    }
}

/// Orders by UTF-16 code units rather than code points.
pub fn utf16_cmp(a: &str, b: &str) -> Ordering {
    a.encode_utf16().cmp(b.encode_utf16())
}

struct SortedParts<'a>(Option<&'a HashMap<String, ResolvedPart>>);

impl Serialize for SortedParts<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut entries: Vec<(&String, &ResolvedPart)> =
            self.0.map(|parts| parts.iter().collect()).unwrap_or_default();
        entries.sort_by(|a, b| utf16_cmp(a.0, b.0));

        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (part, record) in entries {
            map.serialize_entry(part, record)?;
        }
        map.end()
    }
}

impl Serialize for ResolvedDictionary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut categories = Category::ALL;
        categories.sort_by(|a, b| utf16_cmp(a.as_str(), b.as_str()));

        let mut map = serializer.serialize_map(Some(categories.len()))?;
        for category in categories {
            map.serialize_entry(category.as_str(), &SortedParts(self.categories.get(&category)))?;
        }
        map.end()
    }
}
