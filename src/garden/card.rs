//! Display fields for plant cards
//!
//! Cards never fail to render. A name that is not in the catalog, or a record
//! with an empty emoji or category, falls back to placeholder content.

use crate::catalog::{Catalog, PlantRecord};

/// Glyph used when a plant has no emoji
pub const FALLBACK_EMOJI: &str = "🌱";

/// Category label used when a plant has no category
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Resolved text for one plant card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardFields<'a> {
    /// Plant name as given by the owner
    pub name: &'a str,
    /// Emoji or the fallback glyph
    pub emoji: &'a str,
    /// Category or the unknown label
    pub category: &'a str,
    /// Description, if the record has a non-empty one
    pub description: Option<&'a str>,
    /// Growing season, if known
    pub season: Option<&'a str>,
    /// Difficulty, if known
    pub difficulty: Option<&'a str>,
}

impl<'a> CardFields<'a> {
    /// Resolve fields for a name and the record it maps to, if any
    #[must_use]
    pub fn resolve(name: &'a str, record: Option<&'a PlantRecord>) -> Self {
        let non_empty = |value: &'a Option<String>| value.as_deref().filter(|s| !s.trim().is_empty());

        match record {
            Some(record) => Self {
                name,
                emoji: or_fallback(&record.emoji, FALLBACK_EMOJI),
                category: or_fallback(&record.category, UNKNOWN_CATEGORY),
                description: non_empty(&record.description),
                season: non_empty(&record.season),
                difficulty: non_empty(&record.difficulty),
            },
            None => Self {
                name,
                emoji: FALLBACK_EMOJI,
                category: UNKNOWN_CATEGORY,
                description: None,
                season: None,
                difficulty: None,
            },
        }
    }

    /// Resolve fields by looking `name` up in the catalog
    #[must_use]
    pub fn lookup(name: &'a str, catalog: &'a Catalog) -> Self {
        let record = catalog.find(name);
        if record.is_none() {
            tracing::debug!(plant = name, "no catalog record, using fallback card");
        }
        Self::resolve(name, record)
    }

    /// Resolve fields from a full record
    #[must_use]
    pub fn from_record(record: &'a PlantRecord) -> Self {
        Self::resolve(&record.name, Some(record))
    }
}

fn or_fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() { fallback } else { value }
}

/// Capitalize the first letter of every word ("root vegetable" -> "Root Vegetable")
#[must_use]
pub fn capitalize_words(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
