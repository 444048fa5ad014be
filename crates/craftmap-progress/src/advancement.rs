//! Advancement snapshots and their merge.
//!
//! A save may come with several advancement exports. They are combined into
//! one table before any recipe is looked up.

use indexmap::map::Entry;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Progress of one advancement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvancementProgress {
    /// Completed criteria and when they were completed.
    #[serde(default)]
    pub criteria: IndexMap<String, String>,
    /// Whether the advancement is done. Absent means not done.
    #[serde(default)]
    pub done: bool,
}

impl AdvancementProgress {
    /// Creates a progress entry with no criteria.
    #[must_use]
    pub fn with_done(done: bool) -> Self {
        Self {
            criteria: IndexMap::new(),
            done,
        }
    }
}

/// A top-level value of a raw advancement file. Files also carry
/// bookkeeping values such as `DataVersion`, which are dropped.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawEntry {
    Progress(AdvancementProgress),
    Other(serde::de::IgnoredAny),
}

/// One advancement snapshot: advancement key to progress.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(into = "IndexMap<String, AdvancementProgress>")]
pub struct AdvancementDocument {
    entries: IndexMap<String, AdvancementProgress>,
}

impl<'de> Deserialize<'de> for AdvancementDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = IndexMap::<String, RawEntry>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .filter_map(|(key, entry)| match entry {
                RawEntry::Progress(progress) => Some((key, progress)),
                RawEntry::Other(_) => None,
            })
            .collect())
    }
}

impl From<AdvancementDocument> for IndexMap<String, AdvancementProgress> {
    fn from(document: AdvancementDocument) -> Self {
        document.entries
    }
}

impl FromIterator<(String, AdvancementProgress)> for AdvancementDocument {
    fn from_iter<I: IntoIterator<Item = (String, AdvancementProgress)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl AdvancementDocument {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a raw advancement file.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Sets the progress of an advancement, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, progress: AdvancementProgress) {
        self.entries.insert(key.into(), progress);
    }

    /// Gets the progress of an advancement.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&AdvancementProgress> {
        self.entries.get(key)
    }

    /// Returns the number of advancements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the document holds no advancements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates advancements in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AdvancementProgress)> {
        self.entries
            .iter()
            .map(|(key, progress)| (key.as_str(), progress))
    }
}

/// Merges snapshots, earliest first.
///
/// A key keeps the value of the first document that defines it; later
/// documents only contribute keys not seen before. No input yields an
/// empty document.
#[must_use]
pub fn merge_advancements(documents: &[AdvancementDocument]) -> AdvancementDocument {
    let mut merged = AdvancementDocument::new();
    let mut shadowed = 0usize;

    for document in documents {
        for (key, progress) in &document.entries {
            match merged.entries.entry(key.clone()) {
                Entry::Occupied(_) => shadowed += 1,
                Entry::Vacant(slot) => {
                    slot.insert(progress.clone());
                },
            }
        }
    }

    tracing::debug!(
        documents = documents.len(),
        keys = merged.len(),
        shadowed,
        "merged advancement snapshots"
    );
    merged
}
