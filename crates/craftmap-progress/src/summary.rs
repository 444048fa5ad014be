//! Per-category progress counts.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::craftability::Craftability;
use crate::progress::RecipeProgress;
use crate::recipe_type::RecipeType;

/// Counts for one group of records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressCounts {
    /// Number of records.
    pub total: usize,
    /// Unlocked records.
    pub unlocked: usize,
    /// Records craftable now.
    pub craftable: usize,
    /// Records not craftable now.
    pub not_craftable: usize,
    /// Records with an indeterminate verdict.
    pub indeterminate: usize,
}

impl ProgressCounts {
    fn add(&mut self, record: &RecipeProgress) {
        self.total += 1;
        if record.is_unlocked {
            self.unlocked += 1;
        }
        match record.meta().is_craftable() {
            Craftability::Craftable => self.craftable += 1,
            Craftability::NotCraftable => self.not_craftable += 1,
            Craftability::Indeterminate => self.indeterminate += 1,
        }
    }

    /// Share of unlocked records, 0.0 for an empty group.
    #[must_use]
    pub fn unlocked_ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.unlocked as f64 / self.total as f64
        }
    }
}

/// Progress counts overall and per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    /// Counts over every record.
    pub overall: ProgressCounts,
    /// Counts per category, in order of first appearance.
    pub by_type: IndexMap<RecipeType, ProgressCounts>,
}

impl ProgressSummary {
    /// Summarizes assembled records.
    #[must_use]
    pub fn from_records(records: &[RecipeProgress]) -> Self {
        let mut summary = Self::default();
        for record in records {
            summary.overall.add(record);
            summary
                .by_type
                .entry(record.recipe_type)
                .or_default()
                .add(record);
        }
        summary
    }

    /// Counts for one category.
    #[must_use]
    pub fn counts(&self, ty: RecipeType) -> ProgressCounts {
        self.by_type.get(&ty).copied().unwrap_or_default()
    }
}
