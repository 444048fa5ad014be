//! Craftability verdicts.
//!
//! A recipe is judged against the result items of every unlocked recipe and
//! every locked recipe. The check is one level deep: an ingredient counts as
//! available when some unlocked recipe produces it, whether or not that
//! recipe's own ingredients are available.

use ahash::AHashSet;
use craftmap_common::ItemId;
use serde::{Deserialize, Serialize};

use crate::ingredients::{ItemSet, NormalizedIngredients};
use crate::progress::RecipeProgress;

/// Tri-state craftability of a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Craftability {
    /// Every ingredient is produced by an unlocked recipe.
    Craftable,
    /// Every ingredient is produced by some recipe, but not all by unlocked ones.
    NotCraftable,
    /// Some ingredient is produced by no known recipe.
    #[default]
    Indeterminate,
}

impl Craftability {
    /// Returns the verdict as an optional boolean, `None` for indeterminate.
    #[must_use]
    pub fn as_option(self) -> Option<bool> {
        match self {
            Self::Craftable => Some(true),
            Self::NotCraftable => Some(false),
            Self::Indeterminate => None,
        }
    }

    /// Returns true for [`Craftability::Craftable`].
    #[must_use]
    pub fn is_craftable(self) -> bool {
        self == Self::Craftable
    }
}

/// Judges recipes against the result items of a whole recipe set.
#[derive(Debug, Clone, Default)]
pub struct CraftabilityAnalyzer {
    /// Results of unlocked recipes.
    unlocked: AHashSet<ItemId>,
    /// Results of any recipe, unlocked or locked.
    reachable: AHashSet<ItemId>,
}

impl CraftabilityAnalyzer {
    /// Creates an analyzer from the result items of unlocked and locked recipes.
    #[must_use]
    pub fn new(
        unlocked_results: impl IntoIterator<Item = ItemId>,
        locked_results: impl IntoIterator<Item = ItemId>,
    ) -> Self {
        let unlocked: AHashSet<ItemId> = unlocked_results.into_iter().collect();
        let mut reachable = unlocked.clone();
        reachable.extend(locked_results);
        Self {
            unlocked,
            reachable,
        }
    }

    /// Creates an analyzer from assembled records.
    #[must_use]
    pub fn from_records(records: &[RecipeProgress]) -> Self {
        let (unlocked, locked): (Vec<_>, Vec<_>) =
            records.iter().partition(|record| record.is_unlocked);
        Self::new(
            unlocked.into_iter().map(|record| record.result_item.clone()),
            locked.into_iter().map(|record| record.result_item.clone()),
        )
    }

    /// Computes the verdict for one recipe's ingredients.
    #[must_use]
    pub fn verdict(&self, ingredients: &NormalizedIngredients) -> Craftability {
        let required = &ingredients.required_items;
        let optional = &ingredients.optional_items;

        let required_reachable = all_in(required, &self.reachable);
        let optional_reachable = any_in(optional, &self.reachable);
        if !(required_reachable && optional_reachable) {
            return Craftability::Indeterminate;
        }

        if all_in(required, &self.unlocked) && any_in(optional, &self.unlocked) {
            Craftability::Craftable
        } else {
            Craftability::NotCraftable
        }
    }
}

/// Every item is in `pool`. Vacuously true.
fn all_in(items: &ItemSet, pool: &AHashSet<ItemId>) -> bool {
    items.iter().all(|item| pool.contains(item))
}

/// Some item is in `pool`. Vacuously true for an empty set.
fn any_in(items: &ItemSet, pool: &AHashSet<ItemId>) -> bool {
    items.is_empty() || items.iter().any(|item| pool.contains(item))
}
