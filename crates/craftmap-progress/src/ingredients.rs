//! Ingredient normalization.
//!
//! This module provides:
//! - The uniform ingredient model shared by every recipe shape
//! - A single dispatcher from [`RecipeShape`] to that model
//! - The table of game-data exceptions to the unlock rule

use craftmap_common::{ItemId, RecipeName};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::{ProgressError, ProgressResult};
use crate::item_group::ItemGroup;
use crate::raw::{IngredientEntry, NamedRecipe, RawRecipe, RecipeShape};

/// A deduplicated set of items that remembers first-seen order.
pub type ItemSet = IndexSet<ItemId>;

// ============================================================================
// Normalized model
// ============================================================================

/// Ingredients of a recipe, independent of its raw shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedIngredients {
    /// Every one of these must be obtainable.
    pub required_items: ItemSet,
    /// At least one of these must be obtainable. Empty means no constraint.
    pub optional_items: ItemSet,
    /// Items whose acquisition unlocks the recipe's advancement.
    pub unlocked_with_items: ItemSet,
}

impl NormalizedIngredients {
    /// Normalizes the ingredients of a named recipe.
    pub fn from_recipe(recipe: &NamedRecipe) -> ProgressResult<Self> {
        normalize(&recipe.name, &recipe.raw)
    }

    /// Returns true if `item` is a required or optional ingredient.
    #[must_use]
    pub fn consumes(&self, item: &ItemId) -> bool {
        self.required_items.contains(item) || self.optional_items.contains(item)
    }
}

/// Normalizes one raw recipe.
pub fn normalize(name: &RecipeName, raw: &RawRecipe) -> ProgressResult<NormalizedIngredients> {
    let shape = raw
        .shape()
        .ok_or_else(|| ProgressError::UnrecognizedRecipeShape(name.clone()))?;

    match shape {
        RecipeShape::Single(groups) => {
            let required = resolve_all(name, groups.as_slice())?;
            Ok(NormalizedIngredients {
                unlocked_with_items: required.clone(),
                required_items: required,
                optional_items: ItemSet::new(),
            })
        },
        RecipeShape::Listed(entries) => split_entries(name, entries.iter()),
        RecipeShape::Keyed(key) => split_entries(name, key.values()),
        RecipeShape::Transform { base, addition } => {
            let base = base.resolve(name)?;
            let addition = addition.resolve(name)?;
            Ok(NormalizedIngredients {
                required_items: [base, addition.clone()].into_iter().collect(),
                optional_items: ItemSet::new(),
                unlocked_with_items: std::iter::once(addition).collect(),
            })
        },
    }
}

fn resolve_all(name: &RecipeName, groups: &[ItemGroup]) -> ProgressResult<ItemSet> {
    groups.iter().map(|group| group.resolve(name)).collect()
}

fn split_entries<'a>(
    name: &RecipeName,
    entries: impl Iterator<Item = &'a IngredientEntry>,
) -> ProgressResult<NormalizedIngredients> {
    let mut required = ItemSet::new();
    let mut optional = ItemSet::new();

    for entry in entries {
        match entry {
            IngredientEntry::Required(group) => {
                required.insert(group.resolve(name)?);
            },
            IngredientEntry::Optional(groups) => {
                for group in groups {
                    optional.insert(group.resolve(name)?);
                }
            },
        }
    }

    let mut ingredients = NormalizedIngredients {
        unlocked_with_items: required.union(&optional).cloned().collect(),
        required_items: required,
        optional_items: optional,
    };

    if let Some(rule) = UNLOCK_OVERRIDES
        .iter()
        .find(|rule| (rule.applies)(name, &ingredients))
    {
        tracing::trace!(recipe = %name, rule = rule.name, "unlock override applied");
        ingredients.unlocked_with_items = (rule.unlocked_with)(name, &ingredients);
    }

    Ok(ingredients)
}

// ============================================================================
// Unlock overrides
// ============================================================================

/// A game-data exception to the "unlocked by any ingredient" rule.
///
/// Only list-shaped and keyed recipes are subject to overrides. The first
/// matching entry of [`UNLOCK_OVERRIDES`] wins.
#[derive(Clone, Copy)]
pub struct UnlockOverride {
    /// Short name used in logs and tests.
    pub name: &'static str,
    /// Whether this override applies to the recipe.
    pub applies: fn(&RecipeName, &NormalizedIngredients) -> bool,
    /// Replacement for `unlocked_with_items`.
    pub unlocked_with: fn(&RecipeName, &NormalizedIngredients) -> ItemSet,
}

/// Item whose pickup unlocks every recipe that consumes it.
pub const MINECART_ITEM: &str = "minecart";

/// Name suffix of the self-duplicating trim template recipes.
pub const ARMOR_TRIM_TEMPLATE_SUFFIX: &str = "armor_trim_smithing_template";

/// Known unlock overrides, in priority order.
pub const UNLOCK_OVERRIDES: &[UnlockOverride] = &[
    // Minecart variants unlock on picking up a minecart, whatever else they need.
    UnlockOverride {
        name: "minecart",
        applies: |_, ingredients| {
            ingredients
                .required_items
                .contains(&ItemId::new(MINECART_ITEM))
        },
        unlocked_with: |_, _| std::iter::once(ItemId::new(MINECART_ITEM)).collect(),
    },
    // Trim templates are duplicated from an existing copy of themselves.
    UnlockOverride {
        name: "armor_trim_template",
        applies: |name, _| name.as_str().ends_with(ARMOR_TRIM_TEMPLATE_SUFFIX),
        unlocked_with: |name, _| std::iter::once(name.as_item()).collect(),
    },
];
