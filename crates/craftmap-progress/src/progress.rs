//! Recipe progress records and their assembly.
//!
//! A load cycle turns raw recipes and advancement snapshots into one
//! [`RecipeProgress`] per recipe:
//! 1. Normalize every recipe's ingredients
//! 2. Merge advancement snapshots and resolve unlocked recipe names
//! 3. Build base records and sort them
//! 4. Run craftability and relationship analysis over the full set
//!
//! Any data error aborts the whole cycle.

use ahash::AHashSet;
use craftmap_common::{ItemId, RecipeName};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

use crate::advancement::{merge_advancements, AdvancementDocument};
use crate::craftability::{Craftability, CraftabilityAnalyzer};
use crate::error::{ProgressError, ProgressResult};
use crate::ingredients::NormalizedIngredients;
use crate::raw::NamedRecipe;
use crate::recipe_type::{RecipeType, TypeFilter};
use crate::relations::{RecipeRelations, RelationshipGraph};
use crate::unlock::UnlockedRecipes;

// ============================================================================
// Records
// ============================================================================

/// Derived data attached to a record after the whole set is assembled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressMeta {
    is_craftable: Craftability,
    #[serde(flatten)]
    relations: RecipeRelations,
}

impl ProgressMeta {
    /// Craftability verdict.
    #[must_use]
    pub fn is_craftable(&self) -> Craftability {
        self.is_craftable
    }

    /// Locked recipes consuming this recipe's result.
    #[must_use]
    pub fn related_locked_recipes(&self) -> &[RecipeName] {
        &self.relations.related_locked_recipes
    }

    /// Unlocked recipes consuming this recipe's result.
    #[must_use]
    pub fn related_unlocked_recipes(&self) -> &[RecipeName] {
        &self.relations.related_unlocked_recipes
    }

    /// Locked recipes that obtaining this recipe's result would unlock.
    #[must_use]
    pub fn unlocks_recipes(&self) -> &[RecipeName] {
        &self.relations.unlocks_recipes
    }
}

/// Progress of one recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeProgress {
    /// Unique recipe name.
    pub recipe_name: RecipeName,
    /// Item the recipe produces.
    pub result_item: ItemId,
    /// Recipe category.
    #[serde(rename = "type")]
    pub recipe_type: RecipeType,
    /// Whether the player has unlocked the recipe.
    pub is_unlocked: bool,
    /// Normalized ingredients.
    pub ingredients: NormalizedIngredients,
    meta: ProgressMeta,
}

impl RecipeProgress {
    /// Creates a base record with empty meta.
    #[must_use]
    pub fn new(
        recipe_name: impl Into<RecipeName>,
        result_item: ItemId,
        recipe_type: RecipeType,
        is_unlocked: bool,
        ingredients: NormalizedIngredients,
    ) -> Self {
        Self {
            recipe_name: recipe_name.into(),
            result_item,
            recipe_type,
            is_unlocked,
            ingredients,
            meta: ProgressMeta::default(),
        }
    }

    /// Builds the base record of a raw recipe.
    pub fn from_raw(
        recipe: &NamedRecipe,
        ingredients: NormalizedIngredients,
        is_unlocked: bool,
    ) -> ProgressResult<Self> {
        let recipe_type = recipe
            .raw
            .recipe_type
            .as_deref()
            .and_then(RecipeType::from_namespaced)
            .ok_or_else(|| ProgressError::RecipeTypeUnrecognized {
                recipe: recipe.name.clone(),
                found: recipe.raw.recipe_type.clone(),
            })?;

        let result_item = recipe
            .raw
            .result_item()
            .ok_or_else(|| ProgressError::MissingResultItem(recipe.name.clone()))?;

        Ok(Self::new(
            recipe.name.clone(),
            result_item,
            recipe_type,
            is_unlocked,
            ingredients,
        ))
    }

    /// Derived data. Empty until the record went through [`compute_all_progress`].
    #[must_use]
    pub fn meta(&self) -> &ProgressMeta {
        &self.meta
    }

    /// Human readable recipe name.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.recipe_name.display_name()
    }
}

// ============================================================================
// Assembly
// ============================================================================

/// Computes progress records for a whole recipe set.
///
/// `advancements` are merged first-seen-wins in the given order. The result
/// is sorted by type, then name, both descending.
pub fn compute_all_progress(
    recipes: &[NamedRecipe],
    advancements: &[AdvancementDocument],
) -> ProgressResult<Vec<RecipeProgress>> {
    let normalized = recipes
        .iter()
        .map(NormalizedIngredients::from_recipe)
        .collect::<ProgressResult<Vec<_>>>()?;

    let merged = merge_advancements(advancements);
    let unlocked = UnlockedRecipes::from_advancements(&merged);

    let mut seen = AHashSet::with_capacity(recipes.len());
    let mut records = Vec::with_capacity(recipes.len());
    for (recipe, ingredients) in recipes.iter().zip(normalized) {
        if !seen.insert(&recipe.name) {
            return Err(ProgressError::DuplicateRecipeName(recipe.name.clone()));
        }
        let is_unlocked = unlocked.contains(&recipe.name);
        records.push(RecipeProgress::from_raw(recipe, ingredients, is_unlocked)?);
    }

    sort_records(&mut records);
    attach_meta(&mut records);

    debug!(
        recipes = records.len(),
        unlocked = records.iter().filter(|record| record.is_unlocked).count(),
        "computed recipe progress"
    );
    Ok(records)
}

/// Keeps the records of one category, or all of them.
#[must_use]
pub fn filter_by_type(records: &[RecipeProgress], filter: TypeFilter) -> Vec<RecipeProgress> {
    records
        .iter()
        .filter(|record| filter.matches(record.recipe_type))
        .cloned()
        .collect()
}

/// Output order: type descending, then recipe name descending.
#[must_use]
pub fn compare_records(a: &RecipeProgress, b: &RecipeProgress) -> Ordering {
    b.recipe_type
        .as_str()
        .cmp(a.recipe_type.as_str())
        .then_with(|| b.recipe_name.cmp(&a.recipe_name))
}

/// Sorts records into output order.
pub fn sort_records(records: &mut [RecipeProgress]) {
    records.sort_by(compare_records);
}

fn attach_meta(records: &mut [RecipeProgress]) {
    let metas: Vec<ProgressMeta> = {
        let records: &[RecipeProgress] = records;
        let analyzer = CraftabilityAnalyzer::from_records(records);
        let graph = RelationshipGraph::new(records);
        records
            .iter()
            .map(|record| ProgressMeta {
                is_craftable: analyzer.verdict(&record.ingredients),
                relations: graph.relations_for(record),
            })
            .collect()
    };

    for (record, meta) in records.iter_mut().zip(metas) {
        record.meta = meta;
    }
}
