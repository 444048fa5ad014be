//! Relationships between recipes sharing items.
//!
//! A recipe is related to every other recipe that takes its result as a
//! required or optional ingredient.

use ahash::AHashMap;
use craftmap_common::{ItemId, RecipeName};
use serde::{Deserialize, Serialize};

use crate::progress::RecipeProgress;

/// Recipes related to one recipe, by name, in collection order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRelations {
    /// Locked recipes consuming this recipe's result.
    pub related_locked_recipes: Vec<RecipeName>,
    /// Unlocked recipes consuming this recipe's result.
    pub related_unlocked_recipes: Vec<RecipeName>,
    /// Locked recipes that obtaining this recipe's result would unlock.
    pub unlocks_recipes: Vec<RecipeName>,
}

/// Index from item to the recipes consuming it.
#[derive(Debug)]
pub struct RelationshipGraph<'a> {
    records: &'a [RecipeProgress],
    consumers: AHashMap<&'a ItemId, Vec<usize>>,
}

impl<'a> RelationshipGraph<'a> {
    /// Indexes a recipe collection.
    #[must_use]
    pub fn new(records: &'a [RecipeProgress]) -> Self {
        let mut consumers: AHashMap<&'a ItemId, Vec<usize>> = AHashMap::new();

        for (index, record) in records.iter().enumerate() {
            let ingredients = &record.ingredients;
            let consumed = ingredients
                .required_items
                .iter()
                .chain(ingredients.optional_items.iter());
            for item in consumed {
                let list = consumers.entry(item).or_default();
                // An item can be both required and optional.
                if list.last() != Some(&index) {
                    list.push(index);
                }
            }
        }

        Self { records, consumers }
    }

    /// Recipes other than `recipe` that consume `recipe`'s result.
    pub fn consumers_of(
        &self,
        recipe: &'a RecipeProgress,
    ) -> impl Iterator<Item = &'a RecipeProgress> + '_ {
        let records = self.records;
        self.consumers
            .get(&recipe.result_item)
            .into_iter()
            .flatten()
            .map(move |&index| &records[index])
            .filter(move |other| other.recipe_name != recipe.recipe_name)
    }

    /// Computes the relations of one recipe.
    #[must_use]
    pub fn relations_for(&self, recipe: &'a RecipeProgress) -> RecipeRelations {
        let mut relations = RecipeRelations::default();

        for other in self.consumers_of(recipe) {
            if other.is_unlocked {
                relations
                    .related_unlocked_recipes
                    .push(other.recipe_name.clone());
            } else {
                relations
                    .related_locked_recipes
                    .push(other.recipe_name.clone());
                if other
                    .ingredients
                    .unlocked_with_items
                    .contains(&recipe.result_item)
                {
                    relations.unlocks_recipes.push(other.recipe_name.clone());
                }
            }
        }

        relations
    }
}
