//! Unlock state of recipes.

use ahash::AHashSet;
use craftmap_common::RecipeName;

use crate::advancement::AdvancementDocument;

/// Prefix shared by every recipe advancement key.
pub const RECIPE_ADVANCEMENT_PREFIX: &str = "minecraft:recipes";

/// Recipe name encoded in an advancement key, if it is a recipe advancement.
///
/// `minecraft:recipes/misc/iron_ingot` names the recipe `iron_ingot`.
#[must_use]
pub fn recipe_name_from_key(key: &str) -> Option<RecipeName> {
    key.strip_prefix(RECIPE_ADVANCEMENT_PREFIX)?
        .strip_prefix('/')?
        .rsplit('/')
        .next()
        .filter(|name| !name.is_empty())
        .map(RecipeName::from)
}

/// Names of unlocked recipes in a merged advancement table.
#[derive(Debug, Clone, Default)]
pub struct UnlockedRecipes {
    names: AHashSet<RecipeName>,
}

impl UnlockedRecipes {
    /// Collects every recipe advancement marked done.
    #[must_use]
    pub fn from_advancements(advancements: &AdvancementDocument) -> Self {
        let names: AHashSet<RecipeName> = advancements
            .iter()
            .filter(|(_, progress)| progress.done)
            .filter_map(|(key, _)| recipe_name_from_key(key))
            .collect();

        tracing::debug!(unlocked = names.len(), "resolved unlocked recipes");
        Self { names }
    }

    /// Returns true if the recipe is unlocked. Unknown recipes are locked.
    #[must_use]
    pub fn contains(&self, recipe: &RecipeName) -> bool {
        self.names.contains(recipe)
    }

    /// Returns the number of unlocked recipes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no recipe is unlocked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
