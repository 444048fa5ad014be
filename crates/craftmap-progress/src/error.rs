//! Error types for progress computation.
//!
//! Every error here is a data-integrity failure in the recipe corpus and
//! aborts the whole load cycle.

use craftmap_common::RecipeName;
use thiserror::Error;

/// Progress computation error types.
#[derive(Debug, Error)]
pub enum ProgressError {
    /// An ingredient reference has neither an item nor a tag.
    #[error("Ingredient in recipe {recipe} has neither item nor tag")]
    MissingIngredientItem {
        /// Recipe containing the bad ingredient
        recipe: RecipeName,
    },
    /// None of the known ingredient shapes is present.
    #[error("Recipe {0} has no recognized ingredient shape")]
    UnrecognizedRecipeShape(RecipeName),
    /// The recipe type is absent or not a known category.
    #[error("Could not find a valid type for recipe {recipe}: {found:?}")]
    RecipeTypeUnrecognized {
        /// Offending recipe
        recipe: RecipeName,
        /// Raw type string, if any
        found: Option<String>,
    },
    /// The recipe result is absent or carries no item.
    #[error("No item result found for recipe {0}")]
    MissingResultItem(RecipeName),
    /// Two recipes share a name in one load cycle.
    #[error("Duplicate recipe name: {0}")]
    DuplicateRecipeName(RecipeName),
}

/// Result type for progress operations.
pub type ProgressResult<T> = Result<T, ProgressError>;
