//! Ingredient references.

use craftmap_common::{ItemId, RecipeName};
use serde::{Deserialize, Serialize};

use crate::error::{ProgressError, ProgressResult};

/// A reference to a concrete item or to an item tag.
///
/// Game data sets exactly one of the two. If both are set the item wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemGroup {
    /// Namespaced item id, e.g. `minecraft:stick`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
    /// Namespaced tag id, e.g. `minecraft:planks`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

impl ItemGroup {
    /// Creates a reference to a concrete item.
    #[must_use]
    pub fn item(id: impl Into<String>) -> Self {
        Self {
            item: Some(id.into()),
            tag: None,
        }
    }

    /// Creates a reference to an item tag.
    #[must_use]
    pub fn tag(id: impl Into<String>) -> Self {
        Self {
            item: None,
            tag: Some(id.into()),
        }
    }

    /// Returns the namespace-stripped id this group stands for, if any.
    #[must_use]
    pub fn item_id(&self) -> Option<ItemId> {
        self.item
            .as_deref()
            .or(self.tag.as_deref())
            .map(ItemId::from_namespaced)
    }

    /// Resolves the group to exactly one item id.
    pub fn resolve(&self, recipe: &RecipeName) -> ProgressResult<ItemId> {
        self.item_id()
            .ok_or_else(|| ProgressError::MissingIngredientItem {
                recipe: recipe.clone(),
            })
    }
}
