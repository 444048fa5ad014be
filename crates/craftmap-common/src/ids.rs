//! ID types for items and recipes.
//!
//! Game data names everything as `namespace:name` (`minecraft:stick`). Inside
//! Craftmap identifiers are always stored with the namespace stripped.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between namespace and name in a namespaced id.
pub const NAMESPACE_SEPARATOR: char = ':';

/// Returns the name part of a namespaced id.
///
/// Ids without a namespace are returned unchanged.
#[must_use]
pub fn strip_namespace(id: &str) -> &str {
    id.split_once(NAMESPACE_SEPARATOR)
        .map_or(id, |(_, name)| name)
}

/// Identifier of an item (or item tag) with its namespace stripped.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Creates an item ID from an already stripped name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Creates an item ID from a namespaced id such as `minecraft:stick`.
    #[must_use]
    pub fn from_namespaced(id: &str) -> Self {
        Self(strip_namespace(id).to_string())
    }

    /// Returns the item name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Unique name of a recipe within one load cycle.
///
/// Recipe names come from the recipe file stem (`iron_ingot.json`) and from
/// the last segment of advancement keys (`minecraft:recipes/misc/iron_ingot`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeName(String);

impl RecipeName {
    /// Creates a recipe name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the recipe name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the name as an item id, for recipes whose name doubles as an item.
    #[must_use]
    pub fn as_item(&self) -> ItemId {
        ItemId::new(self.0.clone())
    }

    /// Human readable form: `iron_ingot` becomes `iron ingot`.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.0.replace('_', " ")
    }
}

impl fmt::Display for RecipeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecipeName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for RecipeName {
    fn from(name: String) -> Self {
        Self(name)
    }
}
