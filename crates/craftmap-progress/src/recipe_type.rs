//! Recipe categories and type filters.

use craftmap_common::ids::strip_namespace;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Known recipe categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeType {
    /// Blast furnace.
    Blasting,
    /// Campfire.
    CampfireCooking,
    /// Crafting table, fixed layout.
    CraftingShaped,
    /// Crafting table, any layout.
    CraftingShapeless,
    /// Furnace.
    Smelting,
    /// Smithing table upgrade.
    SmithingTransform,
    /// Smoker.
    Smoking,
    /// Stonecutter.
    Stonecutting,
}

impl RecipeType {
    /// Get all categories.
    #[must_use]
    pub fn all() -> &'static [RecipeType] {
        &[
            Self::Blasting,
            Self::CampfireCooking,
            Self::CraftingShaped,
            Self::CraftingShapeless,
            Self::Smelting,
            Self::SmithingTransform,
            Self::Smoking,
            Self::Stonecutting,
        ]
    }

    /// The category's id without namespace.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Blasting => "blasting",
            Self::CampfireCooking => "campfire_cooking",
            Self::CraftingShaped => "crafting_shaped",
            Self::CraftingShapeless => "crafting_shapeless",
            Self::Smelting => "smelting",
            Self::SmithingTransform => "smithing_transform",
            Self::Smoking => "smoking",
            Self::Stonecutting => "stonecutting",
        }
    }

    /// Parses a namespaced type such as `minecraft:smelting`.
    #[must_use]
    pub fn from_namespaced(id: &str) -> Option<Self> {
        strip_namespace(id).parse().ok()
    }
}

impl fmt::Display for RecipeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known category.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown recipe type: {0}")]
pub struct UnknownRecipeType(pub String);

impl FromStr for RecipeType {
    type Err = UnknownRecipeType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| UnknownRecipeType(s.to_string()))
    }
}

/// Selection of records by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum TypeFilter {
    /// No filtering.
    #[default]
    All,
    /// Only records of this category.
    Only(RecipeType),
}

impl TypeFilter {
    /// Sentinel accepted in place of a category name.
    pub const ALL: &'static str = "all";

    /// Returns true if a record of `ty` passes the filter.
    #[must_use]
    pub fn matches(self, ty: RecipeType) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => only == ty,
        }
    }
}

impl FromStr for TypeFilter {
    type Err = UnknownRecipeType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ALL {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl TryFrom<String> for TypeFilter {
    type Error = UnknownRecipeType;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TypeFilter> for String {
    fn from(filter: TypeFilter) -> Self {
        filter.to_string()
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(Self::ALL),
            Self::Only(ty) => ty.fmt(f),
        }
    }
}
