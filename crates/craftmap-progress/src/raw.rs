//! Raw recipe documents as they appear in game data files.
//!
//! Recipe JSON comes in several mutually exclusive ingredient shapes. The
//! document is deserialized field by field into [`RawRecipe`] and then
//! classified exactly once into a [`RecipeShape`].

use craftmap_common::{ItemId, RecipeName};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::item_group::ItemGroup;

// ============================================================================
// Building blocks
// ============================================================================

/// A single ingredient reference or a list of acceptable alternatives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    /// A list of ingredient references.
    Many(Vec<ItemGroup>),
    /// One ingredient reference.
    One(ItemGroup),
}

impl OneOrMany {
    /// Returns the references as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[ItemGroup] {
        match self {
            Self::Many(groups) => groups,
            Self::One(group) => std::slice::from_ref(group),
        }
    }
}

/// An entry of an `ingredients` list or a `key` mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IngredientEntry {
    /// Any one of these is enough.
    Optional(Vec<ItemGroup>),
    /// This exact ingredient is needed.
    Required(ItemGroup),
}

/// The `result` field: either a bare id or an item stack object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawResult {
    /// Bare namespaced id.
    Id(String),
    /// Stack object.
    Stack {
        /// Namespaced item id.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        item: Option<String>,
        /// Stack size.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        count: Option<u32>,
    },
    /// Anything else. Produces no item.
    Malformed(serde_json::Value),
}

impl RawResult {
    /// Returns the produced item, namespace stripped.
    #[must_use]
    pub fn item_id(&self) -> Option<ItemId> {
        match self {
            Self::Id(id) => Some(ItemId::from_namespaced(id)),
            Self::Stack { item, .. } => item.as_deref().map(ItemId::from_namespaced),
            Self::Malformed(_) => None,
        }
    }
}

// ============================================================================
// Raw recipe document
// ============================================================================

/// One recipe file, exactly as stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecipe {
    /// Namespaced recipe category, e.g. `minecraft:smelting`.
    #[serde(
        rename = "type",
        default,
        deserialize_with = "type_as_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub recipe_type: Option<String>,
    /// Recipe book category. Not used by the inference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Recipe book group. Not used by the inference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Single-input shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredient: Option<OneOrMany>,
    /// List shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<IngredientEntry>>,
    /// Keyed shape used by older schema versions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<IndexMap<String, IngredientEntry>>,
    /// Grid pattern accompanying `key`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<Vec<String>>,
    /// Item being upgraded in a transform recipe.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<ItemGroup>,
    /// Upgrade material in a transform recipe.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addition: Option<ItemGroup>,
    /// What the recipe produces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<RawResult>,
}

/// Reads `type` as text. Non-string values keep their JSON text so the
/// category lookup rejects them instead of the parser.
fn type_as_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(text)) => Some(text),
        Some(other) => Some(other.to_string()),
    })
}

/// The ingredient specification of a recipe, one variant per raw shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeShape<'a> {
    /// `ingredient`: single or list, every entry required.
    Single(&'a OneOrMany),
    /// `ingredients`: bare entries required, nested lists optional.
    Listed(&'a [IngredientEntry]),
    /// `key` + `pattern`: same split as `Listed`.
    Keyed(&'a IndexMap<String, IngredientEntry>),
    /// `base` + `addition`: both required.
    Transform {
        /// Item being upgraded.
        base: &'a ItemGroup,
        /// Upgrade material.
        addition: &'a ItemGroup,
    },
}

impl RawRecipe {
    /// Parses a recipe document from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Classifies the ingredient specification.
    ///
    /// When raw data carries more than one shape the first one in the order
    /// `ingredient`, `ingredients`, `key`, `base` + `addition` is used.
    #[must_use]
    pub fn shape(&self) -> Option<RecipeShape<'_>> {
        if let Some(ingredient) = &self.ingredient {
            return Some(RecipeShape::Single(ingredient));
        }
        if let Some(ingredients) = &self.ingredients {
            return Some(RecipeShape::Listed(ingredients));
        }
        if let Some(key) = &self.key {
            return Some(RecipeShape::Keyed(key));
        }
        match (&self.base, &self.addition) {
            (Some(base), Some(addition)) => Some(RecipeShape::Transform { base, addition }),
            _ => None,
        }
    }

    /// Returns the produced item, namespace stripped.
    #[must_use]
    pub fn result_item(&self) -> Option<ItemId> {
        self.result.as_ref().and_then(RawResult::item_id)
    }
}

/// A raw recipe together with its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedRecipe {
    /// Recipe name, taken from the file stem.
    pub name: RecipeName,
    /// Parsed recipe document.
    pub raw: RawRecipe,
}

impl NamedRecipe {
    /// Pairs a name with a recipe document.
    #[must_use]
    pub fn new(name: impl Into<RecipeName>, raw: RawRecipe) -> Self {
        Self {
            name: name.into(),
            raw,
        }
    }
}
