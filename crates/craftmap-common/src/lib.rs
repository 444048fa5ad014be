//! # Craftmap Common
//!
//! Common types shared by the Craftmap crates.
//!
//! This crate provides:
//! - Item and recipe identifier newtypes
//! - Namespace handling for `namespace:name` ids
//! - Prelude for convenient imports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod ids;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ids::*;
}

pub use prelude::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_strips_namespace() {
        let item = ItemId::from_namespaced("minecraft:stick");
        assert_eq!(item.as_str(), "stick");
    }

    #[test]
    fn test_recipe_name_as_item() {
        let name = RecipeName::new("netherite_armor_trim_smithing_template");
        assert_eq!(
            name.as_item().as_str(),
            "netherite_armor_trim_smithing_template"
        );
    }
}
