//! # Craftmap Progress
//!
//! Recipe progress inference for Craftmap.
//!
//! Given the raw recipe files of a crafting game and one or more advancement
//! snapshots of a save, this crate works out:
//! - A uniform ingredient model for every recipe shape
//! - Which recipes the player has unlocked
//! - Whether each recipe is craftable right now
//! - Which recipes consume, and which get unlocked by, each recipe's result
//!
//! Everything here is a pure function of in-memory inputs. Reading files is
//! the caller's job.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod advancement;
pub mod craftability;
pub mod error;
pub mod ingredients;
pub mod item_group;
pub mod progress;
pub mod raw;
pub mod recipe_type;
pub mod relations;
pub mod summary;
pub mod unlock;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::advancement::*;
    pub use crate::craftability::*;
    pub use crate::error::*;
    pub use crate::ingredients::*;
    pub use crate::item_group::*;
    pub use crate::progress::*;
    pub use crate::raw::*;
    pub use crate::recipe_type::*;
    pub use crate::relations::*;
    pub use crate::summary::*;
    pub use crate::unlock::*;
}

pub use prelude::*;
