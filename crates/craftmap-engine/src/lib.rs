//! # Craftmap Engine
//!
//! File loading and reporting for Craftmap.
//!
//! This crate ties the progress computation to the filesystem:
//! - Config: `craftmap.toml` with data locations and output settings
//! - Loader: recipe and advancement JSON files
//! - Report: JSON output and per-category summaries

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod loader;
pub mod report;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::*;
    pub use crate::loader::*;
    pub use crate::report::*;
}

pub use prelude::*;
