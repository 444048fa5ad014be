//! Recipe and advancement file loading.
//!
//! This module provides:
//! - Loading raw recipes from `<recipes_dir>/*.json`, named by file stem
//! - Loading advancement snapshots from `<advancements_dir>/*.json` in file name order
//! - Running a full progress computation over the loaded documents

use std::fs;
use std::path::{Path, PathBuf};

use craftmap_progress::{
    compute_all_progress, AdvancementDocument, NamedRecipe, ProgressError, RawRecipe,
    RecipeProgress,
};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::EngineConfig;

/// Extension of recipe and advancement files.
pub const JSON_EXTENSION: &str = "json";

/// Errors that can occur while loading data files.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Directory not found.
    #[error("Directory not found: {0}")]
    NotFound(PathBuf),

    /// Failed to read a file or directory.
    #[error("Failed to read {path}: {source}")]
    ReadError {
        /// Offending path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse JSON.
    #[error("Failed to parse {path}: {source}")]
    ParseError {
        /// Offending path.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// The loaded documents were rejected by the progress computation.
    #[error(transparent)]
    Progress(#[from] ProgressError),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Statistics for the data loader.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoaderStats {
    /// Number of recipe files loaded.
    pub recipe_files: u32,
    /// Number of advancement files loaded.
    pub advancement_files: u32,
    /// Number of advancement keys across all files, before merging.
    pub advancement_keys: u32,
    /// Number of files skipped for an unusable name.
    pub skipped_files: u32,
}

/// Loads recipe and advancement documents from disk.
pub struct DataLoader {
    /// Directory of recipe files.
    recipes_dir: PathBuf,
    /// Directory of advancement snapshots.
    advancements_dir: PathBuf,
    /// Statistics.
    stats: LoaderStats,
}

impl DataLoader {
    /// Creates a new loader over the two data directories.
    #[must_use]
    pub fn new(recipes_dir: impl Into<PathBuf>, advancements_dir: impl Into<PathBuf>) -> Self {
        let recipes_dir = recipes_dir.into();
        let advancements_dir = advancements_dir.into();
        info!(
            "Initializing data loader: recipes at {:?}, advancements at {:?}",
            recipes_dir, advancements_dir
        );
        Self {
            recipes_dir,
            advancements_dir,
            stats: LoaderStats::default(),
        }
    }

    /// Creates a loader from the configured directories.
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(&config.recipes_dir, &config.advancements_dir)
    }

    /// Returns the recipes directory.
    #[must_use]
    pub fn recipes_dir(&self) -> &Path {
        &self.recipes_dir
    }

    /// Returns the advancements directory.
    #[must_use]
    pub fn advancements_dir(&self) -> &Path {
        &self.advancements_dir
    }

    /// Returns loader statistics.
    #[must_use]
    pub fn stats(&self) -> &LoaderStats {
        &self.stats
    }

    /// Loads every recipe file, sorted by name.
    pub fn load_recipes(&mut self) -> LoadResult<Vec<NamedRecipe>> {
        if !self.recipes_dir.is_dir() {
            return Err(LoadError::NotFound(self.recipes_dir.clone()));
        }

        let mut recipes = Vec::new();
        for path in json_files(&self.recipes_dir)? {
            let Some(name) = path.file_stem().and_then(|stem| stem.to_str()) else {
                warn!("Skipping recipe file with non UTF-8 name: {:?}", path);
                self.stats.skipped_files += 1;
                continue;
            };

            debug!("Loading recipe file: {:?}", path);
            let raw: RawRecipe = read_json(&path)?;
            recipes.push(NamedRecipe::new(name, raw));
            self.stats.recipe_files += 1;
        }

        info!(
            "Loaded {} recipes from {:?}",
            self.stats.recipe_files, self.recipes_dir
        );
        Ok(recipes)
    }

    /// Loads every advancement snapshot, in file name order.
    ///
    /// A missing or empty directory yields no snapshots, so every recipe
    /// reads as locked.
    pub fn load_advancements(&mut self) -> LoadResult<Vec<AdvancementDocument>> {
        if !self.advancements_dir.is_dir() {
            warn!(
                "Advancement directory does not exist: {:?}, treating all recipes as locked",
                self.advancements_dir
            );
            return Ok(Vec::new());
        }

        let mut documents = Vec::new();
        for path in json_files(&self.advancements_dir)? {
            debug!("Loading advancement file: {:?}", path);
            let document: AdvancementDocument = read_json(&path)?;
            self.stats.advancement_files += 1;
            self.stats.advancement_keys +=
                u32::try_from(document.len()).unwrap_or(u32::MAX);
            documents.push(document);
        }

        if documents.is_empty() {
            warn!(
                "No advancement files in {:?}, treating all recipes as locked",
                self.advancements_dir
            );
        } else {
            info!(
                "Loaded {} advancement keys from {} files",
                self.stats.advancement_keys, self.stats.advancement_files
            );
        }
        Ok(documents)
    }

    /// Loads both directories and computes every recipe's progress.
    pub fn compute(&mut self) -> LoadResult<Vec<RecipeProgress>> {
        let recipes = self.load_recipes()?;
        let advancements = self.load_advancements()?;
        let records = compute_all_progress(&recipes, &advancements)?;
        info!("Computed progress for {} recipes", records.len());
        Ok(records)
    }
}

/// Lists the `.json` files directly inside `dir`, sorted by file name.
fn json_files(dir: &Path) -> LoadResult<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|source| LoadError::ReadError {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .filter(|path| path.extension().is_some_and(|ext| ext == JSON_EXTENSION))
        .collect();
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> LoadResult<T> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| LoadError::ParseError {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SMELTING: &str = r#"{
        "type": "minecraft:smelting",
        "result": "minecraft:iron_ingot",
        "ingredient": {"item": "minecraft:iron_ore"}
    }"#;

    fn setup() -> (TempDir, PathBuf, PathBuf) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let recipes = temp_dir.path().join("recipes");
        let advancements = temp_dir.path().join("advancements");
        fs::create_dir_all(&recipes).expect("recipes dir");
        fs::create_dir_all(&advancements).expect("advancements dir");
        (temp_dir, recipes, advancements)
    }

    #[test]
    fn test_load_recipes_named_by_stem() {
        let (_temp, recipes, advancements) = setup();
        fs::write(recipes.join("iron_ingot.json"), SMELTING).expect("write");
        fs::write(recipes.join("notes.txt"), "not a recipe").expect("write");

        let mut loader = DataLoader::new(&recipes, &advancements);
        let loaded = loader.load_recipes().expect("load");

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name.as_str(), "iron_ingot");
        assert_eq!(loader.stats().recipe_files, 1);
    }

    #[test]
    fn test_missing_recipes_dir_is_error() {
        let (temp, _recipes, advancements) = setup();
        let mut loader = DataLoader::new(temp.path().join("missing"), &advancements);

        let error = loader.load_recipes().expect_err("should fail");
        assert!(matches!(error, LoadError::NotFound(_)));
    }

    #[test]
    fn test_parse_error_names_file() {
        let (_temp, recipes, advancements) = setup();
        fs::write(recipes.join("broken.json"), "{ not json").expect("write");

        let mut loader = DataLoader::new(&recipes, &advancements);
        let error = loader.load_recipes().expect_err("should fail");

        assert!(matches!(error, LoadError::ParseError { .. }));
        assert!(error.to_string().contains("broken.json"));
    }

    #[test]
    fn test_advancements_sorted_by_file_name() {
        let (_temp, recipes, advancements) = setup();
        fs::write(
            advancements.join("b.json"),
            r#"{"minecraft:recipes/misc/iron_ingot": {"done": false}}"#,
        )
        .expect("write");
        fs::write(
            advancements.join("a.json"),
            r#"{"minecraft:recipes/misc/iron_ingot": {"done": true}, "DataVersion": 3700}"#,
        )
        .expect("write");

        let mut loader = DataLoader::new(&recipes, &advancements);
        let documents = loader.load_advancements().expect("load");

        assert_eq!(documents.len(), 2);
        let first = documents[0]
            .get("minecraft:recipes/misc/iron_ingot")
            .expect("key");
        assert!(first.done);
        assert_eq!(loader.stats().advancement_files, 2);
        assert_eq!(loader.stats().advancement_keys, 2);
    }

    #[test]
    fn test_missing_advancements_dir_is_empty() {
        let (temp, recipes, _advancements) = setup();
        let mut loader = DataLoader::new(&recipes, temp.path().join("missing"));

        let documents = loader.load_advancements().expect("load");
        assert!(documents.is_empty());
    }

    #[test]
    fn test_compute_wraps_progress_error() {
        let (_temp, recipes, advancements) = setup();
        fs::write(
            recipes.join("broken.json"),
            r#"{"type": "minecraft:smelting", "result": "minecraft:x", "ingredient": {"count": 1}}"#,
        )
        .expect("write");

        let mut loader = DataLoader::new(&recipes, &advancements);
        let error = loader.compute().expect_err("should fail");
        assert!(matches!(error, LoadError::Progress(_)));
    }

    #[test]
    fn test_malformed_result_is_progress_error() {
        let (_temp, recipes, advancements) = setup();
        fs::write(
            recipes.join("odd.json"),
            r#"{"type": "minecraft:smelting", "result": 42, "ingredient": {"item": "minecraft:ore"}}"#,
        )
        .expect("write");

        let mut loader = DataLoader::new(&recipes, &advancements);
        let error = loader.compute().expect_err("should fail");
        assert!(matches!(
            error,
            LoadError::Progress(ProgressError::MissingResultItem(_))
        ));
    }

    #[test]
    fn test_compute_end_to_end() {
        let (_temp, recipes, advancements) = setup();
        fs::write(recipes.join("iron_ingot.json"), SMELTING).expect("write");
        fs::write(
            advancements.join("player.json"),
            r#"{"minecraft:recipes/misc/iron_ingot": {"criteria": {}, "done": true}}"#,
        )
        .expect("write");

        let mut loader = DataLoader::new(&recipes, &advancements);
        let records = loader.compute().expect("compute");

        assert_eq!(records.len(), 1);
        assert!(records[0].is_unlocked);
    }
}
