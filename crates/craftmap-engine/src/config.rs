//! Engine configuration.
//!
//! Provides data locations, output and logging settings.
//! Configuration can be loaded from and saved to a file.

use craftmap_progress::TypeFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Configuration file name.
pub const CONFIG_FILE: &str = "craftmap.toml";

/// Default log directive.
pub const DEFAULT_LOG_FILTER: &str = "craftmap=info";

/// Engine configuration parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // === Data Sources ===
    /// Directory holding one `<recipe>.json` per recipe
    pub recipes_dir: PathBuf,
    /// Directory holding advancement snapshots, merged in file name order
    pub advancements_dir: PathBuf,

    // === Output ===
    /// Where to write the JSON records (None = stdout)
    pub output: Option<PathBuf>,
    /// Category to report, or `all`
    pub type_filter: TypeFilter,
    /// Pretty-print the JSON output
    pub pretty: bool,
    /// Log a per-category summary after computing
    pub summary: bool,

    // === Logging ===
    /// `tracing` filter used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            // Data
            recipes_dir: PathBuf::from("static/recipes"),
            advancements_dir: PathBuf::from("world/advancements"),

            // Output
            output: None,
            type_filter: TypeFilter::All,
            pretty: true,
            summary: false,

            // Logging
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// Errors reading or writing the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read or write the file.
    #[error("Failed to access config file {path}: {source}")]
    Io {
        /// Config file path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The file is not valid config TOML.
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        /// Config file path.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },

    /// The config could not be rendered as TOML.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Where a loaded config came from.
///
/// Config is read before logging is set up, so the outcome is handed back
/// for the caller to report.
#[derive(Debug)]
pub enum ConfigSource {
    /// Read from this file.
    File(PathBuf),
    /// No file at the path; defaults used.
    Missing(PathBuf),
    /// The file was unusable; defaults used.
    Fallback(ConfigError),
}

impl ConfigSource {
    /// Logs how the config was obtained.
    pub fn log(&self) {
        match self {
            Self::File(path) => info!("Loaded config from {}", path.display()),
            Self::Missing(path) => info!("No config at {}, using defaults", path.display()),
            Self::Fallback(e) => warn!("{e}, using defaults"),
        }
    }
}

impl EngineConfig {
    /// Load configuration from the default file location.
    pub fn load() -> (Self, ConfigSource) {
        Self::load_from(Self::config_path())
    }

    /// Load configuration from a specific path, falling back to defaults
    /// when the file is missing or unusable.
    pub fn load_from<P: AsRef<Path>>(path: P) -> (Self, ConfigSource) {
        let path = path.as_ref();
        match Self::read(path) {
            Ok(Some(config)) => (config, ConfigSource::File(path.to_path_buf())),
            Ok(None) => (Self::default(), ConfigSource::Missing(path.to_path_buf())),
            Err(e) => (Self::default(), ConfigSource::Fallback(e)),
        }
    }

    /// Reads and validates a config file. `None` if there is no file.
    pub fn read(path: &Path) -> ConfigResult<Option<Self>> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            },
        };

        let mut config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate();
        Ok(Some(config))
    }

    /// Save configuration to a specific path.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let path = path.as_ref();
        let io_error = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(io_error)
    }

    /// Get the default configuration file path.
    ///
    /// A `craftmap.toml` in the working directory wins over the one in the
    /// platform config directory.
    #[must_use]
    pub fn config_path() -> PathBuf {
        let local = PathBuf::from(CONFIG_FILE);
        if local.exists() {
            return local;
        }
        platform_config_dir().map_or(local, |dir| dir.join("craftmap").join(CONFIG_FILE))
    }

    /// Replace unusable values with defaults.
    pub fn validate(&mut self) {
        if self.log_filter.trim().is_empty() {
            self.log_filter = DEFAULT_LOG_FILTER.to_string();
        }
    }
}

fn platform_config_dir() -> Option<PathBuf> {
    let env_dir = |var: &str| std::env::var_os(var).map(PathBuf::from);
    if cfg!(target_os = "windows") {
        env_dir("APPDATA")
    } else if cfg!(target_os = "macos") {
        env_dir("HOME").map(|home| home.join("Library/Application Support"))
    } else {
        env_dir("XDG_CONFIG_HOME").or_else(|| env_dir("HOME").map(|home| home.join(".config")))
    }
}
