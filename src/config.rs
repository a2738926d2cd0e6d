//! Configuration System
//!
//! Layered configuration for walks: built-in defaults, a global file, a
//! per-root `.multicat.toml`, and `MULTICAT_*` environment overrides. CLI
//! flags are applied on top by the caller.

use crate::error::MulticatError;
use crate::ignore::{self, IgnoreSet};
use crate::logging::LoggingConfig;
use crate::tree::{Classifier, WalkerConfig};
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;
pub use sources::workspace_file::{workspace_config_path, WORKSPACE_CONFIG_FILE};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MulticatConfig {
    /// Directory walk settings
    #[serde(default)]
    pub walk: WalkSettings,

    /// Text classification settings
    #[serde(default)]
    pub classify: ClassifySettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Directory walk settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WalkSettings {
    /// Default depth bound when `--max-depth` is not given
    #[serde(default)]
    pub max_depth: Option<usize>,

    /// Names ignored in addition to the built-in set
    #[serde(default)]
    pub extra_ignore: Vec<String>,

    /// Follow symbolic links while walking
    #[serde(default)]
    pub follow_symlinks: bool,
}

/// Text classification settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassifySettings {
    /// Sniff leading bytes of files whose extension is not recognized
    #[serde(default)]
    pub sniff_unknown: bool,
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Walk(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Walk(msg) => write!(f, "Walk: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl MulticatConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        for name in &self.walk.extra_ignore {
            if let Err(e) = ignore::validate_name(name) {
                errors.push(ValidationError::Walk(e));
            }
        }

        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate and fold all errors into one `ConfigError`
    pub fn validated(self) -> Result<Self, MulticatError> {
        self.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            MulticatError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;
        Ok(self)
    }

    /// Built-in ignore names plus `walk.extra_ignore`
    pub fn ignore_set(&self) -> IgnoreSet {
        IgnoreSet::builtin().with_extra(self.walk.extra_ignore.iter().cloned())
    }

    /// Walker configuration. Explicit arguments override configured values.
    pub fn walker_config(&self, max_depth: Option<usize>, sniff: bool) -> WalkerConfig {
        WalkerConfig {
            follow_symlinks: self.walk.follow_symlinks,
            ignore: self.ignore_set(),
            max_depth: max_depth.or(self.walk.max_depth),
            classifier: Classifier::new(sniff || self.classify.sniff_unknown),
        }
    }
}
