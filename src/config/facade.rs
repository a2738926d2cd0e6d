//! Config loading facade: builds the layered configuration for a walk root.

use super::merge::merge_policy;
use super::sources::{global_file, workspace_file};
use super::MulticatConfig;
use config::ConfigError;
use config::File;
use std::path::Path;

/// Loads [`MulticatConfig`] from defaults, files, and the environment
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for `root`.
    ///
    /// Precedence (lowest to highest): built-in defaults, global file,
    /// `<root>/.multicat.toml`, `MULTICAT_*` environment variables.
    pub fn load(root: &Path) -> Result<MulticatConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, root)?;
        builder
            .add_source(merge_policy::environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a single explicit file plus the environment.
    pub fn load_from_file(path: &Path) -> Result<MulticatConfig, ConfigError> {
        merge_policy::builder_with_defaults()?
            .add_source(File::from(path).required(true))
            .add_source(merge_policy::environment())
            .build()?
            .try_deserialize()
    }
}
