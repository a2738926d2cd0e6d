//! Merge rules: defaults, override order, conflict handling.

use config::builder::DefaultState;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Prefix for environment overrides, e.g. `MULTICAT_WALK__MAX_DEPTH=2`.
pub const ENV_PREFIX: &str = "MULTICAT";

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("walk.follow_symlinks", false)?
        .set_default("classify.sniff_unknown", false)
}

/// Environment source. Added last so it overrides every file source.
///
/// The prefix is joined with a single `_` and nested keys with `__`, so
/// `MULTICAT_WALK__EXTRA_IGNORE=dist,build` sets `walk.extra_ignore`.
pub fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("walk.extra_ignore")
}
