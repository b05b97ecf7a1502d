//! Calculator configuration.
//!
//! An optional TOML file tweaks the menu title and the default log level.
//! Every section has defaults, so an absent or partial file works. The
//! calculator never writes a config file.

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{CalcConfig, LogLevel, LoggingConfig, MenuConfig};
pub use toml_loader::{default_config_path, load_from_path};

use std::path::Path;

use calc_common::ConfigError;
use tracing::debug;

/// Load the effective config.
///
/// An explicit `path` must exist. Without one, the platform default path is
/// used if a file is there; otherwise built-in defaults apply.
pub fn load_config(path: Option<&Path>) -> Result<CalcConfig, ConfigError> {
    if let Some(path) = path {
        return load_from_path(path);
    }

    match default_config_path() {
        Ok(path) if path.exists() => load_from_path(&path),
        Ok(path) => {
            debug!("no config at {}, using defaults", path.display());
            Ok(CalcConfig::default())
        }
        Err(e) => {
            debug!("{e}, using defaults");
            Ok(CalcConfig::default())
        }
    }
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &CalcConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
