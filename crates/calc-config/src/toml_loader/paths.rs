//! Config path resolution.

use calc_common::ConfigError;
use std::path::PathBuf;

/// Platform config file path, e.g. `~/.config/calc/config.toml` on Linux.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("calc").join("config.toml"))
}
