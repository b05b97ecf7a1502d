//! Configuration validation.
//!
//! Each check pushes a message; all messages are joined into a single
//! `ConfigError::ValidationError`.

mod menu;


use crate::schema::CalcConfig;
use calc_common::ConfigError;

/// Maximum banner title length, in characters.
pub const MAX_TITLE_LEN: usize = 60;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &CalcConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    menu::validate_menu(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
