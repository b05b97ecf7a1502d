pub mod errors;

pub use errors::{CalcError, ConfigError};

pub type Result<T> = std::result::Result<T, CalcError>;
