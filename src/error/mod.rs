mod context;
mod exit_codes;
mod format;
#[cfg(test)]
mod tests;

pub use context::ErrorContext;
pub use exit_codes::get_exit_code;
pub use format::format_error_chain;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MongoDistError {
    #[error("MongoDB version '{0}' is not known")]
    UnknownVersion(String),

    #[error("Invalid version format: {0}")]
    InvalidVersionFormat(String),

    #[error("Invalid platform: {0}")]
    InvalidPlatform(String),

    #[error("Unknown feature: {0}")]
    UnknownFeature(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MongoDistError>;
