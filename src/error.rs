//! Configuration errors
//!
//! The simulation itself cannot fail; only loading tuning and settings can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("bad value `{value}` for query key `{key}`")]
    BadQueryValue { key: String, value: String },

    #[error("unexpected argument `{0}`")]
    BadArgument(String),
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}
