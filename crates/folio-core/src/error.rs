//! Error types for the portfolio behavior layer
//!
//! Missing optional markup is not an error here: controllers and widgets
//! treat an absent element as a no-op. These types cover the few failures
//! that do surface (configuration, required markup, host interop).

use thiserror::Error;

/// Main error type
#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Required element not found: {selector}")]
    MissingElement { selector: String },

    #[error("Host error: {0}")]
    Host(String),
}

impl FolioError {
    pub fn missing(selector: impl Into<String>) -> Self {
        FolioError::MissingElement {
            selector: selector.into(),
        }
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid value for '{field}': {reason}")]
    Invalid { field: String, reason: String },
}

impl ConfigError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = FolioError::missing(".main-content");
        assert_eq!(err.to_string(), "Required element not found: .main-content");

        let err: FolioError = ConfigError::invalid("roles.interval_ms", "must be > 0").into();
        assert_eq!(
            err.to_string(),
            "Config error: Invalid value for 'roles.interval_ms': must be > 0"
        );
    }
}
