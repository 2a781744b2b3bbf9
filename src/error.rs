//! Domain-specific error types for outcomes-builder

use thiserror::Error;

/// Main error type for the outcomes builder
#[derive(Error, Debug)]
pub enum OutcomesError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    /// A hand-edited phrase bank that failed to parse. `message` is already
    /// localized and ready to show to the user.
    #[error("{message}")]
    InvalidBank { message: String },

    #[error("Export error: {message}")]
    Export { message: String },

    #[error("Clipboard error: {message}")]
    Clipboard { message: String },

    #[error("Terminal error: {message}")]
    Terminal { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Invalid parameters: {message}")]
    InvalidParams { message: String },
}

impl From<std::io::Error> for OutcomesError {
    fn from(err: std::io::Error) -> Self {
        OutcomesError::Storage {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for OutcomesError {
    fn from(err: serde_json::Error) -> Self {
        OutcomesError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for OutcomesError {
    fn from(err: toml::de::Error) -> Self {
        OutcomesError::Config {
            message: format!("TOML parse error: {}", err),
        }
    }
}

impl From<rust_xlsxwriter::XlsxError> for OutcomesError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        OutcomesError::Export {
            message: format!("xlsx: {}", err),
        }
    }
}

/// Result type alias for outcomes-builder operations
pub type Result<T> = std::result::Result<T, OutcomesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_bank_displays_message_verbatim() {
        let err = OutcomesError::InvalidBank {
            message: "JSON inválido: expected value".into(),
        };
        assert_eq!(err.to_string(), "JSON inválido: expected value");
    }

    #[test]
    fn io_errors_map_to_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: OutcomesError = io.into();
        assert!(matches!(err, OutcomesError::Storage { .. }));
        assert!(err.to_string().starts_with("Storage error:"));
    }
}
