//! Error types for Ember

use thiserror::Error;

/// The main error type for Ember operations.
///
/// Only construction, loading and configuration can fail. Per-tick
/// simulation and rendering paths clamp instead of returning errors.
#[derive(Debug, Error)]
pub enum EmberError {
    #[error("Curve error: {0}")]
    Curve(String),

    #[error("Unknown curve: {0}")]
    UnknownCurve(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Value out of range: {field} must be between {min} and {max}, got {value}")]
    ValueOutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),
}

/// Result type alias for Ember operations
pub type Result<T> = std::result::Result<T, EmberError>;

impl From<toml::de::Error> for EmberError {
    fn from(err: toml::de::Error) -> Self {
        EmberError::TomlParse(err.to_string())
    }
}

impl EmberError {
    /// Build a `ValueOutOfRange` error for a named field.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, value: f64) -> Self {
        EmberError::ValueOutOfRange {
            field: field.into(),
            min,
            max,
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_field() {
        let err = EmberError::out_of_range("power", 1.0, 16.0, 0.5);
        let msg = err.to_string();
        assert!(msg.contains("power"));
        assert!(msg.contains("0.5"));
    }

    #[test]
    fn toml_errors_convert() {
        let parsed: std::result::Result<toml::Value, _> = toml::from_str("a = ");
        let err: EmberError = parsed.unwrap_err().into();
        assert!(matches!(err, EmberError::TomlParse(_)));
    }
}
