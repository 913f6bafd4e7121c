//! Error types for the Transkit core library
//!
//! This module defines the error handling system for Transkit, using thiserror
//! for ergonomic error definitions and anyhow for errors raised by
//! caller-supplied transformation functions.

use serde_json::Value;
use thiserror::Error;

/// Main error type for Transkit operations
#[derive(Error, Debug)]
pub enum Error {
    /// A mapping was required but a different kind of value was supplied
    #[error("Expected a mapping, found {found}")]
    NotAMapping {
        found: &'static str,
    },

    /// A value could not be coerced for a conversion
    #[error("Conversion failed: {message} (value: {value})")]
    Conversion {
        message: String,
        value: String,
    },

    /// JSON serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Error raised by a caller-supplied key or value function
    #[error("{message}")]
    Custom {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a conversion error for the given value
    pub fn conversion(message: impl Into<String>, value: &Value) -> Self {
        Self::Conversion {
            message: message.into(),
            value: value.to_string(),
        }
    }

    /// Wrap an arbitrary error raised inside a transformation function
    pub fn custom(source: impl Into<anyhow::Error>) -> Self {
        let source = source.into();
        Self::Custom {
            message: source.to_string(),
            source,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}

/// Name of the JSON kind of a value, used in error messages
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
