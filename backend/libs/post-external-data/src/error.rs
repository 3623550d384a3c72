//! Error types for external post data ingestion

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for external data operations
pub type Result<T> = std::result::Result<T, ExternalDataError>;

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "error_type", content = "details")]
pub enum ExternalDataError {
    /// Payload is not valid JSON, not an object, or a counter is not an integer
    #[error("Malformed external data{}: {reason}", field_suffix(.field))]
    MalformedData {
        field: Option<String>,
        reason: String,
    },

    /// A counter reported by the upstream platform is below zero
    #[error("Negative count for field '{field}': {value}")]
    NegativeCount { field: String, value: i64 },

    /// Invalid ingestion configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

fn field_suffix(field: &Option<String>) -> String {
    match field {
        Some(name) => format!(" in field '{}'", name),
        None => String::new(),
    }
}

impl ExternalDataError {
    pub(crate) fn malformed(field: Option<&str>, reason: impl Into<String>) -> Self {
        Self::MalformedData {
            field: field.map(str::to_string),
            reason: reason.into(),
        }
    }

    /// HTTP status code for callers surfacing this error.
    ///
    /// Bad counters come from the upstream platform, so they map to 502.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MalformedData { .. } | Self::NegativeCount { .. } => 502,
            Self::Config(_) => 500,
        }
    }

    /// Field the error refers to, by wire name
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MalformedData { field, .. } => field.as_deref(),
            Self::NegativeCount { field, .. } => Some(field),
            Self::Config(_) => None,
        }
    }
}
