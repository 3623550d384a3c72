//! Ingestion boundary for upstream engagement payloads
//!
//! The record itself accepts any integer. This is where counters coming
//! from an external platform get checked for non-negativity before the
//! rest of the system sees them.

use serde_json::Value;
use tracing::{debug, warn};
use validator::Validate;

use crate::codec;
use crate::config::{IngestConfig, NegativeCountPolicy};
use crate::error::{ExternalDataError, Result};
use crate::models::{wire_name, PostExternalData};

#[derive(Clone, Copy, Debug, Default)]
pub struct ExternalDataParser {
    config: IngestConfig,
}

impl ExternalDataParser {
    pub fn new(config: IngestConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IngestConfig {
        &self.config
    }

    /// Decode and check a JSON payload from the upstream platform
    pub fn parse_json(&self, payload: &str) -> Result<PostExternalData> {
        let data = codec::from_json(payload).map_err(log_decode_failure)?;
        self.sanitize(data)
    }

    /// Decode and check an already parsed JSON value
    pub fn parse_value(&self, value: Value) -> Result<PostExternalData> {
        let data = codec::from_value(value).map_err(log_decode_failure)?;
        self.sanitize(data)
    }

    /// Apply the negative count policy to a decoded record
    pub fn sanitize(&self, mut data: PostExternalData) -> Result<PostExternalData> {
        let errors = match data.validate() {
            Ok(()) => return Ok(data),
            Err(errors) => errors,
        };

        let invalid: Vec<&'static str> = errors
            .field_errors()
            .keys()
            .filter_map(|field| wire_name(field.as_ref()))
            .collect();

        // field_errors() is unordered; report in payload order
        let negative: Vec<(&'static str, i64)> = data
            .counters()
            .into_iter()
            .filter(|(name, _)| invalid.contains(name))
            .filter_map(|(name, count)| count.map(|c| (name, c)))
            .collect();

        match self.config.negative_count_policy {
            NegativeCountPolicy::Reject => match negative.first() {
                Some(&(field, value)) => {
                    debug!(field, value, "Rejecting external data with negative count");
                    Err(ExternalDataError::NegativeCount {
                        field: field.to_string(),
                        value,
                    })
                }
                None => Ok(data),
            },
            NegativeCountPolicy::Discard => {
                for (field, value) in negative {
                    warn!(field, value, "Discarding negative count from external data");
                    data.clear(field);
                }
                Ok(data)
            }
        }
    }
}

fn log_decode_failure(err: ExternalDataError) -> ExternalDataError {
    debug!(field = ?err.field(), error = %err, "Failed to decode external data");
    err
}
