//! Ingestion configuration
//!
//! Loaded from environment variables:
//! - `EXTERNAL_DATA_NEGATIVE_COUNT_POLICY`: `reject` (default) or `discard`

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ExternalDataError;

pub const NEGATIVE_COUNT_POLICY_VAR: &str = "EXTERNAL_DATA_NEGATIVE_COUNT_POLICY";

/// What the ingestion boundary does with a counter below zero
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegativeCountPolicy {
    /// Fail the whole payload
    #[default]
    Reject,
    /// Drop the offending counter and keep the rest
    Discard,
}

impl FromStr for NegativeCountPolicy {
    type Err = ExternalDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "discard" => Ok(Self::Discard),
            other => Err(ExternalDataError::Config(format!(
                "{} must be 'reject' or 'discard', got '{}'",
                NEGATIVE_COUNT_POLICY_VAR, other
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestConfig {
    pub negative_count_policy: NegativeCountPolicy,
}

impl IngestConfig {
    pub fn new(negative_count_policy: NegativeCountPolicy) -> Self {
        Self {
            negative_count_policy,
        }
    }

    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> crate::Result<Self> {
        let negative_count_policy = match std::env::var(NEGATIVE_COUNT_POLICY_VAR) {
            Ok(value) => value.parse()?,
            Err(_) => NegativeCountPolicy::default(),
        };

        Ok(Self {
            negative_count_policy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_is_reject() {
        assert_eq!(
            IngestConfig::default().negative_count_policy,
            NegativeCountPolicy::Reject
        );
    }

    #[test]
    fn parses_policy_names() {
        assert_eq!("reject".parse::<NegativeCountPolicy>().unwrap(), NegativeCountPolicy::Reject);
        assert_eq!(" Discard ".parse::<NegativeCountPolicy>().unwrap(), NegativeCountPolicy::Discard);

        let err = "clamp".parse::<NegativeCountPolicy>().unwrap_err();
        assert!(matches!(err, ExternalDataError::Config(_)));
        assert!(err.to_string().contains("clamp"));
    }

    #[test]
    #[serial_test::serial]
    fn from_env_without_override() {
        std::env::remove_var(NEGATIVE_COUNT_POLICY_VAR);

        let config = IngestConfig::from_env().unwrap();
        assert_eq!(config, IngestConfig::default());
    }

    #[test]
    #[serial_test::serial]
    fn from_env_with_discard() {
        std::env::set_var(NEGATIVE_COUNT_POLICY_VAR, "DISCARD");

        let config = IngestConfig::from_env().unwrap();
        assert_eq!(config.negative_count_policy, NegativeCountPolicy::Discard);

        std::env::remove_var(NEGATIVE_COUNT_POLICY_VAR);
    }

    #[test]
    #[serial_test::serial]
    fn from_env_with_invalid_value() {
        std::env::set_var(NEGATIVE_COUNT_POLICY_VAR, "ignore");

        let err = IngestConfig::from_env().unwrap_err();
        assert!(matches!(err, ExternalDataError::Config(_)));

        std::env::remove_var(NEGATIVE_COUNT_POLICY_VAR);
    }

    #[test]
    fn policy_serializes_snake_case() {
        let json = serde_json::to_string(&IngestConfig::new(NegativeCountPolicy::Discard)).unwrap();
        assert_eq!(json, r#"{"negative_count_policy":"discard"}"#);
    }
}
