//! Post External Data
//!
//! Engagement counters (likes, comments, views) reported by the platform an
//! external post came from, plus the ingestion boundary that turns an
//! upstream JSON payload into a checked record.
//!
//! ```
//! use post_external_data::{codec, PostExternalData};
//!
//! let data = codec::from_json(r#"{"likeCount": 42, "viewCount": 1000}"#).unwrap();
//! assert_eq!(data, PostExternalData::new().with_like_count(42).with_view_count(1000));
//! assert_eq!(data.comment_count(), None);
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod ingest;
pub mod models;

pub use config::{IngestConfig, NegativeCountPolicy};
pub use error::{ExternalDataError, Result};
pub use ingest::ExternalDataParser;
pub use models::PostExternalData;
