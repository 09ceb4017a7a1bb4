//! Adapter layer for reading DynamoDB change streams through the Kinesis
//! stream-description model.
//!
//! DynamoDB Streams and Kinesis expose nearly identical shard-partitioned
//! change logs, but their description models disagree on field names and
//! status vocabulary. This crate wraps a DynamoDB Streams description in a
//! read-only view satisfying the Kinesis description contract, so consumers
//! written against the Kinesis model can read DynamoDB streams unmodified.
//!
//! # Core Concepts
//!
//! - **StreamDescriptionAdapter**: read-only Kinesis-shaped view over one
//!   source stream description
//! - **ShardAdapter**: per-shard translation, including a synthesized
//!   full-keyspace hash key range
//! - **Status remapping**: ENABLED/ENABLING/DISABLED/DISABLING collapsed
//!   onto ACTIVE/CREATING
//!
//! # Example
//!
//! ```
//! use dynamodb_streams_adapter::model::dynamodb;
//! use dynamodb_streams_adapter::StreamDescriptionAdapter;
//!
//! let description = dynamodb::StreamDescription::new(
//!     "2026-08-06T00:00:00.000",
//!     "arn:aws:dynamodb:us-east-1:123456789012:table/orders/stream/2026-08-06T00:00:00.000",
//!     dynamodb::StreamStatus::Enabled,
//! );
//!
//! let adapter = StreamDescriptionAdapter::new(description);
//! assert_eq!(adapter.stream_name(), "2026-08-06T00:00:00.000");
//! assert!(!adapter.has_more_shards());
//! ```

pub mod adapter;
pub mod model;

pub use adapter::{
    AdapterError, AdapterResult, ShardAdapter, StreamDescriptionAdapter, MAX_HASH_KEY, MIN_HASH_KEY,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
