//! Translation layer between the two stream description models
//!
//! A source description is wrapped once at construction and exposed through
//! the target model's read accessors; every write accessor is rejected.

mod error;
mod shard;
mod status;
mod stream_description;

pub use error::{AdapterError, AdapterResult};
pub use shard::{ShardAdapter, MAX_HASH_KEY, MIN_HASH_KEY};
pub use stream_description::StreamDescriptionAdapter;
