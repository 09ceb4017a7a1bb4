//! Per-shard translation

use super::error::{AdapterError, AdapterResult};
use crate::model::{dynamodb, kinesis};

/// Smallest hash key in the target keyspace.
pub const MIN_HASH_KEY: &str = "0";

/// Largest hash key in the target keyspace (2^128 - 1).
pub const MAX_HASH_KEY: &str = "340282366920938463463374607431768211455";

/// Read-only target-shaped view of one source shard.
///
/// Source shards do not partition by hash key, so every wrapped shard
/// reports a hash key range covering the whole target keyspace. Conversion
/// is eager: the adapter owns its fields and holds no reference back to the
/// source shard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShardAdapter {
    shard_id: String,
    parent_shard_id: Option<String>,
    hash_key_range: kinesis::HashKeyRange,
    sequence_number_range: kinesis::SequenceNumberRange,
}

impl ShardAdapter {
    /// Wrap one source shard.
    pub fn new(shard: dynamodb::Shard) -> Self {
        let sequence_number_range = match shard.sequence_number_range {
            Some(range) => kinesis::SequenceNumberRange {
                starting_sequence_number: range.starting_sequence_number.unwrap_or_default(),
                ending_sequence_number: range.ending_sequence_number,
            },
            None => kinesis::SequenceNumberRange {
                starting_sequence_number: String::new(),
                ending_sequence_number: None,
            },
        };
        Self {
            shard_id: shard.shard_id,
            parent_shard_id: shard.parent_shard_id,
            hash_key_range: kinesis::HashKeyRange {
                starting_hash_key: MIN_HASH_KEY.to_owned(),
                ending_hash_key: MAX_HASH_KEY.to_owned(),
            },
            sequence_number_range,
        }
    }

    /// Identifier of the shard, unchanged from the source.
    pub fn shard_id(&self) -> &str {
        &self.shard_id
    }

    /// Identifier of the shard this one split from, if any.
    pub fn parent_shard_id(&self) -> Option<&str> {
        self.parent_shard_id.as_deref()
    }

    /// Always `None`: source shards split but never merge, so no shard has
    /// an adjacent parent.
    pub fn adjacent_parent_shard_id(&self) -> Option<&str> {
        None
    }

    /// Hash key range reported to range-aware consumers.
    pub fn hash_key_range(&self) -> &kinesis::HashKeyRange {
        &self.hash_key_range
    }

    /// Sequence numbers covered by the shard.
    pub fn sequence_number_range(&self) -> &kinesis::SequenceNumberRange {
        &self.sequence_number_range
    }

    // Write accessors. Every one fails: the wrapped shard is a projection
    // of upstream state.

    pub fn set_shard_id(&mut self, _shard_id: impl Into<String>) -> AdapterResult<()> {
        Err(AdapterError::unsupported_mutation("set_shard_id"))
    }

    pub fn with_shard_id(self, _shard_id: impl Into<String>) -> AdapterResult<Self> {
        Err(AdapterError::unsupported_mutation("with_shard_id"))
    }

    pub fn set_parent_shard_id(&mut self, _parent_shard_id: impl Into<String>) -> AdapterResult<()> {
        Err(AdapterError::unsupported_mutation("set_parent_shard_id"))
    }

    pub fn with_parent_shard_id(self, _parent_shard_id: impl Into<String>) -> AdapterResult<Self> {
        Err(AdapterError::unsupported_mutation("with_parent_shard_id"))
    }

    pub fn set_hash_key_range(&mut self, _range: kinesis::HashKeyRange) -> AdapterResult<()> {
        Err(AdapterError::unsupported_mutation("set_hash_key_range"))
    }

    pub fn with_hash_key_range(self, _range: kinesis::HashKeyRange) -> AdapterResult<Self> {
        Err(AdapterError::unsupported_mutation("with_hash_key_range"))
    }

    pub fn set_sequence_number_range(
        &mut self,
        _range: kinesis::SequenceNumberRange,
    ) -> AdapterResult<()> {
        Err(AdapterError::unsupported_mutation("set_sequence_number_range"))
    }

    pub fn with_sequence_number_range(
        self,
        _range: kinesis::SequenceNumberRange,
    ) -> AdapterResult<Self> {
        Err(AdapterError::unsupported_mutation("with_sequence_number_range"))
    }
}
