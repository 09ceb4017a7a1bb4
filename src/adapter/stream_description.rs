//! Stream description translation

use super::error::{AdapterError, AdapterResult};
use super::shard::ShardAdapter;
use super::status::map_stream_status;
use crate::model::{dynamodb, kinesis};
use tracing::debug;

/// Read-only Kinesis-shaped view of one source stream description.
///
/// Wraps the description returned by a describe-stream call and exposes it
/// through the target model's read accessors: identity passthrough for name
/// and ARN, status remapping, and a shard list wrapped once at construction.
/// The view is fixed from then on; it does not track later changes to the
/// stream. To observe new state, describe the stream again and build a new
/// adapter.
#[derive(Debug, Clone)]
pub struct StreamDescriptionAdapter {
    source: dynamodb::StreamDescription,
    shards: Vec<ShardAdapter>,
}

impl StreamDescriptionAdapter {
    /// Wrap a source description, converting each shard in listing order.
    pub fn new(source: dynamodb::StreamDescription) -> Self {
        let shards: Vec<ShardAdapter> = source
            .shards
            .iter()
            .cloned()
            .map(ShardAdapter::new)
            .collect();
        debug!(
            stream_arn = %source.stream_arn,
            shard_count = shards.len(),
            "wrapped stream description"
        );
        Self { source, shards }
    }

    /// Identifier of the stream being described.
    pub fn stream_name(&self) -> &str {
        &self.source.stream_id
    }

    /// Amazon Resource Name of the stream being described.
    pub fn stream_arn(&self) -> &str {
        &self.source.stream_arn
    }

    /// Current status of the stream, translated to the target vocabulary.
    ///
    /// Fails with [`AdapterError::UnrecognizedStatus`] when the source
    /// reported a status outside its four known members.
    pub fn stream_status(&self) -> AdapterResult<kinesis::StreamStatus> {
        map_stream_status(&self.source.stream_status)
    }

    /// The wrapped shards, in source order. Empty when the source reported
    /// none.
    pub fn shards(&self) -> &[ShardAdapter] {
        &self.shards
    }

    /// True when the source's shard listing was paginated and more shards
    /// exist beyond this description.
    pub fn has_more_shards(&self) -> bool {
        self.source
            .last_evaluated_shard_id
            .as_deref()
            .is_some_and(|id| !id.is_empty())
    }

    // Write accessors. Every one fails unconditionally: this view is a
    // projection of upstream state, and a local write could never reach
    // the stream it describes.

    pub fn set_stream_name(&mut self, _stream_name: impl Into<String>) -> AdapterResult<()> {
        Err(AdapterError::unsupported_mutation("set_stream_name"))
    }

    pub fn with_stream_name(self, _stream_name: impl Into<String>) -> AdapterResult<Self> {
        Err(AdapterError::unsupported_mutation("with_stream_name"))
    }

    pub fn set_stream_arn(&mut self, _stream_arn: impl Into<String>) -> AdapterResult<()> {
        Err(AdapterError::unsupported_mutation("set_stream_arn"))
    }

    pub fn with_stream_arn(self, _stream_arn: impl Into<String>) -> AdapterResult<Self> {
        Err(AdapterError::unsupported_mutation("with_stream_arn"))
    }

    pub fn set_stream_status(&mut self, _status: kinesis::StreamStatus) -> AdapterResult<()> {
        Err(AdapterError::unsupported_mutation("set_stream_status"))
    }

    pub fn with_stream_status(self, _status: kinesis::StreamStatus) -> AdapterResult<Self> {
        Err(AdapterError::unsupported_mutation("with_stream_status"))
    }

    pub fn set_shards(&mut self, _shards: Vec<ShardAdapter>) -> AdapterResult<()> {
        Err(AdapterError::unsupported_mutation("set_shards"))
    }

    pub fn with_shards(self, _shards: Vec<ShardAdapter>) -> AdapterResult<Self> {
        Err(AdapterError::unsupported_mutation("with_shards"))
    }

    pub fn set_has_more_shards(&mut self, _has_more_shards: bool) -> AdapterResult<()> {
        Err(AdapterError::unsupported_mutation("set_has_more_shards"))
    }

    pub fn with_has_more_shards(self, _has_more_shards: bool) -> AdapterResult<Self> {
        Err(AdapterError::unsupported_mutation("with_has_more_shards"))
    }
}
