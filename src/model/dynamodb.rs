//! DynamoDB Streams description model
//!
//! Wire-faithful types for the body of a DescribeStream response. Member
//! names follow the AWS JSON protocol (PascalCase), so these types
//! deserialize the response a surrounding client fetches; this crate itself
//! performs no I/O.

use serde::{Deserialize, Serialize};

/// Snapshot of a stream's identity, status, and shard layout.
///
/// `shards` covers one page of the shard listing; when
/// `last_evaluated_shard_id` is present the listing was paginated and more
/// shards exist beyond this description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StreamDescription {
    /// Identifier of the stream within its table
    #[serde(default)]
    pub stream_id: String,
    /// Amazon Resource Name of the stream
    #[serde(default)]
    pub stream_arn: String,
    /// Lifecycle status reported by the source API
    pub stream_status: StreamStatus,
    /// One page of the stream's shards, in listing order
    #[serde(default)]
    pub shards: Vec<Shard>,
    /// Pagination cursor; absent on the last page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_evaluated_shard_id: Option<String>,
}

impl StreamDescription {
    pub fn new(
        stream_id: impl Into<String>,
        stream_arn: impl Into<String>,
        stream_status: StreamStatus,
    ) -> Self {
        Self {
            stream_id: stream_id.into(),
            stream_arn: stream_arn.into(),
            stream_status,
            shards: Vec::new(),
            last_evaluated_shard_id: None,
        }
    }

    pub fn with_shards(mut self, shards: Vec<Shard>) -> Self {
        self.shards = shards;
        self
    }

    pub fn with_last_evaluated_shard_id(mut self, shard_id: impl Into<String>) -> Self {
        self.last_evaluated_shard_id = Some(shard_id.into());
        self
    }
}

/// One partition of the stream's change events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Shard {
    /// Identifier of the shard
    #[serde(default)]
    pub shard_id: String,
    /// Identifier of the shard this one split from, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_shard_id: Option<String>,
    /// Sequence numbers covered by the shard; ending is open on live shards
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence_number_range: Option<SequenceNumberRange>,
}

impl Shard {
    pub fn new(shard_id: impl Into<String>) -> Self {
        Self {
            shard_id: shard_id.into(),
            parent_shard_id: None,
            sequence_number_range: None,
        }
    }

    pub fn with_parent_shard_id(mut self, parent_shard_id: impl Into<String>) -> Self {
        self.parent_shard_id = Some(parent_shard_id.into());
        self
    }

    pub fn with_sequence_number_range(mut self, range: SequenceNumberRange) -> Self {
        self.sequence_number_range = Some(range);
        self
    }
}

/// Range of sequence numbers covered by a shard, as decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SequenceNumberRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starting_sequence_number: Option<String>,
    /// Absent while the shard is still open for writes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ending_sequence_number: Option<String>,
}

impl SequenceNumberRange {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_starting_sequence_number(mut self, number: impl Into<String>) -> Self {
        self.starting_sequence_number = Some(number.into());
        self
    }

    pub fn with_ending_sequence_number(mut self, number: impl Into<String>) -> Self {
        self.ending_sequence_number = Some(number.into());
        self
    }
}

/// Lifecycle status reported by the source API.
///
/// A value outside the four known members survives deserialization in
/// `Unknown`, preserving the raw wire token so it can be reported verbatim
/// when a translation is attempted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StreamStatus {
    Enabled,
    Enabling,
    Disabled,
    Disabling,
    Unknown(String),
}

impl StreamStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Enabled => "ENABLED",
            Self::Enabling => "ENABLING",
            Self::Disabled => "DISABLED",
            Self::Disabling => "DISABLING",
            Self::Unknown(raw) => raw,
        }
    }
}

impl From<&str> for StreamStatus {
    fn from(value: &str) -> Self {
        match value {
            "ENABLED" => Self::Enabled,
            "ENABLING" => Self::Enabling,
            "DISABLED" => Self::Disabled,
            "DISABLING" => Self::Disabling,
            other => Self::Unknown(other.to_owned()),
        }
    }
}

impl From<String> for StreamStatus {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<StreamStatus> for String {
    fn from(value: StreamStatus) -> Self {
        match value {
            StreamStatus::Unknown(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl std::fmt::Display for StreamStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
