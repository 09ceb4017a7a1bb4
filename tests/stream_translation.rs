//! End-to-end translation scenarios
//!
//! One describe-stream response in, the full set of target-model reads out.

use dynamodb_streams_adapter::model::{dynamodb, kinesis};
use dynamodb_streams_adapter::{ShardAdapter, StreamDescriptionAdapter, MAX_HASH_KEY, MIN_HASH_KEY};

#[test]
fn test_disabling_stream_with_paginated_shards() {
    let shard_a = dynamodb::Shard::new("shardId-000000000000-aaaaaaaa")
        .with_sequence_number_range(
            dynamodb::SequenceNumberRange::new()
                .with_starting_sequence_number("1000")
                .with_ending_sequence_number("1999"),
        );
    let shard_b = dynamodb::Shard::new("shardId-000000000001-bbbbbbbb")
        .with_parent_shard_id("shardId-000000000000-aaaaaaaa")
        .with_sequence_number_range(
            dynamodb::SequenceNumberRange::new().with_starting_sequence_number("2000"),
        );

    let description = dynamodb::StreamDescription::new(
        "tbl-stream-1",
        "arn:aws:dynamodb:us-east-1:123456789012:table/orders/stream/tbl-stream-1",
        dynamodb::StreamStatus::Disabling,
    )
    .with_shards(vec![shard_a.clone(), shard_b.clone()])
    .with_last_evaluated_shard_id("shardId-000000000001-bbbbbbbb");

    let adapter = StreamDescriptionAdapter::new(description);

    assert_eq!(adapter.stream_name(), "tbl-stream-1");
    assert_eq!(
        adapter.stream_arn(),
        "arn:aws:dynamodb:us-east-1:123456789012:table/orders/stream/tbl-stream-1"
    );
    // a disabling stream is still readable, so it reports as usable
    assert_eq!(adapter.stream_status(), Ok(kinesis::StreamStatus::Active));
    assert_eq!(
        adapter.shards(),
        &[ShardAdapter::new(shard_a), ShardAdapter::new(shard_b)]
    );
    assert!(adapter.has_more_shards());
}

#[test]
fn test_empty_stream_without_cursor() {
    let description = dynamodb::StreamDescription::new(
        "tbl-stream-2",
        "arn:aws:dynamodb:us-east-1:123456789012:table/audit/stream/tbl-stream-2",
        dynamodb::StreamStatus::Enabled,
    );

    let adapter = StreamDescriptionAdapter::new(description);

    assert_eq!(adapter.stream_status(), Ok(kinesis::StreamStatus::Active));
    assert!(adapter.shards().is_empty());
    assert!(!adapter.has_more_shards());
}

#[test]
fn test_wire_response_translates_end_to_end() {
    let body = r#"{
        "StreamId": "2026-08-06T00:00:00.000",
        "StreamArn": "arn:aws:dynamodb:us-east-1:123456789012:table/orders/stream/2026-08-06T00:00:00.000",
        "StreamStatus": "ENABLING",
        "Shards": [
            {
                "ShardId": "shardId-00000001",
                "SequenceNumberRange": { "StartingSequenceNumber": "100" }
            }
        ]
    }"#;

    let description: dynamodb::StreamDescription = serde_json::from_str(body).unwrap();
    let adapter = StreamDescriptionAdapter::new(description);

    assert_eq!(adapter.stream_status(), Ok(kinesis::StreamStatus::Creating));
    assert_eq!(adapter.shards().len(), 1);

    let shard = &adapter.shards()[0];
    assert_eq!(shard.shard_id(), "shardId-00000001");
    assert_eq!(shard.sequence_number_range().starting_sequence_number, "100");
    assert_eq!(shard.hash_key_range().starting_hash_key, MIN_HASH_KEY);
    assert_eq!(shard.hash_key_range().ending_hash_key, MAX_HASH_KEY);
    assert!(!adapter.has_more_shards());
}
