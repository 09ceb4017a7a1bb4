//! Status vocabulary translation

use super::error::{AdapterError, AdapterResult};
use crate::model::{dynamodb, kinesis};

/// Map a source stream status onto the target vocabulary.
///
/// ENABLED and ENABLING translate directly. Disabled streams keep serving
/// reads for 24 hours after disabling, so both DISABLED and DISABLING still
/// report as ACTIVE. DELETING and UPDATING have no source equivalent and are
/// never produced. An unknown source status fails rather than guessing.
pub(crate) fn map_stream_status(
    status: &dynamodb::StreamStatus,
) -> AdapterResult<kinesis::StreamStatus> {
    match status {
        dynamodb::StreamStatus::Enabled => Ok(kinesis::StreamStatus::Active),
        dynamodb::StreamStatus::Enabling => Ok(kinesis::StreamStatus::Creating),
        dynamodb::StreamStatus::Disabled => Ok(kinesis::StreamStatus::Active),
        dynamodb::StreamStatus::Disabling => Ok(kinesis::StreamStatus::Active),
        dynamodb::StreamStatus::Unknown(raw) => {
            Err(AdapterError::UnrecognizedStatus(raw.clone()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_maps_to_active() {
        assert_eq!(
            map_stream_status(&dynamodb::StreamStatus::Enabled),
            Ok(kinesis::StreamStatus::Active)
        );
    }

    #[test]
    fn test_enabling_maps_to_creating() {
        assert_eq!(
            map_stream_status(&dynamodb::StreamStatus::Enabling),
            Ok(kinesis::StreamStatus::Creating)
        );
    }

    #[test]
    fn test_disabled_and_disabling_stay_readable() {
        // both collapse onto ACTIVE: reads survive for 24h after disabling
        assert_eq!(
            map_stream_status(&dynamodb::StreamStatus::Disabled),
            Ok(kinesis::StreamStatus::Active)
        );
        assert_eq!(
            map_stream_status(&dynamodb::StreamStatus::Disabling),
            Ok(kinesis::StreamStatus::Active)
        );
    }

    #[test]
    fn test_unknown_status_is_an_error() {
        let status = dynamodb::StreamStatus::Unknown("ARCHIVING".to_owned());
        assert_eq!(
            map_stream_status(&status),
            Err(AdapterError::UnrecognizedStatus("ARCHIVING".to_owned()))
        );
    }
}
