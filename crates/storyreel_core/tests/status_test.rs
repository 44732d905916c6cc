//! Tests for the video lifecycle state type.

use std::str::FromStr;
use storyreel_core::VideoStatus;
use strum::IntoEnumIterator;

#[test]
fn column_values_round_trip() {
    for status in VideoStatus::iter() {
        let parsed = VideoStatus::from_str(status.as_str()).unwrap();
        assert_eq!(parsed, status);
    }
}

#[test]
fn unknown_column_value_is_rejected() {
    assert!(VideoStatus::from_str("pending").is_err());
}

#[test]
fn only_generating_blocks_a_new_claim() {
    assert!(VideoStatus::None.can_start_generation());
    assert!(VideoStatus::Completed.can_start_generation());
    assert!(VideoStatus::Failed.can_start_generation());
    assert!(!VideoStatus::Generating.can_start_generation());
}

#[test]
fn terminal_states() {
    assert!(VideoStatus::Completed.is_terminal());
    assert!(VideoStatus::Failed.is_terminal());
    assert!(!VideoStatus::None.is_terminal());
    assert!(!VideoStatus::Generating.is_terminal());
}

#[test]
fn serde_uses_lowercase() {
    let json = serde_json::to_string(&VideoStatus::Generating).unwrap();
    assert_eq!(json, "\"generating\"");
}
