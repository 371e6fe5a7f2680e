//! Integration tests for the warning system.

use quill_common::warning::{has_warned, warn_once};

#[test]
fn test_warn_once_records_message() {
    warn_once("Test", "record me");
    assert!(has_warned("Test", "record me"));
}

#[test]
fn test_warnings_are_keyed_by_component() {
    warn_once("Alpha", "shared message");
    assert!(has_warned("Alpha", "shared message"));
    assert!(!has_warned("Beta", "shared message"));
}

#[test]
fn test_repeated_warning_is_harmless() {
    warn_once("Test", "twice");
    warn_once("Test", "twice");
    assert!(has_warned("Test", "twice"));
}

#[test]
fn test_unknown_warning_not_recorded() {
    assert!(!has_warned("Test", "never emitted"));
}
