//! Tests for user-facing error messages

use md2html::ConvertError;
use std::path::PathBuf;

#[test]
fn test_missing_mode() {
    let error_msg = format!("{}", ConvertError::MissingMode);
    assert!(error_msg.contains("No mode"));
}

#[test]
fn test_unknown_mode() {
    let error = ConvertError::unknown_mode("pdf", &["markdown"]);
    let error_msg = format!("{}", error);
    assert!(error_msg.contains("'pdf'"));
    assert!(error_msg.contains("Supported modes: markdown"));
}

#[test]
fn test_input_not_found_names_path() {
    let error = ConvertError::InputNotFound {
        path: PathBuf::from("docs/missing.md"),
    };
    assert!(format!("{}", error).contains("docs/missing.md"));
}

#[test]
fn test_invalid_arguments_names_count() {
    let error = ConvertError::InvalidArguments {
        mode: "markdown".to_string(),
        needed: 3,
    };
    let error_msg = format!("{}", error);
    assert!(error_msg.contains("markdown"));
    assert!(error_msg.contains('3'));
}

#[test]
fn test_conversion_failed_keeps_source() {
    use std::error::Error;
    use std::io;

    let io_err = io::Error::new(io::ErrorKind::Other, "disk on fire");
    let error = ConvertError::conversion_failed("out.html", io_err);
    assert!(format!("{}", error).contains("disk on fire"));
    assert!(error.source().is_some());
}

#[test]
fn test_cancellation_is_not_a_failure() {
    let error = ConvertError::OperationCancelled;
    assert!(error.is_cancellation());
    assert!(!error.is_validation());
    assert_eq!(error.exit_code(), 0);
}
