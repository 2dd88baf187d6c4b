//! Unit tests for domain error types

use catcount_domain::Error;

#[test]
fn test_search_engine_error_display() {
    let error = Error::search_engine(404, "index_not_found_exception");
    assert_eq!(
        error.to_string(),
        "Search engine error (404): index_not_found_exception"
    );
    assert!(error.is_io());
}

#[test]
fn test_network_error_keeps_source() {
    let source = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
    let error = Error::network_with_source("connect to engine", source);
    assert!(std::error::Error::source(&error).is_some());
    assert!(error.is_io());
}

#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: Error = json_err.into();
    assert!(matches!(error, Error::Json { .. }));
    assert!(error.is_io());
}

#[test]
fn test_io_error_conversion() {
    let error: Error = std::io::Error::other("disk").into();
    assert!(matches!(error, Error::IoSimple { .. }));
}

#[test]
fn test_config_error_is_not_io() {
    let error = Error::config("missing url");
    assert!(!error.is_io());
    assert_eq!(error.to_string(), "Configuration error: missing url");
}
