use crate::error::*;

#[test]
fn test_error_context_unknown_version() {
    let error = MongoDistError::UnknownVersion("9.9.9".to_string());
    let context = ErrorContext::new(&error);

    assert!(context.suggestion.is_some());
    assert!(context.suggestion.unwrap().contains("mongodist versions"));
    assert!(context.details.unwrap().contains("9.9.9"));
}

#[test]
fn test_error_context_invalid_platform() {
    let error = MongoDistError::InvalidPlatform("Unknown operating system: plan9".to_string());
    let context = ErrorContext::new(&error);

    let suggestion = context.suggestion.unwrap();
    assert!(suggestion.contains("linux, windows, macos, solaris, freebsd"));
    assert!(suggestion.contains("Supported word sizes: 32, 64."));
    assert!(context.details.unwrap().contains("plan9"));
}

#[test]
fn test_error_context_io_has_no_suggestion() {
    let error = MongoDistError::Io(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "missing",
    ));
    let context = ErrorContext::new(&error);

    assert!(context.suggestion.is_none());
    assert!(context.details.is_none());
}

#[test]
fn test_exit_codes() {
    assert_eq!(
        get_exit_code(&MongoDistError::UnknownVersion("x".to_string())),
        2
    );
    assert_eq!(
        get_exit_code(&MongoDistError::InvalidVersionFormat("x".to_string())),
        2
    );
    assert_eq!(
        get_exit_code(&MongoDistError::Io(std::io::Error::other("boom"))),
        1
    );
}

#[test]
fn test_format_error_chain() {
    let error = MongoDistError::InvalidVersionFormat("abc".to_string());
    let formatted = format_error_chain(&error);

    assert!(formatted.starts_with("Error: Invalid version format: abc"));
    assert!(formatted.contains("Details: Invalid format: abc"));
    assert!(formatted.contains("Suggestion:"));
}
