use std::io;

use plugforge::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::Io(_) => (),
        _ => panic!("Expected Io variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::UnknownContainer { name: "module_network_base".to_string() };
    assert_eq!(err.to_string(), "Unknown template container 'module_network_base'.");

    let err = Error::DocstringFileMissing { path: "/tmp/ds.yaml".to_string() };
    assert_eq!(err.to_string(), "Could not detect the specified docstring file '/tmp/ds.yaml'.");
}

#[test]
fn test_schema_validation_lists_every_violation() {
    let err = Error::SchemaValidation {
        path: "content.yaml".to_string(),
        errors: vec!["first violation".to_string(), "second violation".to_string()],
    };
    let text = err.to_string();
    assert!(text.contains("first violation"));
    assert!(text.contains("second violation"));
}
