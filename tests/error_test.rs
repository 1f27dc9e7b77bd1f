use theme_template::error::Error;

#[test]
fn test_error_conversion() {
    let regex_err = regex::Regex::new("(").unwrap_err();
    let err: Error = regex_err.into();

    match err {
        Error::UnalteredPatternError(_) => (),
        _ => panic!("Expected UnalteredPatternError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::ConfigLoadError {
        path: "templates.yml".to_string(),
        reason: "invalid type".to_string(),
    };
    assert_eq!(err.to_string(), "Config error in 'templates.yml': invalid type.");

    let err = Error::SelectionError { kind: "pipeline", name: "startup".to_string() };
    assert_eq!(err.to_string(), "Unknown pipeline 'startup'.");
}

#[test]
fn test_hook_error_display() {
    let err = Error::HookError { command: "false".to_string(), code: Some(1) };
    assert_eq!(err.to_string(), "Hook 'false' failed with exit code 1.");

    let err = Error::HookError { command: "sleep 10".to_string(), code: None };
    assert!(err.to_string().contains("terminated by signal"));
}
