use clap::Parser;
use std::ffi::OsString;
use theme_template::cli::{Args, Selection};

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("theme-template")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_no_targets_selects_all() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();

    assert_eq!(parsed.selection(), Selection::All);
    assert!(!parsed.verbose);
    assert!(parsed.variables.is_empty());
    assert_eq!(parsed.config, "~/.config/theme/templates.yml");
}

#[test]
fn test_pipeline_selection() {
    let parsed = Args::try_parse_from(make_args(&["on", "startup", "reload"])).unwrap();
    assert_eq!(
        parsed.selection(),
        Selection::Pipelines(vec!["startup".to_string(), "reload".to_string()])
    );
}

#[test]
fn test_on_without_pipelines() {
    let parsed = Args::try_parse_from(make_args(&["on"])).unwrap();
    assert_eq!(parsed.selection(), Selection::Pipelines(vec![]));
}

#[test]
fn test_template_selection() {
    let parsed = Args::try_parse_from(make_args(&["bar", "baz"])).unwrap();
    assert_eq!(
        parsed.selection(),
        Selection::Templates(vec!["bar".to_string(), "baz".to_string()])
    );
}

#[test]
fn test_on_only_counts_in_first_position() {
    let parsed = Args::try_parse_from(make_args(&["bar", "on"])).unwrap();
    assert_eq!(
        parsed.selection(),
        Selection::Templates(vec!["bar".to_string(), "on".to_string()])
    );
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "--verbose",
        "--config",
        "/tmp/templates.yml",
        "--theme",
        "/tmp/theme.yml",
        "--set",
        "mode=dark",
        "-s",
        "font=Iosevka Term",
        "bar",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.verbose);
    assert_eq!(parsed.config_path(), std::path::PathBuf::from("/tmp/templates.yml"));
    assert_eq!(parsed.theme_path(), std::path::PathBuf::from("/tmp/theme.yml"));
    assert_eq!(
        parsed.variables,
        vec![
            ("mode".to_string(), "dark".to_string()),
            ("font".to_string(), "Iosevka Term".to_string())
        ]
    );
    assert_eq!(parsed.selection(), Selection::Templates(vec!["bar".to_string()]));
}

#[test]
fn test_invalid_variable() {
    assert!(Args::try_parse_from(make_args(&["--set", "novalue"])).is_err());
    assert!(Args::try_parse_from(make_args(&["--set", "=value"])).is_err());
}
