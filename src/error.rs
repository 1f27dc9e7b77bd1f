//! Error handling for theme-template.
//! Defines the error type and result alias used throughout the crate.

use thiserror::Error;

/// Errors raised while loading configuration, resolving templates,
/// rendering files and running hooks.
///
/// Everything except [`Error::ThemeLoadError`] is contained at the
/// template unit boundary by the updater and reported, not propagated.
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration file is unreadable or one of its documents is malformed
    #[error("Config error in '{path}': {reason}.")]
    ConfigLoadError { path: String, reason: String },

    /// The theme file exists but could not be parsed
    #[error("Theme error in '{path}': {reason}.")]
    ThemeLoadError { path: String, reason: String },

    /// A template or destination path could not be rendered
    #[error("Cannot resolve path template '{template}': {source}.")]
    TemplatePathError {
        template: String,
        #[source]
        source: minijinja::Error,
    },

    /// One of the unit's unaltered patterns is not a valid regular expression
    #[error("Invalid unaltered pattern: {0}.")]
    UnalteredPatternError(#[from] regex::Error),

    /// A source file could not be read, decoded, rendered or written
    #[error("Cannot render '{source_path}': {reason}.")]
    RenderError { source_path: String, reason: String },

    /// A hook line could not be rendered, split or spawned
    #[error("Hook '{command}' could not be run: {reason}.")]
    HookCommandError { command: String, reason: String },

    /// A hook exited unsuccessfully
    #[error("Hook '{command}' failed with exit code {}.", display_code(.code))]
    HookError { command: String, code: Option<i32> },

    /// A named template unit or pipeline is not defined
    #[error("Unknown {kind} '{name}'.")]
    SelectionError { kind: &'static str, name: String },
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "none (terminated by signal)".to_string(),
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
