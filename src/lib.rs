//! theme-template regenerates configuration files from templates whenever a
//! desktop theme changes. Templates are rendered with the theme, the process
//! environment and configured variables, and can be bracketed by hooks.

/// Command-line interface module for the theme-template application
pub mod cli;

/// Template configuration loading
/// Supports multi-document YAML files of template units and pipelines
pub mod config;

/// Substitution context assembly and variable precedence
pub mod context;

/// Error types and handling for the theme-template application
pub mod error;

/// Pre and post hook command execution
pub mod hooks;

/// Logger setup
pub mod logger;

/// Template tree resolution and file output
pub mod processor;

/// Template and path rendering
pub mod renderer;

/// Theme document loading
pub mod theme;

/// Copy-verbatim pattern matching
pub mod unaltered;

/// Per-unit orchestration of hooks and generation
pub mod updater;
