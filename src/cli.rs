//! Command-line interface implementation for theme-template.
//! Provides argument parsing and the positional selection dispatch.

use clap::Parser;
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_PATH;
use crate::theme::DEFAULT_THEME_PATH;

/// Keyword that switches the positional arguments to pipeline names.
pub const PIPELINE_KEYWORD: &str = "on";

/// Command-line arguments structure for theme-template.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Regenerate theme-driven configuration files from templates",
    long_about = None,
    after_help = "Without targets every template is updated. \
                  `on <PIPELINE>...` updates the named pipelines, \
                  any other targets are template names."
)]
pub struct Args {
    /// Template names, or `on` followed by pipeline names
    #[arg(value_name = "TARGET")]
    pub targets: Vec<String>,

    /// Path to the templates configuration file
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Path to the theme file
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_THEME_PATH)]
    pub theme: String,

    /// Extra variable available to every template, overridden by configuration variables
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE", value_parser = parse_variable)]
    pub variables: Vec<(String, String)>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Which template units an invocation targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    All,
    Pipelines(Vec<String>),
    Templates(Vec<String>),
}

impl Args {
    /// Interprets the positional targets.
    pub fn selection(&self) -> Selection {
        match self.targets.split_first() {
            None => Selection::All,
            Some((first, rest)) if first == PIPELINE_KEYWORD => {
                Selection::Pipelines(rest.to_vec())
            }
            Some(_) => Selection::Templates(self.targets.clone()),
        }
    }

    /// Configuration path with `~` expanded.
    pub fn config_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.config).into_owned())
    }

    /// Theme path with `~` expanded.
    pub fn theme_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.theme).into_owned())
    }
}

fn parse_variable(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{s}'")),
    }
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
