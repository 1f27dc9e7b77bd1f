//! Template configuration loading.
//! A configuration file holds one or more YAML documents, each describing
//! global variables, pipelines and template units.

use crate::context::Variables;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::{debug, error};
use serde::Deserialize;
use std::path::Path;

/// Default configuration file location.
pub const DEFAULT_CONFIG_PATH: &str = "~/.config/theme/templates.yml";

/// One independently processed generation task.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct TemplateUnit {
    /// Variables visible only to this unit, overriding every outer scope
    pub variables: Variables,
    /// Source file or directory, itself a template string
    pub template: Option<String>,
    /// Destination file or directory, itself a template string
    pub destination: Option<String>,
    /// Regex patterns of source paths that are copied instead of rendered
    pub unaltered: Vec<String>,
    /// Commands run before generation
    pub pre_hook: Vec<String>,
    /// Commands run after generation
    pub post_hook: Vec<String>,
}

impl TemplateUnit {
    /// Returns the source and destination templates when both are set.
    pub fn paths(&self) -> Option<(&str, &str)> {
        match (self.template.as_deref(), self.destination.as_deref()) {
            (Some(template), Some(destination))
                if !template.is_empty() && !destination.is_empty() =>
            {
                Some((template, destination))
            }
            _ => None,
        }
    }
}

/// A single configuration document.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct TemplateConfig {
    pub variables: Variables,
    pub pipelines: IndexMap<String, Vec<String>>,
    pub templates: IndexMap<String, TemplateUnit>,
}

/// Parses every document of a configuration file.
///
/// Documents are parsed independently. A malformed document is reported as
/// an `Error::ConfigLoadError` in its slot and does not affect the others.
/// Empty documents are skipped.
pub fn parse_configs(content: &str, origin: &str) -> Vec<Result<TemplateConfig>> {
    serde_yaml::Deserializer::from_str(content)
        .enumerate()
        .filter_map(|(index, document)| {
            let value = match serde_yaml::Value::deserialize(document) {
                Ok(serde_yaml::Value::Null) => return None,
                Ok(value) => value,
                Err(e) => return Some(Err(config_error(origin, index, e))),
            };
            Some(serde_yaml::from_value(value).map_err(|e| config_error(origin, index, e)))
        })
        .collect()
}

fn config_error(origin: &str, index: usize, e: serde_yaml::Error) -> Error {
    Error::ConfigLoadError {
        path: origin.to_string(),
        reason: format!("document {}: {}", index + 1, e),
    }
}

/// Loads all valid configurations from a file.
///
/// Errors are reported and the affected configuration skipped, so an
/// unreadable file yields an empty list.
pub fn load_configs<P: AsRef<Path>>(path: P) -> Vec<TemplateConfig> {
    let path = path.as_ref();
    let origin = path.display().to_string();
    debug!("Loading configuration from {origin}");

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            error!("{}", Error::ConfigLoadError { path: origin, reason: e.to_string() });
            return Vec::new();
        }
    };

    parse_configs(&content, &origin)
        .into_iter()
        .filter_map(|config| match config {
            Ok(config) => Some(config),
            Err(e) => {
                error!("{e}");
                None
            }
        })
        .collect()
}
