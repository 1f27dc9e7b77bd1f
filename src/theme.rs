//! Theme data loading.
//! The theme is an arbitrary YAML (or JSON) document exposed to templates
//! under the `theme` key.

use crate::error::{Error, Result};
use log::{debug, warn};
use std::path::Path;

/// Default theme file location.
pub const DEFAULT_THEME_PATH: &str = "~/.config/theme/theme.yml";

/// Loads the theme document.
///
/// A missing file is not an error: a warning is logged and an empty mapping
/// returned, so templates that do not use the theme still render.
///
/// # Errors
/// * `Error::ThemeLoadError` if the file exists but cannot be read or parsed
pub fn load_theme<P: AsRef<Path>>(path: P) -> Result<serde_json::Value> {
    let path = path.as_ref();
    if !path.exists() {
        warn!("Theme file '{}' not found, using an empty theme", path.display());
        return Ok(serde_json::Value::Object(serde_json::Map::new()));
    }

    debug!("Loading theme from {}", path.display());
    let theme_error = |reason: String| Error::ThemeLoadError {
        path: path.display().to_string(),
        reason,
    };
    let content = std::fs::read_to_string(path).map_err(|e| theme_error(e.to_string()))?;
    let theme: serde_json::Value =
        serde_yaml::from_str(&content).map_err(|e| theme_error(e.to_string()))?;
    Ok(theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_missing_theme_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let theme = load_theme(temp_dir.path().join("theme.yml")).unwrap();
        assert_eq!(theme, json!({}));
    }

    #[test]
    fn test_load_yaml_theme() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("theme.yml");
        std::fs::write(&path, "name: nord\naccent: '#88c0d0'\nopacity: 0.9\n").unwrap();

        let theme = load_theme(&path).unwrap();
        assert_eq!(theme, json!({"name": "nord", "accent": "#88c0d0", "opacity": 0.9}));
    }

    #[test]
    fn test_invalid_theme_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("theme.yml");
        std::fs::write(&path, "name: [unclosed").unwrap();

        assert!(matches!(load_theme(&path), Err(Error::ThemeLoadError { .. })));
    }
}
