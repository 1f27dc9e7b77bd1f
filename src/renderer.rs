//! Template rendering for theme-template.
//! Wraps MiniJinja behind a small trait and provides path templating.
use crate::error::{Error, Result};
use minijinja::{Environment, UndefinedBehavior};
use std::path::PathBuf;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String, minijinja::Error>` - Rendered template string
    fn render(
        &self,
        template: &str,
        context: &serde_json::Value,
    ) -> std::result::Result<String, minijinja::Error>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new renderer whose environment rejects printing or
    /// iterating undefined variables. Testing them in `if` is allowed.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::SemiStrict);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// Fails if the template does not parse or references an undefined value.
    fn render(
        &self,
        template: &str,
        context: &serde_json::Value,
    ) -> std::result::Result<String, minijinja::Error> {
        self.env.render_str(template, context)
    }
}

/// Renders a path template and expands a leading `~` to the home directory.
///
/// # Arguments
/// * `engine` - Template engine used for interpolation
/// * `template` - Path template, e.g. `~/.config/{{ theme.name }}/colors`
/// * `context` - Substitution context of the unit
///
/// # Errors
/// * `Error::TemplatePathError` if the template fails to render
pub fn render_path(
    engine: &dyn TemplateRenderer,
    template: &str,
    context: &serde_json::Value,
) -> Result<PathBuf> {
    let rendered = engine.render(template, context).map_err(|source| {
        Error::TemplatePathError { template: template.to_string(), source }
    })?;
    Ok(PathBuf::from(shellexpand::tilde(&rendered).into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_attribute_access() {
        let engine = MiniJinjaRenderer::new();
        let context = json!({"theme": {"name": "nord", "colors": ["#000", "#fff"]}});

        let result = engine.render("{{ theme.name }}:{{ theme.colors[1] }}", &context);
        assert_eq!(result.unwrap(), "nord:#fff");
    }

    #[test]
    fn test_render_undefined_is_error() {
        let engine = MiniJinjaRenderer::new();
        assert!(engine.render("{{ missing }}", &json!({})).is_err());
        assert!(engine.render("{{ theme.missing }}", &json!({"theme": {}})).is_err());
    }

    #[test]
    fn test_render_conditional_on_absent_key() {
        let engine = MiniJinjaRenderer::new();
        let context = json!({"theme": {"accent": "#f00"}});

        let result = engine.render(
            "{% if theme.wallpaper %}wp={{ theme.wallpaper }}{% endif %}ok",
            &context,
        );
        assert_eq!(result.unwrap(), "ok");

        let result = engine.render("{{ theme.font | default('mono') }}", &context);
        assert_eq!(result.unwrap(), "mono");
    }

    #[test]
    fn test_render_path_expands_home() {
        let engine = MiniJinjaRenderer::new();
        let home = shellexpand::tilde("~").into_owned();
        let context = json!({"theme": {"name": "nord"}});

        let path = render_path(&engine, "~/themes/{{ theme.name }}", &context).unwrap();
        assert_eq!(path, PathBuf::from(home).join("themes/nord"));
    }

    #[test]
    fn test_render_path_keeps_plain_paths() {
        let engine = MiniJinjaRenderer::new();
        let path = render_path(&engine, "/etc/{{ name }}.conf", &json!({"name": "x"})).unwrap();
        assert_eq!(path, PathBuf::from("/etc/x.conf"));
    }

    #[test]
    fn test_render_path_undefined_variable() {
        let engine = MiniJinjaRenderer::new();
        let err = render_path(&engine, "~/{{ nope }}", &json!({})).unwrap_err();
        assert!(matches!(err, Error::TemplatePathError { .. }));
    }
}
