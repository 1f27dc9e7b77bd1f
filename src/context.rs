//! Substitution context assembly.
//! Layers the theme, environment, invocation, configuration and unit
//! variables into the single mapping each template unit renders against.

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Ordered mapping of variable names to substitution values.
pub type Variables = IndexMap<String, Value>;

/// Merges variable scopes into one mapping.
///
/// Layers are given lowest priority first. A key in a later layer replaces
/// the same key from an earlier one; nested values are replaced whole, never
/// deep-merged. The inputs are cloned, so the result can be mutated freely.
pub fn merge_scopes(layers: &[&Variables]) -> Variables {
    let mut merged = Variables::new();
    for layer in layers {
        for (key, value) in layer.iter() {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}

/// Builds the outermost scope holding `theme` and `env`.
pub fn base_context(theme: Value, env: &IndexMap<String, String>) -> Variables {
    let env = env
        .iter()
        .map(|(k, v)| (k.clone(), Value::String(v.clone())))
        .collect::<Map<String, Value>>();

    let mut base = Variables::new();
    base.insert("theme".to_string(), theme);
    base.insert("env".to_string(), Value::Object(env));
    base
}

/// Captures the process environment. Variables whose name or value is not
/// valid unicode are skipped.
pub fn env_snapshot() -> IndexMap<String, String> {
    let mut env: IndexMap<String, String> = std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect();
    env.sort_keys();
    env
}

/// Converts merged variables into the value handed to the template engine.
pub fn to_context(variables: Variables) -> Value {
    Value::Object(variables.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn vars(value: Value) -> Variables {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_later_layers_win() {
        let global = vars(json!({"x": 1, "g": "global"}));
        let config = vars(json!({"x": 2, "c": "config"}));
        let unit = vars(json!({"x": 3}));

        let merged = merge_scopes(&[&global, &config, &unit]);
        assert_eq!(merged["x"], json!(3));
        assert_eq!(merged["g"], json!("global"));
        assert_eq!(merged["c"], json!("config"));
    }

    #[test]
    fn test_merge_is_shallow() {
        let low = vars(json!({"colors": {"fg": "#fff", "bg": "#000"}}));
        let high = vars(json!({"colors": {"fg": "#eee"}}));

        let merged = merge_scopes(&[&low, &high]);
        assert_eq!(merged["colors"], json!({"fg": "#eee"}));
    }

    #[test]
    fn test_merge_does_not_alias_inputs() {
        let low = vars(json!({"a": [1, 2]}));
        let mut merged = merge_scopes(&[&low]);
        merged.insert("a".to_string(), json!("changed"));
        merged.insert("b".to_string(), json!(true));

        assert_eq!(low["a"], json!([1, 2]));
        assert!(!low.contains_key("b"));
    }

    #[test]
    fn test_base_context_exposes_theme_and_env() {
        let mut env = IndexMap::new();
        env.insert("HOME".to_string(), "/home/me".to_string());

        let base = base_context(json!({"accent": "#ff0000"}), &env);
        let context = to_context(base);
        assert_eq!(context["theme"]["accent"], json!("#ff0000"));
        assert_eq!(context["env"]["HOME"], json!("/home/me"));
    }
}
