//! Theme struct for building value collections.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

/// A named collection of values available to theme functions.
///
/// Values are arbitrary JSON so a theme can carry palettes, spacing
/// scales or breakpoints in whatever shape the caller likes.
///
/// # Example
///
/// ```rust
/// use propsx::Theme;
/// use serde_json::json;
///
/// let theme = Theme::new()
///     .add("primary", "#0055ff")
///     .add("spacing", 8)
///     .add("palette", json!({ "muted": "#999" }));
///
/// assert_eq!(theme.get_str("primary"), Some("#0055ff"));
/// assert_eq!(theme.lookup("palette.muted"), Some(&json!("#999")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Theme {
    values: IndexMap<String, Json>,
}

impl Theme {
    /// Creates an empty theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a theme from the entries of a JSON object.
    ///
    /// Non-object input yields an empty theme.
    pub fn from_json(json: &Json) -> Self {
        match json {
            Json::Object(map) => Self {
                values: map.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
            },
            _ => Self::new(),
        }
    }

    /// Adds a named value, returning an updated theme for chaining.
    pub fn add<V: Into<Json>>(mut self, name: &str, value: V) -> Self {
        self.values.insert(name.to_string(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&Json> {
        self.values.get(name)
    }

    /// Returns the named value if it is a string.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Json::as_str)
    }

    /// Looks up a dot-separated path through nested objects.
    ///
    /// `"palette.primary"` reads the `primary` entry of the `palette` object.
    pub fn lookup(&self, path: &str) -> Option<&Json> {
        let mut segments = path.split('.');
        let mut current = self.get(segments.next()?)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    pub fn has(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns a new theme with `overrides` laid over this one.
    ///
    /// The merge is shallow: a top-level entry in `overrides` replaces the
    /// whole entry of the same name.
    pub fn merge(&self, overrides: &Theme) -> Theme {
        let mut merged = self.clone();
        merged
            .values
            .extend(overrides.values.iter().map(|(k, v)| (k.clone(), v.clone())));
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_theme_add_and_get() {
        let theme = Theme::new().add("primary", "blue").add("radius", 4);
        assert_eq!(theme.get_str("primary"), Some("blue"));
        assert_eq!(theme.get("radius"), Some(&json!(4)));
        assert!(theme.has("radius"));
        assert_eq!(theme.len(), 2);
    }

    #[test]
    fn test_theme_get_str_non_string() {
        let theme = Theme::new().add("radius", 4);
        assert_eq!(theme.get_str("radius"), None);
        assert_eq!(theme.get_str("missing"), None);
    }

    #[test]
    fn test_theme_merge_override_wins() {
        let base = Theme::new().add("primary", "blue").add("secondary", "gray");
        let over = Theme::new().add("primary", "red");
        let merged = base.merge(&over);

        assert_eq!(merged.get_str("primary"), Some("red"));
        assert_eq!(merged.get_str("secondary"), Some("gray"));
        assert_eq!(base.get_str("primary"), Some("blue"));
    }

    #[test]
    fn test_theme_merge_is_shallow() {
        let base = Theme::new().add("palette", json!({ "a": 1, "b": 2 }));
        let over = Theme::new().add("palette", json!({ "a": 3 }));
        let merged = base.merge(&over);

        assert_eq!(merged.lookup("palette.a"), Some(&json!(3)));
        assert_eq!(merged.lookup("palette.b"), None);
    }

    #[test]
    fn test_theme_lookup_path() {
        let theme = Theme::from_json(&json!({ "palette": { "text": { "main": "#111" } } }));
        assert_eq!(theme.lookup("palette.text.main"), Some(&json!("#111")));
        assert_eq!(theme.lookup("palette.missing"), None);
        assert_eq!(theme.lookup("palette.text.main.deeper"), None);
    }

    #[test]
    fn test_theme_from_json_non_object() {
        assert!(Theme::from_json(&json!([1, 2])).is_empty());
    }

    #[test]
    fn test_theme_default() {
        let theme = Theme::default();
        assert!(theme.is_empty());
    }

    #[test]
    fn test_theme_serde_transparent() {
        let theme = Theme::new().add("primary", "blue");
        let json = serde_json::to_value(&theme).unwrap();
        assert_eq!(json, json!({ "primary": "blue" }));

        let back: Theme = serde_json::from_value(json).unwrap();
        assert_eq!(back, theme);
    }
}
