//! Compiled output.

use indexmap::IndexMap;
use serde::Serialize;

use crate::style::Literal;

/// One entry of a [`Css`] level.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CssValue {
    Literal(Literal),
    Nested(Css),
}

/// A nested style object ready for a CSS-in-JS renderer.
///
/// Each level holds CSS properties with literal values and selector
/// keys (`"&:hover"`, media queries, ...) mapping to nested levels.
/// Serializes to the equivalent JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Css {
    entries: IndexMap<String, CssValue>,
}

impl Css {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&CssValue> {
        self.entries.get(key)
    }

    /// Returns the literal value of a property at this level.
    pub fn literal(&self, property: &str) -> Option<&Literal> {
        match self.entries.get(property) {
            Some(CssValue::Literal(lit)) => Some(lit),
            _ => None,
        }
    }

    /// Returns the nested level under a selector key.
    pub fn nested(&self, selector: &str) -> Option<&Css> {
        match self.entries.get(selector) {
            Some(CssValue::Nested(css)) => Some(css),
            _ => None,
        }
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CssValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Converts the output into a JSON object.
    ///
    /// Non-finite floats become `null`.
    pub fn to_json(&self) -> serde_json::Value {
        let map = self
            .entries
            .iter()
            .map(|(k, v)| {
                let value = match v {
                    CssValue::Literal(lit) => lit.to_json(),
                    CssValue::Nested(css) => css.to_json(),
                };
                (k.clone(), value)
            })
            .collect::<serde_json::Map<_, _>>();
        serde_json::Value::Object(map)
    }

    pub(crate) fn set(&mut self, property: &str, value: Literal) {
        self.entries
            .insert(property.to_string(), CssValue::Literal(value));
    }

    /// Runs `f` on the nested level under `selector`, creating it on first use.
    ///
    /// A literal already stored under the same key is replaced. The level
    /// keeps its position among its siblings.
    pub(crate) fn with_level<R>(&mut self, selector: &str, f: impl FnOnce(&mut Css) -> R) -> R {
        let slot = self
            .entries
            .entry(selector.to_string())
            .or_insert_with(|| CssValue::Nested(Css::new()));
        let mut level = match std::mem::replace(slot, CssValue::Nested(Css::new())) {
            CssValue::Nested(css) => css,
            CssValue::Literal(_) => Css::new(),
        };
        let result = f(&mut level);
        *slot = CssValue::Nested(level);
        result
    }
}

impl From<Css> for serde_json::Value {
    fn from(css: Css) -> Self {
        css.to_json()
    }
}
