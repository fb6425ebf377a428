//! Authoring style specifications as JSON.
//!
//! Objects become specifications (top level) or [`Variants`] (nested),
//! strings and numbers become literals. Every other shape (`null`,
//! booleans, arrays) becomes [`Value::Empty`] and is ignored by the
//! compiler.

use serde_json::Value as Json;

use super::sheet::Sx;
use super::value::{Literal, Value, Variants};

impl Value {
    /// Converts a JSON value into a property value.
    pub fn from_json(json: &Json) -> Value {
        match json {
            Json::String(s) => Value::Literal(Literal::Str(s.clone())),
            Json::Number(n) => match n.as_i64() {
                Some(i) => Value::Literal(Literal::Int(i)),
                None => n
                    .as_f64()
                    .map(|f| Value::Literal(Literal::Float(f)))
                    .unwrap_or(Value::Empty),
            },
            Json::Object(map) => Value::Variants(
                map.iter()
                    .map(|(k, v)| (k.clone(), Value::from_json(v)))
                    .collect::<Variants>(),
            ),
            Json::Null | Json::Bool(_) | Json::Array(_) => Value::Empty,
        }
    }
}

impl Sx {
    /// Converts a JSON object into a style specification.
    ///
    /// Non-object input yields an empty specification.
    ///
    /// # Example
    ///
    /// ```rust
    /// use propsx::Sx;
    /// use serde_json::json;
    ///
    /// let sx = Sx::from_json(&json!({
    ///     "color": { "default": "black", "hover": "red" },
    ///     "padding": 4,
    /// }));
    /// assert_eq!(sx.len(), 2);
    /// ```
    pub fn from_json(json: &Json) -> Sx {
        match json {
            Json::Object(map) => map
                .iter()
                .map(|(k, v)| (k.clone(), Value::from_json(v)))
                .collect(),
            _ => Sx::new(),
        }
    }
}
