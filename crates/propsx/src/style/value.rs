//! Property values: literals, theme functions and selector variants.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::BoxError;
use crate::theme::Theme;

/// A literal CSS value, written to the output verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Literal {
    Str(String),
    Int(i64),
    Float(f64),
}

impl Literal {
    /// Returns the string content if this literal is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::Str(s) => Some(s),
            _ => None,
        }
    }

    pub(crate) fn to_json(&self) -> serde_json::Value {
        match self {
            Literal::Str(s) => serde_json::Value::String(s.clone()),
            Literal::Int(n) => serde_json::Value::from(*n),
            Literal::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Str(s) => f.write_str(s),
            Literal::Int(n) => write!(f, "{}", n),
            Literal::Float(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::Str(s.to_string())
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Literal::Str(s)
    }
}

impl From<i32> for Literal {
    fn from(n: i32) -> Self {
        Literal::Int(n.into())
    }
}

impl From<u32> for Literal {
    fn from(n: u32) -> Self {
        Literal::Int(n.into())
    }
}

impl From<i64> for Literal {
    fn from(n: i64) -> Self {
        Literal::Int(n)
    }
}

impl From<f64> for Literal {
    fn from(n: f64) -> Self {
        Literal::Float(n)
    }
}

/// A function computing a literal from the effective theme.
pub type ThemeFn = Arc<dyn Fn(&Theme) -> Result<Literal, BoxError> + Send + Sync>;

/// The value of one property in a style specification.
#[derive(Clone)]
pub enum Value {
    /// Written verbatim.
    Literal(Literal),
    /// Evaluated against the effective theme at compile time.
    Theme(ThemeFn),
    /// Per-selector values, keyed by selector name.
    Variants(Variants),
    /// Any other shape. Contributes nothing to the output.
    Empty,
}

impl Value {
    /// Creates a theme-dependent value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use propsx::{Theme, Value};
    ///
    /// let primary = Value::theme(|t: &Theme| t.get_str("primary").unwrap_or("black").to_string());
    /// ```
    pub fn theme<F, L>(f: F) -> Self
    where
        F: Fn(&Theme) -> L + Send + Sync + 'static,
        L: Into<Literal>,
    {
        Value::Theme(Arc::new(move |theme: &Theme| -> Result<Literal, BoxError> {
            Ok(f(theme).into())
        }))
    }

    /// Creates a theme-dependent value whose evaluation may fail.
    ///
    /// A failure aborts the whole compile with [`CompileError::Theme`](crate::CompileError::Theme).
    pub fn try_theme<F, L, E>(f: F) -> Self
    where
        F: Fn(&Theme) -> Result<L, E> + Send + Sync + 'static,
        L: Into<Literal>,
        E: Into<BoxError>,
    {
        Value::Theme(Arc::new(move |theme: &Theme| -> Result<Literal, BoxError> {
            f(theme).map(Into::into).map_err(Into::into)
        }))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Value::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    pub fn as_variants(&self) -> Option<&Variants> {
        match self {
            Value::Variants(variants) => Some(variants),
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Literal(lit) => f.debug_tuple("Literal").field(lit).finish(),
            Value::Theme(_) => f.write_str("Theme(<fn>)"),
            Value::Variants(variants) => f.debug_tuple("Variants").field(variants).finish(),
            Value::Empty => f.write_str("Empty"),
        }
    }
}

macro_rules! literal_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Literal(value.into())
                }
            }
        )*
    };
}

literal_value!(Literal, &str, String, i32, u32, i64, f64);

impl From<Variants> for Value {
    fn from(variants: Variants) -> Self {
        Value::Variants(variants)
    }
}

/// Per-selector values for one property.
///
/// Keys are either registered selector names (`hover`, `focus`, ...),
/// raw CSS selectors or media queries used verbatim, or the reserved
/// `default` key which targets the element itself.
///
/// # Example
///
/// ```rust
/// use propsx::Variants;
///
/// let color = Variants::new()
///     .base("black")
///     .on("hover", "red")
///     .on("@media (max-width: 600px)", Variants::new().on("disabled", "gray"));
/// assert_eq!(color.len(), 3);
/// ```
#[derive(Clone, Default)]
pub struct Variants {
    entries: IndexMap<String, Value>,
}

impl Variants {
    /// The reserved selector name for the element's base style.
    pub const DEFAULT: &'static str = "default";

    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `default` variant.
    pub fn base<V: Into<Value>>(self, value: V) -> Self {
        self.on(Self::DEFAULT, value)
    }

    /// Sets the value used under `selector`, returning the updated variants.
    pub fn on<V: Into<Value>>(mut self, selector: &str, value: V) -> Self {
        self.entries.insert(selector.to_string(), value.into());
        self
    }

    pub fn get(&self, selector: &str) -> Option<&Value> {
        self.entries.get(selector)
    }

    /// Iterates over `(selector, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Variants {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

impl FromIterator<(String, Value)> for Variants {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
