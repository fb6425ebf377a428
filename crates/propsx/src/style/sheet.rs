//! Style specifications and shallow merging.

use std::fmt;

use indexmap::IndexMap;

use super::value::Value;

/// A style specification: property names mapped to [`Value`]s.
///
/// Property names are CSS properties (`color`, `padding`) or custom
/// properties handled by a [`Maps`](crate::Maps) table. Order of
/// insertion is kept and drives the order of the compiled output.
///
/// # Example
///
/// ```rust
/// use propsx::{Sx, Variants};
///
/// let sx = Sx::new()
///     .add("color", Variants::new().base("black").on("hover", "red"))
///     .add("padding", 4);
/// assert!(sx.contains("color"));
/// ```
#[derive(Clone, Default)]
pub struct Sx {
    props: IndexMap<String, Value>,
}

impl Sx {
    /// Creates an empty specification.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, returning an updated specification for chaining.
    pub fn add<V: Into<Value>>(mut self, property: &str, value: V) -> Self {
        self.insert(property, value);
        self
    }

    /// Sets a property in place, returning the previous value if any.
    ///
    /// A redefined property keeps its original position.
    pub fn insert<V: Into<Value>>(&mut self, property: &str, value: V) -> Option<Value> {
        self.props.insert(property.to_string(), value.into())
    }

    /// Removes a property, preserving the order of the remaining ones.
    pub fn remove(&mut self, property: &str) -> Option<Value> {
        self.props.shift_remove(property)
    }

    pub fn get(&self, property: &str) -> Option<&Value> {
        self.props.get(property)
    }

    pub fn contains(&self, property: &str) -> bool {
        self.props.contains_key(property)
    }

    /// Iterates over `(property, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.props.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn properties(&self) -> impl Iterator<Item = &str> {
        self.props.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.props.len()
    }

    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// Returns a new specification with `other`'s properties laid over this one.
    pub fn merge(&self, other: &Sx) -> Sx {
        merge(&[self, other])
    }
}

impl fmt::Debug for Sx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.props.iter()).finish()
    }
}

impl FromIterator<(String, Value)> for Sx {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            props: iter.into_iter().collect(),
        }
    }
}

impl Extend<(String, Value)> for Sx {
    fn extend<I: IntoIterator<Item = (String, Value)>>(&mut self, iter: I) {
        self.props.extend(iter);
    }
}

impl IntoIterator for Sx {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.props.into_iter()
    }
}

/// Merges specifications left to right, later ones winning per property.
///
/// The merge is shallow: a property redefined by a later specification
/// replaces the earlier value entirely, including all of its variants.
/// Properties keep the position of their first appearance. Inputs are
/// not modified.
///
/// # Example
///
/// ```rust
/// use propsx::{merge, Literal, Sx};
///
/// let base = Sx::new().add("color", "black").add("margin", 0);
/// let over = Sx::new().add("color", "red");
/// let merged = merge(&[&base, &over]);
///
/// assert_eq!(merged.get("color").and_then(|v| v.as_literal()), Some(&Literal::from("red")));
/// assert_eq!(merged.get("margin").and_then(|v| v.as_literal()), Some(&Literal::from(0)));
/// ```
pub fn merge(specs: &[&Sx]) -> Sx {
    let mut merged = Sx::new();
    for spec in specs {
        merged.extend(spec.props.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::value::{Literal, Variants};

    fn literal<'a>(sx: &'a Sx, property: &str) -> Option<&'a Literal> {
        sx.get(property).and_then(Value::as_literal)
    }

    #[test]
    fn test_merge_last_wins() {
        let a = Sx::new().add("color", "black").add("width", 10);
        let b = Sx::new().add("color", "red");
        let merged = merge(&[&a, &b]);

        assert_eq!(literal(&merged, "color"), Some(&Literal::from("red")));
        assert_eq!(literal(&merged, "width"), Some(&Literal::from(10)));
    }

    #[test]
    fn test_merge_is_shallow() {
        let a = Sx::new().add("color", Variants::new().base("black").on("hover", "red"));
        let b = Sx::new().add("color", Variants::new().on("focus", "blue"));
        let merged = a.merge(&b);

        let variants = merged.get("color").and_then(Value::as_variants).unwrap();
        assert_eq!(variants.len(), 1);
        assert!(variants.get("default").is_none());
        assert!(variants.get("focus").is_some());
    }

    #[test]
    fn test_merge_keeps_first_position() {
        let a = Sx::new().add("a", 1).add("b", 2);
        let b = Sx::new().add("c", 3).add("a", 4);
        let merged = merge(&[&a, &b]);

        let order: Vec<&str> = merged.properties().collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_merge_does_not_touch_inputs() {
        let a = Sx::new().add("color", "black");
        let b = Sx::new().add("color", "red");
        let _ = merge(&[&a, &b]);

        assert_eq!(literal(&a, "color"), Some(&Literal::from("black")));
        assert_eq!(literal(&b, "color"), Some(&Literal::from("red")));
    }

    #[test]
    fn test_merge_empty() {
        assert!(merge(&[]).is_empty());
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut sx = Sx::new().add("a", 1).add("b", 2).add("c", 3);
        assert!(sx.remove("b").is_some());
        let order: Vec<&str> = sx.properties().collect();
        assert_eq!(order, vec!["a", "c"]);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn spec() -> impl Strategy<Value = Vec<(String, i64)>> {
        prop::collection::vec(("[a-e]", any::<i64>()), 0..6)
    }

    fn build(entries: &[(String, i64)]) -> Sx {
        entries
            .iter()
            .map(|(k, v)| (k.clone(), Value::from(*v)))
            .collect()
    }

    proptest! {
        #[test]
        fn later_spec_wins_for_every_key(a in spec(), b in spec()) {
            let left = build(&a);
            let right = build(&b);
            let merged = merge(&[&left, &right]);

            for (key, value) in merged.iter() {
                let expected = right.get(key).or_else(|| left.get(key)).and_then(Value::as_literal);
                prop_assert_eq!(value.as_literal(), expected);
            }
            for key in left.properties().chain(right.properties()) {
                prop_assert!(merged.contains(key));
            }
        }

        #[test]
        fn merging_with_empty_is_identity(a in spec()) {
            let spec = build(&a);
            let merged = merge(&[&Sx::new(), &spec, &Sx::new()]);

            prop_assert_eq!(merged.len(), spec.len());
            for (key, value) in spec.iter() {
                prop_assert_eq!(
                    merged.get(key).and_then(Value::as_literal),
                    value.as_literal()
                );
            }
        }
    }
}
