//! Custom property maps.
//!
//! A map turns one synthetic property into a set of real CSS properties,
//! for example `paddingX` into `paddingLeft` and `paddingRight`. Maps run
//! after merging and before selector compilation, so a map receives the
//! property's whole value, variants included, and can hand that value on
//! to the properties it produces.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use log::debug;

use crate::error::{BoxError, CompileError};
use crate::style::{Sx, Value};
use crate::theme::Theme;

/// Expands one property value into a partial style specification.
pub type MapFn = Arc<dyn Fn(&Value, &Theme) -> Result<Sx, BoxError> + Send + Sync>;

/// A table of custom property maps, applied in declaration order.
///
/// # Example
///
/// ```rust
/// use propsx::{Maps, Sx, Theme, Value};
///
/// let maps = Maps::new().add("paddingX", |value: &Value, _: &Theme| {
///     Sx::new()
///         .add("paddingLeft", value.clone())
///         .add("paddingRight", value.clone())
/// });
///
/// let sx = maps
///     .expand(Sx::new().add("paddingX", 8), &Theme::new())
///     .unwrap();
/// let props: Vec<&str> = sx.properties().collect();
/// assert_eq!(props, vec!["paddingLeft", "paddingRight"]);
/// ```
#[derive(Clone, Default)]
pub struct Maps {
    maps: IndexMap<String, MapFn>,
}

impl Maps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a map for `property`, returning an updated table.
    pub fn add<F>(self, property: &str, map: F) -> Self
    where
        F: Fn(&Value, &Theme) -> Sx + Send + Sync + 'static,
    {
        self.add_fn(
            property,
            Arc::new(move |value: &Value, theme: &Theme| -> Result<Sx, BoxError> {
                Ok(map(value, theme))
            }),
        )
    }

    /// Registers a map whose expansion may fail.
    ///
    /// A failure aborts the compile with [`CompileError::Map`].
    pub fn try_add<F, E>(self, property: &str, map: F) -> Self
    where
        F: Fn(&Value, &Theme) -> Result<Sx, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        self.add_fn(
            property,
            Arc::new(move |value: &Value, theme: &Theme| -> Result<Sx, BoxError> {
                map(value, theme).map_err(Into::into)
            }),
        )
    }

    /// Registers an already shared map.
    pub fn add_fn(mut self, property: &str, map: MapFn) -> Self {
        self.maps.insert(property.to_string(), map);
        self
    }

    pub fn get(&self, property: &str) -> Option<&MapFn> {
        self.maps.get(property)
    }

    pub fn has(&self, property: &str) -> bool {
        self.maps.contains_key(property)
    }

    /// Returns the mapped property names in declaration order.
    pub fn properties(&self) -> impl Iterator<Item = &str> {
        self.maps.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    /// Expands every mapped property present in `sx`.
    ///
    /// Maps are applied in declaration order. Each one removes its property
    /// and lays its output over the specification, so when two maps produce
    /// the same property the later map wins. Properties without a map are
    /// left untouched.
    pub fn expand(&self, mut sx: Sx, theme: &Theme) -> Result<Sx, CompileError> {
        for (property, map) in &self.maps {
            let Some(value) = sx.remove(property) else {
                continue;
            };
            let expanded = map(&value, theme).map_err(|source| CompileError::Map {
                property: property.clone(),
                source,
            })?;
            debug!(
                "expanded '{}' into {} properties",
                property,
                expanded.len()
            );
            sx.extend(expanded);
        }
        Ok(sx)
    }
}

impl fmt::Debug for Maps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.maps.keys()).finish()
    }
}
