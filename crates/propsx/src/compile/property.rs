//! Per-property compilation.

use log::debug;

use super::css::Css;
use crate::error::CompileError;
use crate::selector::{Control, Selectors};
use crate::style::{Value, Variants};
use crate::theme::Theme;

/// Everything a property needs to resolve its value and selectors.
pub(crate) struct Scope<'a> {
    pub theme: &'a Theme,
    pub selectors: &'a Selectors,
    pub control: Option<&'a dyn Control>,
}

/// The selector for the element itself.
const SELF_SELECTOR: &str = "&";

/// Compiles one property value into `out`.
///
/// Literals and theme values are written at `property`. Variants recurse:
/// `default` into the same level, any other selector into the level keyed
/// by its resolved selector string. A selector resolving to `&` targets the
/// element itself: it stays on the same level and is applied after the
/// other entries, whatever its declaration order. A selector resolving to
/// `None` is skipped along with everything beneath it, theme values
/// included.
pub(crate) fn compile_property(
    scope: &Scope<'_>,
    property: &str,
    value: &Value,
    out: &mut Css,
) -> Result<(), CompileError> {
    match value {
        Value::Literal(lit) => out.set(property, lit.clone()),
        Value::Theme(resolve) => {
            let lit = resolve(scope.theme).map_err(|source| CompileError::Theme {
                property: property.to_string(),
                source,
            })?;
            out.set(property, lit);
        }
        Value::Variants(variants) => compile_variants(scope, property, variants, out)?,
        Value::Empty => {}
    }
    Ok(())
}

fn compile_variants(
    scope: &Scope<'_>,
    property: &str,
    variants: &Variants,
    out: &mut Css,
) -> Result<(), CompileError> {
    let mut pinned = Vec::new();
    for (name, value) in variants.iter() {
        if name == Variants::DEFAULT {
            compile_property(scope, property, value, out)?;
            continue;
        }
        match scope.selectors.resolve(name, scope.theme, scope.control) {
            Some(selector) if selector == SELF_SELECTOR => pinned.push(value),
            Some(selector) => out.with_level(&selector, |level| {
                compile_property(scope, property, value, level)
            })?,
            None => debug!("skipped '{}' variant of '{}'", name, property),
        }
    }
    // Self-targeting branches go last so they override `default`.
    for value in pinned {
        compile_property(scope, property, value, out)?;
    }
    Ok(())
}
