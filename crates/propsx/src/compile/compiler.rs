//! The compile pipeline and a reusable compiler.

use log::trace;

use super::css::Css;
use super::property::{compile_property, Scope};
use crate::error::CompileError;
use crate::map::Maps;
use crate::selector::{default_selectors, Control, Selectors};
use crate::style::{merge, normalize, SxInput};
use crate::theme::Theme;

/// Inputs of a single compile.
///
/// Only `sx` is required. Without `selectors` the default registry is
/// used; without `maps` no property is expanded.
///
/// # Example
///
/// ```rust
/// use propsx::{compile, ClassControl, SxOptions, Sx, Variants};
/// use serde_json::json;
///
/// let control = ClassControl::new("card");
/// let sx = Sx::new().add("color", Variants::new().base("black").on("hover", "red"));
/// let css = compile(&SxOptions::new(sx).control(&control)).unwrap();
///
/// assert_eq!(
///     css.to_json(),
///     json!({ "color": "black", ".card:hover &": { "color": "red" } })
/// );
/// ```
#[derive(Default)]
pub struct SxOptions<'a> {
    pub sx: SxInput,
    pub selectors: Option<&'a Selectors>,
    pub maps: Option<&'a Maps>,
    /// The ambient theme.
    pub theme: Option<&'a Theme>,
    /// Laid over `theme` for this compile only.
    pub theme_override: Option<&'a Theme>,
    pub control: Option<&'a dyn Control>,
}

impl<'a> SxOptions<'a> {
    pub fn new(sx: impl Into<SxInput>) -> Self {
        Self {
            sx: sx.into(),
            ..Self::default()
        }
    }

    pub fn selectors(mut self, selectors: &'a Selectors) -> Self {
        self.selectors = Some(selectors);
        self
    }

    pub fn maps(mut self, maps: &'a Maps) -> Self {
        self.maps = Some(maps);
        self
    }

    pub fn theme(mut self, theme: &'a Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn theme_override(mut self, theme: &'a Theme) -> Self {
        self.theme_override = Some(theme);
        self
    }

    pub fn control(mut self, control: &'a dyn Control) -> Self {
        self.control = Some(control);
        self
    }
}

/// Compiles a style specification into a nested style object.
///
/// The pipeline is: normalize the input list, merge it (last wins per
/// property), build the effective theme, expand mapped properties, then
/// compile each property in first-seen order into a fresh [`Css`].
///
/// The same options always produce an equal output. If a theme function
/// or map fails, the whole compile fails and nothing is returned.
///
/// # Errors
///
/// Returns [`CompileError`] if a caller-supplied theme function or map fails.
pub fn compile(options: &SxOptions<'_>) -> Result<Css, CompileError> {
    let fallback;
    let selectors = match options.selectors {
        Some(selectors) => selectors,
        None => {
            fallback = default_selectors();
            &fallback
        }
    };
    let theme = effective_theme(options.theme, options.theme_override);

    let merged = merge(&normalize(&options.sx));
    let sx = match options.maps {
        Some(maps) => maps.expand(merged, &theme)?,
        None => merged,
    };

    let scope = Scope {
        theme: &theme,
        selectors,
        control: options.control,
    };
    let mut css = Css::new();
    for (property, value) in sx.iter() {
        trace!("compiling '{}'", property);
        compile_property(&scope, property, value, &mut css)?;
    }
    Ok(css)
}

fn effective_theme(theme: Option<&Theme>, overrides: Option<&Theme>) -> Theme {
    match (theme, overrides) {
        (Some(theme), Some(overrides)) => theme.merge(overrides),
        (Some(theme), None) | (None, Some(theme)) => theme.clone(),
        (None, None) => Theme::new(),
    }
}

/// A compiler pre-configured with selectors, maps and a base theme.
///
/// Use this when the same configuration compiles many specifications,
/// e.g. one per component in a design system.
///
/// # Example
///
/// ```rust
/// use propsx::{Compiler, Maps, Sx, Theme, Value, Variants};
/// use serde_json::json;
///
/// let compiler = Compiler::new()
///     .with_theme(Theme::new().add("primary", "#05f"))
///     .with_maps(Maps::new().add("bg", |value: &Value, _: &Theme| {
///         Sx::new().add("backgroundColor", value.clone())
///     }));
///
/// let sx = Sx::new().add(
///     "bg",
///     Variants::new()
///         .base(Value::theme(|t: &Theme| t.get_str("primary").unwrap_or("blue").to_string()))
///         .on("disabled", "gray"),
/// );
/// let css = compiler.compile(sx).unwrap();
///
/// assert_eq!(
///     css.to_json(),
///     json!({ "backgroundColor": "#05f", "&:disabled": { "backgroundColor": "gray" } })
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    selectors: Option<Selectors>,
    maps: Maps,
    theme: Theme,
}

impl Compiler {
    /// Creates a compiler using the default selectors, no maps and an empty theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `selectors` instead of the default registry.
    pub fn with_selectors(mut self, selectors: Selectors) -> Self {
        self.selectors = Some(selectors);
        self
    }

    pub fn with_maps(mut self, maps: Maps) -> Self {
        self.maps = maps;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Compiles `sx` with the configured theme and no control boundary.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError`] if a theme function or map fails.
    pub fn compile(&self, sx: impl Into<SxInput>) -> Result<Css, CompileError> {
        self.compile_with(sx, None, None)
    }

    /// Compiles `sx` inside a control boundary and/or with a theme override.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError`] if a theme function or map fails.
    pub fn compile_with(
        &self,
        sx: impl Into<SxInput>,
        control: Option<&dyn Control>,
        theme_override: Option<&Theme>,
    ) -> Result<Css, CompileError> {
        compile(&SxOptions {
            sx: sx.into(),
            selectors: self.selectors.as_ref(),
            maps: Some(&self.maps),
            theme: Some(&self.theme),
            theme_override,
            control,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::ClassControl;
    use crate::style::{Sx, Value, Variants};
    use serde_json::json;

    #[test]
    fn test_compile_empty_input() {
        let css = compile(&SxOptions::default()).unwrap();
        assert!(css.is_empty());
    }

    #[test]
    fn test_effective_theme_override_wins() {
        let base = Theme::new().add("a", 1).add("b", 2);
        let over = Theme::new().add("b", 3);

        let theme = effective_theme(Some(&base), Some(&over));
        assert_eq!(theme.get("a"), Some(&json!(1)));
        assert_eq!(theme.get("b"), Some(&json!(3)));

        assert_eq!(effective_theme(None, Some(&over)), over);
        assert_eq!(effective_theme(Some(&base), None), base);
        assert!(effective_theme(None, None).is_empty());
    }

    #[test]
    fn test_compile_uses_explicit_selectors() {
        let selectors = Selectors::new().add("hover", |_: &Theme, _| Some("&.is-hovered".into()));
        let sx = Sx::new().add("color", Variants::new().on("hover", "red"));
        let css = compile(&SxOptions::new(sx).selectors(&selectors)).unwrap();

        assert_eq!(css.to_json(), json!({ "&.is-hovered": { "color": "red" } }));
    }

    #[test]
    fn test_compile_property_order_follows_first_appearance() {
        let a = Sx::new().add("margin", 0).add("color", "black");
        let b = Sx::new().add("padding", 1).add("margin", 2);
        let css = compile(&SxOptions::new(vec![a, b])).unwrap();

        let keys: Vec<&str> = css.keys().collect();
        assert_eq!(keys, vec!["margin", "color", "padding"]);
    }

    #[test]
    fn test_compiler_compile_with_control_and_override() {
        let compiler = Compiler::new().with_theme(Theme::new().add("tone", "black"));
        let sx = Sx::new().add(
            "color",
            Variants::new()
                .base(Value::theme(|t: &Theme| t.get_str("tone").unwrap_or("").to_string()))
                .on("active", "red"),
        );
        let control = ClassControl::new("ctl").active(true);
        let over = Theme::new().add("tone", "white");

        let css = compiler
            .compile_with(sx, Some(&control), Some(&over))
            .unwrap();
        assert_eq!(css.to_json(), json!({ "color": "red" }));

        let css = compiler.compile_with(
            Sx::new().add("color", Variants::new().base(Value::theme(|t: &Theme| {
                t.get_str("tone").unwrap_or("").to_string()
            }))),
            None,
            Some(&over),
        );
        assert_eq!(css.unwrap().to_json(), json!({ "color": "white" }));
    }

    #[test]
    fn test_compiler_is_reusable() {
        let compiler = Compiler::new();
        let sx = Sx::new().add("color", Variants::new().base("black").on("hover", "red"));

        let first = compiler.compile(sx.clone()).unwrap();
        let second = compiler.compile(sx).unwrap();
        assert_eq!(first, second);
    }
}
