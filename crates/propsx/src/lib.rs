//! # propsx - property-centric style compilation
//!
//! `propsx` turns per-property style descriptions into the nested style
//! objects CSS-in-JS renderers consume. Instead of writing one block per
//! selector, you describe each property once, with a value per state:
//!
//! ```rust
//! use propsx::{compile, Sx, SxOptions, Variants};
//! use serde_json::json;
//!
//! let sx = Sx::new()
//!     .add("color", Variants::new().base("black").on("hover", "red"))
//!     .add("padding", 4);
//!
//! let css = compile(&SxOptions::new(sx)).unwrap();
//! assert_eq!(
//!     css.to_json(),
//!     json!({ "color": "black", "&:hover": { "color": "red" }, "padding": 4 })
//! );
//! ```
//!
//! ## Concepts
//!
//! - **Specifications** ([`Sx`]) map property names to [`Value`]s: literals,
//!   theme functions, or [`Variants`] keyed by selector name. Lists of
//!   specifications ([`SxInput`]) are merged, last one winning per property.
//! - **Selectors** ([`Selectors`]) resolve names like `hover` to concrete
//!   selectors. Unknown names, such as media queries, are used verbatim.
//! - **Control boundaries** ([`Control`]) let an ancestor own the
//!   pseudo-states of its descendants: `hover` then means "while the
//!   boundary is hovered", or is pinned on or off explicitly.
//! - **Maps** ([`Maps`]) expand synthetic properties into real ones before
//!   selectors are compiled.
//! - **Themes** ([`Theme`]) feed theme functions, maps and resolvers. A
//!   per-call override is laid over the ambient theme.
//!
//! Compilation is pure: the same inputs always produce an equal [`Css`].
//! Errors only come from caller-supplied functions and abort the whole
//! compile (see [`CompileError`]).

mod compile;
mod error;
mod map;
pub mod selector;
pub mod style;
pub mod theme;

pub use compile::{compile, Compiler, Css, CssValue, SxOptions};
pub use error::{BoxError, CompileError};
pub use map::{MapFn, Maps};
pub use selector::{
    default_selectors, reset_default_selectors, set_default_selectors, state_selector,
    ClassControl, Control, ResolveFn, Selectors, State,
};
pub use style::{merge, normalize, Literal, Sx, SxEntry, SxInput, ThemeFn, Value, Variants};
pub use theme::Theme;
