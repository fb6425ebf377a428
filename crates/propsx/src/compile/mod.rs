//! Compilation of style specifications into nested style objects.
//!
//! This module provides:
//!
//! - [`compile`] and [`SxOptions`]: One-shot compilation
//! - [`Compiler`]: A reusable, pre-configured compiler
//! - [`Css`], [`CssValue`]: The compiled output

mod compiler;
mod css;
mod property;

pub use compiler::{compile, Compiler, SxOptions};
pub use css::{Css, CssValue};
