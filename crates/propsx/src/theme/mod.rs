//! Theme values consumed by theme functions and selector resolvers.
//!
//! This module provides:
//!
//! - [`Theme`]: An ordered bag of named values with a fluent builder API
//!
//! The compiler never inspects a theme itself. It hands the effective
//! theme (the caller's theme with any per-call override laid on top) to
//! theme functions, maps and selector resolvers.

#[allow(clippy::module_inception)]
mod theme;

pub use theme::Theme;
