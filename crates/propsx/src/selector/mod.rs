//! Selector resolution.
//!
//! This module provides:
//!
//! - [`Selectors`]: A registry of named selector resolvers
//! - [`Control`]: The capability interface of a control boundary
//! - [`ClassControl`]: A control boundary identified by a CSS class
//! - [`state_selector`]: The resolver behind the built-in state names
//!
//! Built-in names are `active`, `checked`, `disabled`, `focus`,
//! `focusWithin` and `hover`. Names that aren't registered are used as
//! raw selectors, so media queries and hand-written selectors need no
//! registration.

pub mod builtin;
mod control;
mod registry;

pub use builtin::state_selector;
pub use control::{ClassControl, Control, State};
pub use registry::{
    default_selectors, reset_default_selectors, set_default_selectors, ResolveFn, Selectors,
};
