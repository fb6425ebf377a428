//! Style specifications: the input side of the compiler.
//!
//! This module provides:
//!
//! - [`Sx`]: A mapping from property names to values
//! - [`Value`], [`Literal`], [`Variants`]: What a property can be set to
//! - [`SxInput`], [`SxEntry`]: Sparse, conditional lists of specifications
//! - [`normalize`] and [`merge`]: Flattening and last-wins merging
//!
//! Specifications are plain data. They are cloned or merged into new
//! specifications, never mutated by the compiler.

mod input;
mod json;
mod sheet;
mod value;

pub use input::{normalize, SxEntry, SxInput};
pub use sheet::{merge, Sx};
pub use value::{Literal, ThemeFn, Value, Variants};
