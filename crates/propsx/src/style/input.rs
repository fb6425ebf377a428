//! Sparse style inputs and their normalization.

use super::sheet::Sx;

/// The `sx` argument: one specification or an ordered list of them.
///
/// Lists may contain skipped entries (the equivalent of `null` or `false`
/// in a conditional style list) and at most one level of nested lists.
///
/// # Example
///
/// ```rust
/// use propsx::{normalize, Sx, SxEntry, SxInput};
///
/// let is_active = false;
/// let input = SxInput::from(vec![
///     SxEntry::from(Sx::new().add("color", "black")),
///     SxEntry::from(is_active.then(|| Sx::new().add("color", "red"))),
///     SxEntry::from(vec![Some(Sx::new().add("margin", 0)), None]),
/// ]);
/// assert_eq!(normalize(&input).len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub enum SxInput {
    #[default]
    Empty,
    Single(Sx),
    List(Vec<SxEntry>),
}

/// One entry of an [`SxInput::List`].
#[derive(Debug, Clone, Default)]
pub enum SxEntry {
    /// Contributes nothing.
    #[default]
    Skip,
    Style(Sx),
    /// A nested list, flattened into its parent.
    List(Vec<Option<Sx>>),
}

/// Flattens an input into the dense, ordered sequence of specifications.
///
/// Skipped entries are dropped and one level of nesting is flattened in
/// place. Relative order is preserved.
pub fn normalize(input: &SxInput) -> Vec<&Sx> {
    match input {
        SxInput::Empty => Vec::new(),
        SxInput::Single(sx) => vec![sx],
        SxInput::List(entries) => {
            let mut specs = Vec::with_capacity(entries.len());
            for entry in entries {
                match entry {
                    SxEntry::Skip => {}
                    SxEntry::Style(sx) => specs.push(sx),
                    SxEntry::List(nested) => specs.extend(nested.iter().flatten()),
                }
            }
            specs
        }
    }
}

impl From<Sx> for SxInput {
    fn from(sx: Sx) -> Self {
        SxInput::Single(sx)
    }
}

impl From<Option<Sx>> for SxInput {
    fn from(sx: Option<Sx>) -> Self {
        sx.map(SxInput::Single).unwrap_or_default()
    }
}

impl From<Vec<Sx>> for SxInput {
    fn from(specs: Vec<Sx>) -> Self {
        SxInput::List(specs.into_iter().map(SxEntry::Style).collect())
    }
}

impl From<Vec<Option<Sx>>> for SxInput {
    fn from(specs: Vec<Option<Sx>>) -> Self {
        SxInput::List(specs.into_iter().map(SxEntry::from).collect())
    }
}

impl From<Vec<SxEntry>> for SxInput {
    fn from(entries: Vec<SxEntry>) -> Self {
        SxInput::List(entries)
    }
}

impl From<Sx> for SxEntry {
    fn from(sx: Sx) -> Self {
        SxEntry::Style(sx)
    }
}

impl From<Option<Sx>> for SxEntry {
    fn from(sx: Option<Sx>) -> Self {
        sx.map(SxEntry::Style).unwrap_or_default()
    }
}

impl From<Vec<Option<Sx>>> for SxEntry {
    fn from(specs: Vec<Option<Sx>>) -> Self {
        SxEntry::List(specs)
    }
}

impl From<Vec<Sx>> for SxEntry {
    fn from(specs: Vec<Sx>) -> Self {
        SxEntry::List(specs.into_iter().map(Some).collect())
    }
}
