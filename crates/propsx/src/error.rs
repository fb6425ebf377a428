//! Compile errors.

/// Error type returned by user-supplied theme and map functions.
///
/// Anything convertible into a boxed error works, including plain
/// `String` and `&str` messages.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Error returned when compiling a style specification fails.
///
/// The compiler itself never fails on malformed input: unknown selectors
/// are used verbatim and unrecognised values are ignored. Errors only
/// come from caller-supplied functions, and carry the property that was
/// being compiled when they were raised.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    /// A theme function failed while resolving a property value
    #[error("theme value for property '{property}' failed: {source}")]
    Theme {
        property: String,
        #[source]
        source: BoxError,
    },
    /// A property map failed while expanding a custom property
    #[error("map for property '{property}' failed: {source}")]
    Map {
        property: String,
        #[source]
        source: BoxError,
    },
}

impl CompileError {
    /// Returns the property name that was being compiled.
    pub fn property(&self) -> &str {
        match self {
            CompileError::Theme { property, .. } | CompileError::Map { property, .. } => property,
        }
    }
}
