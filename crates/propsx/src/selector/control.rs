//! Control boundaries.
//!
//! A control boundary is an ancestor element that owns the pseudo-states
//! of its descendants: when a button wraps an icon, the icon's hover
//! style should apply while the *button* is hovered. The boundary either
//! pins a state explicitly (a controlled `disabled` flag, say) or tells
//! the compiler how to select "descendants of me while I am in this
//! state".

use std::sync::atomic::{AtomicUsize, Ordering};

/// The pseudo-states a control boundary can override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Active,
    Checked,
    Disabled,
    Focus,
    Hover,
}

impl State {
    /// Returns the CSS pseudo-class suffix, e.g. `":hover"`.
    pub fn pseudo(self) -> &'static str {
        match self {
            State::Active => ":active",
            State::Checked => ":checked",
            State::Disabled => ":disabled",
            State::Focus => ":focus",
            State::Hover => ":hover",
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            State::Active => "active",
            State::Checked => "checked",
            State::Disabled => "disabled",
            State::Focus => "focus",
            State::Hover => "hover",
        }
    }

    fn index(self) -> usize {
        match self {
            State::Active => 0,
            State::Checked => 1,
            State::Disabled => 2,
            State::Focus => 3,
            State::Hover => 4,
        }
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The capability a control boundary offers to selector resolvers.
///
/// Implementations decide how the boundary is identified in CSS. The
/// compiler only consumes this interface and never builds a boundary
/// itself.
pub trait Control {
    /// Returns the explicit override for `state`, if the boundary has one.
    ///
    /// `Some(true)` means the boundary is known to be in that state,
    /// `Some(false)` that it is known not to be.
    fn state(&self, state: State) -> Option<bool>;

    /// Returns a selector matching descendants of this boundary while the
    /// boundary matches `suffix` (for example `":hover"`).
    fn select(&self, suffix: &str) -> String;
}

static NEXT_CONTROL_ID: AtomicUsize = AtomicUsize::new(0);

/// A control boundary identified by a CSS class.
///
/// # Example
///
/// ```rust
/// use propsx::{ClassControl, Control, State};
///
/// let control = ClassControl::new("button-root").disabled(false);
///
/// assert_eq!(control.select(":hover"), ".button-root:hover &");
/// assert_eq!(control.state(State::Disabled), Some(false));
/// assert_eq!(control.state(State::Hover), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassControl {
    class: String,
    overrides: [Option<bool>; 5],
}

impl ClassControl {
    /// Creates a boundary for the given class name, without overrides.
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            overrides: [None; 5],
        }
    }

    /// Creates a boundary with a fresh, process-unique class name.
    pub fn generate() -> Self {
        let id = NEXT_CONTROL_ID.fetch_add(1, Ordering::Relaxed);
        Self::new(format!("sx-control-{}", id))
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    /// Pins `state` to an explicit value.
    pub fn with_state(mut self, state: State, value: bool) -> Self {
        self.overrides[state.index()] = Some(value);
        self
    }

    pub fn active(self, value: bool) -> Self {
        self.with_state(State::Active, value)
    }

    pub fn checked(self, value: bool) -> Self {
        self.with_state(State::Checked, value)
    }

    pub fn disabled(self, value: bool) -> Self {
        self.with_state(State::Disabled, value)
    }

    pub fn focus(self, value: bool) -> Self {
        self.with_state(State::Focus, value)
    }

    pub fn hover(self, value: bool) -> Self {
        self.with_state(State::Hover, value)
    }
}

impl Control for ClassControl {
    fn state(&self, state: State) -> Option<bool> {
        self.overrides[state.index()]
    }

    fn select(&self, suffix: &str) -> String {
        format!(".{}{} &", self.class, suffix)
    }
}
