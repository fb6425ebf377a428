//! Built-in state selectors.

use std::sync::Arc;

use super::control::{Control, State};
use super::registry::{ResolveFn, Selectors};
use crate::theme::Theme;

pub const ACTIVE: &str = "active";
pub const CHECKED: &str = "checked";
pub const DISABLED: &str = "disabled";
pub const FOCUS: &str = "focus";
pub const FOCUS_WITHIN: &str = "focusWithin";
pub const HOVER: &str = "hover";

/// Builds the resolver for a pseudo-state.
///
/// | Boundary                     | Result                       |
/// |------------------------------|------------------------------|
/// | none                         | `&:<state>`                  |
/// | overrides the state to true  | `&`                          |
/// | overrides the state to false | `None` (branch dropped)      |
/// | no override                  | `boundary.select(":<state>")`|
pub fn state_selector(state: State) -> ResolveFn {
    Arc::new(move |_: &Theme, control: Option<&dyn Control>| match control {
        None => Some(format!("&{}", state.pseudo())),
        Some(control) => match control.state(state) {
            Some(true) => Some("&".to_string()),
            Some(false) => None,
            None => Some(control.select(state.pseudo())),
        },
    })
}

pub(crate) fn register_builtin(selectors: Selectors) -> Selectors {
    selectors
        .add_fn(ACTIVE, state_selector(State::Active))
        .add_fn(CHECKED, state_selector(State::Checked))
        .add_fn(DISABLED, state_selector(State::Disabled))
        .add_fn(FOCUS, state_selector(State::Focus))
        // Same resolver instance; both names emit focus selectors.
        .alias(FOCUS_WITHIN, FOCUS)
        .add_fn(HOVER, state_selector(State::Hover))
}
