//! Named selector registry.
//!
//! # Resolution
//!
//! Selector names found in a variants map are resolved with these rules:
//!
//! 1. `default` never reaches the registry; the compiler writes it in place
//! 2. A registered name is resolved by calling its resolver
//! 3. Any other name is a raw CSS selector or media query, used verbatim
//!
//! A resolver returning `None` asks the compiler to drop the branch.
//!
//! # Default registry
//!
//! Compiles that don't pass a registry use [`default_selectors`], which is
//! built by a process-wide factory. The factory starts out as
//! [`Selectors::builtin`] and can be replaced with
//! [`set_default_selectors`].

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use indexmap::IndexMap;
use log::debug;
use once_cell::sync::Lazy;

use super::builtin::register_builtin;
use super::control::Control;
use crate::theme::Theme;

/// Resolves a selector name to a concrete selector, or `None` to skip it.
pub type ResolveFn = Arc<dyn Fn(&Theme, Option<&dyn Control>) -> Option<String> + Send + Sync>;

/// A registry of named selectors.
///
/// # Example
///
/// ```rust
/// use propsx::{Selectors, Theme};
///
/// let selectors = Selectors::builtin()
///     .add("mobile", |theme: &Theme, _| {
///         theme.get_str("mobile").map(|q| format!("@media {}", q))
///     })
///     .alias("pressed", "active");
///
/// let theme = Theme::new().add("mobile", "(max-width: 600px)");
/// assert_eq!(
///     selectors.resolve("mobile", &theme, None).as_deref(),
///     Some("@media (max-width: 600px)")
/// );
/// assert_eq!(selectors.resolve("pressed", &theme, None).as_deref(), Some("&:active"));
/// assert_eq!(selectors.resolve("& > svg", &theme, None).as_deref(), Some("& > svg"));
/// ```
#[derive(Clone, Default)]
pub struct Selectors {
    resolvers: IndexMap<String, ResolveFn>,
}

impl Selectors {
    /// Creates an empty registry. Every name resolves verbatim.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in state selectors.
    pub fn builtin() -> Self {
        register_builtin(Self::new())
    }

    /// Registers a resolver, returning an updated registry for chaining.
    pub fn add<F>(self, name: &str, resolve: F) -> Self
    where
        F: Fn(&Theme, Option<&dyn Control>) -> Option<String> + Send + Sync + 'static,
    {
        self.add_fn(name, Arc::new(resolve))
    }

    /// Registers an already shared resolver.
    pub fn add_fn(mut self, name: &str, resolve: ResolveFn) -> Self {
        self.resolvers.insert(name.to_string(), resolve);
        self
    }

    /// Registers `name` with the same resolver as `target`.
    ///
    /// Does nothing if `target` isn't registered.
    pub fn alias(self, name: &str, target: &str) -> Self {
        match self.resolvers.get(target).cloned() {
            Some(resolve) => self.add_fn(name, resolve),
            None => self,
        }
    }

    pub fn get(&self, name: &str) -> Option<&ResolveFn> {
        self.resolvers.get(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.resolvers.contains_key(name)
    }

    /// Returns the registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.resolvers.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }

    /// Resolves a selector name.
    ///
    /// Registered names are handed to their resolver; unknown names are
    /// returned unchanged.
    pub fn resolve(
        &self,
        name: &str,
        theme: &Theme,
        control: Option<&dyn Control>,
    ) -> Option<String> {
        match self.resolvers.get(name) {
            Some(resolve) => resolve(theme, control),
            None => Some(name.to_string()),
        }
    }
}

impl fmt::Debug for Selectors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.resolvers.keys()).finish()
    }
}

type SelectorsFactory = fn() -> Selectors;

static DEFAULT_SELECTORS: Lazy<Mutex<SelectorsFactory>> = Lazy::new(|| Mutex::new(Selectors::builtin));

/// Replaces the factory that builds the default registry.
///
/// Affects every later compile that doesn't pass its own registry.
pub fn set_default_selectors(factory: SelectorsFactory) {
    let mut guard = DEFAULT_SELECTORS
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = factory;
    debug!("default selector registry factory replaced");
}

/// Restores the built-in default registry.
pub fn reset_default_selectors() {
    set_default_selectors(Selectors::builtin);
}

/// Builds the registry used when a compile doesn't supply one.
pub fn default_selectors() -> Selectors {
    let factory = *DEFAULT_SELECTORS
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    factory()
}
