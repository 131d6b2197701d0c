//! Private state cells and the capability-module contract.
//!
//! A capability module is a value that owns some private state and exposes
//! a fixed set of operations over it. Nothing outside the module can read or
//! write the state except through those operations.
//!
//! This module provides the two building blocks every module in the crate is
//! made of:
//!
//! - [`Capsule`]: the state cell itself. Its primitives (`get`, `gets`, `modify`,
//!   `state`) mirror the operations of a state monad, but act on a
//!   cell the capsule owns instead of threading the state through a
//!   computation. The primitives are crate-private, so a `Capsule` embedded in
//!   a module is opaque to callers.
//! - [`CapabilityModule`]: the factory side. Every module names itself and
//!   the capabilities it offers, and can be created from nothing.
//!
//! # Examples
//!
//! ```rust
//! use capcell::capsule::{self, CapabilityModule};
//! use capcell::module::Calculator;
//!
//! let mut calculator: Calculator = capsule::create();
//! assert_eq!(calculator.add(10.0), 10.0);
//! assert_eq!(Calculator::CAPABILITIES, &["add", "subtract", "multiply", "divide"]);
//! ```

#![forbid(unsafe_code)]

use std::fmt;

/// An exclusively owned cell of private state.
///
/// `Capsule<S>` holds a value of type `S` and offers no public accessor for
/// it. Modules keep a capsule as a private field and implement each
/// capability in terms of the crate-private primitives below.
///
/// A capsule is neither `Clone` nor `Copy`. A copy would be a second access
/// path to one instance's state.
pub struct Capsule<S> {
    state: S,
}

impl<S> Capsule<S> {
    /// Creates a capsule holding `initial`.
    pub(crate) const fn new(initial: S) -> Self {
        Self { state: initial }
    }

    /// Returns a reference to the current state.
    pub(crate) const fn get(&self) -> &S {
        &self.state
    }

    /// Projects a value out of the current state without mutating it.
    pub(crate) fn gets<A, F>(&self, projection: F) -> A
    where
        F: FnOnce(&S) -> A,
    {
        projection(&self.state)
    }

    /// Applies `function` to the state in place and returns a reference to
    /// the new state.
    pub(crate) fn modify<F>(&mut self, function: F) -> &S
    where
        F: FnOnce(&mut S),
    {
        function(&mut self.state);
        &self.state
    }

    /// Runs a state transition that may also produce a result.
    ///
    /// This is the general form the other primitives are special cases of:
    /// the transition sees the state mutably and decides what to return.
    pub(crate) fn state<A, F>(&mut self, transition: F) -> A
    where
        F: FnOnce(&mut S) -> A,
    {
        transition(&mut self.state)
    }
}

impl<S: Default> Default for Capsule<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S> fmt::Debug for Capsule<S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Capsule").finish_non_exhaustive()
    }
}

/// A module whose private state is reachable only through a fixed set of
/// named capabilities.
///
/// Implementors are created from nothing, so every call to
/// [`CapabilityModule::create`] yields a fresh, independent instance.
pub trait CapabilityModule: Sized {
    /// Human-readable module name, used in logs and the walkthrough.
    const NAME: &'static str;

    /// Names of the capabilities this module exposes, in declaration order.
    const CAPABILITIES: &'static [&'static str];

    /// Creates a new instance with fresh private state.
    fn create() -> Self;

    /// Renders the module's public face: its name and capability names.
    ///
    /// This is what a caller can learn about a module without invoking any
    /// capability. It never includes the state.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use capcell::capsule::CapabilityModule;
    /// use capcell::module::Account;
    ///
    /// assert_eq!(
    ///     Account::describe(),
    ///     "Account { deposit, withdraw, check_balance }"
    /// );
    /// ```
    #[must_use]
    fn describe() -> String {
        format!("{} {{ {} }}", Self::NAME, Self::CAPABILITIES.join(", "))
    }
}

/// Creates a fresh instance of any capability module.
///
/// Equivalent to `M::create()`; useful where the module type is inferred.
pub fn create<M: CapabilityModule>() -> M {
    let module = M::create();
    tracing::trace!(module = M::NAME, "created capability module");
    module
}

static_assertions::assert_not_impl_any!(Capsule<i32>: Clone, Copy);
static_assertions::assert_impl_all!(Capsule<Vec<String>>: Send, Sync);
