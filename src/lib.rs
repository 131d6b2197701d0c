//! # capcell
//!
//! Stateful capability modules: values that own private state and expose a
//! fixed set of operations over it.
//!
//! ## Overview
//!
//! A factory creates fresh private state and hands back only the operations
//! (capabilities) that act on it. Every call to the factory produces an
//! independent instance; no instance can observe another's state, and no
//! caller can reach the state except through the capabilities.
//!
//! - **Capsule**: the private state cell and the [`CapabilityModule`] contract
//! - **Closures**: single-capability factories returning closures (counter,
//!   order builder)
//! - **Modules**: multi-capability structs (order, calculator, account)
//! - **Walkthrough**: a replayable transcript of every example
//!
//! ## Feature Flags
//!
//! - `closure`: closure factories
//! - `module`: multi-capability modules
//! - `walkthrough`: the walkthrough transcript, its configuration and the
//!   `capcell-walkthrough` binary
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use capcell::prelude::*;
//!
//! let mut account = Account::create();
//! account.deposit(100.0);
//! account.withdraw(30.0);
//! assert_eq!(account.check_balance().to_string(), "Account has a balance of 70");
//!
//! let mut add_one = counter();
//! add_one();
//! assert_eq!(add_one(), 2);
//! ```
//!
//! [`CapabilityModule`]: capsule::CapabilityModule

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use capcell::prelude::*;
/// ```
pub mod prelude {
    pub use crate::capsule::*;

    #[cfg(feature = "closure")]
    pub use crate::closure::*;

    #[cfg(feature = "module")]
    pub use crate::module::*;
}

pub mod capsule;

#[cfg(feature = "closure")]
pub mod closure;

#[cfg(feature = "module")]
pub mod module;

#[cfg(feature = "walkthrough")]
pub mod walkthrough;
