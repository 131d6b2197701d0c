//! Capability modules exposing several operations over one private state.
//!
//! Each type here is the "module pattern": one factory call
//! ([`CapabilityModule::create`](crate::capsule::CapabilityModule::create))
//! produces an instance whose state is shared by all of its methods and by
//! nothing else.
//!
//! - [`Order`]: an ingredient list with add, remove and read
//! - [`Calculator`]: a running total with the four arithmetic operations
//! - [`Account`]: a balance with deposit, withdraw and check-balance
//!
//! # Example
//!
//! ```rust
//! use capcell::capsule::CapabilityModule;
//! use capcell::module::{Account, Calculator};
//!
//! let mut calculator = Calculator::create();
//! let mut account = Account::create();
//!
//! account.deposit(calculator.add(40.0));
//! assert_eq!(account.check_balance().amount(), 40.0);
//! ```

mod account;
mod calculator;
mod error;
mod order;

pub use account::{Account, BalanceStatement};
pub use calculator::Calculator;
pub use error::{CalculatorError, IngredientError};
pub use order::Order;

static_assertions::assert_impl_all!(Order: Send, Sync);
static_assertions::assert_impl_all!(Calculator: Send, Sync);
static_assertions::assert_impl_all!(Account: Send, Sync);
static_assertions::assert_not_impl_any!(Order: Clone, Default);
static_assertions::assert_not_impl_any!(Calculator: Clone, Copy);
static_assertions::assert_not_impl_any!(Account: Clone, Copy);
