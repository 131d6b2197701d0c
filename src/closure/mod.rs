//! Single-capability factories that return closures.
//!
//! These are the smallest form of a capability module: the factory creates
//! some state, moves it into a closure and returns the closure. The closure
//! is the only thing that can reach the state, and every call to the factory
//! produces a new, independent state.
//!
//! - [`counter`]: returns a closure that increments and reports a count
//! - [`create_order`]: returns a closure that appends an ingredient and
//!   reports the order so far
//!
//! # Example
//!
//! ```rust
//! use capcell::closure::counter;
//!
//! let mut counter_one = counter();
//! let mut counter_two = counter();
//!
//! counter_one();
//! counter_one();
//! assert_eq!(counter_one(), 3);
//! assert_eq!(counter_two(), 1);
//! ```

mod counter;
mod order;

pub use counter::{COUNTER_DESCRIPTION, counter};
pub use order::create_order;
