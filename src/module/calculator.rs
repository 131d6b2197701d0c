//! Running-total calculator.

use std::fmt;

use crate::capsule::{CapabilityModule, Capsule};
use crate::module::CalculatorError;

/// A calculator that folds every operation into a private accumulator.
///
/// The accumulator starts at `0`. Each capability applies its operand to the
/// accumulator and returns the new value, so a sequence of calls folds left
/// to right.
///
/// # Examples
///
/// ```rust
/// use capcell::capsule::CapabilityModule;
/// use capcell::module::Calculator;
///
/// let mut ti84 = Calculator::create();
/// assert_eq!(ti84.add(10.0), 10.0);
/// assert_eq!(ti84.subtract(5.0), 5.0);
/// assert_eq!(ti84.multiply(2.0), 10.0);
/// assert_eq!(ti84.divide(2.0), Ok(5.0));
/// ```
pub struct Calculator {
    value: Capsule<f64>,
}

impl Calculator {
    /// Adds `operand` to the accumulator.
    pub fn add(&mut self, operand: f64) -> f64 {
        self.apply("add", operand, |value| value + operand)
    }

    /// Subtracts `operand` from the accumulator.
    pub fn subtract(&mut self, operand: f64) -> f64 {
        self.apply("subtract", operand, |value| value - operand)
    }

    /// Multiplies the accumulator by `operand`.
    pub fn multiply(&mut self, operand: f64) -> f64 {
        self.apply("multiply", operand, |value| value * operand)
    }

    /// Divides the accumulator by `divisor`.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::DivisionByZero`] if `divisor` is zero; the
    /// accumulator keeps its previous value.
    pub fn divide(&mut self, divisor: f64) -> Result<f64, CalculatorError> {
        if divisor == 0.0 {
            tracing::debug!(module = Self::NAME, "rejected division by zero");
            return Err(CalculatorError::DivisionByZero);
        }
        Ok(self.apply("divide", divisor, |value| value / divisor))
    }

    fn apply<F>(&mut self, capability: &'static str, operand: f64, operation: F) -> f64
    where
        F: FnOnce(f64) -> f64,
    {
        let result = *self.value.modify(|value| *value = operation(*value));
        tracing::trace!(module = Self::NAME, capability, operand, result);
        result
    }
}

impl CapabilityModule for Calculator {
    const NAME: &'static str = "Calculator";
    const CAPABILITIES: &'static [&'static str] = &["add", "subtract", "multiply", "divide"];

    fn create() -> Self {
        Self {
            value: Capsule::new(0.0),
        }
    }
}

impl fmt::Debug for Calculator {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct(Self::NAME).finish_non_exhaustive()
    }
}
