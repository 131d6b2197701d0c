//! Error types returned by capability modules.
//!
//! Only two capabilities in the crate can fail, and each failure is an
//! ordinary returned value: the module's state is left exactly as it was.

use thiserror::Error;

/// Failure of [`Order::remove_ingredient`](crate::module::Order::remove_ingredient).
///
/// # Examples
///
/// ```
/// use capcell::module::IngredientError;
///
/// let error = IngredientError::not_found("Pickles");
/// assert_eq!(error.to_string(), "Sorry, that ingredient does not exist.");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IngredientError {
    /// The ingredient is not part of the order.
    #[error("Sorry, that ingredient does not exist.")]
    NotFound {
        /// The ingredient that was asked for.
        ingredient: String,
    },
}

impl IngredientError {
    /// Creates a [`IngredientError::NotFound`] for `ingredient`.
    #[must_use]
    pub fn not_found(ingredient: &str) -> Self {
        Self::NotFound {
            ingredient: ingredient.to_string(),
        }
    }

    /// Returns the ingredient this error refers to.
    #[must_use]
    pub fn ingredient(&self) -> &str {
        match self {
            Self::NotFound { ingredient } => ingredient,
        }
    }
}

/// Failure of [`Calculator::divide`](crate::module::Calculator::divide).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CalculatorError {
    /// The divisor was zero (positive or negative).
    #[error("cannot divide by zero")]
    DivisionByZero,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn not_found_keeps_ingredient() {
        let error = IngredientError::not_found("Onion");
        assert_eq!(error.ingredient(), "Onion");
        assert_eq!(
            error,
            IngredientError::NotFound {
                ingredient: "Onion".to_string()
            }
        );
    }

    #[rstest]
    #[case(IngredientError::not_found("x").to_string(), "Sorry, that ingredient does not exist.")]
    #[case(CalculatorError::DivisionByZero.to_string(), "cannot divide by zero")]
    fn errors_display_messages(#[case] rendered: String, #[case] expected: &str) {
        assert_eq!(rendered, expected);
    }
}
