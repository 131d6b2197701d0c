//! Sandwich order builder with add, remove and read capabilities.

use std::fmt;

use crate::capsule::{CapabilityModule, Capsule};
use crate::module::IngredientError;

/// An order of ingredients, kept in the order they were added.
///
/// The ingredient list lives in a private [`Capsule`]; the only ways to see
/// or change it are [`add_ingredient`](Self::add_ingredient),
/// [`remove_ingredient`](Self::remove_ingredient) and
/// [`read_order`](Self::read_order).
///
/// # Examples
///
/// ```rust
/// use capcell::capsule::CapabilityModule;
/// use capcell::module::{IngredientError, Order};
///
/// let mut order = Order::create();
/// order.add_ingredient("Ham");
/// order.add_ingredient("Cheese");
/// assert_eq!(order.remove_ingredient("Ham"), Ok(&["Cheese".to_string()][..]));
/// assert_eq!(
///     order.remove_ingredient("Pickles"),
///     Err(IngredientError::not_found("Pickles"))
/// );
/// assert_eq!(order.read_order(), ["Cheese"]);
/// ```
pub struct Order {
    ingredients: Capsule<Vec<String>>,
}

impl Order {
    /// Appends `ingredient` and returns the whole order.
    ///
    /// Duplicates are kept; nothing is sorted.
    pub fn add_ingredient(&mut self, ingredient: impl Into<String>) -> &[String] {
        let ingredient = ingredient.into();
        tracing::trace!(module = Self::NAME, %ingredient, "add_ingredient");
        self.ingredients.modify(|ingredients| ingredients.push(ingredient))
    }

    /// Removes the first ingredient equal to `ingredient` and returns the
    /// remaining order.
    ///
    /// # Errors
    ///
    /// Returns [`IngredientError::NotFound`] if no ingredient matches. The
    /// order is unchanged in that case.
    pub fn remove_ingredient(&mut self, ingredient: &str) -> Result<&[String], IngredientError> {
        let removed = self.ingredients.state(|ingredients| {
            ingredients
                .iter()
                .position(|candidate| candidate == ingredient)
                .map(|index| ingredients.remove(index))
        });

        let Some(_) = removed else {
            tracing::debug!(module = Self::NAME, ingredient, "ingredient not in order");
            return Err(IngredientError::not_found(ingredient));
        };
        tracing::trace!(module = Self::NAME, ingredient, "remove_ingredient");
        Ok(self.ingredients.get().as_slice())
    }

    /// Returns the current order without changing it.
    #[must_use]
    pub fn read_order(&self) -> &[String] {
        self.ingredients.get()
    }
}

impl CapabilityModule for Order {
    const NAME: &'static str = "Order";
    const CAPABILITIES: &'static [&'static str] =
        &["add_ingredient", "remove_ingredient", "read_order"];

    fn create() -> Self {
        Self {
            ingredients: Capsule::default(),
        }
    }
}

impl fmt::Debug for Order {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct(Self::NAME).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn order_of(ingredients: &[&str]) -> Order {
        let mut order = Order::create();
        for ingredient in ingredients {
            order.add_ingredient(*ingredient);
        }
        order
    }

    #[rstest]
    fn create_starts_empty() {
        assert!(Order::create().read_order().is_empty());
    }

    #[rstest]
    fn add_ingredient_returns_full_order() {
        let mut order = Order::create();
        order.add_ingredient("Meatballs");
        let current = order.add_ingredient("Marinara Sauce");
        assert_eq!(current, ["Meatballs", "Marinara Sauce"]);
    }

    #[rstest]
    fn add_ingredient_keeps_duplicates() {
        let order = order_of(&["Ham", "Ham"]);
        assert_eq!(order.read_order(), ["Ham", "Ham"]);
    }

    #[rstest]
    #[case(&["Ham", "Cheese", "Lettuce"], "Cheese", &["Ham", "Lettuce"])]
    #[case(&["Ham", "Cheese", "Ham"], "Ham", &["Cheese", "Ham"])]
    #[case(&["Ham"], "Ham", &[])]
    fn remove_ingredient_removes_first_match(
        #[case] initial: &[&str],
        #[case] target: &str,
        #[case] expected: &[&str],
    ) {
        let mut order = order_of(initial);
        assert_eq!(order.remove_ingredient(target).map(<[String]>::len), Ok(expected.len()));
        assert_eq!(order.read_order(), expected);
    }

    #[rstest]
    fn remove_missing_ingredient_leaves_order_unchanged() {
        let mut order = order_of(&["Ham", "Cheese"]);
        assert_eq!(
            order.remove_ingredient("Pickles"),
            Err(IngredientError::not_found("Pickles"))
        );
        assert_eq!(order.read_order(), ["Ham", "Cheese"]);
    }

    #[rstest]
    fn remove_is_case_sensitive() {
        let mut order = order_of(&["Ham"]);
        assert!(order.remove_ingredient("ham").is_err());
    }

    #[rstest]
    fn orders_are_independent() {
        let mut first = order_of(&["Ham", "Cheese"]);
        let second = order_of(&["Tomato"]);

        first.add_ingredient("Lettuce");
        first.remove_ingredient("Ham").unwrap();
        assert!(first.remove_ingredient("Tomato").is_err());

        assert_eq!(first.read_order(), ["Cheese", "Lettuce"]);
        assert_eq!(second.read_order(), ["Tomato"]);
    }

    #[rstest]
    fn fresh_order_ignores_earlier_instances() {
        let mut first = Order::create();
        first.add_ingredient("Ham");
        let second = Order::create();
        assert!(second.read_order().is_empty());
    }

    #[rstest]
    fn debug_does_not_reveal_ingredients() {
        let order = order_of(&["Ham"]);
        assert_eq!(format!("{order:?}"), "Order { .. }");
    }
}
