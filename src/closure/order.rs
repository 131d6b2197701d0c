//! Order-building closure.

/// Creates an empty order and returns its only capability: add an ingredient.
///
/// Each call appends the ingredient and returns a snapshot of the order so
/// far. The snapshot is a copy; changing it does not affect the order.
///
/// # Examples
///
/// ```rust
/// use capcell::closure::create_order;
///
/// let mut taytes_order = create_order();
/// taytes_order("Meatballs");
/// taytes_order("Marinara Sauce");
/// assert_eq!(
///     taytes_order("Parmasen Cheese"),
///     vec!["Meatballs", "Marinara Sauce", "Parmasen Cheese"]
/// );
/// ```
pub fn create_order() -> impl FnMut(&str) -> Vec<String> + Send {
    let mut order: Vec<String> = Vec::new();
    move |ingredient: &str| {
        order.push(ingredient.to_string());
        tracing::trace!(ingredient, size = order.len(), "ingredient added");
        order.clone()
    }
}
