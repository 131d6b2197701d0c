//! Counter closure.

/// What a caller can learn about a [`counter`] closure without calling it:
/// the factory's name and its one capability.
pub const COUNTER_DESCRIPTION: &str = "counter { add_one }";

/// Creates a counter and returns its only capability: increment.
///
/// The returned closure owns a count starting at `0`. Each call adds one
/// and returns the new count.
///
/// # Examples
///
/// ```rust
/// use capcell::closure::counter;
///
/// let mut add_one = counter();
/// let observed: Vec<u64> = (0..5).map(|_| add_one()).collect();
/// assert_eq!(observed, vec![1, 2, 3, 4, 5]);
/// ```
pub fn counter() -> impl FnMut() -> u64 + Send {
    let mut count: u64 = 0;
    move || {
        count = count.saturating_add(1);
        tracing::trace!(count, "counter incremented");
        count
    }
}
