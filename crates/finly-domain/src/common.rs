//! Shared traits and scalar aliases for tracked entities.

/// Whole currency units. No fractional minor units are tracked.
pub type Amount = u64;

/// Supplies a common contract for retrieving the amount an entity contributes to a total.
pub trait Amounted {
    fn amount(&self) -> Amount;
}

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Sums the amounts of a collection, saturating instead of overflowing.
pub fn total_amount<'a, T, I>(items: I) -> Amount
where
    T: Amounted + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .fold(0, |sum: Amount, item| sum.saturating_add(item.amount()))
}
