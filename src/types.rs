//! Shared primitive aliases for money and unit counts.

/// Money amount in dollars.
pub type Dollars = f64;
/// Count of units held of a single item.
pub type Quantity = u32;
