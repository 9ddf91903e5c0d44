//! Item domain record, structural key, and wire row.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Dollars, Quantity};

/// Rejected argument for an [`Item`] constructor or mutator.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemError {
    /// Name was empty at construction.
    EmptyName,
    /// Unit cost was zero, negative, or not finite.
    NonPositiveCost(Dollars),
    /// Sale price was zero, negative, or not finite.
    NonPositivePrice(Dollars),
    /// Quantity delta was zero.
    ZeroDelta,
}

/// Structural identity of an item: name plus exact unit cost.
///
/// Two items fold into one stock entry iff their keys match. Cost enters the
/// key by bit pattern so `Eq` and `Hash` stay well-defined without comparing
/// floats.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemKey {
    name: String,
    cost_bits: u64,
}

impl ItemKey {
    /// Builds the key for `(name, cost)`.
    pub fn new(name: impl Into<String>, cost: Dollars) -> Self {
        Self {
            name: name.into(),
            cost_bits: cost.to_bits(),
        }
    }

    /// Item name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit cost the key was built from.
    pub fn cost(&self) -> Dollars {
        Dollars::from_bits(self.cost_bits)
    }
}

/// A named product with a fixed unit cost, a settable sale price, and a
/// tracked quantity.
///
/// Price `0.0` is the "not set" sentinel. [`Item::set_price`] accepts only
/// positive amounts, so the sentinel is unreachable once a price is assigned.
/// Quantity moves only through [`Item::increase_quantity`] and
/// [`Item::decrease_quantity`]; inside a store, the store is the sole caller
/// of both.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    name: String,
    cost: Dollars,
    price: Dollars,
    quantity: Quantity,
}

impl Item {
    /// Creates an item with an unset price and zero quantity.
    ///
    /// Rejects an empty name and a cost that is zero, negative, or not
    /// finite.
    pub fn new(name: impl Into<String>, cost: Dollars) -> Result<Self, ItemError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ItemError::EmptyName);
        }
        if !cost.is_finite() || cost <= 0.0 {
            return Err(ItemError::NonPositiveCost(cost));
        }
        Ok(Self {
            name,
            cost,
            price: 0.0,
            quantity: 0,
        })
    }

    /// Replaces the sale price. Rejects amounts that are zero, negative, or
    /// not finite.
    pub fn set_price(&mut self, amount: Dollars) -> Result<(), ItemError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ItemError::NonPositivePrice(amount));
        }
        self.price = amount;
        Ok(())
    }

    /// True once a price has been assigned.
    pub fn price_is_set(&self) -> bool {
        self.price != 0.0
    }

    /// Adds `n` units. Rejects a zero delta.
    pub fn increase_quantity(&mut self, n: Quantity) -> Result<(), ItemError> {
        if n == 0 {
            return Err(ItemError::ZeroDelta);
        }
        self.quantity += n;
        Ok(())
    }

    /// Removes `n` units. Rejects a zero delta.
    ///
    /// No bounds check: the caller must ensure `n <= quantity`. The store
    /// verifies availability before every sale.
    pub fn decrease_quantity(&mut self, n: Quantity) -> Result<(), ItemError> {
        if n == 0 {
            return Err(ItemError::ZeroDelta);
        }
        self.quantity -= n;
        Ok(())
    }

    /// Item name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit acquisition cost.
    pub fn cost(&self) -> Dollars {
        self.cost
    }

    /// Unit sale price; `0.0` while unset.
    pub fn price(&self) -> Dollars {
        self.price
    }

    /// Units currently held.
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Structural key used for stock membership and merging.
    pub fn key(&self) -> ItemKey {
        ItemKey::new(self.name.clone(), self.cost)
    }

    /// Flattens this item into its wire row.
    pub fn to_record(&self) -> ItemRecord {
        ItemRecord {
            name: self.name.clone(),
            cost: self.cost,
            price: self.price,
            quantity: self.quantity,
        }
    }

    /// Rebuilds an item from a wire row, revalidating every field.
    ///
    /// The stored price is applied only when it is not the unset sentinel,
    /// and the quantity is restored as recorded rather than accumulated.
    pub fn from_record(rec: ItemRecord) -> Result<Self, ItemError> {
        let mut item = Self::new(rec.name, rec.cost)?;
        if rec.price != 0.0 {
            item.set_price(rec.price)?;
        }
        item.quantity = rec.quantity;
        Ok(item)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => write!(f, "{}{}", first.to_uppercase(), chars.as_str()),
            None => Ok(()),
        }
    }
}

/// Flat wire row for one stock entry, in the on-disk field order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Item name.
    pub name: String,
    /// Unit acquisition cost.
    pub cost: Dollars,
    /// Unit sale price; `0.0` when unset.
    pub price: Dollars,
    /// Units in stock.
    pub quantity: Quantity,
}
