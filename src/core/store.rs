//! Authoritative inventory and cash-ledger store.

use serde::{Deserialize, Serialize};

use crate::{
    core::indices::KeyIndex,
    item::{Item, ItemError, ItemKey, ItemRecord},
    types::{Dollars, Quantity},
};

/// Failure raised by a store constructor or operation.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// Opening asset was zero, negative, or not finite.
    NonPositiveAsset(Dollars),
    /// A stock or sell was requested for zero units.
    ZeroQuantity,
    /// An eligible entry holds fewer units than the sale requested.
    InsufficientQuantity {
        /// Units the caller asked to sell.
        requested: Quantity,
        /// Units actually held by the entry.
        available: Quantity,
    },
    /// An item-level argument was rejected.
    Item(ItemError),
}

impl From<ItemError> for StoreError {
    fn from(value: ItemError) -> Self {
        Self::Item(value)
    }
}

/// Full store state in the on-disk document shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    /// Cash on hand.
    pub asset: Dollars,
    /// Cumulative sale earnings.
    pub revenue: Dollars,
    /// Cumulative stocking spend.
    pub expenditure: Dollars,
    /// Stock entries in insertion order.
    pub items: Vec<ItemRecord>,
}

/// Insertion-ordered stock plus the cash ledger over it.
///
/// Entries are unique by [`ItemKey`] and owned exclusively by the store;
/// [`Store::stock`] and [`Store::sell`] are the only paths that move units or
/// money. An entry stays in the stock even when its quantity falls to zero.
#[derive(Debug)]
pub struct Store {
    items: Vec<Item>,
    pos: KeyIndex,
    asset: Dollars,
    revenue: Dollars,
    expenditure: Dollars,
}

impl Store {
    /// Opens a store holding `initial_asset` in cash, with an empty stock and
    /// zeroed totals. Rejects an opening asset that is zero, negative, or not
    /// finite.
    pub fn new(initial_asset: Dollars) -> Result<Self, StoreError> {
        if !initial_asset.is_finite() || initial_asset <= 0.0 {
            return Err(StoreError::NonPositiveAsset(initial_asset));
        }
        Ok(Self {
            items: Vec::new(),
            pos: KeyIndex::new(),
            asset: initial_asset,
            revenue: 0.0,
            expenditure: 0.0,
        })
    }

    /// Restores a store from a snapshot.
    ///
    /// Totals are taken straight from the snapshot rather than re-run through
    /// the ledger, so a saved store whose asset was fully spent restores
    /// cleanly. Every row is revalidated through the item constructor path,
    /// and rows sharing a key merge into one entry.
    pub fn from_snapshot(snapshot: StoreSnapshot) -> Result<Self, StoreError> {
        let mut store = Self {
            items: Vec::new(),
            pos: KeyIndex::new(),
            asset: snapshot.asset,
            revenue: snapshot.revenue,
            expenditure: snapshot.expenditure,
        };

        for rec in snapshot.items {
            let item = Item::from_record(rec)?;
            store.adopt(item)?;
        }
        Ok(store)
    }

    /// Serializes live state, preserving insertion order.
    pub fn export_snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            asset: self.asset,
            revenue: self.revenue,
            expenditure: self.expenditure,
            items: self.items.iter().map(Item::to_record).collect(),
        }
    }

    /// Purchases `quantity` units of `item`.
    ///
    /// Returns `Ok(false)` and mutates nothing when the total cost would
    /// overdraw the asset. Otherwise the units land on the existing entry
    /// with the same key, or on `item` itself which then joins the stock, and
    /// the total cost moves from asset to expenditure. All or nothing.
    pub fn stock(&mut self, item: Item, quantity: Quantity) -> Result<bool, StoreError> {
        if quantity == 0 {
            return Err(StoreError::ZeroQuantity);
        }

        let total_cost = Dollars::from(quantity) * item.cost();
        if total_cost > self.asset {
            return Ok(false);
        }

        match self.pos.get(&item.key()) {
            Some(&idx) => self.items[idx].increase_quantity(quantity)?,
            None => {
                let mut item = item;
                item.increase_quantity(quantity)?;
                self.pos.insert(item.key(), self.items.len());
                self.items.push(item);
            }
        }

        self.expenditure += total_cost;
        self.asset -= total_cost;
        Ok(true)
    }

    /// Sells `quantity` units of the entry identified by `key`.
    ///
    /// Returns `Ok(false)` when the key is not stocked or the entry has no
    /// price; both leave the store untouched. A priced entry holding too few
    /// units fails with [`StoreError::InsufficientQuantity`] instead, which
    /// also leaves the store untouched.
    pub fn sell(&mut self, key: &ItemKey, quantity: Quantity) -> Result<bool, StoreError> {
        if quantity == 0 {
            return Err(StoreError::ZeroQuantity);
        }

        let Some(&idx) = self.pos.get(key) else {
            return Ok(false);
        };
        let item = &mut self.items[idx];
        if !item.price_is_set() {
            return Ok(false);
        }
        if quantity > item.quantity() {
            return Err(StoreError::InsufficientQuantity {
                requested: quantity,
                available: item.quantity(),
            });
        }

        item.decrease_quantity(quantity)?;
        let earned = Dollars::from(quantity) * item.price();
        self.revenue += earned;
        self.asset += earned;
        Ok(true)
    }

    /// Position of `key` in insertion order, if stocked.
    pub fn index_of(&self, key: &ItemKey) -> Option<usize> {
        self.pos.get(key).copied()
    }

    /// Canonical entry for `key`, if stocked.
    pub fn get(&self, key: &ItemKey) -> Option<&Item> {
        self.index_of(key).map(|idx| &self.items[idx])
    }

    /// Stock entries in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of distinct stock entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True while nothing has ever been stocked.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Cash on hand.
    pub fn asset(&self) -> Dollars {
        self.asset
    }

    /// Cumulative sale earnings.
    pub fn revenue(&self) -> Dollars {
        self.revenue
    }

    /// Cumulative stocking spend.
    pub fn expenditure(&self) -> Dollars {
        self.expenditure
    }

    /// Merges `item` into the stock with no ledger effect.
    ///
    /// Restore-only path: an existing entry gains the incoming quantity, a
    /// new key is appended as-is, including a zero quantity.
    fn adopt(&mut self, item: Item) -> Result<(), StoreError> {
        match self.pos.get(&item.key()) {
            Some(&idx) => {
                if item.quantity() > 0 {
                    self.items[idx].increase_quantity(item.quantity())?;
                }
            }
            None => {
                self.pos.insert(item.key(), self.items.len());
                self.items.push(item);
            }
        }
        Ok(())
    }
}
