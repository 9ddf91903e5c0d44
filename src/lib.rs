//! Retail inventory and cash-ledger core with JSON document persistence.
//!
//! # Examples
//!
//! In-memory usage with [`core::store::Store`]:
//! ```
//! use stockbook::{core::store::Store, item::Item};
//!
//! let mut store = Store::new(500.0).expect("open store");
//! let mut pens = Item::new("pen", 0.45).expect("item");
//! pens.set_price(1.99).expect("price");
//! let key = pens.key();
//!
//! assert!(store.stock(pens, 100).expect("stock"));
//! assert!(store.sell(&key, 40).expect("sell"));
//! assert_eq!(store.get(&key).map(Item::quantity), Some(60));
//! ```
//!
//! Saving and restoring through the JSON codec:
//! ```no_run
//! use stockbook::{core::store::Store, item::Item, persist::json::JsonFile};
//!
//! let mut store = Store::new(2500.0).expect("open store");
//! let mut vaccine = Item::new("flu vaccine", 7.5).expect("item");
//! vaccine.set_price(24.99).expect("price");
//! store.stock(vaccine, 200).expect("stock");
//!
//! let file = JsonFile::new("store.json");
//! file.save(&store).expect("save");
//! let restored = file.load().expect("load");
//! assert_eq!(restored.export_snapshot(), store.export_snapshot());
//! ```
#![deny(missing_docs)]

/// Core in-memory store and index helpers.
pub mod core;
/// Item domain records and structural keys.
pub mod item;
/// Persistence abstraction and JSON document codec.
pub mod persist;
/// Shared primitive types.
pub mod types;
