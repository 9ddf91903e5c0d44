//! Index aliases used by the core store.

use hashbrown::HashMap;

use crate::item::ItemKey;

/// Structural key to insertion-position index.
pub type KeyIndex = HashMap<ItemKey, usize>;
