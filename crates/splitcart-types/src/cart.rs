//! Cart entries — a user's pending, single-store menu selection.
//!
//! Entries snapshot the menu price at add time. The single-store and
//! no-duplicate invariants are enforced at insertion by the cart store,
//! not here.

use serde::{Deserialize, Serialize};

use crate::{Menu, MenuId};

/// One line in a user's cart: a menu reference plus the price snapshot
/// taken when it was added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    pub menu_id: MenuId,
    pub price: i64,
}

impl CartEntry {
    /// Snapshot a menu into a cart entry at its current price.
    #[must_use]
    pub fn snapshot(menu: &Menu) -> Self {
        Self {
            menu_id: menu.id,
            price: menu.price,
        }
    }
}

/// Sum of entry prices. Zero for an empty slice.
#[must_use]
pub fn cart_total(entries: &[CartEntry]) -> i64 {
    entries.iter().map(|e| e.price).sum()
}
