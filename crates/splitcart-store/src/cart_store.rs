//! Per-user carts.
//!
//! Insertion enforces the two cart invariants:
//! 1. every entry references a menu from the same store;
//! 2. no menu appears twice.
//!
//! Reads never re-validate — a cart that passed insertion stays
//! well-formed until drained into an order.

use std::collections::HashMap;

use splitcart_types::{CartEntry, MenuId, Result, SplitcartError, UserId, cart_total};

use crate::Catalog;

/// All users' carts, keyed by user.
#[derive(Debug, Default)]
pub struct CartStore {
    carts: HashMap<UserId, Vec<CartEntry>>,
}

impl CartStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a menu to a user's cart, snapshotting its current price.
    ///
    /// # Errors
    /// - `MenuNotFound` if the menu is unknown.
    /// - `CrossStoreCart` if the cart already holds another store's menu.
    /// - `DuplicateCartEntry` if the menu is already in the cart.
    pub fn add(&mut self, user_id: UserId, menu_id: MenuId, catalog: &Catalog) -> Result<()> {
        let menu = catalog
            .menu(menu_id)
            .ok_or(SplitcartError::MenuNotFound(menu_id))?;

        let entries = self.carts.entry(user_id).or_default();

        if let Some(first) = entries.first() {
            // Single-store invariant: compare against the first entry's store.
            let existing_store = catalog
                .menu(first.menu_id)
                .map(|m| m.store_id)
                .ok_or(SplitcartError::MenuNotFound(first.menu_id))?;
            if menu.store_id != existing_store {
                return Err(SplitcartError::CrossStoreCart);
            }
        }

        if entries.iter().any(|entry| entry.menu_id == menu_id) {
            return Err(SplitcartError::DuplicateCartEntry(menu_id));
        }

        entries.push(CartEntry::snapshot(menu));
        Ok(())
    }

    /// Remove one menu from a user's cart.
    ///
    /// # Errors
    /// Returns `MenuNotFound` if the menu is not in the cart.
    pub fn remove(&mut self, user_id: UserId, menu_id: MenuId) -> Result<()> {
        let entries = self
            .carts
            .get_mut(&user_id)
            .ok_or(SplitcartError::MenuNotFound(menu_id))?;
        let position = entries
            .iter()
            .position(|entry| entry.menu_id == menu_id)
            .ok_or(SplitcartError::MenuNotFound(menu_id))?;
        entries.remove(position);
        Ok(())
    }

    /// The user's entries in insertion order. Empty slice if no cart.
    #[must_use]
    pub fn entries(&self, user_id: UserId) -> &[CartEntry] {
        self.carts.get(&user_id).map_or(&[], Vec::as_slice)
    }

    /// Sum of the user's entry prices. Zero for an empty cart.
    #[must_use]
    pub fn total(&self, user_id: UserId) -> i64 {
        cart_total(self.entries(user_id))
    }

    /// Take every entry out of the user's cart, leaving it empty.
    /// Called when the cart is folded into an order.
    pub fn drain(&mut self, user_id: UserId) -> Vec<CartEntry> {
        self.carts.remove(&user_id).unwrap_or_default()
    }
}
