//! Store and menu catalog.
//!
//! Reference data for the engine: immutable once registered. Orders and
//! carts snapshot menu prices, so catalog edits never rewrite history.

use std::collections::HashMap;

use splitcart_types::{Menu, MenuId, Result, SplitcartError, Store, StoreId};

/// Stores and their menus.
#[derive(Debug, Default)]
pub struct Catalog {
    stores: HashMap<StoreId, Store>,
    menus: HashMap<MenuId, Menu>,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_store(&mut self, store: Store) -> StoreId {
        let id = store.id;
        self.stores.insert(id, store);
        id
    }

    /// Register a menu under its store.
    ///
    /// # Errors
    /// Returns `StoreNotFound` if the menu references an unknown store.
    pub fn add_menu(&mut self, menu: Menu) -> Result<MenuId> {
        if !self.stores.contains_key(&menu.store_id) {
            return Err(SplitcartError::StoreNotFound(menu.store_id));
        }
        let id = menu.id;
        self.menus.insert(id, menu);
        Ok(id)
    }

    #[must_use]
    pub fn store(&self, store_id: StoreId) -> Option<&Store> {
        self.stores.get(&store_id)
    }

    #[must_use]
    pub fn menu(&self, menu_id: MenuId) -> Option<&Menu> {
        self.menus.get(&menu_id)
    }

    /// All menus belonging to one store, in no particular order.
    #[must_use]
    pub fn menus_of(&self, store_id: StoreId) -> Vec<&Menu> {
        self.menus
            .values()
            .filter(|menu| menu.store_id == store_id)
            .collect()
    }

    /// All stores in a category, in no particular order.
    #[must_use]
    pub fn stores_in(&self, category: &str) -> Vec<&Store> {
        self.stores
            .values()
            .filter(|store| store.category == category)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_requires_known_store() {
        let mut catalog = Catalog::new();
        let orphan = Menu::new(StoreId::new(), "Ghost menu", 9000);
        let err = catalog.add_menu(orphan).unwrap_err();
        assert!(matches!(err, SplitcartError::StoreNotFound(_)));
    }

    #[test]
    fn menus_group_by_store() {
        let mut catalog = Catalog::new();
        let store_id = catalog.add_store(Store::new("Bunsik", "snack", 12000, 2000));
        let other_id = catalog.add_store(Store::new("Sushi", "japanese", 20000, 4000));
        catalog.add_menu(Menu::new(store_id, "Tteokbokki", 6000)).unwrap();
        catalog.add_menu(Menu::new(store_id, "Kimbap", 4000)).unwrap();
        catalog.add_menu(Menu::new(other_id, "Set A", 18000)).unwrap();
        assert_eq!(catalog.menus_of(store_id).len(), 2);
        assert_eq!(catalog.menus_of(other_id).len(), 1);
    }

    #[test]
    fn stores_filter_by_category() {
        let mut catalog = Catalog::new();
        catalog.add_store(Store::new("A", "chicken", 18000, 3000));
        catalog.add_store(Store::new("B", "chicken", 16000, 2000));
        catalog.add_store(Store::new("C", "pizza", 15000, 2000));
        assert_eq!(catalog.stores_in("chicken").len(), 2);
        assert!(catalog.stores_in("burger").is_empty());
    }
}
