//! Order records.
//!
//! A plain keyed store plus the two queries discovery and "my orders"
//! need. All status transitions happen in the engine, under the state
//! lock; this store never interprets statuses beyond filtering.

use std::collections::HashMap;

use splitcart_types::{Order, OrderId, UserId};

use crate::Catalog;

/// All live order records, keyed by ID.
///
/// Expired orders are removed entirely; cancelled orders are retained
/// with status `Cancelled`.
#[derive(Debug, Default)]
pub struct OrderStore {
    orders: HashMap<OrderId, Order>,
}

impl OrderStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, order: Order) {
        self.orders.insert(order.id, order);
    }

    #[must_use]
    pub fn get(&self, order_id: OrderId) -> Option<&Order> {
        self.orders.get(&order_id)
    }

    pub fn get_mut(&mut self, order_id: OrderId) -> Option<&mut Order> {
        self.orders.get_mut(&order_id)
    }

    /// Remove an order record entirely (expiry path).
    pub fn remove(&mut self, order_id: OrderId) -> Option<Order> {
        self.orders.remove(&order_id)
    }

    /// Pending orders whose store belongs to the given category.
    #[must_use]
    pub fn pending_in<'a>(&'a self, category: &str, catalog: &Catalog) -> Vec<&'a Order> {
        self.orders
            .values()
            .filter(|order| order.is_pending())
            .filter(|order| {
                catalog
                    .store(order.store_id)
                    .is_some_and(|store| store.category == category)
            })
            .collect()
    }

    /// Pending orders the user created or owns.
    #[must_use]
    pub fn orders_of(&self, user_id: UserId) -> Vec<&Order> {
        self.orders
            .values()
            .filter(|order| order.is_pending())
            .filter(|order| order.creator_id == user_id || order.owner_id == user_id)
            .collect()
    }

    /// All pending orders. Used by the scheduler's re-arm pass.
    #[must_use]
    pub fn pending(&self) -> Vec<&Order> {
        self.orders.values().filter(|o| o.is_pending()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use splitcart_types::{OrderStatus, SplitType, Store, StoreId};

    #[test]
    fn insert_get_remove() {
        let mut orders = OrderStore::new();
        let order = Order::dummy(UserId::new(), StoreId::new(), SplitType::Even, 11000);
        let id = order.id;
        orders.insert(order);
        assert!(orders.get(id).is_some());
        assert!(orders.remove(id).is_some());
        assert!(orders.get(id).is_none());
    }

    #[test]
    fn pending_in_filters_status_and_category() {
        let mut catalog = Catalog::new();
        let chicken = catalog.add_store(Store::new("Chicken Town", "chicken", 18000, 3000));
        let pizza = catalog.add_store(Store::new("Pizza Lab", "pizza", 15000, 2000));

        let mut orders = OrderStore::new();
        let open = Order::dummy(UserId::new(), chicken, SplitType::Even, 11000);
        let open_id = open.id;
        orders.insert(open);

        let mut matched = Order::dummy(UserId::new(), chicken, SplitType::Even, 11000);
        matched.status = OrderStatus::Matched;
        orders.insert(matched);

        orders.insert(Order::dummy(UserId::new(), pizza, SplitType::Separate, 9000));

        let found = orders.pending_in("chicken", &catalog);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, open_id);
    }

    #[test]
    fn orders_of_excludes_cancelled() {
        let user = UserId::new();
        let mut orders = OrderStore::new();
        orders.insert(Order::dummy(user, StoreId::new(), SplitType::Even, 11000));
        let mut cancelled = Order::dummy(user, StoreId::new(), SplitType::Even, 11000);
        cancelled.status = OrderStatus::Cancelled;
        orders.insert(cancelled);
        orders.insert(Order::dummy(UserId::new(), StoreId::new(), SplitType::Even, 5000));
        assert_eq!(orders.orders_of(user).len(), 1);
    }
}
