//! The locked engine facade.
//!
//! `OrderEngine` owns the workspace's single `State` behind a `Mutex` and
//! supplies the wall clock, turning each [`ops`](crate::ops) call into one
//! serializable transaction. It also exposes the cart / user / catalog /
//! mailbox pass-throughs so callers never touch the lock directly.
//!
//! Cloning an `OrderEngine` is cheap and shares the same state — request
//! handlers and the expiry scheduler each hold a clone.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use splitcart_store::State;
use splitcart_types::{
    CartEntry, Coordinates, EngineConfig, Menu, MenuId, Notification, NotificationId, Order,
    OrderId, Result, SplitcartError, Store, StoreId, User, UserId,
};

use crate::ops::{self, CreateOrder, ExpiryOutcome};

/// Shared, thread-safe entry point to the order core.
#[derive(Clone)]
pub struct OrderEngine {
    state: Arc<Mutex<State>>,
    config: EngineConfig,
}

impl OrderEngine {
    /// A fresh engine over empty state.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self::with_state(State::new(), config)
    }

    /// An engine over pre-populated state (tests, recovery).
    #[must_use]
    pub fn with_state(state: State, config: EngineConfig) -> Self {
        Self {
            state: Arc::new(Mutex::new(state)),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Acquire the transaction lock. A poisoned lock still holds a
    /// consistent `State` — operations validate before mutating — so
    /// recover rather than propagate the panic.
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // =================================================================
    // Order lifecycle
    // =================================================================

    /// Open a joint order from the creator's cart. The caller should arm
    /// an expiry timer with the returned order's `id` and `expires_at`.
    pub fn create_order(&self, request: CreateOrder) -> Result<Order> {
        ops::create_order(&mut self.lock(), &self.config, request, Utc::now())
    }

    /// Join a pending order as its second participant.
    pub fn match_order(&self, order_id: OrderId, matcher_id: UserId) -> Result<Order> {
        ops::match_order(&mut self.lock(), order_id, matcher_id, Utc::now())
    }

    /// Cancel a pending order, refunding the owner.
    pub fn cancel_order(&self, order_id: OrderId, requester_id: UserId) -> Result<Order> {
        ops::cancel_order(&mut self.lock(), order_id, requester_id)
    }

    /// Expiry-timer entry point: auto-cancel the order if it is still
    /// pending past its deadline.
    pub fn expire_order(&self, order_id: OrderId) -> ExpiryOutcome {
        ops::expire_order(&mut self.lock(), order_id, Utc::now())
    }

    /// Pending orders in a category within the discovery radius of the
    /// observer.
    #[must_use]
    pub fn discover(&self, category: &str, observer: Option<Coordinates>) -> Vec<Order> {
        ops::discover(
            &self.lock(),
            category,
            observer,
            self.config.discovery_radius_meters,
        )
    }

    pub fn order_detail(&self, order_id: OrderId) -> Result<Order> {
        self.lock()
            .orders
            .get(order_id)
            .cloned()
            .ok_or(SplitcartError::OrderNotFound(order_id))
    }

    /// Pending orders the user created or owns.
    #[must_use]
    pub fn orders_of(&self, user_id: UserId) -> Vec<Order> {
        self.lock()
            .orders
            .orders_of(user_id)
            .into_iter()
            .cloned()
            .collect()
    }

    /// `(id, expires_at)` for every pending order — the scheduler's
    /// crash-recovery re-arm pass reads this.
    #[must_use]
    pub fn pending_deadlines(&self) -> Vec<(OrderId, DateTime<Utc>)> {
        self.lock()
            .orders
            .pending()
            .into_iter()
            .map(|order| (order.id, order.expires_at))
            .collect()
    }

    // =================================================================
    // Users & credit
    // =================================================================

    /// Find-or-create a user by email (first-login-creates).
    pub fn register_user(&self, email: &str, name: &str) -> User {
        self.lock().users.register(email, name)
    }

    #[must_use]
    pub fn find_user_by_email(&self, email: &str) -> Option<User> {
        self.lock().users.find_by_email(email).cloned()
    }

    pub fn user(&self, user_id: UserId) -> Result<User> {
        self.lock()
            .users
            .get(user_id)
            .cloned()
            .ok_or(SplitcartError::UserNotFound(user_id))
    }

    /// Save a user's delivery address. Geocoding happens outside the
    /// core; pass `None` for coordinates when resolution failed.
    pub fn update_address(
        &self,
        user_id: UserId,
        address: impl Into<String>,
        detail: Option<String>,
        coords: Option<Coordinates>,
    ) -> Result<User> {
        self.lock()
            .users
            .update_address(user_id, address, detail, coords)
            .cloned()
    }

    pub fn add_credit(&self, user_id: UserId, amount: i64) -> Result<i64> {
        let mut state = self.lock();
        if !state.users.contains(user_id) {
            return Err(SplitcartError::UserNotFound(user_id));
        }
        state.ledger.deposit(user_id, amount);
        Ok(state.ledger.balance(user_id))
    }

    pub fn credit_of(&self, user_id: UserId) -> Result<i64> {
        let state = self.lock();
        if !state.users.contains(user_id) {
            return Err(SplitcartError::UserNotFound(user_id));
        }
        Ok(state.ledger.balance(user_id))
    }

    // =================================================================
    // Catalog
    // =================================================================

    pub fn add_store(&self, store: Store) -> StoreId {
        self.lock().catalog.add_store(store)
    }

    pub fn add_menu(&self, menu: Menu) -> Result<MenuId> {
        self.lock().catalog.add_menu(menu)
    }

    #[must_use]
    pub fn store(&self, store_id: StoreId) -> Option<Store> {
        self.lock().catalog.store(store_id).cloned()
    }

    #[must_use]
    pub fn stores_in(&self, category: &str) -> Vec<Store> {
        self.lock()
            .catalog
            .stores_in(category)
            .into_iter()
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn menus_of(&self, store_id: StoreId) -> Vec<Menu> {
        self.lock()
            .catalog
            .menus_of(store_id)
            .into_iter()
            .cloned()
            .collect()
    }

    // =================================================================
    // Carts
    // =================================================================

    pub fn add_to_cart(&self, user_id: UserId, menu_id: MenuId) -> Result<()> {
        let mut state = self.lock();
        if !state.users.contains(user_id) {
            return Err(SplitcartError::UserNotFound(user_id));
        }
        let state = &mut *state;
        state.carts.add(user_id, menu_id, &state.catalog)
    }

    pub fn remove_from_cart(&self, user_id: UserId, menu_id: MenuId) -> Result<()> {
        self.lock().carts.remove(user_id, menu_id)
    }

    #[must_use]
    pub fn cart(&self, user_id: UserId) -> Vec<CartEntry> {
        self.lock().carts.entries(user_id).to_vec()
    }

    // =================================================================
    // Mailbox
    // =================================================================

    /// Unread notifications for a user, newest first.
    #[must_use]
    pub fn unread_notifications(&self, user_id: UserId) -> Vec<Notification> {
        self.lock()
            .mailbox
            .unread(user_id)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn mark_notification_read(&self, id: NotificationId) -> Result<()> {
        self.lock().mailbox.mark_read(id)
    }
}

impl std::fmt::Debug for OrderEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
