//! The complete durable state surface, bundled.
//!
//! One `State` value behind one lock is the engine's transaction scope:
//! an operation acquires the lock, validates every precondition against
//! a consistent snapshot, then mutates — so either every step commits or
//! none does. Nothing outside the engine should mutate a `State`.

use crate::{CartStore, Catalog, Ledger, Mailbox, OrderStore, UserDirectory};

/// Every table the engine reads or writes.
#[derive(Debug, Default)]
pub struct State {
    pub ledger: Ledger,
    pub users: UserDirectory,
    pub catalog: Catalog,
    pub carts: CartStore,
    pub orders: OrderStore,
    pub mailbox: Mailbox,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
