//! # splitcart-store
//!
//! **Storage plane**: explicit per-table stores replacing the kind of
//! live ORM relationship graph a CRUD framework would give you.
//!
//! ## Architecture
//!
//! 1. **Ledger**: per-user credit balances; validates before mutating
//! 2. **UserDirectory**: user records, first-login-creates
//! 3. **Catalog**: stores + menus (immutable reference data)
//! 4. **CartStore**: per-user carts with the single-store invariant
//! 5. **OrderStore**: order records and discovery queries
//! 6. **Mailbox**: append-only pull notifications
//!
//! [`State`] bundles all six; the engine puts one `State` behind one lock
//! and treats the lock scope as a serializable transaction.

pub mod cart_store;
pub mod catalog;
pub mod ledger;
pub mod mailbox;
pub mod orders;
pub mod state;
pub mod users;

pub use cart_store::CartStore;
pub use catalog::Catalog;
pub use ledger::Ledger;
pub use mailbox::Mailbox;
pub use orders::OrderStore;
pub use state::State;
pub use users::UserDirectory;
