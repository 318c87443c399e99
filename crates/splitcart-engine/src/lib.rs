//! # splitcart-engine
//!
//! The order engine: the state machine governing a joint order from
//! creation through matching, expiry, or cancellation, with atomic
//! settlement against the credit ledger.
//!
//! ## Architecture
//!
//! Two layers:
//!
//! 1. [`ops`] — the lifecycle as pure functions over `&mut State` with an
//!    explicit `now`: deterministic, clock-free, lock-free.
//! 2. [`OrderEngine`] — the facade that owns the `State` behind a mutex,
//!    supplies the wall clock, and makes every op call one serializable
//!    transaction.
//!
//! ## Operation flow
//!
//! ```text
//! cart -> create_order (debit owner, drain cart, Pending, arm timer)
//!      -> match_order  (settle matcher, drain cart, Matched)
//!       | cancel_order (refund owner, Cancelled)
//!       | expire_order (refund owner, delete, notify)   <- timer
//! ```
//!
//! Match and expiry on the same order are mutually exclusive: both
//! re-check the order's status inside the same lock, so exactly one wins
//! and the other observes the post-transition state and backs off.

pub mod engine;
pub mod ops;

pub use engine::OrderEngine;
pub use ops::{CreateOrder, ExpiryOutcome};
