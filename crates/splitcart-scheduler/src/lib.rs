//! # splitcart-scheduler
//!
//! Expiry scheduling for pending orders: one suspended timer task per
//! open order, racing the match path for the `Pending -> gone` versus
//! `Pending -> Matched` transition.
//!
//! The race is resolved by the engine, not here: the timer calls
//! `OrderEngine::expire_order`, which re-checks the order's status under
//! the same lock every match takes. Whichever side runs second observes
//! the transition and no-ops. Timers are therefore never *required* to
//! be cancelled — a stale timer is just a no-op — but the task table
//! keyed by order ID lets callers disarm, enumerate, and re-arm timers
//! across a restart.

pub mod scheduler;

pub use scheduler::ExpiryScheduler;
