//! The supervised expiry task table.
//!
//! One timer task per open order, keyed by order ID so timers can be
//! enumerated, replaced, and re-armed after a restart. A timer that
//! fires after its order already left `Pending` is harmless: the
//! engine's `expire_order` re-checks the status under the state lock and
//! backs off, so the table never needs to be perfectly in sync with the
//! order store. Disarming on match/cancel is tidy-up, not correctness.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};
use splitcart_engine::{ExpiryOutcome, OrderEngine};
use splitcart_types::OrderId;
use tokio::task::JoinHandle;

/// Arms and supervises per-order expiry timers.
pub struct ExpiryScheduler {
    engine: OrderEngine,
    tasks: Mutex<HashMap<OrderId, JoinHandle<()>>>,
}

impl ExpiryScheduler {
    /// A scheduler over the given engine. Must be created inside a tokio
    /// runtime; `arm` spawns onto the current runtime.
    #[must_use]
    pub fn new(engine: OrderEngine) -> Self {
        Self {
            engine,
            tasks: Mutex::new(HashMap::new()),
        }
    }

    fn table(&self) -> MutexGuard<'_, HashMap<OrderId, JoinHandle<()>>> {
        self.tasks.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Arm (or replace) the expiry timer for one order.
    ///
    /// The task sleeps until `expires_at` — immediately if the deadline
    /// already passed — then runs the engine's expiry path and logs the
    /// outcome. Timer errors never propagate; a task ends quietly.
    pub fn arm(&self, order_id: OrderId, expires_at: DateTime<Utc>) {
        let engine = self.engine.clone();
        let handle = tokio::spawn(async move {
            let delay = (expires_at - Utc::now()).to_std().unwrap_or(Duration::ZERO);
            tokio::time::sleep(delay).await;
            match engine.expire_order(order_id) {
                ExpiryOutcome::Expired => {
                    tracing::info!(order = %order_id, "expiry timer cancelled unmatched order");
                }
                ExpiryOutcome::NotDue => {
                    tracing::warn!(order = %order_id, "expiry timer fired before deadline");
                }
                ExpiryOutcome::Missed => {
                    tracing::debug!(order = %order_id, "expiry timer no-op, order already settled");
                }
            }
        });

        if let Some(previous) = self.table().insert(order_id, handle) {
            previous.abort();
        }
    }

    /// Abort and forget one order's timer. Returns whether a timer was
    /// armed. Optional tidy-up after a successful match or cancel.
    pub fn disarm(&self, order_id: OrderId) -> bool {
        match self.table().remove(&order_id) {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }

    /// Crash-recovery pass: arm one timer per pending order, using each
    /// order's stored deadline. Orders already past due expire on the
    /// spot. Returns how many timers were armed.
    pub fn rearm_pending(&self) -> usize {
        let deadlines = self.engine.pending_deadlines();
        let count = deadlines.len();
        for (order_id, expires_at) in deadlines {
            self.arm(order_id, expires_at);
        }
        tracing::info!(count, "re-armed expiry timers for pending orders");
        count
    }

    /// Timers whose task has not finished yet.
    #[must_use]
    pub fn armed_count(&self) -> usize {
        self.table()
            .values()
            .filter(|handle| !handle.is_finished())
            .count()
    }

    /// Abort every timer. The engine's state is untouched; pending
    /// orders can be re-armed later with [`rearm_pending`].
    ///
    /// [`rearm_pending`]: Self::rearm_pending
    pub fn shutdown(&self) {
        let mut table = self.table();
        for (_, handle) in table.drain() {
            handle.abort();
        }
    }
}

impl std::fmt::Debug for ExpiryScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpiryScheduler")
            .field("armed", &self.table().len())
            .finish_non_exhaustive()
    }
}
