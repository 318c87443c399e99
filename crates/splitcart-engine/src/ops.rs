//! Order lifecycle operations.
//!
//! Every operation here is a plain function over `&mut State` with an
//! explicit `now` — no clock reads, no locks, no I/O. The caller (the
//! [`OrderEngine`](crate::OrderEngine) facade) holds the state lock for
//! the whole call, which makes each operation one serializable
//! transaction: all preconditions are validated against a consistent
//! snapshot before the first mutation, so either every step commits or
//! none does.
//!
//! The match/expiry race resolves here too: both paths re-read the
//! order's status under the same lock, and whichever runs second observes
//! the transition the first one made and backs off.

use chrono::{DateTime, Utc};
use splitcart_store::State;
use splitcart_types::{
    CartEntry, Coordinates, EngineConfig, Order, OrderId, OrderItem, OrderStatus, Result,
    SplitType, SplitcartError, UserId, cart_total, within,
};

/// Input to [`create_order`].
#[derive(Debug, Clone)]
pub struct CreateOrder {
    pub creator_id: UserId,
    pub delivery_location: String,
    pub detailed_location: Option<String>,
    pub delivery_coords: Option<Coordinates>,
    pub split_type: SplitType,
}

/// What an expiry timer found when it fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryOutcome {
    /// The order was still pending past its deadline: refunded, deleted,
    /// owner notified.
    Expired,
    /// The deadline has not passed yet (timer re-armed early). No-op.
    NotDue,
    /// The order was already matched, cancelled, or deleted. No-op.
    Missed,
}

/// Open a new joint order from the creator's cart.
///
/// Steps:
/// 1. Creator exists; cart non-empty; the cart's store (from its first
///    entry) exists.
/// 2. `Even` split: cart total must reach the store minimum;
///    `owner_pay = (total + tip) / 2` (truncation after the sum).
///    `Separate`: no minimum check yet; `owner_pay = total + tip / 2`.
/// 3. Debit the creator's ledger by `owner_pay`.
/// 4. Create the order `Pending` with `expires_at = now + expiry window`,
///    fold the cart into owner-attributed items, drain the cart.
///
/// The caller is responsible for arming an expiry timer with the
/// returned order's `id` and `expires_at`.
pub fn create_order(
    state: &mut State,
    config: &EngineConfig,
    request: CreateOrder,
    now: DateTime<Utc>,
) -> Result<Order> {
    if !state.users.contains(request.creator_id) {
        return Err(SplitcartError::UserNotFound(request.creator_id));
    }

    let entries = state.carts.entries(request.creator_id);
    let Some(first) = entries.first() else {
        return Err(SplitcartError::EmptyCart);
    };

    // The cart's store is the order's implicit store.
    let store_id = state
        .catalog
        .menu(first.menu_id)
        .map(|menu| menu.store_id)
        .ok_or(SplitcartError::MenuNotFound(first.menu_id))?;
    let store = state
        .catalog
        .store(store_id)
        .ok_or(SplitcartError::StoreNotFound(store_id))?;
    let (minimum_price, tip) = (store.minimum_price, store.delivery_tip);

    let total = cart_total(entries);

    let owner_pay = match request.split_type {
        SplitType::Even => {
            if total < minimum_price {
                return Err(SplitcartError::BelowMinimum {
                    total,
                    minimum: minimum_price,
                });
            }
            (total + tip) / 2
        }
        SplitType::Separate => total + tip / 2,
    };

    // First mutation. Everything after this point is infallible.
    state.ledger.debit(request.creator_id, owner_pay)?;

    let order_id = OrderId::new();
    let items = state
        .carts
        .drain(request.creator_id)
        .into_iter()
        .map(|entry| OrderItem {
            order_id,
            user_id: request.creator_id,
            menu_id: entry.menu_id,
            price: entry.price,
        })
        .collect();

    let order = Order {
        id: order_id,
        creator_id: request.creator_id,
        owner_id: request.creator_id,
        store_id,
        delivery_location: request.delivery_location,
        detailed_location: request.detailed_location,
        delivery_coords: request.delivery_coords,
        split_type: request.split_type,
        owner_paid_amount: owner_pay,
        status: OrderStatus::Pending,
        created_at: now,
        expires_at: now + config.expiry_window(),
        items,
    };
    state.orders.insert(order.clone());

    tracing::info!(
        order = %order_id,
        creator = %request.creator_id,
        split = %request.split_type,
        owner_pay,
        "order created"
    );
    Ok(order)
}

/// Join a pending order as its second participant.
///
/// On any failure nothing is mutated and a rejection notification is
/// posted to the would-be matcher. On success the matcher's cart is
/// folded in, the charge is settled, and the order transitions to
/// `Matched` — all under the caller's lock, so a concurrent match or
/// expiry attempt on the same order observes the transition.
pub fn match_order(
    state: &mut State,
    order_id: OrderId,
    matcher_id: UserId,
    now: DateTime<Utc>,
) -> Result<Order> {
    match try_match(state, order_id, matcher_id) {
        Ok(order) => {
            state.mailbox.post(
                order.owner_id,
                "Match succeeded",
                format!("Your order {order_id} was matched."),
                now,
            );
            state.mailbox.post(
                matcher_id,
                "Match succeeded",
                format!("You joined order {order_id}."),
                now,
            );
            tracing::info!(order = %order_id, matcher = %matcher_id, "order matched");
            Ok(order)
        }
        Err(err) => {
            state.mailbox.post(
                matcher_id,
                "Match failed",
                format!("Failed to match order {order_id}: {err}"),
                now,
            );
            tracing::info!(order = %order_id, matcher = %matcher_id, %err, "match rejected");
            Err(err)
        }
    }
}

fn try_match(state: &mut State, order_id: OrderId, matcher_id: UserId) -> Result<Order> {
    // -- Validation phase: reads only. -----------------------------------
    let order = state
        .orders
        .get(order_id)
        .ok_or(SplitcartError::OrderNotFound(order_id))?;
    if order.status != OrderStatus::Pending {
        return Err(SplitcartError::InvalidState {
            status: order.status,
        });
    }
    if !state.users.contains(matcher_id) {
        return Err(SplitcartError::UserNotFound(matcher_id));
    }
    if matcher_id == order.owner_id {
        return Err(SplitcartError::SelfMatch);
    }
    // Defensive: unreachable given referential integrity.
    let store = state
        .catalog
        .store(order.store_id)
        .ok_or(SplitcartError::StoreNotFound(order.store_id))?;

    let (store_id, minimum_price, tip) = (store.id, store.minimum_price, store.delivery_tip);
    let (split_type, owner_paid_amount) = (order.split_type, order.owner_paid_amount);
    let owner_total = order.owner_total();

    let cart: Vec<CartEntry> = state.carts.entries(matcher_id).to_vec();
    let matched_total = cart_total(&cart);

    let combined = owner_total + matched_total;
    if combined < minimum_price {
        return Err(SplitcartError::BelowMinimum {
            total: combined,
            minimum: minimum_price,
        });
    }

    let charge = match split_type {
        // The charge is the creation-time-fixed complementary half; the
        // matcher's cart is folded in but is not the basis of the charge.
        SplitType::Even => owner_paid_amount,
        SplitType::Separate => {
            for entry in &cart {
                let menu = state
                    .catalog
                    .menu(entry.menu_id)
                    .ok_or(SplitcartError::MenuNotFound(entry.menu_id))?;
                if menu.store_id != store_id {
                    return Err(SplitcartError::CrossStoreCart);
                }
            }
            if matched_total <= 0 {
                return Err(SplitcartError::EmptyCart);
            }
            matched_total + tip / 2
        }
    };

    // The full charge, not just the cart total: credit never goes
    // negative, so the half tip must be covered up front too.
    let available = state.ledger.balance(matcher_id);
    if available < charge {
        return Err(SplitcartError::InsufficientCredit {
            needed: charge,
            available,
        });
    }

    // -- Settlement phase: no failures past this point. ------------------
    state.ledger.debit(matcher_id, charge)?;
    let drained = state.carts.drain(matcher_id);

    let order = state
        .orders
        .get_mut(order_id)
        .ok_or(SplitcartError::OrderNotFound(order_id))?;
    for entry in drained {
        order.items.push(OrderItem {
            order_id,
            user_id: matcher_id,
            menu_id: entry.menu_id,
            price: entry.price,
        });
    }
    order.status = OrderStatus::Matched;

    Ok(order.clone())
}

/// Explicit, user-initiated cancellation of a pending order.
///
/// Removes the order's items, refunds `owner_paid_amount` to the owner,
/// and marks the order `Cancelled`. The row is retained, unlike the
/// expiry path's delete. The matcher's ledger is never touched here.
pub fn cancel_order(state: &mut State, order_id: OrderId, requester_id: UserId) -> Result<Order> {
    let order = state
        .orders
        .get(order_id)
        .ok_or(SplitcartError::OrderNotFound(order_id))?;
    if requester_id != order.creator_id && requester_id != order.owner_id {
        return Err(SplitcartError::Forbidden);
    }
    if order.status != OrderStatus::Pending {
        return Err(SplitcartError::InvalidState {
            status: order.status,
        });
    }
    let (owner_id, refund) = (order.owner_id, order.owner_paid_amount);

    state.ledger.credit(owner_id, refund);
    let order = state
        .orders
        .get_mut(order_id)
        .ok_or(SplitcartError::OrderNotFound(order_id))?;
    order.items.clear();
    order.status = OrderStatus::Cancelled;
    let cancelled = order.clone();

    tracing::info!(order = %order_id, owner = %owner_id, refund, "order cancelled");
    Ok(cancelled)
}

/// Scheduler-driven auto-cancel, called when an expiry timer fires.
///
/// Reloads the order under the caller's lock and backs off unless it is
/// still pending and past its deadline. Otherwise: refund the owner's
/// `owner_paid_amount`, delete the order record, and post exactly one
/// expiry notification to the owner.
pub fn expire_order(state: &mut State, order_id: OrderId, now: DateTime<Utc>) -> ExpiryOutcome {
    let Some(order) = state.orders.get(order_id) else {
        return ExpiryOutcome::Missed;
    };
    if order.status != OrderStatus::Pending {
        tracing::debug!(order = %order_id, status = %order.status, "expiry timer missed");
        return ExpiryOutcome::Missed;
    }
    if now < order.expires_at {
        return ExpiryOutcome::NotDue;
    }

    let (owner_id, refund) = (order.owner_id, order.owner_paid_amount);
    let window_minutes = (order.expires_at - order.created_at).num_minutes();

    state.ledger.credit(owner_id, refund);
    state.orders.remove(order_id);
    state.mailbox.post(
        owner_id,
        "Match failed",
        format!("Order {order_id} was not matched within {window_minutes} minutes and was auto-cancelled."),
        now,
    );

    tracing::info!(order = %order_id, owner = %owner_id, refund, "order expired");
    ExpiryOutcome::Expired
}

/// Pending orders in a category whose store is within `radius_meters`
/// of the observer. Stores without coordinates are unreachable and never
/// returned.
#[must_use]
pub fn discover(
    state: &State,
    category: &str,
    observer: Option<Coordinates>,
    radius_meters: f64,
) -> Vec<Order> {
    state
        .orders
        .pending_in(category, &state.catalog)
        .into_iter()
        .filter(|order| {
            let store_coords = state
                .catalog
                .store(order.store_id)
                .and_then(|store| store.coords);
            within(observer, store_coords, radius_meters)
        })
        .cloned()
        .collect()
}
