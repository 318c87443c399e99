//! Error types for the Splitcart order engine.
//!
//! All errors use the `SC_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Order lifecycle errors
//! - 2xx: Ledger errors
//! - 3xx: Cart errors
//! - 4xx: Pricing errors
//! - 5xx: Lookup errors

use thiserror::Error;

use crate::{MenuId, NotificationId, OrderId, OrderStatus, StoreId, UserId};

/// Central error enum for all Splitcart operations.
///
/// Every variant is a rejection of a single call, never process-fatal.
/// Engine operations validate all preconditions before mutating anything
/// and return the first violated precondition.
#[derive(Debug, Error)]
pub enum SplitcartError {
    // =================================================================
    // Order Lifecycle Errors (1xx)
    // =================================================================
    /// The requested order does not exist (never created, expired, or
    /// deleted by the scheduler).
    #[error("SC_ERR_100: Order not found: {0}")]
    OrderNotFound(OrderId),

    /// The operation requires the order to be in a different status.
    #[error("SC_ERR_101: Order status is {status}, operation not allowed")]
    InvalidState { status: OrderStatus },

    /// A user attempted to match their own order.
    #[error("SC_ERR_102: Cannot match your own order")]
    SelfMatch,

    /// The requesting user is neither the creator nor the owner.
    #[error("SC_ERR_103: No permission to modify this order")]
    Forbidden,

    // =================================================================
    // Ledger Errors (2xx)
    // =================================================================
    /// Not enough credit to cover the charge.
    #[error("SC_ERR_200: Insufficient credit: need {needed}, have {available}")]
    InsufficientCredit { needed: i64, available: i64 },

    // =================================================================
    // Cart Errors (3xx)
    // =================================================================
    /// The cart is empty where a non-empty cart is required.
    #[error("SC_ERR_300: Cart is empty")]
    EmptyCart,

    /// The cart contains a menu from a different store.
    #[error("SC_ERR_301: Cart contains menu from a different store")]
    CrossStoreCart,

    /// The menu is already in the cart.
    #[error("SC_ERR_302: Menu already in cart: {0}")]
    DuplicateCartEntry(MenuId),

    // =================================================================
    // Pricing Errors (4xx)
    // =================================================================
    /// The order total does not reach the store's minimum order price.
    #[error("SC_ERR_400: Order total {total} is below store minimum {minimum}")]
    BelowMinimum { total: i64, minimum: i64 },

    // =================================================================
    // Lookup Errors (5xx)
    // =================================================================
    /// The user does not exist.
    #[error("SC_ERR_500: User not found: {0}")]
    UserNotFound(UserId),

    /// The store does not exist.
    #[error("SC_ERR_501: Store not found: {0}")]
    StoreNotFound(StoreId),

    /// The menu does not exist (or does not belong to the given store).
    #[error("SC_ERR_502: Menu not found: {0}")]
    MenuNotFound(MenuId),

    /// The notification does not exist.
    #[error("SC_ERR_503: Notification not found: {0}")]
    NotificationNotFound(NotificationId),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, SplitcartError>;
