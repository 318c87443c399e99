//! Order types — the central entity of the joint-order lifecycle.
//!
//! An order is opened by an owner from their cart, sits in `Pending` until
//! a second user matches it or the expiry timer fires, and is immutable to
//! further matching once `Matched`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Coordinates, MenuId, OrderId, StoreId, UserId};

/// Payment mode chosen at order creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SplitType {
    /// Split the combined total evenly: the owner pre-pays half total plus
    /// half tip at creation; the matcher pays the complementary half,
    /// fixed at creation as `owner_paid_amount`.
    Even,
    /// Separate carts: each participant pays for their own items plus
    /// half the delivery tip.
    Separate,
}

impl std::fmt::Display for SplitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Even => write!(f, "EVEN"),
            Self::Separate => write!(f, "SEPARATE"),
        }
    }
}

/// Lifecycle status of an order.
///
/// There is deliberately no `Completed`: the lifecycle ends at `Matched`,
/// `Cancelled`, or deletion by the expiry scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Open for matching; exactly one contributor (the owner) has items.
    Pending,
    /// A second user joined; settlement done; no further matching.
    Matched,
    /// Explicitly cancelled by the owner; row retained, items removed.
    Cancelled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "PENDING"),
            Self::Matched => write!(f, "MATCHED"),
            Self::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

/// One contributed line on an order. Append-only: never mutated after
/// insertion, only the owning order's status changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub order_id: OrderId,
    /// Which participant contributed this line.
    pub user_id: UserId,
    pub menu_id: MenuId,
    /// Price at the time the line entered a cart.
    pub price: i64,
}

/// A joint purchase request against one store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// Who opened the order. Always equals `owner_id` in this design;
    /// kept separate to match the durable shape.
    pub creator_id: UserId,
    pub owner_id: UserId,
    pub store_id: StoreId,
    /// Delivery address string.
    pub delivery_location: String,
    /// Unit / building detail.
    pub detailed_location: Option<String>,
    pub delivery_coords: Option<Coordinates>,
    pub split_type: SplitType,
    /// What the owner was debited at creation. Fixed; never recomputed.
    pub owner_paid_amount: i64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    /// Contributed lines in insertion order, partitioned by contributor.
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Sum of the lines contributed by the given user.
    #[must_use]
    pub fn contribution_of(&self, user_id: UserId) -> i64 {
        self.items
            .iter()
            .filter(|item| item.user_id == user_id)
            .map(|item| item.price)
            .sum()
    }

    /// Sum of the owner's lines — the creation-time cart total.
    #[must_use]
    pub fn owner_total(&self) -> i64 {
        self.contribution_of(self.owner_id)
    }

    /// Distinct contributors, in first-contribution order.
    #[must_use]
    pub fn contributors(&self) -> Vec<UserId> {
        let mut seen = Vec::new();
        for item in &self.items {
            if !seen.contains(&item.user_id) {
                seen.push(item.user_id);
            }
        }
        seen
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == OrderStatus::Pending
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Order {
    pub fn dummy(owner_id: UserId, store_id: StoreId, split_type: SplitType, paid: i64) -> Self {
        let now = Utc::now();
        Self {
            id: OrderId::new(),
            creator_id: owner_id,
            owner_id,
            store_id,
            delivery_location: "1 Test St".to_string(),
            detailed_location: None,
            delivery_coords: None,
            split_type,
            owner_paid_amount: paid,
            status: OrderStatus::Pending,
            created_at: now,
            expires_at: now + chrono::Duration::minutes(30),
            items: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display() {
        assert_eq!(format!("{}", OrderStatus::Pending), "PENDING");
        assert_eq!(format!("{}", OrderStatus::Matched), "MATCHED");
        assert_eq!(format!("{}", OrderStatus::Cancelled), "CANCELLED");
    }

    #[test]
    fn split_type_display() {
        assert_eq!(format!("{}", SplitType::Even), "EVEN");
        assert_eq!(format!("{}", SplitType::Separate), "SEPARATE");
    }

    #[test]
    fn contribution_partitions_by_user() {
        let owner = UserId::new();
        let matcher = UserId::new();
        let store = StoreId::new();
        let mut order = Order::dummy(owner, store, SplitType::Separate, 10000);
        order.items.push(OrderItem {
            order_id: order.id,
            user_id: owner,
            menu_id: MenuId::new(),
            price: 8000,
        });
        order.items.push(OrderItem {
            order_id: order.id,
            user_id: matcher,
            menu_id: MenuId::new(),
            price: 5000,
        });
        order.items.push(OrderItem {
            order_id: order.id,
            user_id: owner,
            menu_id: MenuId::new(),
            price: 2000,
        });
        assert_eq!(order.owner_total(), 10000);
        assert_eq!(order.contribution_of(matcher), 5000);
        assert_eq!(order.contributors(), vec![owner, matcher]);
    }

    #[test]
    fn serde_roundtrip() {
        let order = Order::dummy(UserId::new(), StoreId::new(), SplitType::Even, 11000);
        let json = serde_json::to_string(&order).unwrap();
        let back: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, order.id);
        assert_eq!(back.status, OrderStatus::Pending);
    }
}
