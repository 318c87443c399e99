//! Globally unique identifiers used throughout Splitcart.
//!
//! All entity IDs use UUIDv7 for time-ordered lexicographic sorting, so
//! listing entities by ID also lists them by creation time.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! define_id {
    ($(#[$doc:meta])* $name:ident, $prefix:literal) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize,
        )]
        pub struct $name(pub Uuid);

        impl $name {
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            #[must_use]
            pub fn from_bytes(bytes: [u8; 16]) -> Self {
                Self(Uuid::from_bytes(bytes))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, ":{}"), self.0)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a user account.
    UserId,
    "user"
);

define_id!(
    /// Unique identifier for a store.
    StoreId,
    "store"
);

define_id!(
    /// Unique identifier for a menu item within a store.
    MenuId,
    "menu"
);

define_id!(
    /// Unique identifier for a joint order.
    OrderId,
    "order"
);

define_id!(
    /// Unique identifier for a mailbox notification.
    NotificationId,
    "notif"
);
