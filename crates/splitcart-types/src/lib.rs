//! # splitcart-types
//!
//! Shared types, errors, and configuration for the **Splitcart**
//! joint-order core.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`UserId`], [`StoreId`], [`MenuId`], [`OrderId`], [`NotificationId`]
//! - **Entities**: [`User`], [`Store`], [`Menu`], [`CartEntry`], [`Order`], [`OrderItem`], [`Notification`]
//! - **Order lifecycle**: [`OrderStatus`], [`SplitType`]
//! - **Geo math**: [`Coordinates`], [`distance`], [`within`]
//! - **Configuration**: [`EngineConfig`]
//! - **Errors**: [`SplitcartError`] with `SC_ERR_` prefix codes
//! - **Constants**: system-wide defaults

pub mod cart;
pub mod config;
pub mod constants;
pub mod error;
pub mod geo;
pub mod ids;
pub mod notification;
pub mod order;
pub mod store;
pub mod user;

// Re-export all primary types at crate root for ergonomic imports:
//   use splitcart_types::{Order, OrderStatus, SplitType, ...};

pub use cart::*;
pub use config::*;
pub use error::*;
pub use geo::*;
pub use ids::*;
pub use notification::*;
pub use order::*;
pub use store::*;
pub use user::*;

// Constants are accessed via `splitcart_types::constants::FOO`
// (not re-exported to avoid name collisions).
