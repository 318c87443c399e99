//! Store and menu reference data.
//!
//! Immutable from the engine's point of view: orders and carts snapshot
//! prices at the moment of insertion, so later edits to a menu never
//! retroactively change an order.

use serde::{Deserialize, Serialize};

use crate::{Coordinates, MenuId, StoreId};

/// A delivery store. `minimum_price` is the joint-order floor; the
/// `delivery_tip` is a flat fee split between the owner and the matched
/// participant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
    pub id: StoreId,
    pub name: String,
    pub category: String,
    /// Address string, as registered.
    pub location: Option<String>,
    /// Geocoded coordinates; absent coordinates exclude the store from
    /// radius-filtered discovery.
    pub coords: Option<Coordinates>,
    /// Minimum combined order total (KRW) the store will deliver for.
    pub minimum_price: i64,
    /// Flat delivery fee (KRW).
    pub delivery_tip: i64,
    /// Advertised delivery delay in minutes. Advisory only.
    pub delivery_delay_minutes: u32,
}

impl Store {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        minimum_price: i64,
        delivery_tip: i64,
    ) -> Self {
        Self {
            id: StoreId::new(),
            name: name.into(),
            category: category.into(),
            location: None,
            coords: None,
            minimum_price,
            delivery_tip,
            delivery_delay_minutes: 30,
        }
    }

    #[must_use]
    pub fn with_coords(mut self, coords: Coordinates) -> Self {
        self.coords = Some(coords);
        self
    }
}

/// A single menu item, owned by exactly one store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Menu {
    pub id: MenuId,
    pub store_id: StoreId,
    pub name: String,
    /// Price in KRW.
    pub price: i64,
}

impl Menu {
    #[must_use]
    pub fn new(store_id: StoreId, name: impl Into<String>, price: i64) -> Self {
        Self {
            id: MenuId::new(),
            store_id,
            name: name.into(),
            price,
        }
    }
}
