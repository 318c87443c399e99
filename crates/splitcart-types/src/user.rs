//! User account records.
//!
//! Credit is deliberately *not* a field here: balances live in the
//! ledger so that only engine operations can move money.

use serde::{Deserialize, Serialize};

use crate::{Coordinates, UserId};

/// A registered user. Created on first login, keyed by email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: String,
    /// Saved delivery address, as entered by the user.
    pub address: Option<String>,
    /// Unit / building detail ("101-202" etc.).
    pub detailed_address: Option<String>,
    /// Geocoded coordinates of the saved address, if resolution succeeded.
    pub coords: Option<Coordinates>,
}

impl User {
    /// A fresh user record with no saved address.
    #[must_use]
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            email: email.into(),
            name: name.into(),
            address: None,
            detailed_address: None,
            coords: None,
        }
    }
}
