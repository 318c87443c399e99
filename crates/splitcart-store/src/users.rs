//! User directory.
//!
//! Users are created on first login: `register` is idempotent on email,
//! returning the existing record when the address is already known.

use std::collections::HashMap;

use splitcart_types::{Coordinates, Result, SplitcartError, User, UserId};

/// User records keyed by ID, with an email lookup.
#[derive(Debug, Default)]
pub struct UserDirectory {
    users: HashMap<UserId, User>,
}

impl UserDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Find-or-create by email. Returns a clone of the stored record.
    pub fn register(&mut self, email: &str, name: &str) -> User {
        if let Some(existing) = self.find_by_email(email) {
            return existing.clone();
        }
        let user = User::new(email, name);
        self.users.insert(user.id, user.clone());
        user
    }

    /// Overwrite a user's saved delivery address. Coordinates come from
    /// an external geocoder; `None` marks the address as unresolved,
    /// which keeps the user out of radius-filtered discovery.
    ///
    /// # Errors
    /// Returns `UserNotFound` for an unknown user.
    pub fn update_address(
        &mut self,
        user_id: UserId,
        address: impl Into<String>,
        detail: Option<String>,
        coords: Option<Coordinates>,
    ) -> Result<&User> {
        let user = self
            .users
            .get_mut(&user_id)
            .ok_or(SplitcartError::UserNotFound(user_id))?;
        user.address = Some(address.into());
        user.detailed_address = detail;
        user.coords = coords;
        Ok(user)
    }

    #[must_use]
    pub fn get(&self, user_id: UserId) -> Option<&User> {
        self.users.get(&user_id)
    }

    pub fn get_mut(&mut self, user_id: UserId) -> Option<&mut User> {
        self.users.get_mut(&user_id)
    }

    #[must_use]
    pub fn contains(&self, user_id: UserId) -> bool {
        self.users.contains_key(&user_id)
    }

    #[must_use]
    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users.values().find(|user| user.email == email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_creates_once() {
        let mut dir = UserDirectory::new();
        let first = dir.register("kim@example.com", "Kim");
        let second = dir.register("kim@example.com", "Someone Else");
        assert_eq!(first.id, second.id);
        assert_eq!(second.name, "Kim");
    }

    #[test]
    fn update_address_overwrites_previous() {
        let mut dir = UserDirectory::new();
        let user = dir.register("kim@example.com", "Kim");
        let updated = dir
            .update_address(
                user.id,
                "12 Campus Rd",
                Some("101-202".to_string()),
                Some(Coordinates::new(37.5665, 126.9780)),
            )
            .unwrap();
        assert_eq!(updated.address.as_deref(), Some("12 Campus Rd"));
        assert_eq!(updated.detailed_address.as_deref(), Some("101-202"));
        assert!(updated.coords.is_some());

        // A move that failed geocoding clears the stale coordinates.
        let updated = dir.update_address(user.id, "1 New St", None, None).unwrap();
        assert_eq!(updated.address.as_deref(), Some("1 New St"));
        assert!(updated.detailed_address.is_none());
        assert!(updated.coords.is_none());
    }

    #[test]
    fn update_address_unknown_user_fails() {
        let mut dir = UserDirectory::new();
        let err = dir.update_address(UserId::new(), "1 New St", None, None).unwrap_err();
        assert!(matches!(err, SplitcartError::UserNotFound(_)));
    }

    #[test]
    fn lookup_by_email() {
        let mut dir = UserDirectory::new();
        let user = dir.register("lee@example.com", "Lee");
        assert_eq!(dir.find_by_email("lee@example.com").map(|u| u.id), Some(user.id));
        assert!(dir.find_by_email("nobody@example.com").is_none());
    }
}
