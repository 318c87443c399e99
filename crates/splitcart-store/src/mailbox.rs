//! Notification mailbox.
//!
//! Durable pull-based delivery: the engine appends, clients poll unread
//! rows and mark them read. Appends are infallible — the engine treats
//! notification as best-effort and never rolls back an order mutation
//! over it.

use chrono::{DateTime, Utc};
use splitcart_types::{Notification, NotificationId, Result, SplitcartError, UserId};

/// Append-only notification rows.
#[derive(Debug, Default)]
pub struct Mailbox {
    notifications: Vec<Notification>,
}

impl Mailbox {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a notification for a user. Fire-and-forget.
    pub fn post(
        &mut self,
        user_id: UserId,
        title: impl Into<String>,
        message: impl Into<String>,
        now: DateTime<Utc>,
    ) -> NotificationId {
        let notification = Notification::new(user_id, title, message, now);
        let id = notification.id;
        tracing::debug!(user = %user_id, notification = %id, "mailbox post");
        self.notifications.push(notification);
        id
    }

    /// Unread notifications for a user, newest first.
    #[must_use]
    pub fn unread(&self, user_id: UserId) -> Vec<&Notification> {
        let mut rows: Vec<&Notification> = self
            .notifications
            .iter()
            .filter(|n| n.user_id == user_id && !n.is_read)
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        rows
    }

    /// Mark one notification read.
    ///
    /// # Errors
    /// Returns `NotificationNotFound` for an unknown ID.
    pub fn mark_read(&mut self, id: NotificationId) -> Result<()> {
        let row = self
            .notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(SplitcartError::NotificationNotFound(id))?;
        row.is_read = true;
        Ok(())
    }

    /// Total rows ever posted. Test helper.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn unread_newest_first() {
        let mut mailbox = Mailbox::new();
        let user = UserId::new();
        let t0 = Utc::now();
        mailbox.post(user, "first", "m1", t0);
        mailbox.post(user, "second", "m2", t0 + Duration::seconds(5));
        mailbox.post(UserId::new(), "other", "m3", t0);
        let unread = mailbox.unread(user);
        assert_eq!(unread.len(), 2);
        assert_eq!(unread[0].title, "second");
    }

    #[test]
    fn mark_read_removes_from_unread() {
        let mut mailbox = Mailbox::new();
        let user = UserId::new();
        let id = mailbox.post(user, "match", "matched", Utc::now());
        mailbox.mark_read(id).unwrap();
        assert!(mailbox.unread(user).is_empty());
    }

    #[test]
    fn mark_read_unknown_fails() {
        let mut mailbox = Mailbox::new();
        let err = mailbox.mark_read(NotificationId::new()).unwrap_err();
        assert!(matches!(err, SplitcartError::NotificationNotFound(_)));
    }
}
