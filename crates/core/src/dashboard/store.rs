//! Remote store contract.
//!
//! The dashboard session talks to an opaque tabular store through this
//! trait: per-owner filtered reads, per-record writes, and owner-scoped bulk
//! deletes. The Postgres implementation lives in `pulseboard-db`; tests use
//! in-memory fakes.

use std::sync::Arc;

use async_trait::async_trait;

use pulseboard_shared::types::{ActivityId, NotificationId, UserId};

use super::types::{Activity, DashboardSummary, NotificationRow};

/// A failure reported by the remote store.
///
/// Carries a human-readable description only; the session either surfaces it
/// as the view's error text or hands it back to the mutation caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct StoreError {
    /// Description of what went wrong.
    pub message: String,
}

impl StoreError {
    /// Creates a store error from any displayable source.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Owner-scoped access to the three dashboard tables.
///
/// Read methods return rows ordered newest first; the session re-sorts after
/// normalization so the display invariant holds for any implementation.
/// Delete methods are idempotent: deleting an id that is already gone
/// succeeds.
#[async_trait]
pub trait DashboardStore: Send + Sync {
    /// Loads the owner's summary row, if one exists.
    async fn load_summary(&self, owner: UserId) -> Result<Option<DashboardSummary>, StoreError>;

    /// Loads all of the owner's notifications.
    async fn load_notifications(&self, owner: UserId) -> Result<Vec<NotificationRow>, StoreError>;

    /// Loads all of the owner's activities.
    async fn load_activities(&self, owner: UserId) -> Result<Vec<Activity>, StoreError>;

    /// Sets the read flag of one notification to the given value.
    async fn set_notification_read(
        &self,
        id: NotificationId,
        read: bool,
    ) -> Result<(), StoreError>;

    /// Deletes one notification by id.
    async fn delete_notification(&self, id: NotificationId) -> Result<(), StoreError>;

    /// Deletes one activity by id.
    async fn delete_activity(&self, id: ActivityId) -> Result<(), StoreError>;

    /// Deletes all of the owner's notifications, returning the rows affected.
    async fn clear_notifications(&self, owner: UserId) -> Result<u64, StoreError>;

    /// Deletes all of the owner's activities, returning the rows affected.
    async fn clear_activities(&self, owner: UserId) -> Result<u64, StoreError>;
}

#[async_trait]
impl<T: DashboardStore + ?Sized> DashboardStore for Arc<T> {
    async fn load_summary(&self, owner: UserId) -> Result<Option<DashboardSummary>, StoreError> {
        (**self).load_summary(owner).await
    }

    async fn load_notifications(&self, owner: UserId) -> Result<Vec<NotificationRow>, StoreError> {
        (**self).load_notifications(owner).await
    }

    async fn load_activities(&self, owner: UserId) -> Result<Vec<Activity>, StoreError> {
        (**self).load_activities(owner).await
    }

    async fn set_notification_read(
        &self,
        id: NotificationId,
        read: bool,
    ) -> Result<(), StoreError> {
        (**self).set_notification_read(id, read).await
    }

    async fn delete_notification(&self, id: NotificationId) -> Result<(), StoreError> {
        (**self).delete_notification(id).await
    }

    async fn delete_activity(&self, id: ActivityId) -> Result<(), StoreError> {
        (**self).delete_activity(id).await
    }

    async fn clear_notifications(&self, owner: UserId) -> Result<u64, StoreError> {
        (**self).clear_notifications(owner).await
    }

    async fn clear_activities(&self, owner: UserId) -> Result<u64, StoreError> {
        (**self).clear_activities(owner).await
    }
}
