//! Dashboard aggregation session.
//!
//! One session per mounted dashboard view. `refresh` fans out the three
//! owner-scoped reads concurrently, waits for all of them, and reconciles the
//! view model only when every read succeeded, never a partial overwrite.
//! Mutations are pessimistic: the remote write happens first and local state
//! changes only on confirmed success.

use tokio::sync::{RwLock, RwLockReadGuard};
use tracing::{debug, warn};

use pulseboard_shared::types::{ActivityId, NotificationId};

use crate::identity::CurrentUser;

use super::state::{DashboardSnapshot, DashboardState};
use super::store::{DashboardStore, StoreError};
use super::types::Notification;

#[derive(Debug, Default)]
struct Inner {
    state: DashboardState,
    // Fetch cycle counter. A completion whose epoch is no longer current
    // lost a race against a newer refresh and must not touch the state.
    epoch: u64,
}

/// Aggregation session for one authenticated dashboard view.
///
/// The session is the single writer of the view model; renderers read through
/// [`DashboardSession::state`] and report intent via the mutation operations.
#[derive(Debug)]
pub struct DashboardSession<S> {
    store: S,
    user: Option<CurrentUser>,
    inner: RwLock<Inner>,
}

impl<S: DashboardStore> DashboardSession<S> {
    /// Creates a session with no identity.
    ///
    /// `refresh` stays a no-op until a user is set.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            user: None,
            inner: RwLock::new(Inner::default()),
        }
    }

    /// Creates a session for the given user.
    #[must_use]
    pub fn with_user(store: S, user: CurrentUser) -> Self {
        Self {
            store,
            user: Some(user),
            inner: RwLock::new(Inner::default()),
        }
    }

    /// The user this session is scoped to, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&CurrentUser> {
        self.user.as_ref()
    }

    /// Replaces the session identity and resets the view model.
    ///
    /// A previous owner's rows must never linger for the new one; the caller
    /// triggers `refresh` explicitly after the change.
    pub fn set_user(&mut self, user: Option<CurrentUser>) {
        self.user = user;
        self.inner.get_mut().state.reset();
    }

    /// Read access to the view model.
    pub async fn state(&self) -> RwLockReadGuard<'_, DashboardState> {
        RwLockReadGuard::map(self.inner.read().await, |inner| &inner.state)
    }

    /// Fetches the summary, notifications, and activities for the current
    /// user and reconciles the view model.
    ///
    /// With no current user this is a no-op: no store call, no state change,
    /// no error. The three reads are issued concurrently and all of them
    /// settle before reconciliation; on the first failure the previous state
    /// is preserved and a single error description is recorded. A completion
    /// that lost a race against a newer refresh is discarded.
    pub async fn refresh(&self) {
        let Some(user) = &self.user else {
            debug!("refresh skipped: no current user");
            return;
        };
        let owner = user.id;

        let epoch = {
            let mut inner = self.inner.write().await;
            inner.epoch += 1;
            inner.state.begin_fetch();
            inner.epoch
        };

        // The lock is not held across store I/O.
        let (summary, notifications, activities) = tokio::join!(
            self.store.load_summary(owner),
            self.store.load_notifications(owner),
            self.store.load_activities(owner),
        );

        let outcome = summary.and_then(|summary| {
            notifications
                .and_then(|rows| activities.map(|activities| (summary, rows, activities)))
        });

        let mut inner = self.inner.write().await;
        if inner.epoch != epoch {
            debug!(epoch, current = inner.epoch, "discarding stale fetch completion");
            return;
        }

        match outcome {
            Ok((summary, rows, mut activities)) => {
                let mut notifications: Vec<Notification> =
                    rows.into_iter().map(Notification::from_row).collect();
                notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                activities.sort_by(|a, b| b.created_at.cmp(&a.created_at));

                debug!(
                    notifications = notifications.len(),
                    activities = activities.len(),
                    has_summary = summary.is_some(),
                    "dashboard fetch reconciled"
                );
                inner.state.apply_snapshot(DashboardSnapshot {
                    summary,
                    notifications,
                    activities,
                });
            }
            Err(error) => {
                warn!(error = %error, owner = %owner, "dashboard fetch failed");
                inner.state.apply_fetch_error(error.to_string());
            }
        }
    }

    // ========================================================================
    // Mutations
    //
    // Each operation reports its outcome to its own caller; a failure here
    // never touches the shared fetch error. A failed single-item delete must
    // not blank out an otherwise healthy view.
    // ========================================================================

    /// Deletes one notification remotely, then removes it from the view.
    pub async fn delete_notification(&self, id: NotificationId) -> Result<(), StoreError> {
        self.store.delete_notification(id).await?;
        self.inner.write().await.state.remove_notification(id);
        Ok(())
    }

    /// Sets one notification's read flag remotely, then in the view.
    ///
    /// The caller supplies the desired end state, not a toggle.
    pub async fn set_notification_read(
        &self,
        id: NotificationId,
        read: bool,
    ) -> Result<(), StoreError> {
        self.store.set_notification_read(id, read).await?;
        self.inner.write().await.state.set_notification_read(id, read);
        Ok(())
    }

    /// Deletes one activity remotely, then removes it from the view.
    pub async fn delete_activity(&self, id: ActivityId) -> Result<(), StoreError> {
        self.store.delete_activity(id).await?;
        self.inner.write().await.state.remove_activity(id);
        Ok(())
    }

    /// Deletes all of the current user's notifications, then empties the
    /// collection regardless of the reported row count.
    pub async fn clear_all_notifications(&self) -> Result<(), StoreError> {
        let Some(user) = &self.user else {
            return Ok(());
        };

        let cleared = self.store.clear_notifications(user.id).await?;
        debug!(cleared, "notifications cleared");
        self.inner.write().await.state.clear_notifications();
        Ok(())
    }

    /// Deletes all of the current user's activities, then empties the
    /// collection regardless of the reported row count.
    pub async fn clear_all_activities(&self) -> Result<(), StoreError> {
        let Some(user) = &self.user else {
            return Ok(());
        };

        let cleared = self.store.clear_activities(user.id).await?;
        debug!(cleared, "activities cleared");
        self.inner.write().await.state.clear_activities();
        Ok(())
    }
}
