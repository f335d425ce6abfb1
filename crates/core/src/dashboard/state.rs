//! Pure in-memory view model.
//!
//! [`DashboardState`] holds the canonical copies of the three collections and
//! applies transitions without performing any I/O. The session decides WHEN a
//! transition happens; this module decides WHAT it does, which keeps the
//! whole state machine unit-testable.

use pulseboard_shared::types::{ActivityId, NotificationId};

use super::types::{Activity, DashboardSummary, Notification};

/// Fetch lifecycle phase of the view model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No identity yet; nothing has been fetched.
    #[default]
    Uninitialized,
    /// A fetch cycle is in flight.
    Loading,
    /// The last fetch succeeded.
    Ready,
    /// The last fetch failed; collections are from the last success, if any.
    Errored,
}

/// Result of one successful fetch cycle.
///
/// Applied atomically: either all three collections replace the held ones, or
/// none of them do.
#[derive(Debug, Clone, Default)]
pub struct DashboardSnapshot {
    /// The owner's summary row, if one exists.
    pub summary: Option<DashboardSummary>,
    /// Notifications, newest first.
    pub notifications: Vec<Notification>,
    /// Activities, newest first.
    pub activities: Vec<Activity>,
}

/// The canonical in-memory dashboard view model.
///
/// Owned exclusively by one session per mounted view; renderers receive read
/// access and report intent through the session's operations.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    phase: Phase,
    summary: Option<DashboardSummary>,
    notifications: Vec<Notification>,
    activities: Vec<Activity>,
    error: Option<String>,
}

impl DashboardState {
    /// Creates an empty, uninitialized view model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Read access
    // ========================================================================

    /// Current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether a fetch cycle is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    /// The summary row, if the owner has one.
    #[must_use]
    pub const fn summary(&self) -> Option<&DashboardSummary> {
        self.summary.as_ref()
    }

    /// Notifications, newest first.
    #[must_use]
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    /// Activities, newest first.
    #[must_use]
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// The current fetch error description, if the last fetch failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Number of unread notifications (the badge count).
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    // ========================================================================
    // Fetch transitions
    // ========================================================================

    /// Enters the loading phase and clears any prior error.
    pub fn begin_fetch(&mut self) {
        self.phase = Phase::Loading;
        self.error = None;
    }

    /// Replaces all three collections atomically and enters `Ready`.
    pub fn apply_snapshot(&mut self, snapshot: DashboardSnapshot) {
        self.summary = snapshot.summary;
        self.notifications = snapshot.notifications;
        self.activities = snapshot.activities;
        self.error = None;
        self.phase = Phase::Ready;
    }

    /// Records a fetch failure and enters `Errored`.
    ///
    /// Collections from the last successful fetch are kept untouched; the
    /// single error description is last-wins.
    pub fn apply_fetch_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.phase = Phase::Errored;
    }

    /// Resets to the uninitialized state, discarding all held data.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // ========================================================================
    // Mutation applications
    //
    // Called only after the corresponding remote write succeeded. None of
    // these change the phase or the shared fetch error.
    // ========================================================================

    /// Removes one notification by id. Removing an absent id is a no-op.
    pub fn remove_notification(&mut self, id: NotificationId) {
        self.notifications.retain(|n| n.id != id);
    }

    /// Sets the read flag of one notification to the given value.
    pub fn set_notification_read(&mut self, id: NotificationId, read: bool) {
        if let Some(notification) = self.notifications.iter_mut().find(|n| n.id == id) {
            notification.read = read;
        }
    }

    /// Removes one activity by id. Removing an absent id is a no-op.
    pub fn remove_activity(&mut self, id: ActivityId) {
        self.activities.retain(|a| a.id != id);
    }

    /// Empties the notification collection.
    pub fn clear_notifications(&mut self) {
        self.notifications.clear();
    }

    /// Empties the activity collection.
    pub fn clear_activities(&mut self) {
        self.activities.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::types::NotificationKind;
    use chrono::{Duration, Utc};
    use pulseboard_shared::types::SummaryId;
    use rust_decimal_macros::dec;

    fn summary() -> DashboardSummary {
        DashboardSummary {
            id: SummaryId::new(),
            total_users: 12_345,
            new_signups_today: 78,
            active_users: 5_678,
            revenue_today: dec!(12450),
            conversion_rate: dec!(4.2),
        }
    }

    fn notification(read: bool) -> Notification {
        Notification {
            id: NotificationId::new(),
            kind: NotificationKind::Info,
            title: "New Feature Available".to_string(),
            message: "Advanced Reporting is now available.".to_string(),
            read,
            severity: "info".to_string(),
            created_at: Utc::now(),
        }
    }

    fn activity(user_name: &str) -> Activity {
        Activity {
            id: ActivityId::new(),
            user_name: user_name.to_string(),
            action: "signed up".to_string(),
            created_at: Utc::now(),
        }
    }

    fn populated() -> DashboardState {
        let mut state = DashboardState::new();
        state.begin_fetch();
        state.apply_snapshot(DashboardSnapshot {
            summary: Some(summary()),
            notifications: vec![notification(false), notification(true)],
            activities: vec![activity("JohnDoe"), activity("JaneSmith")],
        });
        state
    }

    #[test]
    fn test_starts_uninitialized_and_empty() {
        let state = DashboardState::new();
        assert_eq!(state.phase(), Phase::Uninitialized);
        assert!(!state.is_loading());
        assert!(state.summary().is_none());
        assert!(state.notifications().is_empty());
        assert!(state.activities().is_empty());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_begin_fetch_enters_loading_and_clears_error() {
        let mut state = DashboardState::new();
        state.apply_fetch_error("boom");
        assert_eq!(state.phase(), Phase::Errored);

        state.begin_fetch();
        assert!(state.is_loading());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_apply_snapshot_replaces_everything() {
        let state = populated();
        assert_eq!(state.phase(), Phase::Ready);
        assert!(state.summary().is_some());
        assert_eq!(state.notifications().len(), 2);
        assert_eq!(state.activities().len(), 2);
        assert!(state.error().is_none());
    }

    #[test]
    fn test_fetch_error_preserves_previous_collections() {
        let mut state = populated();
        state.begin_fetch();
        state.apply_fetch_error("connection refused");

        assert_eq!(state.phase(), Phase::Errored);
        assert_eq!(state.error(), Some("connection refused"));
        assert!(!state.is_loading());
        // Data from the last successful fetch is untouched.
        assert!(state.summary().is_some());
        assert_eq!(state.notifications().len(), 2);
        assert_eq!(state.activities().len(), 2);
    }

    #[test]
    fn test_fetch_error_is_last_wins() {
        let mut state = DashboardState::new();
        state.apply_fetch_error("first");
        state.apply_fetch_error("second");
        assert_eq!(state.error(), Some("second"));
    }

    #[test]
    fn test_remove_notification_is_idempotent() {
        let mut state = populated();
        let id = state.notifications()[0].id;

        state.remove_notification(id);
        assert_eq!(state.notifications().len(), 1);
        assert!(state.notifications().iter().all(|n| n.id != id));

        // Removing again must be a no-op.
        state.remove_notification(id);
        assert_eq!(state.notifications().len(), 1);
    }

    #[test]
    fn test_set_notification_read_round_trip() {
        let mut state = populated();
        let id = state.notifications()[0].id;
        assert!(!state.notifications()[0].read);

        state.set_notification_read(id, true);
        assert!(state.notifications()[0].read);

        state.set_notification_read(id, false);
        assert!(!state.notifications()[0].read);
    }

    #[test]
    fn test_set_read_on_absent_id_is_a_noop() {
        let mut state = populated();
        state.set_notification_read(NotificationId::new(), true);
        assert_eq!(state.unread_count(), 1);
    }

    #[test]
    fn test_unread_count_tracks_badge() {
        let mut state = populated();
        assert_eq!(state.unread_count(), 1);

        state.clear_notifications();
        assert_eq!(state.unread_count(), 0);
        assert!(state.notifications().is_empty());
    }

    #[test]
    fn test_mutations_do_not_change_phase_or_error() {
        let mut state = populated();
        state.apply_fetch_error("stale error");

        state.remove_notification(NotificationId::new());
        state.clear_activities();
        assert_eq!(state.phase(), Phase::Errored);
        assert_eq!(state.error(), Some("stale error"));
    }

    #[test]
    fn test_reset_discards_everything() {
        let mut state = populated();
        state.reset();
        assert_eq!(state.phase(), Phase::Uninitialized);
        assert!(state.summary().is_none());
        assert!(state.notifications().is_empty());
    }

    #[test]
    fn test_snapshot_keeps_given_order() {
        let now = Utc::now();
        let mut oldest = activity("a");
        oldest.created_at = now - Duration::hours(2);
        let mut middle = activity("b");
        middle.created_at = now - Duration::hours(1);
        let mut newest = activity("c");
        newest.created_at = now;

        let mut state = DashboardState::new();
        state.apply_snapshot(DashboardSnapshot {
            summary: None,
            notifications: vec![],
            activities: vec![newest.clone(), middle.clone(), oldest.clone()],
        });

        let names: Vec<&str> = state
            .activities()
            .iter()
            .map(|a| a.user_name.as_str())
            .collect();
        assert_eq!(names, vec!["c", "b", "a"]);
    }
}
