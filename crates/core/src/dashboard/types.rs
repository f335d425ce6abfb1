//! Dashboard domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use pulseboard_shared::types::{ActivityId, NotificationId, SummaryId};

/// Headline metrics for one user's dashboard.
///
/// At most one row exists per owner; absence means no dashboard yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Summary row ID.
    pub id: SummaryId,
    /// Total registered users.
    pub total_users: i64,
    /// Signups recorded today.
    pub new_signups_today: i32,
    /// Users active today.
    pub active_users: i64,
    /// Revenue recorded today.
    pub revenue_today: Decimal,
    /// Conversion rate as a percentage value (4.2 renders as "4.2%").
    pub conversion_rate: Decimal,
}

/// Notification kind, narrowed from the store's open string field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// Something completed successfully.
    Success,
    /// Something needs attention soon.
    Warning,
    /// Informational only.
    Info,
    /// Something failed.
    Error,
}

impl NotificationKind {
    /// Parses a raw store value, ASCII case-insensitively.
    ///
    /// Returns `None` for anything outside the closed enumeration.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "success" => Some(Self::Success),
            "warning" => Some(Self::Warning),
            "info" => Some(Self::Info),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    /// Narrows a raw store value into the closed enumeration.
    ///
    /// Unrecognized values fall back to `Info`: the record stays renderable
    /// and the enumeration is never extended by data.
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        Self::parse(raw).unwrap_or(Self::Info)
    }

    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw notification row as returned by the store.
///
/// The kind field is still an open string; [`Notification::from_row`]
/// narrows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRow {
    /// Notification ID.
    pub id: NotificationId,
    /// Unvalidated kind value.
    pub kind: String,
    /// Short title.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Whether the owner has read it.
    pub read: bool,
    /// Free-form severity label.
    pub severity: String,
    /// Creation time.
    pub created_at: DateTime<Utc>,
}

/// A notification owned by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Notification ID.
    pub id: NotificationId,
    /// Narrowed kind.
    pub kind: NotificationKind,
    /// Short title.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Whether the owner has read it.
    pub read: bool,
    /// Free-form severity label.
    pub severity: String,
    /// Creation time. Display order is newest first.
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Builds a notification from a raw store row, narrowing the kind.
    ///
    /// An unrecognized kind is logged and rendered as `Info`.
    #[must_use]
    pub fn from_row(row: NotificationRow) -> Self {
        let kind = NotificationKind::parse(&row.kind).unwrap_or_else(|| {
            tracing::warn!(
                id = %row.id,
                raw = %row.kind,
                "unrecognized notification kind, rendering as info"
            );
            NotificationKind::Info
        });

        Self {
            id: row.id,
            kind,
            title: row.title,
            message: row.message,
            read: row.read,
            severity: row.severity,
            created_at: row.created_at,
        }
    }
}

/// An activity feed entry owned by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Activity ID.
    pub id: ActivityId,
    /// Display name of the actor.
    pub user_name: String,
    /// Free-text description of what happened.
    pub action: String,
    /// Creation time. Display order is newest first.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("success", NotificationKind::Success)]
    #[case("warning", NotificationKind::Warning)]
    #[case("info", NotificationKind::Info)]
    #[case("error", NotificationKind::Error)]
    #[case("WARNING", NotificationKind::Warning)]
    #[case("Error", NotificationKind::Error)]
    fn test_kind_parse_recognized(#[case] raw: &str, #[case] expected: NotificationKind) {
        assert_eq!(NotificationKind::parse(raw), Some(expected));
        assert_eq!(NotificationKind::from_raw(raw), expected);
    }

    #[rstest]
    #[case("critical")]
    #[case("")]
    #[case("warn")]
    #[case("information")]
    fn test_kind_unrecognized_falls_back_to_info(#[case] raw: &str) {
        assert_eq!(NotificationKind::parse(raw), None);
        assert_eq!(NotificationKind::from_raw(raw), NotificationKind::Info);
    }

    #[test]
    fn test_kind_wire_roundtrip() {
        for kind in [
            NotificationKind::Success,
            NotificationKind::Warning,
            NotificationKind::Info,
            NotificationKind::Error,
        ] {
            assert_eq!(NotificationKind::from_raw(kind.as_str()), kind);
        }
    }

    #[test]
    fn test_kind_serde_uses_lowercase() {
        let json = serde_json::to_string(&NotificationKind::Warning).expect("should serialize");
        assert_eq!(json, "\"warning\"");
    }

    #[test]
    fn test_from_row_preserves_fields() {
        let row = NotificationRow {
            id: NotificationId::new(),
            kind: "warning".to_string(),
            title: "Trial Ending Soon".to_string(),
            message: "Your free trial ends in 3 days!".to_string(),
            read: false,
            severity: "high".to_string(),
            created_at: Utc::now(),
        };

        let notification = Notification::from_row(row.clone());
        assert_eq!(notification.id, row.id);
        assert_eq!(notification.kind, NotificationKind::Warning);
        assert_eq!(notification.title, row.title);
        assert_eq!(notification.message, row.message);
        assert!(!notification.read);
        assert_eq!(notification.severity, "high");
        assert_eq!(notification.created_at, row.created_at);
    }
}
