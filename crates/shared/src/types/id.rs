//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing a `NotificationId` where an
//! `ActivityId` is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Creates a new random ID using UUID v7 (time-ordered).
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates an ID from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

typed_id!(UserId, "Unique identifier for a user (the dashboard owner).");
typed_id!(SummaryId, "Unique identifier for a dashboard summary row.");
typed_id!(NotificationId, "Unique identifier for a notification.");
typed_id!(ActivityId, "Unique identifier for an activity feed entry.");

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_new_ids_are_unique() {
        assert_ne!(NotificationId::new(), NotificationId::new());
    }

    #[test]
    fn test_roundtrip_through_uuid() {
        let uuid = Uuid::new_v4();
        let id = ActivityId::from_uuid(uuid);
        assert_eq!(id.into_inner(), uuid);
    }

    #[test]
    fn test_display_and_parse() {
        let id = UserId::new();
        let parsed = UserId::from_str(&id.to_string()).expect("should parse");
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(UserId::from_str("not-a-uuid").is_err());
    }

    #[test]
    fn test_serde_is_transparent() {
        let id = SummaryId::new();
        let json = serde_json::to_string(&id).expect("should serialize");
        assert_eq!(json, format!("\"{}\"", id.0));
    }
}
