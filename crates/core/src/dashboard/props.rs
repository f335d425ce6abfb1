//! Property-based tests for notification kind narrowing.
//!
//! The kind field arrives from the store as an open string; narrowing must be
//! total and must never invent a new enumeration member.

use proptest::prelude::*;

use super::types::NotificationKind;

const RECOGNIZED: [&str; 4] = ["success", "warning", "info", "error"];

proptest! {
    /// Narrowing accepts any string without panicking.
    #[test]
    fn prop_from_raw_is_total(raw in ".*") {
        let _ = NotificationKind::from_raw(&raw);
    }

    /// Anything outside the closed enumeration falls back to Info.
    #[test]
    fn prop_unknown_values_fall_back_to_info(raw in "[a-zA-Z]{1,16}") {
        prop_assume!(!RECOGNIZED.contains(&raw.to_ascii_lowercase().as_str()));
        prop_assert_eq!(NotificationKind::from_raw(&raw), NotificationKind::Info);
    }

    /// Recognized values survive a wire round trip regardless of case.
    #[test]
    fn prop_recognized_values_roundtrip(index in 0usize..4, upper in any::<bool>()) {
        let raw = if upper {
            RECOGNIZED[index].to_ascii_uppercase()
        } else {
            RECOGNIZED[index].to_string()
        };
        let kind = NotificationKind::from_raw(&raw);
        prop_assert_eq!(kind.as_str(), RECOGNIZED[index]);
    }
}
