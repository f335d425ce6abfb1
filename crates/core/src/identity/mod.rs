//! Current-user abstraction.
//!
//! Pulseboard never authenticates anyone itself. An external provider
//! supplies the current user; the aggregation session treats its absence as
//! "not yet ready" rather than an error.

use std::sync::atomic::{AtomicBool, Ordering};

use pulseboard_shared::types::UserId;

/// The authenticated user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    /// User ID. All store reads and writes are scoped to it.
    pub id: UserId,
    /// Email address.
    pub email: String,
    /// Display name, when the provider has one.
    pub display_name: Option<String>,
}

impl CurrentUser {
    /// Returns avatar initials: the first letter of each display-name word,
    /// falling back to the first letter of the email, then to `"U"`.
    #[must_use]
    pub fn initials(&self) -> String {
        if let Some(name) = self.display_name.as_deref() {
            let initials: String = name
                .split_whitespace()
                .filter_map(|word| word.chars().next())
                .collect();
            if !initials.is_empty() {
                return initials.to_uppercase();
            }
        }

        self.email
            .chars()
            .next()
            .map_or_else(|| "U".to_string(), |c| c.to_uppercase().to_string())
    }
}

/// Source of the ambient current user.
pub trait IdentityProvider: Send + Sync {
    /// Returns the current user, or `None` when signed out.
    fn current_user(&self) -> Option<CurrentUser>;

    /// Signs the current user out.
    fn sign_out(&self);
}

/// Fixed-identity provider for tools and tests.
///
/// Holds one user for the lifetime of the process; `sign_out` flips an
/// atomic flag instead of talking to a real provider.
#[derive(Debug)]
pub struct StaticIdentity {
    user: Option<CurrentUser>,
    signed_out: AtomicBool,
}

impl StaticIdentity {
    /// Creates a provider reporting the given user (or nobody).
    #[must_use]
    pub const fn new(user: Option<CurrentUser>) -> Self {
        Self {
            user,
            signed_out: AtomicBool::new(false),
        }
    }
}

impl IdentityProvider for StaticIdentity {
    fn current_user(&self) -> Option<CurrentUser> {
        if self.signed_out.load(Ordering::Relaxed) {
            None
        } else {
            self.user.clone()
        }
    }

    fn sign_out(&self) {
        self.signed_out.store(true, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn user(email: &str, display_name: Option<&str>) -> CurrentUser {
        CurrentUser {
            id: UserId::new(),
            email: email.to_string(),
            display_name: display_name.map(String::from),
        }
    }

    #[rstest]
    #[case(Some("Jane Smith"), "JS")]
    #[case(Some("Cher"), "C")]
    #[case(Some("ada anne lovelace"), "AAL")]
    #[case(Some("   "), "T")]
    #[case(None, "T")]
    fn test_initials(#[case] display_name: Option<&str>, #[case] expected: &str) {
        assert_eq!(user("test@example.com", display_name).initials(), expected);
    }

    #[test]
    fn test_initials_fallback_with_empty_email() {
        assert_eq!(user("", None).initials(), "U");
    }

    #[test]
    fn test_static_identity_sign_out() {
        let provider = StaticIdentity::new(Some(user("test@example.com", None)));
        assert!(provider.current_user().is_some());

        provider.sign_out();
        assert!(provider.current_user().is_none());

        // Signing out twice is harmless.
        provider.sign_out();
        assert!(provider.current_user().is_none());
    }

    #[test]
    fn test_static_identity_without_user() {
        let provider = StaticIdentity::new(None);
        assert!(provider.current_user().is_none());
    }
}
