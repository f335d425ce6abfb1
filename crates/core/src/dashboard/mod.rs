//! Dashboard aggregation.
//!
//! This module provides the data layer behind a dashboard view:
//! - Domain types for the summary, notifications, and activities
//! - The remote store contract
//! - The pure in-memory view model
//! - The aggregation session tying them together

pub mod session;
pub mod state;
pub mod store;
pub mod types;

pub use session::DashboardSession;
pub use state::{DashboardSnapshot, DashboardState, Phase};
pub use store::{DashboardStore, StoreError};
pub use types::{Activity, DashboardSummary, Notification, NotificationKind, NotificationRow};

#[cfg(test)]
mod props;
