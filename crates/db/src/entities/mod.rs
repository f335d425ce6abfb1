//! `SeaORM` entity definitions.

pub mod activities;
pub mod dashboard_summaries;
pub mod notifications;
