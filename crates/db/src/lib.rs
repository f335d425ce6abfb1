//! Database layer with `SeaORM` entities and the dashboard repository.
//!
//! This crate provides:
//! - `SeaORM` entity definitions for the three dashboard tables
//! - The Postgres implementation of the core store contract
//! - Database migrations

pub mod entities;
pub mod migration;
pub mod repositories;

pub use repositories::DashboardRepository;

use sea_orm::{Database, DatabaseConnection, DbErr};

/// Establishes a connection to the database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(database_url).await
}
