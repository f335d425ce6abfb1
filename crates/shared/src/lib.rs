//! Shared types, formatting, and configuration for Pulseboard.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Display formatting for metric values
//! - Configuration management

pub mod config;
pub mod format;
pub mod types;

pub use config::AppConfig;
