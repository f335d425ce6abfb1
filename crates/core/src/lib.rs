//! Core dashboard logic for Pulseboard.
//!
//! This crate contains the aggregation session and everything it needs, with
//! ZERO database or web dependencies. The remote store and the identity
//! provider are traits; concrete implementations live in other crates.
//!
//! # Modules
//!
//! - `dashboard` - Domain types, view model, store contract, and the session
//! - `identity` - Current-user abstraction

pub mod dashboard;
pub mod identity;
