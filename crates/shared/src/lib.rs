//! Shared types, errors, and configuration for Smeta.
//!
//! This crate provides common types used across all other crates:
//! - Typed IDs for type-safe entity references
//! - Decimal precision specs matching the stored column types
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::AppError;
pub use types::{BuildingId, ExpenditureId, SectionId};
