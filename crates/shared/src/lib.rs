//! Shared types, errors, and configuration for Folio.
//!
//! This crate provides common types used across all other crates:
//! - Money type carried as whole units plus nanos
//! - Typed IDs for type-safe entity references
//! - Application-wide error types
//! - Configuration management
//! - Session context for the signed-in user

pub mod config;
pub mod error;
pub mod session;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use session::{SessionContext, SessionUser};
