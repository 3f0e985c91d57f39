//! Shared types for the Reef staff console
//!
//! Common types used across the workspace and by the embedding view:
//! data models, error types, and utility functions.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

// Error system re-exports (for convenient access)
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};

// Model re-exports
pub use models::{CurrentUser, Role, RoleOption, User};
