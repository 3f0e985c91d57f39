//! Data models
//!
//! Shared between the console core and the embedding view (via JSON).
//! All IDs are `i64` (snowflake style, safe-integer range for JS).

pub mod meeting;
pub mod role;
pub mod stats;
pub mod user;

// Re-exports
pub use meeting::*;
pub use role::*;
pub use stats::*;
pub use user::*;
