//! Role-based access policy
//!
//! Decides which roles a panel user may assign, which user records they
//! may see, and which they may modify. The table is an injected
//! configuration value, so deployments can swap it without touching the
//! filter logic.

mod policy;

pub use policy::{RoleGrant, RolePolicy};
