//! Reef Staff Console - state core of the employee administration panel
//!
//! # Architecture Overview
//!
//! This crate holds the logic the panel view binds to:
//!
//! - **Access policy** (`access`): role-based visibility and modification
//!   rules, driven by an injected policy table
//! - **Form engine** (`form`): the add-employee draft, its editing/locked
//!   state machine, and configurable field validation
//! - **User directory** (`directory`): the transient in-memory user pool
//!   with search and statistics
//! - **Meetings** (`meetings`): meeting scheduling per employee
//! - **Console** (`console`): the façade a view component owns, wiring
//!   the current user and configuration to everything above
//!
//! # Module Structure
//!
//! ```text
//! reef-core/src/
//! ├── access/        # RolePolicy, RoleGrant
//! ├── form/          # FormField, FieldErrors, ValidationRules, EmployeeDraft
//! ├── directory/     # UserDirectory + stats
//! ├── meetings/      # MeetingScheduler
//! ├── console/       # AdminConsole, ConsoleConfig
//! └── demo.rs        # seed pool
//! ```

pub mod access;
pub mod console;
pub mod demo;
pub mod directory;
pub mod form;
pub mod meetings;

// Re-export public types
pub use access::{RoleGrant, RolePolicy};
pub use console::{AdminConsole, ConsoleConfig};
pub use directory::UserDirectory;
pub use form::{DraftState, EmployeeDraft, FieldErrors, FormField, ValidationRules};
pub use meetings::MeetingScheduler;

// Re-export unified error types from shared
pub use shared::error::{AppError, AppResult, ErrorCategory, ErrorCode};
