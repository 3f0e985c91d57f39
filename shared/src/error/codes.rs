//! Unified error codes for the Reef staff console
//!
//! This module defines all error codes used across the core crates and the
//! embedding frontend. Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Access errors
//! - 2xxx: Form errors
//! - 3xxx: Directory errors
//! - 4xxx: Meeting errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,

    // ==================== 1xxx: Access ====================
    /// Permission denied
    PermissionDenied = 1001,
    /// Role string is not one of the known roles
    UnknownRole = 1002,
    /// Role cannot be assigned by the current user
    RoleNotAssignable = 1003,

    // ==================== 2xxx: Form ====================
    /// Draft is locked and cannot be mutated
    DraftLocked = 2001,
    /// Draft has not been locked by a successful submit
    DraftNotLocked = 2002,

    // ==================== 3xxx: Directory ====================
    /// User not found
    UserNotFound = 3001,
    /// User email already exists
    EmailExists = 3002,

    // ==================== 4xxx: Meeting ====================
    /// Meeting not found
    MeetingNotFound = 4001,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Configuration error
    ConfigError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",

            // Access
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::UnknownRole => "Unknown role",
            ErrorCode::RoleNotAssignable => "Role cannot be assigned by the current user",

            // Form
            ErrorCode::DraftLocked => "Draft is locked",
            ErrorCode::DraftNotLocked => "Draft has not been submitted",

            // Directory
            ErrorCode::UserNotFound => "User not found",
            ErrorCode::EmailExists => "Email already exists",

            // Meeting
            ErrorCode::MeetingNotFound => "Meeting not found",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),

            // Access
            1001 => Ok(ErrorCode::PermissionDenied),
            1002 => Ok(ErrorCode::UnknownRole),
            1003 => Ok(ErrorCode::RoleNotAssignable),

            // Form
            2001 => Ok(ErrorCode::DraftLocked),
            2002 => Ok(ErrorCode::DraftNotLocked),

            // Directory
            3001 => Ok(ErrorCode::UserNotFound),
            3002 => Ok(ErrorCode::EmailExists),

            // Meeting
            4001 => Ok(ErrorCode::MeetingNotFound),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
