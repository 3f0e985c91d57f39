//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Access errors
/// - 2xxx: Form errors
/// - 3xxx: Directory errors
/// - 4xxx: Meeting errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Access errors (1xxx)
    Access,
    /// Form errors (2xxx)
    Form,
    /// Directory errors (3xxx)
    Directory,
    /// Meeting errors (4xxx)
    Meeting,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Access,
            2000..3000 => Self::Form,
            3000..4000 => Self::Directory,
            4000..5000 => Self::Meeting,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Access => "access",
            Self::Form => "form",
            Self::Directory => "directory",
            Self::Meeting => "meeting",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
