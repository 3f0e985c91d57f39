//! User Model

use super::role::Role;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// User record as shown in the management grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    /// Display name
    pub name: String,
    pub role: Role,
    pub department: String,
    pub position: String,
    pub email: String,
    pub join_date: NaiveDate,
}

/// Create user payload (produced by a locked add-employee draft)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub name: String,
    pub role: Role,
    pub department: String,
    pub position: String,
    pub email: String,
    /// Join date; today when the form left it empty
    #[serde(default)]
    pub join_date: Option<NaiveDate>,
}

/// Update user payload (edit modal, partial)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// The signed-in panel user, supplied by the embedding view's auth
/// context. The core trusts it as given and verifies nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: i64,
    pub display_name: String,
    pub role: Role,
}

impl CurrentUser {
    pub fn new(id: i64, display_name: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            role,
        }
    }
}
