//! In-memory user directory
//!
//! The transient pool behind the management grid. The console seeds it
//! with demo data or caller-supplied records and is its only writer;
//! access-policy filtering happens one layer up in [`crate::console`].
//! Nothing here persists: the pool lives and dies with the session.

use crate::demo;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{User, UserCreate, UserUpdate};
use shared::util::snowflake_id;
use uuid::Uuid;

mod stats;

/// Session-scoped user pool with email uniqueness.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    /// Identifies this pool instance across log lines
    epoch: Uuid,
    users: Vec<User>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::from_users(Vec::new())
    }

    /// A directory seeded with the built-in five-person demo pool
    pub fn with_demo_data() -> Self {
        Self::from_users(demo::demo_users())
    }

    pub fn from_users(users: Vec<User>) -> Self {
        Self {
            epoch: Uuid::new_v4(),
            users,
        }
    }

    pub fn epoch(&self) -> Uuid {
        self.epoch
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Insert a new user. The id is generated; a missing join date
    /// defaults to today. Fails when the email is already taken.
    pub fn add(&mut self, create: UserCreate) -> AppResult<User> {
        if self.email_in_use(&create.email, None) {
            return Err(Self::email_exists(&create.email));
        }
        let user = User {
            id: snowflake_id(),
            name: create.name,
            role: create.role,
            department: create.department,
            position: create.position,
            email: create.email,
            join_date: create
                .join_date
                .unwrap_or_else(|| chrono::Local::now().date_naive()),
        };
        self.users.push(user.clone());
        Ok(user)
    }

    /// Apply a partial update and return the new record
    pub fn update(&mut self, id: i64, update: UserUpdate) -> AppResult<User> {
        let pos = self
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| Self::user_not_found(id))?;
        if let Some(email) = &update.email {
            if self.email_in_use(email, Some(id)) {
                return Err(Self::email_exists(email));
            }
        }

        let user = &mut self.users[pos];
        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(role) = update.role {
            user.role = role;
        }
        if let Some(department) = update.department {
            user.department = department;
        }
        if let Some(position) = update.position {
            user.position = position;
        }
        if let Some(email) = update.email {
            user.email = email;
        }
        Ok(user.clone())
    }

    /// Delete a user and return the removed record
    pub fn remove(&mut self, id: i64) -> AppResult<User> {
        let pos = self
            .users
            .iter()
            .position(|u| u.id == id)
            .ok_or_else(|| Self::user_not_found(id))?;
        Ok(self.users.remove(pos))
    }

    /// Case-insensitive substring search over name and email. An empty
    /// term matches everyone.
    pub fn search(&self, term: &str) -> Vec<&User> {
        let needle = term.to_lowercase();
        self.users
            .iter()
            .filter(|u| {
                u.name.to_lowercase().contains(&needle)
                    || u.email.to_lowercase().contains(&needle)
            })
            .collect()
    }

    fn email_in_use(&self, email: &str, exclude: Option<i64>) -> bool {
        self.users
            .iter()
            .filter(|u| Some(u.id) != exclude)
            .any(|u| u.email.eq_ignore_ascii_case(email))
    }

    fn email_exists(email: &str) -> AppError {
        AppError::with_message(
            ErrorCode::EmailExists,
            format!("Email '{}' is already in use", email),
        )
        .with_detail("email", email)
    }

    fn user_not_found(id: i64) -> AppError {
        AppError::with_message(ErrorCode::UserNotFound, format!("User {} not found", id))
            .with_detail("user_id", id)
    }
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::new()
    }
}
