//! Admin console façade
//!
//! The one object an embedding view talks to. It binds the signed-in
//! user to the access policy, narrows form validation to the roles that
//! user may assign, and guards every directory and scheduler mutation.
//! The view renders whatever these methods return and never reaches
//! into the stores directly.

mod config;

pub use config::ConsoleConfig;

use crate::directory::UserDirectory;
use crate::form::EmployeeDraft;
use crate::meetings::MeetingScheduler;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{
    CurrentUser, DirectoryStats, Meeting, MeetingDraft, Role, RoleOption, User, UserUpdate,
};

/// Staff management console scoped to one signed-in user.
#[derive(Debug, Clone)]
pub struct AdminConsole {
    current: CurrentUser,
    config: ConsoleConfig,
    directory: UserDirectory,
    meetings: MeetingScheduler,
}

impl AdminConsole {
    /// Console over an empty directory
    pub fn new(current: CurrentUser, config: ConsoleConfig) -> Self {
        Self {
            current,
            config,
            directory: UserDirectory::new(),
            meetings: MeetingScheduler::new(),
        }
    }

    /// Console over caller-supplied records
    pub fn with_users(current: CurrentUser, config: ConsoleConfig, users: Vec<User>) -> Self {
        Self {
            current,
            config,
            directory: UserDirectory::from_users(users),
            meetings: MeetingScheduler::new(),
        }
    }

    /// Demo console: default config over the built-in five-person pool
    pub fn with_demo_data(current: CurrentUser) -> Self {
        let console = Self {
            current,
            config: ConsoleConfig::default(),
            directory: UserDirectory::with_demo_data(),
            meetings: MeetingScheduler::new(),
        };
        tracing::info!(
            user_id = %console.current.id,
            username = %console.current.display_name,
            users = console.directory.len(),
            "Admin console seeded with demo data"
        );
        console
    }

    pub fn current_user(&self) -> &CurrentUser {
        &self.current
    }

    /// Swap the signed-in user; every later call answers for the new one
    pub fn set_current_user(&mut self, current: CurrentUser) {
        tracing::info!(
            user_id = %current.id,
            username = %current.display_name,
            role = %current.role,
            "Switching console user"
        );
        self.current = current;
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.config
    }

    pub fn directory(&self) -> &UserDirectory {
        &self.directory
    }

    pub fn scheduler(&self) -> &MeetingScheduler {
        &self.meetings
    }

    /// Departments offered by the add-employee form
    pub fn departments(&self) -> &[String] {
        &self.config.departments
    }

    /// Role options the signed-in user may assign, for the role select
    pub fn available_roles(&self) -> Vec<RoleOption> {
        self.config.policy.available_roles(self.current.role)
    }

    /// Whether the add-employee entry point should be offered at all
    pub fn can_create(&self) -> bool {
        self.config.policy.can_create(self.current.role)
    }

    /// Whether the edit and delete actions apply to this row
    pub fn can_modify(&self, target: &User) -> bool {
        self.config.policy.can_modify(self.current.role, target.role)
    }

    /// The user rows the signed-in user may see, in pool order
    pub fn visible_users(&self) -> Vec<&User> {
        self.config
            .policy
            .visible_users(self.current.role, self.directory.users())
    }

    /// Visible rows whose name or email matches the search term
    pub fn visible_users_matching(&self, term: &str) -> Vec<&User> {
        self.directory
            .search(term)
            .into_iter()
            .filter(|user| self.config.policy.can_view(self.current.role, user.role))
            .collect()
    }

    /// A fresh add-employee draft with the role select preset to the
    /// first role on offer, falling back to employee.
    pub fn new_draft(&self) -> EmployeeDraft {
        let role = self
            .config
            .policy
            .assignable_roles(self.current.role)
            .first()
            .copied()
            .unwrap_or(Role::Employee);
        EmployeeDraft::with_role(role)
    }

    /// Validate, lock and commit an add-employee draft.
    ///
    /// Validation runs with the role set narrowed to what the signed-in
    /// user may assign. On validation failure the draft keeps its error
    /// map and stays editable; the returned error carries the same
    /// messages keyed by field. When the directory rejects the commit
    /// the draft is reopened so the user can fix it.
    pub fn submit_draft(&mut self, draft: &mut EmployeeDraft) -> AppResult<User> {
        tracing::info!(
            user_id = %self.current.id,
            username = %self.current.display_name,
            "Submitting add-employee draft"
        );
        if !self.can_create() {
            tracing::warn!(
                user_id = %self.current.id,
                role = %self.current.role,
                "Add employee denied"
            );
            return Err(AppError::permission_denied("You may not add employees"));
        }

        let rules = self.config.validation.clone().with_offered_roles(
            self.config
                .policy
                .assignable_roles(self.current.role)
                .to_vec(),
        );
        if !draft.submit(&rules) {
            tracing::warn!(
                user_id = %self.current.id,
                error_count = draft.errors().len(),
                "Draft validation failed"
            );
            let mut err = AppError::validation("Add-employee form has invalid fields");
            for (field, message) in draft.errors().iter() {
                err = err.with_detail(field.name(), message);
            }
            return Err(err);
        }

        let create = draft.to_create()?;
        match self.directory.add(create) {
            Ok(user) => {
                tracing::info!(
                    user_id = %self.current.id,
                    created_id = %user.id,
                    "User added to directory"
                );
                Ok(user)
            }
            Err(err) => {
                draft.reopen();
                Err(err)
            }
        }
    }

    /// Apply an edit-modal update, enforcing the modify and role-assignment
    /// rules for the signed-in user.
    pub fn update_user(&mut self, id: i64, update: UserUpdate) -> AppResult<User> {
        tracing::info!(
            user_id = %self.current.id,
            username = %self.current.display_name,
            target_id = %id,
            "Updating user"
        );
        if let Some(target) = self.directory.get(id) {
            if !self.config.policy.can_modify(self.current.role, target.role) {
                tracing::warn!(
                    user_id = %self.current.id,
                    target_id = %id,
                    "Modify denied"
                );
                return Err(AppError::permission_denied("You may not modify this user"));
            }
        }
        if let Some(new_role) = update.role {
            if !self
                .config
                .policy
                .assignable_roles(self.current.role)
                .contains(&new_role)
            {
                return Err(AppError::with_message(
                    ErrorCode::RoleNotAssignable,
                    format!("Role '{}' is not assignable", new_role),
                )
                .with_detail("role", new_role.as_str()));
            }
        }
        self.directory.update(id, update)
    }

    /// Delete a user, subject to the same modify rule as editing
    pub fn remove_user(&mut self, id: i64) -> AppResult<User> {
        tracing::info!(
            user_id = %self.current.id,
            username = %self.current.display_name,
            target_id = %id,
            "Removing user"
        );
        if let Some(target) = self.directory.get(id) {
            if !self.config.policy.can_modify(self.current.role, target.role) {
                tracing::warn!(
                    user_id = %self.current.id,
                    target_id = %id,
                    "Remove denied"
                );
                return Err(AppError::permission_denied("You may not remove this user"));
            }
        }
        self.directory.remove(id)
    }

    /// Schedule a meeting with a visible directory user
    pub fn schedule_meeting(&mut self, employee_id: i64, draft: MeetingDraft) -> AppResult<Meeting> {
        tracing::info!(
            user_id = %self.current.id,
            username = %self.current.display_name,
            employee_id = %employee_id,
            "Scheduling meeting"
        );
        let employee = self.directory.get(employee_id).ok_or_else(|| {
            AppError::with_message(
                ErrorCode::UserNotFound,
                format!("User {} not found", employee_id),
            )
            .with_detail("user_id", employee_id)
        })?;
        if !self.config.policy.can_view(self.current.role, employee.role) {
            tracing::warn!(
                user_id = %self.current.id,
                employee_id = %employee_id,
                "Meeting denied"
            );
            return Err(AppError::permission_denied(
                "You may not schedule meetings with this user",
            ));
        }
        self.meetings.schedule(employee, draft)
    }

    /// Meetings scheduled with one employee
    pub fn meetings_for(&self, employee_id: i64) -> Vec<&Meeting> {
        self.meetings.meetings_for(employee_id)
    }

    pub fn cancel_meeting(&mut self, id: i64) -> AppResult<Meeting> {
        tracing::info!(
            user_id = %self.current.id,
            meeting_id = %id,
            "Cancelling meeting"
        );
        self.meetings.cancel(id)
    }

    /// Aggregated counts for the reports tab
    pub fn stats(&self) -> DirectoryStats {
        self.directory.stats()
    }
}
