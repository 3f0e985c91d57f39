//! Add-employee draft and its edit-lock state machine

use super::field::{FieldErrors, FormField};
use super::rules::ValidationRules;
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Role, UserCreate};
use std::collections::BTreeMap;

/// Edit-lock state of a draft.
///
/// Only two transitions exist: a successful submit moves `Editing` to
/// `Locked`, and an explicit reopen moves `Locked` back to `Editing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftState {
    Editing,
    Locked,
}

impl Default for DraftState {
    fn default() -> Self {
        DraftState::Editing
    }
}

/// A mutable add-employee form.
///
/// Field values live in a typed map and unset fields read as `""`. The
/// draft owns its edit-lock state: while locked every mutation is
/// rejected, so a submitted form cannot drift before it is committed to
/// the directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeDraft {
    values: BTreeMap<FormField, String>,
    skills: Vec<String>,
    state: DraftState,
    errors: FieldErrors,
    #[serde(skip)]
    default_role: Option<Role>,
}

impl EmployeeDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a draft with the role preselected; [`reset`](Self::reset)
    /// restores this choice instead of clearing it.
    pub fn with_role(role: Role) -> Self {
        let mut draft = Self::default();
        draft
            .values
            .insert(FormField::Role, role.as_str().to_string());
        draft.default_role = Some(role);
        draft
    }

    pub fn state(&self) -> DraftState {
        self.state
    }

    pub fn is_editing(&self) -> bool {
        self.state == DraftState::Editing
    }

    pub fn is_locked(&self) -> bool {
        self.state == DraftState::Locked
    }

    /// Current value of a field; unset fields read as empty
    pub fn value(&self, field: FormField) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// Errors from the most recent submit
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Write one field and clear its pending error message, so the
    /// message disappears as soon as the user edits that input.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) -> AppResult<()> {
        if self.is_locked() {
            return Err(AppError::new(ErrorCode::DraftLocked));
        }
        self.values.insert(field, value.into());
        self.errors.clear(field);
        Ok(())
    }

    /// Append a skill. Returns false without touching the list when the
    /// skill is empty, already present, or the draft is locked.
    pub fn add_skill(&mut self, skill: &str) -> bool {
        if !self.is_editing() || skill.is_empty() {
            return false;
        }
        if self.skills.iter().any(|s| s == skill) {
            return false;
        }
        self.skills.push(skill.to_string());
        true
    }

    /// Remove a skill by exact match. Returns false when absent or the
    /// draft is locked.
    pub fn remove_skill(&mut self, skill: &str) -> bool {
        if !self.is_editing() {
            return false;
        }
        match self.skills.iter().position(|s| s == skill) {
            Some(pos) => {
                self.skills.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Clear every field, skill and error, restoring the preselected
    /// role if the draft was built with one.
    pub fn reset(&mut self) -> AppResult<()> {
        if self.is_locked() {
            return Err(AppError::new(ErrorCode::DraftLocked));
        }
        self.values.clear();
        self.skills.clear();
        self.errors.clear_all();
        if let Some(role) = self.default_role {
            self.values
                .insert(FormField::Role, role.as_str().to_string());
        }
        Ok(())
    }

    /// Validate and, when clean, lock the draft.
    ///
    /// The error map is recomputed wholesale on every call. Returns true
    /// when the draft ends up locked; an already locked draft reports
    /// true without revalidating.
    pub fn submit(&mut self, rules: &ValidationRules) -> bool {
        if self.is_locked() {
            return true;
        }
        self.errors = rules.validate(self);
        if self.errors.is_empty() {
            self.state = DraftState::Locked;
            true
        } else {
            false
        }
    }

    /// Explicit edit action on a locked draft
    pub fn reopen(&mut self) {
        self.state = DraftState::Editing;
    }

    /// Turn a locked draft into a directory create payload.
    ///
    /// Only locked drafts convert, so nothing half-validated can reach
    /// the directory.
    pub fn to_create(&self) -> AppResult<UserCreate> {
        if !self.is_locked() {
            return Err(AppError::new(ErrorCode::DraftNotLocked));
        }
        let role: Role = self.value(FormField::Role).parse()?;
        let name = format!(
            "{} {}",
            self.value(FormField::FirstName).trim(),
            self.value(FormField::LastName).trim()
        );
        let join_date = chrono::NaiveDate::parse_from_str(
            self.value(FormField::StartDate),
            "%Y-%m-%d",
        )
        .ok();
        Ok(UserCreate {
            name,
            role,
            department: self.value(FormField::Department).to_string(),
            position: self.value(FormField::Position).trim().to_string(),
            email: self.value(FormField::Email).to_string(),
            join_date,
        })
    }
}
