//! Form field identifiers and the per-field error map

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Text inputs of the add-employee form.
///
/// Skills are a list with their own mutation helpers and never carry an
/// error entry, so they are not a field here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    EmployeeId,
    Department,
    Position,
    Role,
    StartDate,
    AnnualSalary,
    PhoneNumber,
    Address,
    EmergencyContact,
    Notes,
}

impl FormField {
    /// The snake_case wire name, matching the serde representation
    pub const fn name(&self) -> &'static str {
        match self {
            FormField::FirstName => "first_name",
            FormField::LastName => "last_name",
            FormField::Email => "email",
            FormField::EmployeeId => "employee_id",
            FormField::Department => "department",
            FormField::Position => "position",
            FormField::Role => "role",
            FormField::StartDate => "start_date",
            FormField::AnnualSalary => "annual_salary",
            FormField::PhoneNumber => "phone_number",
            FormField::Address => "address",
            FormField::EmergencyContact => "emergency_contact",
            FormField::Notes => "notes",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Per-field validation messages, keyed by [`FormField`].
///
/// Iteration follows field declaration order, so rendering and logs are
/// deterministic. Serializes as a plain `{"field": "message"}` object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<FormField, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the message for a field, replacing any existing one
    pub fn insert(&mut self, field: FormField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Clear the entry for a single field (per-field clearing on edit)
    pub fn clear(&mut self, field: FormField) {
        self.0.remove(&field);
    }

    /// Drop all entries
    pub fn clear_all(&mut self) {
        self.0.clear();
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    /// Empty map means the draft is valid
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}
