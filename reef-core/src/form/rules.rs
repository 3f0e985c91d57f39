//! Validation rules applied on submit

use super::draft::EmployeeDraft;
use super::field::{FieldErrors, FormField};
use regex::Regex;
use shared::models::Role;
use std::str::FromStr;

/// Default name predicate: letters and spaces only
pub const DEFAULT_NAME_PATTERN: &str = r"^[A-Za-z\s]+$";
/// Default email predicate: local@domain ending exactly in .com
pub const DEFAULT_EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.com$";
/// Default phone predicate: 10 digits starting with 07
pub const DEFAULT_PHONE_PATTERN: &str = r"^07\d{8}$";

const MSG_FIRST_NAME: &str = "⚠️ First name must contain English letters only (No numbers).";
const MSG_LAST_NAME: &str = "⚠️ Last name must contain English letters only (No numbers).";
const MSG_EMAIL: &str = "⚠️ Email must be valid and end with .com";
const MSG_PHONE: &str = "⚠️ Phone number must start with 07 and be 10 digits.";
const MSG_DEPARTMENT: &str = "⚠️ Department is required";
const MSG_POSITION: &str = "⚠️ Position is required";
const MSG_ROLE: &str = "⚠️ Role is required";
const MSG_ROLE_NOT_OFFERED: &str = "⚠️ Role must be one of the available roles";

/// Configurable validation predicates for the add-employee form.
///
/// The defaults reproduce the demo rules (Latin-only names, ".com"-only
/// emails, "07"-prefixed local phone numbers); deployments with real
/// business rules install their own compiled patterns. The offered role
/// set comes from the access policy for the signed-in user.
#[derive(Debug, Clone)]
pub struct ValidationRules {
    /// Predicate for first and last name
    pub name_pattern: Regex,
    pub email_pattern: Regex,
    /// Predicate for the optional phone number
    pub phone_pattern: Regex,
    /// Roles the current user may assign; anything else fails the role rule
    pub offered_roles: Vec<Role>,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            name_pattern: Regex::new(DEFAULT_NAME_PATTERN).expect("valid name pattern"),
            email_pattern: Regex::new(DEFAULT_EMAIL_PATTERN).expect("valid email pattern"),
            phone_pattern: Regex::new(DEFAULT_PHONE_PATTERN).expect("valid phone pattern"),
            offered_roles: Role::ALL.to_vec(),
        }
    }
}

impl ValidationRules {
    /// Replace the offered role set
    pub fn with_offered_roles(mut self, roles: Vec<Role>) -> Self {
        self.offered_roles = roles;
        self
    }

    /// Validate a draft and return the per-field error map.
    ///
    /// Every rule is evaluated independently; there is no short-circuit,
    /// so one submit reports every failing field at once. An empty map
    /// means the draft is valid.
    pub fn validate(&self, draft: &EmployeeDraft) -> FieldErrors {
        let mut errors = FieldErrors::new();

        let first_name = draft.value(FormField::FirstName);
        if first_name.trim().is_empty() || !self.name_pattern.is_match(first_name) {
            errors.insert(FormField::FirstName, MSG_FIRST_NAME);
        }

        let last_name = draft.value(FormField::LastName);
        if last_name.trim().is_empty() || !self.name_pattern.is_match(last_name) {
            errors.insert(FormField::LastName, MSG_LAST_NAME);
        }

        if !self.email_pattern.is_match(draft.value(FormField::Email)) {
            errors.insert(FormField::Email, MSG_EMAIL);
        }

        // Optional: only checked when present
        let phone = draft.value(FormField::PhoneNumber);
        if !phone.is_empty() && !self.phone_pattern.is_match(phone) {
            errors.insert(FormField::PhoneNumber, MSG_PHONE);
        }

        if draft.value(FormField::Department).is_empty() {
            errors.insert(FormField::Department, MSG_DEPARTMENT);
        }

        if draft.value(FormField::Position).trim().is_empty() {
            errors.insert(FormField::Position, MSG_POSITION);
        }

        let role = draft.value(FormField::Role);
        if role.is_empty() {
            errors.insert(FormField::Role, MSG_ROLE);
        } else {
            match Role::from_str(role) {
                Ok(parsed) if self.offered_roles.contains(&parsed) => {}
                _ => errors.insert(FormField::Role, MSG_ROLE_NOT_OFFERED),
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Draft passing every default rule
    fn valid_draft() -> EmployeeDraft {
        let mut draft = EmployeeDraft::new();
        draft.set(FormField::FirstName, "John").unwrap();
        draft.set(FormField::LastName, "Smith").unwrap();
        draft.set(FormField::Email, "john@company.com").unwrap();
        draft.set(FormField::Department, "Engineering").unwrap();
        draft.set(FormField::Position, "Engineer").unwrap();
        draft.set(FormField::Role, "employee").unwrap();
        draft
    }

    #[test]
    fn test_valid_draft_has_empty_map() {
        let rules = ValidationRules::default();
        let errors = rules.validate(&valid_draft());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_first_name_rule() {
        let rules = ValidationRules::default();
        let mut draft = valid_draft();

        // "John" passes
        assert!(!rules.validate(&draft).contains(FormField::FirstName));

        // Digits fail
        draft.set(FormField::FirstName, "John3").unwrap();
        let errors = rules.validate(&draft);
        assert_eq!(errors.get(FormField::FirstName), Some(MSG_FIRST_NAME));

        // Empty fails
        draft.set(FormField::FirstName, "").unwrap();
        assert!(rules.validate(&draft).contains(FormField::FirstName));

        // Whitespace only fails
        draft.set(FormField::FirstName, "   ").unwrap();
        assert!(rules.validate(&draft).contains(FormField::FirstName));

        // Spaces between letters pass
        draft.set(FormField::FirstName, "Mary Jane").unwrap();
        assert!(!rules.validate(&draft).contains(FormField::FirstName));

        // Non-Latin scripts fail
        draft.set(FormField::FirstName, "José").unwrap();
        assert!(rules.validate(&draft).contains(FormField::FirstName));
    }

    #[test]
    fn test_last_name_rule_mirrors_first_name() {
        let rules = ValidationRules::default();
        let mut draft = valid_draft();

        draft.set(FormField::LastName, "O'Brien").unwrap();
        let errors = rules.validate(&draft);
        assert_eq!(errors.get(FormField::LastName), Some(MSG_LAST_NAME));

        draft.set(FormField::LastName, "Smith Jones").unwrap();
        assert!(!rules.validate(&draft).contains(FormField::LastName));
    }

    #[test]
    fn test_email_rule() {
        let rules = ValidationRules::default();
        let mut draft = valid_draft();

        draft.set(FormField::Email, "a@b.com").unwrap();
        assert!(!rules.validate(&draft).contains(FormField::Email));

        // Wrong suffix
        draft.set(FormField::Email, "a@b.net").unwrap();
        let errors = rules.validate(&draft);
        assert_eq!(errors.get(FormField::Email), Some(MSG_EMAIL));

        // No @ at all
        draft.set(FormField::Email, "a.com").unwrap();
        assert!(rules.validate(&draft).contains(FormField::Email));

        // Empty fails too (email is required)
        draft.set(FormField::Email, "").unwrap();
        assert!(rules.validate(&draft).contains(FormField::Email));
    }

    #[test]
    fn test_phone_rule_optional() {
        let rules = ValidationRules::default();
        let mut draft = valid_draft();

        // Absent phone is fine
        assert!(!rules.validate(&draft).contains(FormField::PhoneNumber));

        // 10 digits starting 07 passes
        draft.set(FormField::PhoneNumber, "0791234567").unwrap();
        assert!(!rules.validate(&draft).contains(FormField::PhoneNumber));

        // Too short fails
        draft.set(FormField::PhoneNumber, "123456").unwrap();
        let errors = rules.validate(&draft);
        assert_eq!(errors.get(FormField::PhoneNumber), Some(MSG_PHONE));

        // Right length, wrong prefix
        draft.set(FormField::PhoneNumber, "0891234567").unwrap();
        assert!(rules.validate(&draft).contains(FormField::PhoneNumber));

        // 11 digits fail
        draft.set(FormField::PhoneNumber, "07912345678").unwrap();
        assert!(rules.validate(&draft).contains(FormField::PhoneNumber));
    }

    #[test]
    fn test_department_rule_no_trim() {
        let rules = ValidationRules::default();
        let mut draft = valid_draft();

        draft.set(FormField::Department, "").unwrap();
        let errors = rules.validate(&draft);
        assert_eq!(errors.get(FormField::Department), Some(MSG_DEPARTMENT));

        // Select values arrive verbatim; whitespace counts as a value
        draft.set(FormField::Department, " ").unwrap();
        assert!(!rules.validate(&draft).contains(FormField::Department));
    }

    #[test]
    fn test_position_rule_trims() {
        let rules = ValidationRules::default();
        let mut draft = valid_draft();

        draft.set(FormField::Position, "   ").unwrap();
        let errors = rules.validate(&draft);
        assert_eq!(errors.get(FormField::Position), Some(MSG_POSITION));
    }

    #[test]
    fn test_role_rule() {
        let rules = ValidationRules::default().with_offered_roles(vec![Role::Employee]);
        let mut draft = valid_draft();

        // Offered role passes
        assert!(!rules.validate(&draft).contains(FormField::Role));

        // Empty role
        draft.set(FormField::Role, "").unwrap();
        let errors = rules.validate(&draft);
        assert_eq!(errors.get(FormField::Role), Some(MSG_ROLE));

        // Known role outside the offered set
        draft.set(FormField::Role, "admin").unwrap();
        let errors = rules.validate(&draft);
        assert_eq!(errors.get(FormField::Role), Some(MSG_ROLE_NOT_OFFERED));

        // Unknown role string
        draft.set(FormField::Role, "superuser").unwrap();
        assert!(rules.validate(&draft).contains(FormField::Role));
    }

    #[test]
    fn test_all_rules_evaluated_no_short_circuit() {
        let rules = ValidationRules::default();
        let draft = EmployeeDraft::new();
        let errors = rules.validate(&draft);

        // Empty draft: every required field reports, optional phone does not
        assert_eq!(errors.len(), 6);
        assert!(errors.contains(FormField::FirstName));
        assert!(errors.contains(FormField::LastName));
        assert!(errors.contains(FormField::Email));
        assert!(!errors.contains(FormField::PhoneNumber));
        assert!(errors.contains(FormField::Department));
        assert!(errors.contains(FormField::Position));
        assert!(errors.contains(FormField::Role));
    }

    #[test]
    fn test_validation_idempotent() {
        let rules = ValidationRules::default();
        let mut draft = valid_draft();
        draft.set(FormField::Email, "broken").unwrap();
        draft.set(FormField::FirstName, "John3").unwrap();

        let first = rules.validate(&draft);
        let second = rules.validate(&draft);
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_patterns_swap_cleanly() {
        // A deployment accepting any TLD and local 9-digit phones
        let rules = ValidationRules {
            email_pattern: Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
                .unwrap(),
            phone_pattern: Regex::new(r"^\d{9}$").unwrap(),
            ..ValidationRules::default()
        };

        let mut draft = valid_draft();
        draft.set(FormField::Email, "a@b.net").unwrap();
        draft.set(FormField::PhoneNumber, "123456789").unwrap();

        let errors = rules.validate(&draft);
        assert!(!errors.contains(FormField::Email));
        assert!(!errors.contains(FormField::PhoneNumber));
    }
}
