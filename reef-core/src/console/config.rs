//! Console configuration

use crate::access::RolePolicy;
use crate::form::ValidationRules;

/// Everything swappable about the console in one place: the access
/// policy, the form validation predicates, and the department list the
/// add-employee form offers.
///
/// Not serializable because compiled regex predicates live inside; a
/// deployment builds one in code and hands it to the console.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub policy: RolePolicy,
    pub validation: ValidationRules,
    pub departments: Vec<String>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            policy: RolePolicy::default(),
            validation: ValidationRules::default(),
            departments: vec![
                "Engineering".to_string(),
                "Marketing".to_string(),
                "Sales".to_string(),
                "HR".to_string(),
            ],
        }
    }
}
