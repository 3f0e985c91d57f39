//! Access policy table

use serde::{Deserialize, Serialize};
use shared::models::{Role, RoleOption, User};
use std::collections::BTreeMap;

/// What a single role is allowed to do in the panel.
///
/// `assignable` is ordered; it feeds the role dropdown directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleGrant {
    /// Roles this role may assign when creating or editing users
    #[serde(default)]
    pub assignable: Vec<Role>,
    /// Roles whose records this role may see
    #[serde(default)]
    pub visible: Vec<Role>,
    /// Roles whose records this role may edit or delete
    #[serde(default)]
    pub modifiable: Vec<Role>,
}

impl RoleGrant {
    /// Grant over the same role set for assignment, visibility, and
    /// modification.
    pub fn uniform(roles: &[Role]) -> Self {
        Self {
            assignable: roles.to_vec(),
            visible: roles.to_vec(),
            modifiable: roles.to_vec(),
        }
    }
}

/// Role-permission table mapping each role to its [`RoleGrant`].
///
/// Roles without an entry get the empty grant: they see nothing, assign
/// nothing, modify nothing. The default table is the panel's shipped
/// behavior; tests and deployments construct their own with
/// [`RolePolicy::empty`] and [`RolePolicy::with_grant`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RolePolicy {
    grants: BTreeMap<Role, RoleGrant>,
}

impl Default for RolePolicy {
    /// The shipped table:
    ///
    /// | Role     | assignable               | visible  | modifiable |
    /// |----------|--------------------------|----------|------------|
    /// | admin    | employee, manager, admin | all      | all        |
    /// | manager  | employee                 | employee | employee   |
    /// | employee | (none)                   | (none)   | (none)     |
    fn default() -> Self {
        Self::empty()
            .with_grant(Role::Admin, RoleGrant::uniform(&Role::ALL))
            .with_grant(Role::Manager, RoleGrant::uniform(&[Role::Employee]))
    }
}

impl RolePolicy {
    /// Policy with no grants at all
    pub fn empty() -> Self {
        Self {
            grants: BTreeMap::new(),
        }
    }

    /// Set the grant for a role, replacing any existing one
    pub fn with_grant(mut self, role: Role, grant: RoleGrant) -> Self {
        self.grants.insert(role, grant);
        self
    }

    /// Look up the grant for a role
    pub fn grant(&self, role: Role) -> Option<&RoleGrant> {
        self.grants.get(&role)
    }

    /// The ordered roles `current` may assign (empty slice when none)
    pub fn assignable_roles(&self, current: Role) -> &[Role] {
        self.grants
            .get(&current)
            .map(|g| g.assignable.as_slice())
            .unwrap_or(&[])
    }

    /// Role dropdown entries for `current`, in table order
    pub fn available_roles(&self, current: Role) -> Vec<RoleOption> {
        self.assignable_roles(current)
            .iter()
            .map(|role| RoleOption::from(*role))
            .collect()
    }

    /// Whether `current` may see records with role `target`
    pub fn can_view(&self, current: Role, target: Role) -> bool {
        self.grants
            .get(&current)
            .is_some_and(|g| g.visible.contains(&target))
    }

    /// Whether `current` may edit or delete records with role `target`
    pub fn can_modify(&self, current: Role, target: Role) -> bool {
        self.grants
            .get(&current)
            .is_some_and(|g| g.modifiable.contains(&target))
    }

    /// Whether `current` may open the add-employee form at all
    pub fn can_create(&self, current: Role) -> bool {
        !self.assignable_roles(current).is_empty()
    }

    /// The subset of `users` visible to `current`, in pool order
    pub fn visible_users<'a>(&self, current: Role, users: &'a [User]) -> Vec<&'a User> {
        users
            .iter()
            .filter(|user| self.can_view(current, user.role))
            .collect()
    }
}
