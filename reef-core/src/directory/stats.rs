//! Aggregated counts for the reports tab

use super::UserDirectory;
use shared::models::{DepartmentCount, DirectoryStats, Role};

impl UserDirectory {
    /// Count users by role and department.
    ///
    /// Department order follows first appearance in the pool, so the
    /// rendered breakdown is stable run to run.
    pub fn stats(&self) -> DirectoryStats {
        let mut departments: Vec<DepartmentCount> = Vec::new();
        let mut admins = 0;
        let mut managers = 0;
        let mut employees = 0;

        for user in &self.users {
            match user.role {
                Role::Admin => admins += 1,
                Role::Manager => managers += 1,
                Role::Employee => employees += 1,
            }
            match departments
                .iter_mut()
                .find(|d| d.department == user.department)
            {
                Some(entry) => entry.count += 1,
                None => departments.push(DepartmentCount {
                    department: user.department.clone(),
                    count: 1,
                }),
            }
        }

        DirectoryStats {
            total: self.users.len(),
            admins,
            managers,
            employees,
            departments,
        }
    }
}
