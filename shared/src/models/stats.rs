//! Directory statistics (reports tab)

use serde::{Deserialize, Serialize};

/// Per-department user count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentCount {
    pub department: String,
    pub count: usize,
}

/// Aggregated counts over the user pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryStats {
    pub total: usize,
    pub admins: usize,
    pub managers: usize,
    pub employees: usize,
    /// Departments ordered by first appearance in the pool
    pub departments: Vec<DepartmentCount>,
}
