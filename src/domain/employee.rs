//! Employee domain entity and role rules.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::MANAGER_NAME_MARKER;

/// Roles a profile can act in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Employee,
    Manager,
}

impl Role {
    /// Derive the role from an employee's display name.
    pub fn from_name(name: &str) -> Self {
        if name.contains(MANAGER_NAME_MARKER) {
            Role::Manager
        } else {
            Role::Employee
        }
    }

    pub fn is_manager(&self) -> bool {
        matches!(self, Role::Manager)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Employee => write!(f, "employee"),
            Role::Manager => write!(f, "manager"),
        }
    }
}

/// Employee domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Employee {
    #[schema(example = 2)]
    pub id: i32,
    #[schema(example = "Bob Smith")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = 1)]
    pub manager_id: Option<i32>,
}

impl Employee {
    pub fn role(&self) -> Role {
        Role::from_name(&self.name)
    }

    pub fn is_manager(&self) -> bool {
        self.role().is_manager()
    }
}

/// Keep only team members (non-managers), preserving order.
pub fn team_members(employees: &[Employee]) -> Vec<Employee> {
    employees
        .iter()
        .filter(|e| !e.is_manager())
        .cloned()
        .collect()
}

/// Profile entry for the user selector
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub id: i32,
    pub name: String,
    pub role: Role,
}

impl From<Employee> for ProfileResponse {
    fn from(employee: Employee) -> Self {
        let role = employee.role();
        Self {
            id: employee.id,
            name: employee.name,
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: i32, name: &str) -> Employee {
        Employee {
            id,
            name: name.to_string(),
            manager_id: None,
        }
    }

    #[test]
    fn test_role_from_name() {
        assert_eq!(Role::from_name("Alice Manager"), Role::Manager);
        assert_eq!(Role::from_name("Bob Smith"), Role::Employee);
        // Marker is case sensitive
        assert_eq!(Role::from_name("bob manager"), Role::Employee);
    }

    #[test]
    fn test_team_members_excludes_managers() {
        let all = vec![
            employee(1, "Alice Manager"),
            employee(2, "Bob Smith"),
            employee(3, "Charlie Brown"),
        ];

        let team = team_members(&all);
        let names: Vec<_> = team.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Bob Smith", "Charlie Brown"]);
    }

    #[test]
    fn test_profile_response_carries_role() {
        let profile = ProfileResponse::from(employee(1, "Alice Manager"));
        assert_eq!(profile.role, Role::Manager);
        assert_eq!(Role::Manager.to_string(), "manager");
    }
}
