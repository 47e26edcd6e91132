//! Employee service - Directory, profiles and sample data.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{SEED_MANAGER, SEED_TEAM};
use crate::domain::Employee;
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;
use crate::with_transaction;

/// Employee service trait for dependency injection.
#[async_trait]
pub trait EmployeeService: Send + Sync {
    /// Get employee by ID
    async fn get_employee(&self, id: i32) -> AppResult<Employee>;

    /// List all employees ordered by name
    async fn list_employees(&self) -> AppResult<Vec<Employee>>;

    /// Create an employee, optionally reporting to an existing manager
    async fn create_employee(&self, name: String, manager_id: Option<i32>) -> AppResult<Employee>;

    /// Insert the sample manager and team when no employees exist.
    /// Returns whether anything was inserted.
    async fn seed_data(&self) -> AppResult<bool>;
}

/// Concrete implementation of EmployeeService using Unit of Work.
pub struct EmployeeManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> EmployeeManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> EmployeeService for EmployeeManager<U> {
    async fn get_employee(&self, id: i32) -> AppResult<Employee> {
        self.uow.employees().find_by_id(id).await?.ok_or_not_found()
    }

    async fn list_employees(&self) -> AppResult<Vec<Employee>> {
        self.uow.employees().list().await
    }

    async fn create_employee(&self, name: String, manager_id: Option<i32>) -> AppResult<Employee> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::validation("Employee name cannot be empty."));
        }

        if let Some(manager_id) = manager_id {
            if self.uow.employees().find_by_id(manager_id).await?.is_none() {
                return Err(AppError::validation(format!(
                    "Manager {} does not exist",
                    manager_id
                )));
            }
        }

        let employee = self.uow.employees().create(name, manager_id).await?;
        tracing::info!(employee_id = employee.id, "Employee created");
        Ok(employee)
    }

    async fn seed_data(&self) -> AppResult<bool> {
        let seeded = with_transaction!(self.uow, |ctx| {
            let employees = ctx.employees();
            if employees.count().await? > 0 {
                return Ok(false);
            }

            let manager = employees.create(SEED_MANAGER, None).await?;
            for name in SEED_TEAM {
                employees.create(name, Some(manager.id)).await?;
            }
            Ok(true)
        })?;

        if seeded {
            tracing::info!(manager = SEED_MANAGER, "Seeded sample employees");
        } else {
            tracing::debug!("Employees already present, skipping seed");
        }

        Ok(seeded)
    }
}
