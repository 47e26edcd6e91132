//! Employee repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, PaginatorTrait, QueryOrder, Set,
};
use std::sync::Arc;

use super::entities::employee::{self, ActiveModel, Entity as EmployeeEntity};
use crate::domain::Employee;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Employee repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Find employee by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Employee>>;

    /// List all employees ordered by name
    async fn list(&self) -> AppResult<Vec<Employee>>;

    /// Create a new employee
    async fn create(&self, name: String, manager_id: Option<i32>) -> AppResult<Employee>;

    /// Count employees
    async fn count(&self) -> AppResult<u64>;
}

/// Concrete implementation of EmployeeRepository
pub struct EmployeeStore {
    db: Arc<DatabaseConnection>,
}

impl EmployeeStore {
    /// Create new repository instance
    pub fn new(db: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self { db: db.into() }
    }
}

#[async_trait]
impl EmployeeRepository for EmployeeStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Employee>> {
        let result = EmployeeEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Employee::from))
    }

    async fn list(&self) -> AppResult<Vec<Employee>> {
        let models = EmployeeEntity::find()
            .order_by_asc(employee::Column::Name)
            .all(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Employee::from).collect())
    }

    async fn create(&self, name: String, manager_id: Option<i32>) -> AppResult<Employee> {
        let active_model = ActiveModel {
            id: NotSet,
            name: Set(name),
            manager_id: Set(manager_id),
        };

        let model = active_model.insert(self.db.as_ref()).await.map_err(AppError::from)?;
        Ok(Employee::from(model))
    }

    async fn count(&self) -> AppResult<u64> {
        EmployeeEntity::find()
            .count(self.db.as_ref())
            .await
            .map_err(AppError::from)
    }
}
