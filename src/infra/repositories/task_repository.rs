//! Task repository implementation.

use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet,
    QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;

use super::entities::task::{self, ActiveModel, Entity as TaskEntity};
use crate::domain::Task;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Task repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// List a goal's tasks in creation order
    async fn list_for_goal(&self, goal_id: i32) -> AppResult<Vec<Task>>;

    /// Log a new, unapproved task
    async fn create(&self, goal_id: i32, description: String) -> AppResult<Task>;

    /// Mark task as approved
    async fn approve(&self, id: i32) -> AppResult<Task>;

    /// Delete task
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of TaskRepository
pub struct TaskStore {
    db: Arc<DatabaseConnection>,
}

impl TaskStore {
    /// Create new repository instance
    pub fn new(db: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self { db: db.into() }
    }
}

#[async_trait]
impl TaskRepository for TaskStore {
    async fn list_for_goal(&self, goal_id: i32) -> AppResult<Vec<Task>> {
        let models = TaskEntity::find()
            .filter(task::Column::GoalId.eq(goal_id))
            .order_by_asc(task::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Task::from).collect())
    }

    async fn create(&self, goal_id: i32, description: String) -> AppResult<Task> {
        let active_model = ActiveModel {
            id: NotSet,
            goal_id: Set(goal_id),
            description: Set(description),
            is_approved: Set(false),
        };

        let model = active_model.insert(self.db.as_ref()).await.map_err(AppError::from)?;
        Ok(Task::from(model))
    }

    async fn approve(&self, id: i32) -> AppResult<Task> {
        let model = TaskEntity::update_many()
            .col_expr(task::Column::IsApproved, Expr::value(true))
            .filter(task::Column::Id.eq(id))
            .exec_with_returning(self.db.as_ref())
            .await
            .map_err(AppError::from)?
            .into_iter()
            .next()
            .ok_or(AppError::NotFound)?;

        Ok(Task::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = TaskEntity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
