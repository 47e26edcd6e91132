//! Task service - Logging and approving work against goals.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Employee, Task};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Task service trait for dependency injection.
#[async_trait]
pub trait TaskService: Send + Sync {
    /// List a goal's tasks in creation order
    async fn list_tasks(&self, goal_id: i32) -> AppResult<Vec<Task>>;

    /// Log a task awaiting manager approval on one of the author's own goals
    async fn create_task(&self, author: &Employee, goal_id: i32, description: String)
        -> AppResult<Task>;

    /// Approve a task
    async fn approve_task(&self, id: i32) -> AppResult<Task>;

    /// Delete a task
    async fn delete_task(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of TaskService using Unit of Work.
pub struct TaskManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> TaskManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> TaskService for TaskManager<U> {
    async fn list_tasks(&self, goal_id: i32) -> AppResult<Vec<Task>> {
        self.uow.tasks().list_for_goal(goal_id).await
    }

    async fn create_task(
        &self,
        author: &Employee,
        goal_id: i32,
        description: String,
    ) -> AppResult<Task> {
        let description = description.trim().to_string();
        if description.is_empty() {
            return Err(AppError::validation("Task description cannot be empty."));
        }

        let goal = self.uow.goals().find_by_id(goal_id).await?.ok_or_not_found()?;
        if goal.employee_id != author.id {
            tracing::debug!(goal_id, author_id = author.id, "Task logged on another employee's goal");
            return Err(AppError::Forbidden);
        }

        let task = self.uow.tasks().create(goal_id, description).await?;
        tracing::info!(task_id = task.id, goal_id, "Task logged, awaiting approval");
        Ok(task)
    }

    async fn approve_task(&self, id: i32) -> AppResult<Task> {
        let task = self.uow.tasks().approve(id).await?;
        tracing::info!(task_id = id, "Task approved");
        Ok(task)
    }

    async fn delete_task(&self, id: i32) -> AppResult<()> {
        self.uow.tasks().delete(id).await?;
        tracing::info!(task_id = id, "Task deleted");
        Ok(())
    }
}
