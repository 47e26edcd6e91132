//! Goal service - Goal setting and status lifecycle.

use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use std::sync::Arc;

use crate::domain::{Goal, GoalStatus, NewGoal};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Goal service trait for dependency injection.
#[async_trait]
pub trait GoalService: Send + Sync {
    /// Get goal by ID
    async fn get_goal(&self, id: i32) -> AppResult<Goal>;

    /// List an employee's goals, latest due date first
    async fn list_goals(&self, employee_id: i32) -> AppResult<Vec<Goal>>;

    /// Create a `Draft` goal for a team member
    async fn create_goal(
        &self,
        employee_id: i32,
        description: String,
        due_date: NaiveDate,
    ) -> AppResult<Goal>;

    /// Change goal status
    async fn update_status(&self, id: i32, status: GoalStatus) -> AppResult<Goal>;

    /// Delete goal along with its tasks and feedback
    async fn delete_goal(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of GoalService using Unit of Work.
pub struct GoalManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> GoalManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> GoalService for GoalManager<U> {
    async fn get_goal(&self, id: i32) -> AppResult<Goal> {
        self.uow.goals().find_by_id(id).await?.ok_or_not_found()
    }

    async fn list_goals(&self, employee_id: i32) -> AppResult<Vec<Goal>> {
        self.uow.goals().list_for_employee(employee_id).await
    }

    async fn create_goal(
        &self,
        employee_id: i32,
        description: String,
        due_date: NaiveDate,
    ) -> AppResult<Goal> {
        let description = description.trim().to_string();
        if description.is_empty() {
            return Err(AppError::validation("Goal description cannot be empty."));
        }
        if due_date < Local::now().date_naive() {
            return Err(AppError::validation("Due date cannot be in the past."));
        }

        let assignee = self
            .uow
            .employees()
            .find_by_id(employee_id)
            .await?
            .ok_or_not_found()?;
        if assignee.is_manager() {
            return Err(AppError::Forbidden);
        }

        let goal = self
            .uow
            .goals()
            .create(NewGoal {
                employee_id,
                description,
                due_date,
            })
            .await?;

        tracing::info!(goal_id = goal.id, employee_id, "Goal created");
        Ok(goal)
    }

    async fn update_status(&self, id: i32, status: GoalStatus) -> AppResult<Goal> {
        let goal = self.uow.goals().update_status(id, status).await?;
        tracing::info!(goal_id = id, status = %status, "Goal status updated");
        Ok(goal)
    }

    async fn delete_goal(&self, id: i32) -> AppResult<()> {
        self.uow.goals().delete(id).await?;
        tracing::info!(goal_id = id, "Goal deleted");
        Ok(())
    }
}
