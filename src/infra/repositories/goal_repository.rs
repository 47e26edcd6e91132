//! Goal repository implementation.

use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet,
    QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;

use super::entities::goal::{self, ActiveModel, Entity as GoalEntity};
use crate::config::STATUS_DRAFT;
use crate::domain::{Goal, GoalStatus, NewGoal};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Goal repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait GoalRepository: Send + Sync {
    /// Find goal by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Goal>>;

    /// List an employee's goals, latest due date first
    async fn list_for_employee(&self, employee_id: i32) -> AppResult<Vec<Goal>>;

    /// Create a new goal in `Draft` status
    async fn create(&self, goal: NewGoal) -> AppResult<Goal>;

    /// Set goal status
    async fn update_status(&self, id: i32, status: GoalStatus) -> AppResult<Goal>;

    /// Delete goal (tasks and feedback cascade)
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of GoalRepository
pub struct GoalStore {
    db: Arc<DatabaseConnection>,
}

impl GoalStore {
    /// Create new repository instance
    pub fn new(db: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self { db: db.into() }
    }
}

#[async_trait]
impl GoalRepository for GoalStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Goal>> {
        GoalEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?
            .map(Goal::try_from)
            .transpose()
    }

    async fn list_for_employee(&self, employee_id: i32) -> AppResult<Vec<Goal>> {
        let models = GoalEntity::find()
            .filter(goal::Column::EmployeeId.eq(employee_id))
            .order_by_desc(goal::Column::DueDate)
            .all(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        models.into_iter().map(Goal::try_from).collect()
    }

    async fn create(&self, goal: NewGoal) -> AppResult<Goal> {
        let active_model = ActiveModel {
            id: NotSet,
            employee_id: Set(goal.employee_id),
            description: Set(goal.description),
            due_date: Set(goal.due_date),
            status: Set(STATUS_DRAFT.to_string()),
        };

        let model = active_model.insert(self.db.as_ref()).await.map_err(AppError::from)?;
        Goal::try_from(model)
    }

    async fn update_status(&self, id: i32, status: GoalStatus) -> AppResult<Goal> {
        // Completion feedback is inserted by the goal_completed_trigger
        let model = GoalEntity::update_many()
            .col_expr(goal::Column::Status, Expr::value(status.as_str()))
            .filter(goal::Column::Id.eq(id))
            .exec_with_returning(self.db.as_ref())
            .await
            .map_err(AppError::from)?
            .into_iter()
            .next()
            .ok_or(AppError::NotFound)?;

        Goal::try_from(model)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = GoalEntity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
