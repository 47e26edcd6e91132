//! Feedback repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;

use super::entities::employee::Entity as EmployeeEntity;
use super::entities::feedback::{self, into_entry, ActiveModel, Entity as FeedbackEntity};
use crate::domain::{FeedbackEntry, NewFeedback};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Feedback repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    /// List a goal's feedback with author names, newest first
    async fn list_for_goal(&self, goal_id: i32) -> AppResult<Vec<FeedbackEntry>>;

    /// Record feedback written by `author`
    async fn create(&self, feedback: NewFeedback, author: String) -> AppResult<FeedbackEntry>;
}

/// Concrete implementation of FeedbackRepository
pub struct FeedbackStore {
    db: Arc<DatabaseConnection>,
}

impl FeedbackStore {
    /// Create new repository instance
    pub fn new(db: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self { db: db.into() }
    }
}

#[async_trait]
impl FeedbackRepository for FeedbackStore {
    async fn list_for_goal(&self, goal_id: i32) -> AppResult<Vec<FeedbackEntry>> {
        let rows = FeedbackEntity::find()
            .filter(feedback::Column::GoalId.eq(goal_id))
            .find_also_related(EmployeeEntity)
            .order_by_desc(feedback::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(rows
            .into_iter()
            .map(|(model, author)| into_entry(model, author))
            .collect())
    }

    async fn create(&self, feedback: NewFeedback, author: String) -> AppResult<FeedbackEntry> {
        let active_model = ActiveModel {
            id: NotSet,
            goal_id: Set(feedback.goal_id),
            manager_id: Set(Some(feedback.manager_id)),
            feedback_text: Set(feedback.feedback_text),
            created_at: NotSet,
        };

        let model = active_model.insert(self.db.as_ref()).await.map_err(AppError::from)?;

        let mut entry = into_entry(model, None);
        entry.author = author;
        Ok(entry)
    }
}
