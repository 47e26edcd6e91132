//! Feedback service - Written manager feedback on goals.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Employee, FeedbackEntry, NewFeedback};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Feedback service trait for dependency injection.
#[async_trait]
pub trait FeedbackService: Send + Sync {
    /// List a goal's feedback, newest first
    async fn list_feedback(&self, goal_id: i32) -> AppResult<Vec<FeedbackEntry>>;

    /// Record feedback from `author` on a goal
    async fn create_feedback(
        &self,
        goal_id: i32,
        author: &Employee,
        feedback_text: String,
    ) -> AppResult<FeedbackEntry>;
}

/// Concrete implementation of FeedbackService using Unit of Work.
pub struct FeedbackManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> FeedbackManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> FeedbackService for FeedbackManager<U> {
    async fn list_feedback(&self, goal_id: i32) -> AppResult<Vec<FeedbackEntry>> {
        self.uow.feedback().list_for_goal(goal_id).await
    }

    async fn create_feedback(
        &self,
        goal_id: i32,
        author: &Employee,
        feedback_text: String,
    ) -> AppResult<FeedbackEntry> {
        let feedback_text = feedback_text.trim().to_string();
        if feedback_text.is_empty() {
            return Err(AppError::validation("Feedback cannot be empty."));
        }

        self.uow.goals().find_by_id(goal_id).await?.ok_or_not_found()?;

        let entry = self
            .uow
            .feedback()
            .create(
                NewFeedback {
                    goal_id,
                    manager_id: author.id,
                    feedback_text,
                },
                author.name.clone(),
            )
            .await?;

        tracing::info!(goal_id, manager_id = author.id, "Feedback submitted");
        Ok(entry)
    }
}
