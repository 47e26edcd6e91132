//! Feedback domain entity.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Feedback on a goal, joined with its author's name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FeedbackEntry {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = 1)]
    pub goal_id: i32,
    #[schema(example = "Great job on completing this goal!")]
    pub feedback_text: String,
    #[schema(example = "Alice Manager")]
    pub author: String,
    pub created_at: NaiveDateTime,
}

/// Feedback creation data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFeedback {
    pub goal_id: i32,
    pub manager_id: i32,
    pub feedback_text: String,
}
