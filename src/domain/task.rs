//! Task domain entity and goal progress.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Task logged by an employee against a goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Task {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = 1)]
    pub goal_id: i32,
    #[schema(example = "Draft the outline")]
    pub description: String,
    pub is_approved: bool,
}

/// Approved-task completion for one goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct TaskProgress {
    pub approved: usize,
    pub total: usize,
    /// Integer percentage, 0 when the goal has no tasks
    pub percent: u8,
}

impl TaskProgress {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let approved = tasks.iter().filter(|t| t.is_approved).count();
        let percent = if total == 0 {
            0
        } else {
            (approved * 100 / total) as u8
        };

        Self {
            approved,
            total,
            percent,
        }
    }
}
