//! Goal domain entity and status lifecycle.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::{STATUS_CANCELLED, STATUS_COMPLETED, STATUS_DRAFT, STATUS_IN_PROGRESS};
use crate::errors::AppError;

/// Goal status enumeration, stored as its display string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub enum GoalStatus {
    Draft,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Cancelled,
}

impl GoalStatus {
    /// All statuses in display order
    pub const ALL: [GoalStatus; 4] = [
        GoalStatus::Draft,
        GoalStatus::InProgress,
        GoalStatus::Completed,
        GoalStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GoalStatus::Draft => STATUS_DRAFT,
            GoalStatus::InProgress => STATUS_IN_PROGRESS,
            GoalStatus::Completed => STATUS_COMPLETED,
            GoalStatus::Cancelled => STATUS_CANCELLED,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, GoalStatus::Completed)
    }
}

impl FromStr for GoalStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GoalStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| AppError::validation(format!("Unknown goal status: {}", s)))
    }
}

impl std::fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Goal domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Goal {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = 2)]
    pub employee_id: i32,
    #[schema(example = "Ship the quarterly report")]
    pub description: String,
    pub due_date: NaiveDate,
    pub status: GoalStatus,
}

/// Goal creation data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGoal {
    pub employee_id: i32,
    pub description: String,
    pub due_date: NaiveDate,
}
