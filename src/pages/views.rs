//! Page view models returned by the `/pages` endpoints.

use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{GoalStatus, ProfileResponse, Role, StatusCount, TaskProgress};

/// Navigation sections a profile can open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum Section {
    #[serde(rename = "Goal & Task Setting")]
    GoalSetting,
    #[serde(rename = "Progress Tracking")]
    ProgressTracking,
    Feedback,
    Reporting,
    #[serde(rename = "Business Insights")]
    BusinessInsights,
}

impl Section {
    /// Sections in menu order for a role.
    pub fn available_to(role: Role) -> Vec<Section> {
        let mut sections = vec![
            Section::GoalSetting,
            Section::ProgressTracking,
            Section::Feedback,
            Section::Reporting,
        ];
        if role.is_manager() {
            sections.push(Section::BusinessInsights);
        }
        sections
    }
}

/// Session banner plus menu
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct NavigationView {
    pub user: ProfileResponse,
    pub sections: Vec<Section>,
}

/// Task line with its approval label
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TaskItem {
    pub id: i32,
    pub description: String,
    #[schema(example = "Pending Approval")]
    pub label: String,
    /// Viewer may approve this task
    pub can_approve: bool,
}

/// Goal card on the Goal & Task Setting page
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AssignedGoal {
    pub id: i32,
    pub description: String,
    pub due_date: NaiveDate,
    pub status: GoalStatus,
    pub tasks: Vec<TaskItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks_notice: Option<String>,
    /// Viewer may log new tasks against this goal
    pub can_log_tasks: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GoalSettingView {
    /// Viewer sees the "create goal" form
    pub can_assign_goals: bool,
    pub assignable_employees: Vec<ProfileResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assign_notice: Option<String>,
    pub goals: Vec<AssignedGoal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GoalProgress {
    pub id: i32,
    pub description: String,
    pub status: GoalStatus,
    pub due_date: NaiveDate,
    /// Statuses the viewer may switch to; empty for employees
    pub status_options: Vec<GoalStatus>,
    pub progress: TaskProgress,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProgressView {
    pub target: ProfileResponse,
    /// Profiles the viewer may switch between
    pub choices: Vec<ProfileResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices_notice: Option<String>,
    pub goals: Vec<GoalProgress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

/// Rendered feedback entry
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FeedbackItem {
    pub author: String,
    #[schema(example = "2024-05-04 09:30")]
    pub timestamp: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GoalFeedback {
    pub id: i32,
    pub description: String,
    pub status: GoalStatus,
    pub feedback: Vec<FeedbackItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback_notice: Option<String>,
    pub can_submit: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FeedbackView {
    pub target: ProfileResponse,
    pub choices: Vec<ProfileResponse>,
    pub goals: Vec<GoalFeedback>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReportTask {
    pub description: String,
    #[schema(example = "Pending")]
    pub label: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GoalReport {
    pub id: i32,
    pub description: String,
    pub status: GoalStatus,
    pub due_date: NaiveDate,
    pub tasks: Vec<ReportTask>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks_notice: Option<String>,
    /// `[YYYY-MM-DD] from <author>: <text>`
    pub feedback: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback_notice: Option<String>,
}

/// Performance history report
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReportView {
    /// Absent when a manager has nobody to report on
    pub target: Option<ProfileResponse>,
    pub choices: Vec<ProfileResponse>,
    pub goals: Vec<GoalReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Metric {
    #[schema(example = "Total Goals Set")]
    pub label: String,
    #[schema(example = "12")]
    pub value: String,
}

/// Business Insights dashboard
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InsightsView {
    pub metrics: Vec<Metric>,
    pub goals_by_status: Vec<StatusCount>,
    pub top_performer: String,
    pub lowest_performer: String,
}
