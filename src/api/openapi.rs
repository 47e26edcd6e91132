//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{
    employee_handler, feedback_handler, goal_handler, page_handler, task_handler,
};
use crate::config::EMPLOYEE_ID_HEADER;
use crate::domain::{
    Employee, FeedbackEntry, Goal, GoalStatus, PerformanceInsights, ProfileResponse, Role,
    StatusCount, Task, TaskProgress,
};
use crate::pages::{
    AssignedGoal, FeedbackItem, FeedbackView, GoalFeedback, GoalProgress, GoalReport,
    GoalSettingView, InsightsView, Metric, NavigationView, ProgressView, ReportTask, ReportView,
    Section, TaskItem,
};

/// OpenAPI documentation for the Performance Management System
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Performance Management System",
        version = "0.1.0",
        description = "Goals, tasks, feedback and performance insights for managers and their teams"
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        employee_handler::list_profiles,
        employee_handler::list_employees,
        employee_handler::create_employee,
        goal_handler::list_goals,
        goal_handler::create_goal,
        goal_handler::update_goal_status,
        goal_handler::delete_goal,
        task_handler::list_tasks,
        task_handler::create_task,
        task_handler::approve_task,
        task_handler::delete_task,
        feedback_handler::list_feedback,
        feedback_handler::create_feedback,
        feedback_handler::performance_insights,
        page_handler::navigation,
        page_handler::goal_setting,
        page_handler::progress,
        page_handler::feedback,
        page_handler::reporting,
        page_handler::insights,
    ),
    components(
        schemas(
            // Domain types
            Role,
            Employee,
            ProfileResponse,
            GoalStatus,
            Goal,
            Task,
            TaskProgress,
            FeedbackEntry,
            StatusCount,
            PerformanceInsights,
            // Request types
            employee_handler::CreateEmployeeRequest,
            goal_handler::CreateGoalRequest,
            goal_handler::UpdateGoalStatusRequest,
            task_handler::CreateTaskRequest,
            feedback_handler::CreateFeedbackRequest,
            // Page views
            Section,
            NavigationView,
            TaskItem,
            AssignedGoal,
            GoalSettingView,
            GoalProgress,
            ProgressView,
            FeedbackItem,
            GoalFeedback,
            FeedbackView,
            ReportTask,
            GoalReport,
            ReportView,
            Metric,
            InsightsView,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Session", description = "Profile selection"),
        (name = "Employees", description = "Employee directory"),
        (name = "Goals", description = "Goal setting and status"),
        (name = "Tasks", description = "Task logging and approval"),
        (name = "Feedback", description = "Manager feedback on goals"),
        (name = "Insights", description = "Business insights"),
        (name = "Pages", description = "Role-aware page view models")
    )
)]
pub struct ApiDoc;

/// Security scheme for the profile header
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "employee_id",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                    EMPLOYEE_ID_HEADER,
                    "ID of the acting employee, as listed by /profiles",
                ))),
            );
        }
    }
}
