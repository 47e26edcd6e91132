//! Goal handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, put},
    Extension, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{require_manager, resolve_goal, resolve_target, CurrentUser};
use crate::api::AppState;
use crate::domain::{Goal, GoalStatus};
use crate::errors::AppResult;

/// Goal creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateGoalRequest {
    #[validate(length(min = 1, message = "Goal description cannot be empty."))]
    #[schema(example = "Ship the quarterly report")]
    pub description: String,
    /// Must not be before today
    #[schema(value_type = String, format = Date, example = "2030-06-30")]
    pub due_date: NaiveDate,
}

/// Goal status change request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateGoalStatusRequest {
    /// One of `Draft`, `In Progress`, `Completed`, `Cancelled`
    #[schema(example = "In Progress")]
    pub status: String,
}

/// Session-protected goal routes
pub fn goal_routes() -> Router<AppState> {
    Router::new()
        .route("/employees/:id/goals", get(list_goals).post(create_goal))
        .route("/goals/:id/status", put(update_goal_status))
        .route("/goals/:id", delete(delete_goal))
}

/// List an employee's goals
#[utoipa::path(
    get,
    path = "/employees/{id}/goals",
    tag = "Goals",
    params(("id" = i32, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Goals, latest due date first", body = Vec<Goal>),
        (status = 401, description = "No profile selected"),
        (status = 403, description = "Employee is outside the user's reach"),
        (status = 404, description = "Employee not found")
    ),
    security(("employee_id" = []))
)]
pub async fn list_goals(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(employee_id): Path<i32>,
) -> AppResult<Json<Vec<Goal>>> {
    resolve_target(&state, &current_user, employee_id, true).await?;

    let goals = state.services.goals().list_goals(employee_id).await?;
    Ok(Json(goals))
}

/// Assign a new goal to an employee (managers only)
#[utoipa::path(
    post,
    path = "/employees/{id}/goals",
    tag = "Goals",
    params(("id" = i32, Path, description = "Employee ID")),
    request_body = CreateGoalRequest,
    responses(
        (status = 201, description = "Goal created as Draft", body = Goal),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Manager role required, assignee must be a team member"),
        (status = 404, description = "Employee not found")
    ),
    security(("employee_id" = []))
)]
pub async fn create_goal(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(employee_id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<CreateGoalRequest>,
) -> AppResult<(StatusCode, Json<Goal>)> {
    require_manager(&current_user)?;
    resolve_target(&state, &current_user, employee_id, false).await?;

    let goal = state
        .services
        .goals()
        .create_goal(employee_id, payload.description, payload.due_date)
        .await?;

    Ok((StatusCode::CREATED, Json(goal)))
}

/// Change a goal's status (managers only)
#[utoipa::path(
    put,
    path = "/goals/{id}/status",
    tag = "Goals",
    params(("id" = i32, Path, description = "Goal ID")),
    request_body = UpdateGoalStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = Goal),
        (status = 400, description = "Unknown status"),
        (status = 403, description = "Manager role required"),
        (status = 404, description = "Goal not found")
    ),
    security(("employee_id" = []))
)]
pub async fn update_goal_status(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(goal_id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateGoalStatusRequest>,
) -> AppResult<Json<Goal>> {
    require_manager(&current_user)?;

    let status: GoalStatus = payload.status.trim().parse()?;
    resolve_goal(&state, &current_user, goal_id).await?;
    let goal = state.services.goals().update_status(goal_id, status).await?;

    Ok(Json(goal))
}

/// Delete a goal with its tasks and feedback (managers only)
#[utoipa::path(
    delete,
    path = "/goals/{id}",
    tag = "Goals",
    params(("id" = i32, Path, description = "Goal ID")),
    responses(
        (status = 204, description = "Goal deleted"),
        (status = 403, description = "Manager role required"),
        (status = 404, description = "Goal not found")
    ),
    security(("employee_id" = []))
)]
pub async fn delete_goal(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(goal_id): Path<i32>,
) -> AppResult<StatusCode> {
    require_manager(&current_user)?;
    resolve_goal(&state, &current_user, goal_id).await?;

    state.services.goals().delete_goal(goal_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
