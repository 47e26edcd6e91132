//! Task handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post},
    Extension, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{require_employee, require_manager, resolve_goal, CurrentUser};
use crate::api::AppState;
use crate::domain::Task;
use crate::errors::AppResult;

/// Task logging request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTaskRequest {
    #[validate(length(min = 1, message = "Task description cannot be empty."))]
    #[schema(example = "Draft the outline")]
    pub description: String,
}

/// Session-protected task routes
pub fn task_routes() -> Router<AppState> {
    Router::new()
        .route("/goals/:id/tasks", get(list_tasks).post(create_task))
        .route("/tasks/:id/approve", post(approve_task))
        .route("/tasks/:id", delete(delete_task))
}

/// List a goal's tasks
#[utoipa::path(
    get,
    path = "/goals/{id}/tasks",
    tag = "Tasks",
    params(("id" = i32, Path, description = "Goal ID")),
    responses(
        (status = 200, description = "Tasks in creation order", body = Vec<Task>),
        (status = 403, description = "Goal belongs to someone outside the user's reach"),
        (status = 404, description = "Goal not found")
    ),
    security(("employee_id" = []))
)]
pub async fn list_tasks(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(goal_id): Path<i32>,
) -> AppResult<Json<Vec<Task>>> {
    resolve_goal(&state, &current_user, goal_id).await?;

    let tasks = state.services.tasks().list_tasks(goal_id).await?;
    Ok(Json(tasks))
}

/// Log a task against a goal (non-managers only)
#[utoipa::path(
    post,
    path = "/goals/{id}/tasks",
    tag = "Tasks",
    params(("id" = i32, Path, description = "Goal ID")),
    request_body = CreateTaskRequest,
    responses(
        (status = 201, description = "Task added and awaiting manager approval", body = Task),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Managers cannot log tasks, employees only log on their own goals"),
        (status = 404, description = "Goal not found")
    ),
    security(("employee_id" = []))
)]
pub async fn create_task(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(goal_id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<CreateTaskRequest>,
) -> AppResult<(StatusCode, Json<Task>)> {
    require_employee(&current_user)?;
    resolve_goal(&state, &current_user, goal_id).await?;

    let task = state
        .services
        .tasks()
        .create_task(current_user.employee(), goal_id, payload.description)
        .await?;

    Ok((StatusCode::CREATED, Json(task)))
}

/// Approve a task (managers only)
#[utoipa::path(
    post,
    path = "/tasks/{id}/approve",
    tag = "Tasks",
    params(("id" = i32, Path, description = "Task ID")),
    responses(
        (status = 200, description = "Task approved", body = Task),
        (status = 403, description = "Manager role required"),
        (status = 404, description = "Task not found")
    ),
    security(("employee_id" = []))
)]
pub async fn approve_task(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(task_id): Path<i32>,
) -> AppResult<Json<Task>> {
    require_manager(&current_user)?;

    let task = state.services.tasks().approve_task(task_id).await?;
    Ok(Json(task))
}

/// Delete a task
#[utoipa::path(
    delete,
    path = "/tasks/{id}",
    tag = "Tasks",
    params(("id" = i32, Path, description = "Task ID")),
    responses(
        (status = 204, description = "Task deleted"),
        (status = 404, description = "Task not found")
    ),
    security(("employee_id" = []))
)]
pub async fn delete_task(
    State(state): State<AppState>,
    Path(task_id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.tasks().delete_task(task_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
