//! Feedback and insights handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Extension, Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{require_manager, resolve_goal, CurrentUser};
use crate::api::AppState;
use crate::domain::{FeedbackEntry, PerformanceInsights};
use crate::errors::AppResult;

/// Feedback submission request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateFeedbackRequest {
    #[validate(length(min = 1, message = "Feedback cannot be empty."))]
    #[schema(example = "Solid progress, keep the scope tight.")]
    pub feedback_text: String,
}

/// Session-protected feedback and insights routes
pub fn feedback_routes() -> Router<AppState> {
    Router::new()
        .route("/goals/:id/feedback", get(list_feedback).post(create_feedback))
        .route("/insights", get(performance_insights))
}

/// List a goal's feedback
#[utoipa::path(
    get,
    path = "/goals/{id}/feedback",
    tag = "Feedback",
    params(("id" = i32, Path, description = "Goal ID")),
    responses(
        (status = 200, description = "Feedback, newest first", body = Vec<FeedbackEntry>),
        (status = 403, description = "Goal belongs to someone outside the user's reach"),
        (status = 404, description = "Goal not found")
    ),
    security(("employee_id" = []))
)]
pub async fn list_feedback(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(goal_id): Path<i32>,
) -> AppResult<Json<Vec<FeedbackEntry>>> {
    resolve_goal(&state, &current_user, goal_id).await?;

    let entries = state.services.feedback().list_feedback(goal_id).await?;
    Ok(Json(entries))
}

/// Submit feedback on a goal (managers only)
#[utoipa::path(
    post,
    path = "/goals/{id}/feedback",
    tag = "Feedback",
    params(("id" = i32, Path, description = "Goal ID")),
    request_body = CreateFeedbackRequest,
    responses(
        (status = 201, description = "Feedback submitted", body = FeedbackEntry),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Manager role required"),
        (status = 404, description = "Goal not found")
    ),
    security(("employee_id" = []))
)]
pub async fn create_feedback(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(goal_id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<CreateFeedbackRequest>,
) -> AppResult<(StatusCode, Json<FeedbackEntry>)> {
    require_manager(&current_user)?;
    resolve_goal(&state, &current_user, goal_id).await?;

    let entry = state
        .services
        .feedback()
        .create_feedback(goal_id, current_user.employee(), payload.feedback_text)
        .await?;

    Ok((StatusCode::CREATED, Json(entry)))
}

/// Organisation-wide goal statistics (managers only)
#[utoipa::path(
    get,
    path = "/insights",
    tag = "Insights",
    responses(
        (status = 200, description = "Performance insights", body = PerformanceInsights),
        (status = 403, description = "Manager role required")
    ),
    security(("employee_id" = []))
)]
pub async fn performance_insights(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<PerformanceInsights>> {
    require_manager(&current_user)?;

    let insights = state.services.insights().performance_insights().await?;
    Ok(Json(insights))
}
