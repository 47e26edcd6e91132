//! Page view-model handlers.

use axum::{
    extract::{Query, State},
    response::Json,
    routing::get,
    Extension, Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::errors::AppResult;
use crate::pages::{
    FeedbackView, GoalSettingView, InsightsView, NavigationView, ProgressView, ReportView,
};

/// Optional profile to view instead of the acting user
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct TargetQuery {
    /// Employee to show; managers only
    pub employee_id: Option<i32>,
}

/// Session-protected page routes
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/pages/navigation", get(navigation))
        .route("/pages/goals", get(goal_setting))
        .route("/pages/progress", get(progress))
        .route("/pages/feedback", get(feedback))
        .route("/pages/reporting", get(reporting))
        .route("/pages/insights", get(insights))
}

/// Logged-in profile and available sections
#[utoipa::path(
    get,
    path = "/pages/navigation",
    tag = "Pages",
    responses((status = 200, description = "Navigation menu", body = NavigationView)),
    security(("employee_id" = []))
)]
pub async fn navigation(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> Json<NavigationView> {
    Json(state.pages.navigation(current_user.employee()))
}

/// Goal & Task Setting page
#[utoipa::path(
    get,
    path = "/pages/goals",
    tag = "Pages",
    responses((status = 200, description = "Goal & Task Setting", body = GoalSettingView)),
    security(("employee_id" = []))
)]
pub async fn goal_setting(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<GoalSettingView>> {
    let view = state.pages.goal_setting(current_user.employee()).await?;
    Ok(Json(view))
}

/// Progress Tracking page
#[utoipa::path(
    get,
    path = "/pages/progress",
    tag = "Pages",
    params(TargetQuery),
    responses(
        (status = 200, description = "Progress Tracking", body = ProgressView),
        (status = 403, description = "Profile not viewable")
    ),
    security(("employee_id" = []))
)]
pub async fn progress(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Query(query): Query<TargetQuery>,
) -> AppResult<Json<ProgressView>> {
    let view = state
        .pages
        .progress(current_user.employee(), query.employee_id)
        .await?;
    Ok(Json(view))
}

/// Feedback page
#[utoipa::path(
    get,
    path = "/pages/feedback",
    tag = "Pages",
    params(TargetQuery),
    responses(
        (status = 200, description = "Feedback", body = FeedbackView),
        (status = 403, description = "Profile not viewable")
    ),
    security(("employee_id" = []))
)]
pub async fn feedback(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Query(query): Query<TargetQuery>,
) -> AppResult<Json<FeedbackView>> {
    let view = state
        .pages
        .feedback(current_user.employee(), query.employee_id)
        .await?;
    Ok(Json(view))
}

/// Performance history report
#[utoipa::path(
    get,
    path = "/pages/reporting",
    tag = "Pages",
    params(TargetQuery),
    responses(
        (status = 200, description = "Performance History Report", body = ReportView),
        (status = 403, description = "Profile not viewable")
    ),
    security(("employee_id" = []))
)]
pub async fn reporting(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Query(query): Query<TargetQuery>,
) -> AppResult<Json<ReportView>> {
    let view = state
        .pages
        .reporting(current_user.employee(), query.employee_id)
        .await?;
    Ok(Json(view))
}

/// Business Insights dashboard
#[utoipa::path(
    get,
    path = "/pages/insights",
    tag = "Pages",
    responses(
        (status = 200, description = "Business Insights Dashboard", body = InsightsView),
        (status = 403, description = "Manager role required")
    ),
    security(("employee_id" = []))
)]
pub async fn insights(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<InsightsView>> {
    let view = state.pages.insights(current_user.employee()).await?;
    Ok(Json(view))
}
