//! Employee directory handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::get, Extension, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::{require_manager, CurrentUser};
use crate::api::AppState;
use crate::domain::{Employee, ProfileResponse};
use crate::errors::AppResult;

/// Employee creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEmployeeRequest {
    #[validate(length(min = 1, message = "Employee name cannot be empty."))]
    #[schema(example = "Dana White")]
    pub name: String,
    /// Manager this employee reports to
    #[schema(example = 1)]
    pub manager_id: Option<i32>,
}

/// Public profile selector route
pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/profiles", get(list_profiles))
}

/// Session-protected employee routes
pub fn employee_routes() -> Router<AppState> {
    Router::new().route("/employees", get(list_employees).post(create_employee))
}

/// List selectable profiles
#[utoipa::path(
    get,
    path = "/profiles",
    tag = "Session",
    responses(
        (status = 200, description = "Profiles ordered by name", body = Vec<ProfileResponse>)
    )
)]
pub async fn list_profiles(State(state): State<AppState>) -> AppResult<Json<Vec<ProfileResponse>>> {
    let employees = state.services.employees().list_employees().await?;
    if employees.is_empty() {
        tracing::warn!("No employees found in the database");
    }

    Ok(Json(employees.into_iter().map(ProfileResponse::from).collect()))
}

/// List all employees
#[utoipa::path(
    get,
    path = "/employees",
    tag = "Employees",
    responses(
        (status = 200, description = "Employees ordered by name", body = Vec<Employee>),
        (status = 401, description = "No profile selected")
    ),
    security(("employee_id" = []))
)]
pub async fn list_employees(State(state): State<AppState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.services.employees().list_employees().await?;
    Ok(Json(employees))
}

/// Create an employee (managers only)
#[utoipa::path(
    post,
    path = "/employees",
    tag = "Employees",
    request_body = CreateEmployeeRequest,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Validation error"),
        (status = 401, description = "No profile selected"),
        (status = 403, description = "Manager role required")
    ),
    security(("employee_id" = []))
)]
pub async fn create_employee(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<CreateEmployeeRequest>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    require_manager(&current_user)?;

    let employee = state
        .services
        .employees()
        .create_employee(payload.name, payload.manager_id)
        .await?;

    Ok((StatusCode::CREATED, Json(employee)))
}
