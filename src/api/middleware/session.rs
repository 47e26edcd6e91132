//! Profile session middleware.
//!
//! The acting employee is picked per request via the `X-Employee-Id` header.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::config::EMPLOYEE_ID_HEADER;
use crate::domain::{Employee, Goal};
use crate::errors::{AppError, AppResult};
use crate::pages::select_target;

/// Employee acting on the current request
#[derive(Clone, Debug)]
pub struct CurrentUser(pub Employee);

impl CurrentUser {
    pub fn employee(&self) -> &Employee {
        &self.0
    }

    pub fn id(&self) -> i32 {
        self.0.id
    }

    pub fn is_manager(&self) -> bool {
        self.0.is_manager()
    }
}

/// Parse the header value into an employee ID.
fn parse_employee_id(value: Option<&str>) -> Result<i32, AppError> {
    value
        .map(str::trim)
        .and_then(|v| v.parse::<i32>().ok())
        .ok_or(AppError::Unauthorized)
}

/// Session middleware.
///
/// Resolves the employee named by the header and injects `CurrentUser`
/// into the request extensions. Unknown employees are Unauthorized.
pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let employee_id = parse_employee_id(
        request
            .headers()
            .get(EMPLOYEE_ID_HEADER)
            .and_then(|h| h.to_str().ok()),
    )?;

    let employee = match state.services.employees().get_employee(employee_id).await {
        Ok(employee) => employee,
        Err(AppError::NotFound) => {
            tracing::debug!(employee_id, "Unknown profile in session header");
            return Err(AppError::Unauthorized);
        }
        Err(e) => return Err(e),
    };

    request.extensions_mut().insert(CurrentUser(employee));

    Ok(next.run(request).await)
}

/// Require manager role, returns Forbidden error otherwise.
pub fn require_manager(user: &CurrentUser) -> Result<(), AppError> {
    if user.is_manager() {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

/// Require a non-manager profile, returns Forbidden error otherwise.
pub fn require_employee(user: &CurrentUser) -> Result<(), AppError> {
    if user.is_manager() {
        Err(AppError::Forbidden)
    } else {
        Ok(())
    }
}

/// Resolve an employee the current user may act on.
///
/// Follows the same rules as the page profile pickers: employees only reach
/// themselves, managers reach their team and, with `include_self`, themselves.
pub async fn resolve_target(
    state: &AppState,
    user: &CurrentUser,
    employee_id: i32,
    include_self: bool,
) -> AppResult<Employee> {
    let employees = if user.is_manager() {
        state.services.employees().list_employees().await?
    } else {
        Vec::new()
    };

    select_target(user.employee(), &employees, Some(employee_id), include_self)?
        .selected
        .ok_or(AppError::NotFound)
}

/// Load a goal whose owner the current user may act on.
pub async fn resolve_goal(state: &AppState, user: &CurrentUser, goal_id: i32) -> AppResult<Goal> {
    let goal = state.services.goals().get_goal(goal_id).await?;
    resolve_target(state, user, goal.employee_id, true).await?;
    Ok(goal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> CurrentUser {
        CurrentUser(Employee {
            id: 1,
            name: name.to_string(),
            manager_id: None,
        })
    }

    #[test]
    fn test_parse_employee_id() {
        assert_eq!(parse_employee_id(Some("42")).unwrap(), 42);
        assert_eq!(parse_employee_id(Some(" 7 ")).unwrap(), 7);
        assert!(matches!(parse_employee_id(None), Err(AppError::Unauthorized)));
        assert!(matches!(
            parse_employee_id(Some("abc")),
            Err(AppError::Unauthorized)
        ));
    }

    #[test]
    fn test_role_guards() {
        let manager = user("Alice Manager");
        let member = user("Bob Smith");

        assert!(require_manager(&manager).is_ok());
        assert!(matches!(require_manager(&member), Err(AppError::Forbidden)));
        assert!(require_employee(&member).is_ok());
        assert!(matches!(require_employee(&manager), Err(AppError::Forbidden)));
    }
}
