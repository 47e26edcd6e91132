//! Integration tests for API endpoints.
//!
//! These tests drive the router with in-memory services, so no PostgreSQL
//! instance is required. The database handle is a SeaORM mock connection.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use serde_json::{json, Value};
use tower::ServiceExt;

use perf_manager::api::{create_router, AppState};
use perf_manager::domain::{
    Employee, FeedbackEntry, Goal, GoalStatus, InsightFigures, PerformanceInsights, Task,
};
use perf_manager::errors::{AppError, AppResult};
use perf_manager::infra::Database;
use perf_manager::services::{
    EmployeeService, FeedbackService, GoalService, InsightsService, ServiceContainer, TaskService,
};

const MANAGER: i32 = 1;
const BOB: i32 = 2;
const CHARLIE: i32 = 3;

// =============================================================================
// In-memory Services for Testing
// =============================================================================

fn employee(id: i32, name: &str, manager_id: Option<i32>) -> Employee {
    Employee {
        id,
        name: name.to_string(),
        manager_id,
    }
}

struct FakeEmployees {
    employees: Vec<Employee>,
}

#[async_trait]
impl EmployeeService for FakeEmployees {
    async fn get_employee(&self, id: i32) -> AppResult<Employee> {
        self.employees
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or(AppError::NotFound)
    }

    async fn list_employees(&self) -> AppResult<Vec<Employee>> {
        Ok(self.employees.clone())
    }

    async fn create_employee(&self, name: String, manager_id: Option<i32>) -> AppResult<Employee> {
        Ok(employee(10, &name, manager_id))
    }

    async fn seed_data(&self) -> AppResult<bool> {
        Ok(false)
    }
}

struct FakeGoals;

fn goal(id: i32, employee_id: i32, status: GoalStatus) -> Goal {
    Goal {
        id,
        employee_id,
        description: "Ship the quarterly report".to_string(),
        due_date: NaiveDate::from_ymd_opt(2031, 3, 31).unwrap(),
        status,
    }
}

#[async_trait]
impl GoalService for FakeGoals {
    async fn get_goal(&self, id: i32) -> AppResult<Goal> {
        match id {
            100 | 101 => Ok(goal(id, BOB, GoalStatus::Draft)),
            300 => Ok(goal(id, CHARLIE, GoalStatus::Draft)),
            _ => Err(AppError::NotFound),
        }
    }

    async fn list_goals(&self, employee_id: i32) -> AppResult<Vec<Goal>> {
        if employee_id == BOB {
            Ok(vec![goal(100, BOB, GoalStatus::InProgress)])
        } else {
            Ok(Vec::new())
        }
    }

    async fn create_goal(
        &self,
        employee_id: i32,
        description: String,
        due_date: NaiveDate,
    ) -> AppResult<Goal> {
        Ok(Goal {
            id: 101,
            employee_id,
            description,
            due_date,
            status: GoalStatus::Draft,
        })
    }

    async fn update_status(&self, id: i32, status: GoalStatus) -> AppResult<Goal> {
        Ok(goal(id, BOB, status))
    }

    async fn delete_goal(&self, id: i32) -> AppResult<()> {
        if id == 100 {
            Ok(())
        } else {
            Err(AppError::NotFound)
        }
    }
}

struct FakeTasks;

#[async_trait]
impl TaskService for FakeTasks {
    async fn list_tasks(&self, goal_id: i32) -> AppResult<Vec<Task>> {
        Ok(vec![
            Task {
                id: 1,
                goal_id,
                description: "Collect numbers".to_string(),
                is_approved: true,
            },
            Task {
                id: 2,
                goal_id,
                description: "Write summary".to_string(),
                is_approved: false,
            },
        ])
    }

    async fn create_task(
        &self,
        _author: &Employee,
        goal_id: i32,
        description: String,
    ) -> AppResult<Task> {
        Ok(Task {
            id: 3,
            goal_id,
            description,
            is_approved: false,
        })
    }

    async fn approve_task(&self, id: i32) -> AppResult<Task> {
        Ok(Task {
            id,
            goal_id: 100,
            description: "Write summary".to_string(),
            is_approved: true,
        })
    }

    async fn delete_task(&self, _id: i32) -> AppResult<()> {
        Ok(())
    }
}

/// Records submitted feedback so authorship can be asserted.
#[derive(Default)]
struct FakeFeedback {
    submitted: Mutex<Vec<(i32, String)>>,
}

#[async_trait]
impl FeedbackService for FakeFeedback {
    async fn list_feedback(&self, _goal_id: i32) -> AppResult<Vec<FeedbackEntry>> {
        Ok(Vec::new())
    }

    async fn create_feedback(
        &self,
        goal_id: i32,
        author: &Employee,
        feedback_text: String,
    ) -> AppResult<FeedbackEntry> {
        self.submitted
            .lock()
            .unwrap()
            .push((author.id, feedback_text.clone()));

        Ok(FeedbackEntry {
            id: 1,
            goal_id,
            feedback_text,
            author: author.name.clone(),
            created_at: NaiveDate::from_ymd_opt(2030, 1, 2)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
        })
    }
}

struct FakeInsights;

#[async_trait]
impl InsightsService for FakeInsights {
    async fn performance_insights(&self) -> AppResult<PerformanceInsights> {
        Ok(PerformanceInsights::from(InsightFigures {
            total_goals: 4,
            goals_by_status: vec![("Completed".to_string(), 1), ("Draft".to_string(), 3)],
            average_goals: Some(2.0),
            top_performer: Some("Bob Smith".to_string()),
            lowest_performer: Some("Alice Manager".to_string()),
        }))
    }
}

struct TestServices {
    employees: Arc<FakeEmployees>,
    feedback: Arc<FakeFeedback>,
}

impl ServiceContainer for TestServices {
    fn employees(&self) -> Arc<dyn EmployeeService> {
        self.employees.clone()
    }

    fn goals(&self) -> Arc<dyn GoalService> {
        Arc::new(FakeGoals)
    }

    fn tasks(&self) -> Arc<dyn TaskService> {
        Arc::new(FakeTasks)
    }

    fn feedback(&self) -> Arc<dyn FeedbackService> {
        self.feedback.clone()
    }

    fn insights(&self) -> Arc<dyn InsightsService> {
        Arc::new(FakeInsights)
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn staff() -> Vec<Employee> {
    vec![
        employee(MANAGER, "Alice Manager", None),
        employee(BOB, "Bob Smith", Some(MANAGER)),
        employee(CHARLIE, "Charlie Brown", Some(MANAGER)),
    ]
}

fn app_with(employees: Vec<Employee>, database: MockDatabase) -> (Router, Arc<FakeFeedback>) {
    let feedback = Arc::new(FakeFeedback::default());
    let services = Arc::new(TestServices {
        employees: Arc::new(FakeEmployees { employees }),
        feedback: feedback.clone(),
    });
    let database = Arc::new(Database::from_connection(database.into_connection()));

    (create_router(AppState::new(services, database)), feedback)
}

fn app() -> Router {
    app_with(staff(), MockDatabase::new(DatabaseBackend::Postgres)).0
}

fn request(method: &str, uri: &str, employee_id: Option<i32>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(id) = employee_id {
        builder = builder.header("X-Employee-Id", id.to_string());
    }

    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };

    (status, body)
}

// =============================================================================
// Public Endpoints
// =============================================================================

#[tokio::test]
async fn test_root_banner() {
    let (status, body) = send(app(), request("GET", "/", None, None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("Welcome to Performance Management System"));
}

#[tokio::test]
async fn test_health_pings_database() {
    let database = MockDatabase::new(DatabaseBackend::Postgres).append_exec_results(vec![
        MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        },
    ]);
    let (app, _) = app_with(staff(), database);

    let (status, body) = send(app, request("GET", "/health", None, None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["services"]["database"]["status"], "healthy");
}

#[tokio::test]
async fn test_profiles_include_roles() {
    let (status, body) = send(app(), request("GET", "/profiles", None, None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["name"], "Alice Manager");
    assert_eq!(body[0]["role"], "manager");
    assert_eq!(body[1]["role"], "employee");
}

#[tokio::test]
async fn test_profiles_empty_database() {
    let (app, _) = app_with(Vec::new(), MockDatabase::new(DatabaseBackend::Postgres));
    let (status, body) = send(app, request("GET", "/profiles", None, None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

// =============================================================================
// Session
// =============================================================================

#[tokio::test]
async fn test_missing_profile_is_unauthorized() {
    let (status, body) = send(app(), request("GET", "/employees", None, None)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_unknown_profile_is_unauthorized() {
    let (status, _) = send(app(), request("GET", "/pages/navigation", Some(99), None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_navigation_for_manager() {
    let (status, body) = send(app(), request("GET", "/pages/navigation", Some(MANAGER), None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["name"], "Alice Manager");
    assert_eq!(
        body["sections"],
        json!([
            "Goal & Task Setting",
            "Progress Tracking",
            "Feedback",
            "Reporting",
            "Business Insights"
        ])
    );
}

#[tokio::test]
async fn test_navigation_for_employee() {
    let (status, body) = send(app(), request("GET", "/pages/navigation", Some(BOB), None)).await;

    assert_eq!(status, StatusCode::OK);
    let sections = body["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 4);
    assert!(!sections.contains(&json!("Business Insights")));
}

// =============================================================================
// Role Rules
// =============================================================================

#[tokio::test]
async fn test_manager_creates_goal() {
    let payload = json!({ "description": "Ship the quarterly report", "due_date": "2031-03-31" });
    let (status, body) = send(
        app(),
        request("POST", "/employees/2/goals", Some(MANAGER), Some(payload)),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "Draft");
    assert_eq!(body["employee_id"], 2);
}

#[tokio::test]
async fn test_employee_cannot_create_goal() {
    let payload = json!({ "description": "Promote myself", "due_date": "2031-03-31" });
    let (status, body) = send(
        app(),
        request("POST", "/employees/2/goals", Some(BOB), Some(payload)),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"]["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_empty_goal_description_is_rejected() {
    let payload = json!({ "description": "", "due_date": "2031-03-31" });
    let (status, body) = send(
        app(),
        request("POST", "/employees/2/goals", Some(MANAGER), Some(payload)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Goal description cannot be empty.");
}

#[tokio::test]
async fn test_update_status_in_progress() {
    let payload = json!({ "status": "In Progress" });
    let (status, body) = send(
        app(),
        request("PUT", "/goals/100/status", Some(MANAGER), Some(payload)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "In Progress");
}

#[tokio::test]
async fn test_unknown_status_is_rejected() {
    let payload = json!({ "status": "Done" });
    let (status, body) = send(
        app(),
        request("PUT", "/goals/100/status", Some(MANAGER), Some(payload)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_delete_missing_goal_is_not_found() {
    let (status, _) = send(app(), request("DELETE", "/goals/555", Some(MANAGER), None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_employee_logs_task_but_manager_cannot() {
    let payload = json!({ "description": "Collect numbers" });

    let (status, body) = send(
        app(),
        request("POST", "/goals/100/tasks", Some(BOB), Some(payload.clone())),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["is_approved"], false);

    let (status, _) = send(
        app(),
        request("POST", "/goals/100/tasks", Some(MANAGER), Some(payload)),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_employee_cannot_log_task_on_colleagues_goal() {
    let payload = json!({ "description": "Collect numbers" });
    let (status, body) = send(
        app(),
        request("POST", "/goals/100/tasks", Some(CHARLIE), Some(payload)),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"]["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_manager_cannot_assign_goal_to_a_manager() {
    let payload = json!({ "description": "Run the team", "due_date": "2031-03-31" });
    let (status, _) = send(
        app(),
        request("POST", "/employees/1/goals", Some(MANAGER), Some(payload)),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_goal_listing_follows_profile_reach() {
    let (status, _) = send(app(), request("GET", "/employees/2/goals", Some(CHARLIE), None)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(app(), request("GET", "/employees/2/goals", Some(BOB), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["id"], 100);

    let (status, _) = send(app(), request("GET", "/employees/2/goals", Some(MANAGER), None)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(app(), request("GET", "/employees/99/goals", Some(MANAGER), None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_goal_details_follow_profile_reach() {
    for uri in ["/goals/100/tasks", "/goals/100/feedback"] {
        let (status, _) = send(app(), request("GET", uri, Some(CHARLIE), None)).await;
        assert_eq!(status, StatusCode::FORBIDDEN, "{}", uri);

        let (status, _) = send(app(), request("GET", uri, Some(BOB), None)).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
    }

    let (status, _) = send(app(), request("GET", "/goals/555/tasks", Some(MANAGER), None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_only_managers_approve_tasks() {
    let (status, _) = send(app(), request("POST", "/tasks/2/approve", Some(BOB), None)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(app(), request("POST", "/tasks/2/approve", Some(MANAGER), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_approved"], true);
}

#[tokio::test]
async fn test_anyone_deletes_tasks() {
    let (status, _) = send(app(), request("DELETE", "/tasks/2", Some(BOB), None)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_feedback_author_is_acting_manager() {
    let (app, feedback) = app_with(staff(), MockDatabase::new(DatabaseBackend::Postgres));
    let payload = json!({ "feedback_text": "Nice work" });

    let (status, body) = send(
        app,
        request("POST", "/goals/100/feedback", Some(MANAGER), Some(payload)),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["author"], "Alice Manager");
    assert_eq!(
        *feedback.submitted.lock().unwrap(),
        vec![(MANAGER, "Nice work".to_string())]
    );
}

#[tokio::test]
async fn test_insights_require_manager() {
    let (status, _) = send(app(), request("GET", "/insights", Some(BOB), None)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(app(), request("GET", "/insights", Some(MANAGER), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_goals"], 4);
    assert_eq!(body["average_goals_per_employee"], "2.00");
    assert_eq!(body["goals_by_status"].as_array().unwrap().len(), 4);
}

// =============================================================================
// Pages
// =============================================================================

#[tokio::test]
async fn test_progress_page_for_team_member() {
    let (status, body) = send(
        app(),
        request("GET", "/pages/progress?employee_id=2", Some(MANAGER), None),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["target"]["name"], "Bob Smith");
    assert_eq!(body["goals"][0]["progress"]["percent"], 50);
    assert_eq!(body["goals"][0]["status_options"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_employee_cannot_view_colleague() {
    let (status, _) = send(
        app(),
        request("GET", "/pages/feedback?employee_id=3", Some(BOB), None),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_manager_goal_page_without_goals() {
    let (status, body) = send(app(), request("GET", "/pages/goals", Some(MANAGER), None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["can_assign_goals"], true);
    assert_eq!(body["assignable_employees"].as_array().unwrap().len(), 2);
    assert_eq!(body["notice"], "You have no goals assigned.");
}

#[tokio::test]
async fn test_reporting_defaults_to_first_team_member() {
    let (status, body) = send(app(), request("GET", "/pages/reporting", Some(MANAGER), None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["target"]["name"], "Bob Smith");
    assert_eq!(body["goals"][0]["tasks"][1]["label"], "Pending");
    assert_eq!(
        body["goals"][0]["feedback_notice"],
        "No feedback recorded for this goal."
    );
}

#[tokio::test]
async fn test_insights_page_is_manager_only() {
    let (status, _) = send(app(), request("GET", "/pages/insights", Some(BOB), None)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = send(app(), request("GET", "/pages/insights", Some(MANAGER), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["metrics"][0]["label"], "Total Goals Set");
    assert_eq!(body["top_performer"], "Bob Smith");
}

#[tokio::test]
async fn test_openapi_is_served() {
    let (status, body) = send(app(), request("GET", "/api-docs/openapi.json", None, None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["info"]["title"], "Performance Management System");
}
