//! Service Container - Centralized service access with parallel execution support.
//!
//! Handlers and page builders depend on the `ServiceContainer` trait rather
//! than concrete services, so tests can supply in-memory implementations.

use std::future::Future;
use std::sync::Arc;

use super::{EmployeeService, FeedbackService, GoalService, InsightsService, TaskService};
use crate::errors::AppResult;
use crate::infra::Persistence;

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get employee service
    fn employees(&self) -> Arc<dyn EmployeeService>;

    /// Get goal service
    fn goals(&self) -> Arc<dyn GoalService>;

    /// Get task service
    fn tasks(&self) -> Arc<dyn TaskService>;

    /// Get feedback service
    fn feedback(&self) -> Arc<dyn FeedbackService>;

    /// Get insights service
    fn insights(&self) -> Arc<dyn InsightsService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    employee_service: Arc<dyn EmployeeService>,
    goal_service: Arc<dyn GoalService>,
    task_service: Arc<dyn TaskService>,
    feedback_service: Arc<dyn FeedbackService>,
    insights_service: Arc<dyn InsightsService>,
}

impl Services {
    /// Create a new service container from already built services
    pub fn new(
        employee_service: Arc<dyn EmployeeService>,
        goal_service: Arc<dyn GoalService>,
        task_service: Arc<dyn TaskService>,
        feedback_service: Arc<dyn FeedbackService>,
        insights_service: Arc<dyn InsightsService>,
    ) -> Self {
        Self {
            employee_service,
            goal_service,
            task_service,
            feedback_service,
            insights_service,
        }
    }

    /// Create service container from database connection
    pub fn from_connection(db: impl Into<Arc<sea_orm::DatabaseConnection>>) -> Self {
        use super::{EmployeeManager, FeedbackManager, GoalManager, InsightsReporter, TaskManager};

        let uow = Arc::new(Persistence::new(db));

        Self {
            employee_service: Arc::new(EmployeeManager::new(uow.clone())),
            goal_service: Arc::new(GoalManager::new(uow.clone())),
            task_service: Arc::new(TaskManager::new(uow.clone())),
            feedback_service: Arc::new(FeedbackManager::new(uow.clone())),
            insights_service: Arc::new(InsightsReporter::new(uow)),
        }
    }
}

impl ServiceContainer for Services {
    fn employees(&self) -> Arc<dyn EmployeeService> {
        self.employee_service.clone()
    }

    fn goals(&self) -> Arc<dyn GoalService> {
        self.goal_service.clone()
    }

    fn tasks(&self) -> Arc<dyn TaskService> {
        self.task_service.clone()
    }

    fn feedback(&self) -> Arc<dyn FeedbackService> {
        self.feedback_service.clone()
    }

    fn insights(&self) -> Arc<dyn InsightsService> {
        self.insights_service.clone()
    }
}

/// Parallel execution utilities for running independent operations concurrently.
pub mod parallel {
    use super::*;
    use tokio::try_join;

    /// Execute two independent async operations in parallel.
    ///
    /// If either operation fails, the error is returned immediately.
    ///
    /// # Example
    /// ```ignore
    /// let (tasks, feedback) = parallel::join2(
    ///     services.tasks().list_tasks(goal.id),
    ///     services.feedback().list_feedback(goal.id),
    /// ).await?;
    /// ```
    pub async fn join2<F1, F2, T1, T2>(f1: F1, f2: F2) -> AppResult<(T1, T2)>
    where
        F1: Future<Output = AppResult<T1>>,
        F2: Future<Output = AppResult<T2>>,
    {
        try_join!(f1, f2)
    }

    /// Execute a collection of homogeneous async operations in parallel.
    ///
    /// Results are returned in the same order as the input futures.
    pub async fn join_all<F, T>(futures: Vec<F>) -> AppResult<Vec<T>>
    where
        F: Future<Output = AppResult<T>>,
    {
        let results = futures::future::join_all(futures).await;
        results.into_iter().collect()
    }
}
