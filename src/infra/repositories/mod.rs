//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

pub(crate) mod entities;
mod employee_repository;
mod feedback_repository;
mod goal_repository;
mod insights_repository;
mod task_repository;

pub use employee_repository::{EmployeeRepository, EmployeeStore};
pub use feedback_repository::{FeedbackRepository, FeedbackStore};
pub use goal_repository::{GoalRepository, GoalStore};
pub use insights_repository::{InsightsRepository, InsightsStore};
pub use task_repository::{TaskRepository, TaskStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use employee_repository::MockEmployeeRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use feedback_repository::MockFeedbackRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use goal_repository::MockGoalRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use insights_repository::MockInsightsRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use task_repository::MockTaskRepository;
