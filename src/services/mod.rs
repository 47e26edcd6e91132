//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.
//!
//! All services use Unit of Work pattern for centralized repository
//! access and transaction management.

pub mod container;
mod employee_service;
mod feedback_service;
mod goal_service;
mod insights_service;
mod task_service;

// Service Container
pub use container::{parallel, ServiceContainer, Services};

// Service traits and implementations
pub use employee_service::{EmployeeManager, EmployeeService};
pub use feedback_service::{FeedbackManager, FeedbackService};
pub use goal_service::{GoalManager, GoalService};
pub use insights_service::{InsightsReporter, InsightsService};
pub use task_service::{TaskManager, TaskService};
