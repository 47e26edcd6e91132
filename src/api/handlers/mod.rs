//! HTTP request handlers.

pub mod employee_handler;
pub mod feedback_handler;
pub mod goal_handler;
pub mod page_handler;
pub mod task_handler;

pub use employee_handler::{employee_routes, profile_routes};
pub use feedback_handler::feedback_routes;
pub use goal_handler::goal_routes;
pub use page_handler::page_routes;
pub use task_handler::task_routes;
