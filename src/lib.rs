//! Performance Management System
//!
//! Managers set goals for their team, approve the tasks employees log
//! against them, leave feedback and follow organisation-wide insights.
//! Completing a goal automatically records congratulatory feedback.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Employees, goals, tasks, feedback and insights
//! - **services**: Application use cases and business logic
//! - **pages**: Role-aware page view models
//! - **infra**: Database, migrations and repositories
//! - **api**: HTTP handlers, session middleware, and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server (migrates and seeds on start)
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//!
//! # Insert sample employees
//! cargo run -- seed
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod pages;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Employee, Goal, GoalStatus, Role};
pub use errors::{AppError, AppResult};
