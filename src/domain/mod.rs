//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod employee;
pub mod feedback;
pub mod goal;
pub mod insights;
pub mod task;

pub use employee::{team_members, Employee, ProfileResponse, Role};
pub use feedback::{FeedbackEntry, NewFeedback};
pub use goal::{Goal, GoalStatus, NewGoal};
pub use insights::{InsightFigures, PerformanceInsights, StatusCount};
pub use task::{Task, TaskProgress};
