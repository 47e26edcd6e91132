//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection and migrations
//! - Repositories over the SeaORM entities
//! - Unit of Work for transaction management

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{
    EmployeeRepository, EmployeeStore, FeedbackRepository, FeedbackStore, GoalRepository,
    GoalStore, InsightsRepository, InsightsStore, TaskRepository, TaskStore,
};
pub use unit_of_work::{Persistence, TransactionContext, TxEmployeeRepository, UnitOfWork};
