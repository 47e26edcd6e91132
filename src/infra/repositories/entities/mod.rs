//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod employee;
pub mod feedback;
pub mod goal;
pub mod task;
