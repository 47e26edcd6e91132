//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Goal Status
// =============================================================================

/// Goal has been created but work has not started
pub const STATUS_DRAFT: &str = "Draft";

/// Goal is being worked on
pub const STATUS_IN_PROGRESS: &str = "In Progress";

/// Goal is done (fires the automated feedback trigger)
pub const STATUS_COMPLETED: &str = "Completed";

/// Goal was abandoned
pub const STATUS_CANCELLED: &str = "Cancelled";

/// All valid goal status values, in display order
pub const GOAL_STATUSES: &[&str] = &[
    STATUS_DRAFT,
    STATUS_IN_PROGRESS,
    STATUS_COMPLETED,
    STATUS_CANCELLED,
];

/// Check if a goal status value is valid
pub fn is_valid_status(status: &str) -> bool {
    GOAL_STATUSES.contains(&status)
}

/// Text of the feedback row inserted when a goal becomes completed
pub const COMPLETED_GOAL_FEEDBACK: &str = "Great job on completing this goal!";

// =============================================================================
// Roles & Session
// =============================================================================

/// Name marker identifying managers
pub const MANAGER_NAME_MARKER: &str = "Manager";

/// Request header carrying the acting employee's ID
pub const EMPLOYEE_ID_HEADER: &str = "X-Employee-Id";

/// Placeholder shown when an aggregate has no subject
pub const NOT_AVAILABLE: &str = "N/A";

/// Author shown for feedback rows without a manager
pub const SYSTEM_AUTHOR: &str = "System";

// =============================================================================
// Display Formats
// =============================================================================

/// Timestamp format for feedback entries
pub const FEEDBACK_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Date format for report lines
pub const REPORT_DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Seed Data
// =============================================================================

/// Manager created when the employees table is empty
pub const SEED_MANAGER: &str = "Alice Manager";

/// Team members created under the seed manager
pub const SEED_TEAM: &[&str] = &["Bob Smith", "Charlie Brown"];

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Database
// =============================================================================

pub const DEFAULT_DB_HOST: &str = "localhost";
pub const DEFAULT_DB_PORT: u16 = 5432;
pub const DEFAULT_DB_NAME: &str = "PMS";
pub const DEFAULT_DB_USER: &str = "postgres";
pub const DEFAULT_DB_PASSWORD: &str = "postgres";
