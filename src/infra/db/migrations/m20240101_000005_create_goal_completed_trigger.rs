//! Migration: Automated feedback when a goal becomes completed.
//!
//! `goal_completed_trigger` fires after every goal update and inserts a
//! congratulatory feedback row, authored by the employee's manager, when the
//! status moves into `Completed` from any other status.

use sea_orm_migration::prelude::*;

use crate::config::{COMPLETED_GOAL_FEEDBACK, STATUS_COMPLETED};

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Render the PL/pgSQL trigger function.
pub fn trigger_function_sql() -> String {
    format!(
        r#"
CREATE OR REPLACE FUNCTION goal_completed_feedback()
RETURNS TRIGGER AS $$
BEGIN
    IF NEW.status = '{completed}' AND OLD.status <> '{completed}' THEN
        INSERT INTO feedback (goal_id, manager_id, feedback_text, created_at)
        VALUES (
            NEW.id,
            (SELECT manager_id FROM employees WHERE id = NEW.employee_id),
            '{message}',
            NOW()
        );
    END IF;
    RETURN NEW;
END;
$$ LANGUAGE plpgsql;
"#,
        completed = STATUS_COMPLETED,
        message = COMPLETED_GOAL_FEEDBACK.replace('\'', "''"),
    )
}

const DROP_TRIGGER_SQL: &str = "DROP TRIGGER IF EXISTS goal_completed_trigger ON goals";

const CREATE_TRIGGER_SQL: &str = r#"
CREATE TRIGGER goal_completed_trigger
AFTER UPDATE ON goals
FOR EACH ROW
EXECUTE FUNCTION goal_completed_feedback()
"#;

const DROP_FUNCTION_SQL: &str = "DROP FUNCTION IF EXISTS goal_completed_feedback()";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(&trigger_function_sql()).await?;
        db.execute_unprepared(DROP_TRIGGER_SQL).await?;
        db.execute_unprepared(CREATE_TRIGGER_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(DROP_TRIGGER_SQL).await?;
        db.execute_unprepared(DROP_FUNCTION_SQL).await?;

        Ok(())
    }
}
