//! Migrate command - Schema and trigger management.

use sea_orm::DbErr;

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

fn migration_failed(e: DbErr) -> AppError {
    AppError::internal(format!("Migration failed: {}", e))
}

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // Connect without auto-running migrations for manual control
    let db = Database::connect_without_migrations(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    match args.action {
        MigrateAction::Up => {
            db.run_migrations().await.map_err(migration_failed)?;
            tracing::info!("Tables and goal completion trigger are up to date");
        }
        MigrateAction::Down => {
            db.rollback_migration().await.map_err(migration_failed)?;
            tracing::info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await.map_err(migration_failed)?;
            for (name, applied) in status {
                println!("{:<8} {}", if applied { "applied" } else { "pending" }, name);
            }
        }
        MigrateAction::Fresh => {
            tracing::warn!("Dropping all tables, existing goals and feedback will be lost");
            db.fresh_migrations().await.map_err(migration_failed)?;
            tracing::info!("Schema recreated");
        }
    }

    Ok(())
}
