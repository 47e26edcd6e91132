//! Seed command - Inserts sample employees into an empty database.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;
use crate::services::{ServiceContainer, Services};

/// Execute the seed command
pub async fn execute(config: Config) -> AppResult<()> {
    let db = Database::connect(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    let services = Services::from_connection(db.get_connection());
    if services.employees().seed_data().await? {
        println!("Sample employees inserted");
    } else {
        println!("Employees already present, nothing to seed");
    }

    Ok(())
}
