//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::infra::Database;
use crate::pages::PageBuilder;
use crate::services::{ServiceContainer, Services};

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// Use-case services
    pub services: Arc<dyn ServiceContainer>,
    /// Page view-model builder over the same services
    pub pages: PageBuilder,
    /// Database handle, used for health checks
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state backed by the database.
    ///
    /// Services share one Unit of Work over the connection pool.
    pub fn from_database(database: Arc<Database>) -> Self {
        let services: Arc<dyn ServiceContainer> =
            Arc::new(Services::from_connection(database.get_connection()));
        Self::new(services, database)
    }

    /// Create application state with manually injected services.
    pub fn new(services: Arc<dyn ServiceContainer>, database: Arc<Database>) -> Self {
        Self {
            pages: PageBuilder::new(services.clone()),
            services,
            database,
        }
    }
}
