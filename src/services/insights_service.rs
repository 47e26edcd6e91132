//! Insights service - Organisation-wide goal statistics.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::PerformanceInsights;
use crate::errors::AppResult;
use crate::infra::UnitOfWork;

/// Insights service trait for dependency injection.
#[async_trait]
pub trait InsightsService: Send + Sync {
    /// Compute the dashboard figures
    async fn performance_insights(&self) -> AppResult<PerformanceInsights>;
}

/// Concrete implementation of InsightsService using Unit of Work.
pub struct InsightsReporter<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> InsightsReporter<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> InsightsService for InsightsReporter<U> {
    async fn performance_insights(&self) -> AppResult<PerformanceInsights> {
        let figures = self.uow.insights().figures().await?;
        tracing::debug!(total_goals = figures.total_goals, "Computed insights");
        Ok(PerformanceInsights::from(figures))
    }
}
