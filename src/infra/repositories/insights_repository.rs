//! Aggregate queries behind the business insights dashboard.

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, QueryResult, Statement};
use std::sync::Arc;

use crate::domain::InsightFigures;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

const TOTAL_GOALS_SQL: &str = "SELECT COUNT(*)::bigint AS total FROM goals";

const GOALS_BY_STATUS_SQL: &str =
    "SELECT status, COUNT(*)::bigint AS count FROM goals GROUP BY status";

const AVERAGE_GOALS_SQL: &str = r#"
    SELECT AVG(goal_count)::float8 AS average FROM (
        SELECT employee_id, COUNT(id) AS goal_count
        FROM goals
        GROUP BY employee_id
    ) AS employee_goals
"#;

const TOP_PERFORMER_SQL: &str = r#"
    SELECT e.name AS name, COUNT(g.id)::bigint AS completed
    FROM employees e
    JOIN goals g ON e.id = g.employee_id
    WHERE g.status = 'Completed'
    GROUP BY e.name
    ORDER BY COUNT(g.id) DESC, e.name ASC
    LIMIT 1
"#;

const LOWEST_PERFORMER_SQL: &str = r#"
    SELECT e.name AS name, COUNT(g.id)::bigint AS completed
    FROM employees e
    LEFT JOIN goals g ON e.id = g.employee_id AND g.status = 'Completed'
    GROUP BY e.name
    ORDER BY COUNT(g.id) ASC, e.name ASC
    LIMIT 1
"#;

/// Insights repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait InsightsRepository: Send + Sync {
    /// Run every aggregate query and collect the raw figures
    async fn figures(&self) -> AppResult<InsightFigures>;
}

/// Concrete implementation of InsightsRepository using raw SQL
pub struct InsightsStore {
    db: Arc<DatabaseConnection>,
}

impl InsightsStore {
    /// Create new repository instance
    pub fn new(db: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self { db: db.into() }
    }

    async fn query_one(&self, sql: &str) -> AppResult<Option<QueryResult>> {
        self.db
            .query_one(Statement::from_string(DatabaseBackend::Postgres, sql.to_string()))
            .await
            .map_err(AppError::from)
    }

    async fn query_all(&self, sql: &str) -> AppResult<Vec<QueryResult>> {
        self.db
            .query_all(Statement::from_string(DatabaseBackend::Postgres, sql.to_string()))
            .await
            .map_err(AppError::from)
    }

    async fn performer(&self, sql: &str) -> AppResult<Option<String>> {
        match self.query_one(sql).await? {
            Some(row) => Ok(Some(row.try_get::<String>("", "name")?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl InsightsRepository for InsightsStore {
    async fn figures(&self) -> AppResult<InsightFigures> {
        let total_goals = match self.query_one(TOTAL_GOALS_SQL).await? {
            Some(row) => row.try_get::<i64>("", "total")?,
            None => 0,
        };

        let mut goals_by_status = Vec::new();
        for row in self.query_all(GOALS_BY_STATUS_SQL).await? {
            goals_by_status.push((
                row.try_get::<String>("", "status")?,
                row.try_get::<i64>("", "count")?,
            ));
        }

        let average_goals = match self.query_one(AVERAGE_GOALS_SQL).await? {
            Some(row) => row.try_get::<Option<f64>>("", "average")?,
            None => None,
        };

        let top_performer = self.performer(TOP_PERFORMER_SQL).await?;
        let lowest_performer = self.performer(LOWEST_PERFORMER_SQL).await?;

        tracing::debug!(total_goals, "Collected performance figures");

        Ok(InsightFigures {
            total_goals,
            goals_by_status,
            average_goals,
            top_performer,
            lowest_performer,
        })
    }
}
