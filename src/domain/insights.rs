//! Aggregate performance statistics for the insights dashboard.

use std::collections::BTreeMap;

use serde::Serialize;
use utoipa::ToSchema;

use super::GoalStatus;
use crate::config::NOT_AVAILABLE;

/// Raw aggregate values as read from the database
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InsightFigures {
    pub total_goals: i64,
    pub goals_by_status: Vec<(String, i64)>,
    pub average_goals: Option<f64>,
    pub top_performer: Option<String>,
    pub lowest_performer: Option<String>,
}

/// Count of goals in one status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct StatusCount {
    pub status: GoalStatus,
    pub count: i64,
}

/// Performance insights presented to managers
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct PerformanceInsights {
    pub total_goals: i64,
    /// Every status in display order, zero when absent
    pub goals_by_status: Vec<StatusCount>,
    /// Two-decimal average of goals per employee with goals
    #[schema(example = "1.50")]
    pub average_goals_per_employee: String,
    #[schema(example = "Bob Smith")]
    pub top_performer: String,
    #[schema(example = "Charlie Brown")]
    pub lowest_performer: String,
}

impl From<InsightFigures> for PerformanceInsights {
    fn from(figures: InsightFigures) -> Self {
        let counts: BTreeMap<GoalStatus, i64> = figures
            .goals_by_status
            .iter()
            .filter_map(|(status, count)| status.parse().ok().map(|s| (s, *count)))
            .collect();

        let goals_by_status = GoalStatus::ALL
            .into_iter()
            .map(|status| StatusCount {
                status,
                count: counts.get(&status).copied().unwrap_or(0),
            })
            .collect();

        let average_goals_per_employee = match figures.average_goals {
            Some(avg) if avg > 0.0 => format!("{:.2}", avg),
            _ => "0".to_string(),
        };

        Self {
            total_goals: figures.total_goals,
            goals_by_status,
            average_goals_per_employee,
            top_performer: figures
                .top_performer
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            lowest_performer: figures
                .lowest_performer
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        }
    }
}
