//! Feedback database entity for SeaORM.

use sea_orm::entity::prelude::*;

use super::employee;
use crate::config::SYSTEM_AUTHOR;
use crate::domain::FeedbackEntry;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "feedback")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub goal_id: i32,
    /// Author; NULL when the trigger fires for an employee without a manager
    pub manager_id: Option<i32>,
    #[sea_orm(column_type = "Text")]
    pub feedback_text: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::goal::Entity",
        from = "Column::GoalId",
        to = "super::goal::Column::Id",
        on_delete = "Cascade"
    )]
    Goal,
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::ManagerId",
        to = "super::employee::Column::Id"
    )]
    Manager,
}

impl Related<super::goal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Goal.def()
    }
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Manager.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Join a feedback row with its (optional) author.
pub fn into_entry(model: Model, author: Option<employee::Model>) -> FeedbackEntry {
    FeedbackEntry {
        id: model.id,
        goal_id: model.goal_id,
        feedback_text: model.feedback_text,
        author: author
            .map(|a| a.name)
            .unwrap_or_else(|| SYSTEM_AUTHOR.to_string()),
        created_at: model.created_at,
    }
}
