//! Migration: Create goals table with the status CHECK constraint.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_employees_table::Employees;
use crate::config::GOAL_STATUSES;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Goals::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Goals::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Goals::EmployeeId).integer().not_null())
                    .col(ColumnDef::new(Goals::Description).text().not_null())
                    .col(ColumnDef::new(Goals::DueDate).date().not_null())
                    .col(
                        ColumnDef::new(Goals::Status)
                            .string_len(50)
                            .not_null()
                            .check(Expr::col(Goals::Status).is_in(GOAL_STATUSES.iter().copied())),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_goals_employee_id")
                            .from(Goals::Table, Goals::EmployeeId)
                            .to(Employees::Table, Employees::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_goals_employee_id")
                    .table(Goals::Table)
                    .col(Goals::EmployeeId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Goals::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Goals {
    Table,
    Id,
    EmployeeId,
    Description,
    DueDate,
    Status,
}
