//! Create `report_store` table.
//!
//! Holds at most one row: the primary key is pinned to `1` by a CHECK constraint.
use sea_orm_migration::{prelude::*, schema::*};

/// The only id the table accepts. Must match `models::report::SINGLETON_ID`.
const SINGLETON_ID: i32 = 1;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReportStore::Table)
                    .if_not_exists()
                    .col(
                        integer(ReportStore::Id)
                            .primary_key()
                            .check(Expr::col(ReportStore::Id).eq(SINGLETON_ID)),
                    )
                    .col(text(ReportStore::Payload).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ReportStore::Table).if_exists().to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ReportStore { Table, Id, Payload }
