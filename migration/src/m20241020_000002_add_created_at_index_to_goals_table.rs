use sea_orm_migration::prelude::{
    async_trait, DbErr, DeriveMigrationName, Index, MigrationTrait, SchemaManager,
};

use crate::m20241020_000001_create_goals_table::Goal;

const INDEX_NAME: &str = "goal_created_at_index";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name(INDEX_NAME)
                    .table(Goal::Table)
                    .col(Goal::CreatedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name(INDEX_NAME).table(Goal::Table).to_owned())
            .await
    }
}
