use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OneSide::Table)
                    .if_not_exists()
                    // Ids are handed out by the application, not by the database.
                    .col(integer(OneSide::Id).primary_key().take())
                    .col(string(OneSide::Name))
                    .col(string(OneSide::Email))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OneSide::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OneSide {
    Table,
    Id,
    Name,
    Email,
}
