use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ManySide::Table)
                    .if_not_exists()
                    .col(pk_auto(ManySide::Id))
                    .col(string_uniq(ManySide::Name))
                    .col(text(ManySide::Description))
                    .col(double(ManySide::PrepTime).default(12.0).take())
                    .col(boolean(ManySide::IsGlutenFree))
                    .col(string_null(ManySide::EnumExample))
                    .col(integer(ManySide::MinMaxExample))
                    .col(integer_null(ManySide::CustomValidatorExample))
                    .col(timestamp_with_time_zone(ManySide::DateExample))
                    .col(integer(ManySide::FkNeve))
                    .to_owned(),
            )
            .await?;

        // Lookup index for owner joins and dependent checks. No foreign key
        // constraint: references are guarded by the application.
        manager
            .create_index(
                Index::create()
                    .name("idx_many_side_fk_neve")
                    .table(ManySide::Table)
                    .col(ManySide::FkNeve)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ManySide::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ManySide {
    Table,
    Id,
    Name,
    Description,
    PrepTime,
    IsGlutenFree,
    EnumExample,
    MinMaxExample,
    CustomValidatorExample,
    DateExample,
    FkNeve,
}
