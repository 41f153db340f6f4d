//! Миграция: справочники airplane_types, engine_types, media.

use sea_orm_migration::prelude::*;

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m001_create_lookup_tables"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AirplaneTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AirplaneTypes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AirplaneTypes::TypeName).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(EngineTypes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EngineTypes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(EngineTypes::EngineName).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Media::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Media::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Media::ImageUrl).string().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Media::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(EngineTypes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AirplaneTypes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub(crate) enum AirplaneTypes {
    Table,
    Id,
    TypeName,
}

#[derive(Iden)]
pub(crate) enum EngineTypes {
    Table,
    Id,
    EngineName,
}

#[derive(Iden)]
pub(crate) enum Media {
    Table,
    Id,
    ImageUrl,
}
