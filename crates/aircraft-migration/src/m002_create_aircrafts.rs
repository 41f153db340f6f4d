//! Миграция: создание таблицы Aircrafts.

use sea_orm_migration::prelude::*;

use crate::m001_create_lookup_tables::{AirplaneTypes, EngineTypes, Media};

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m002_create_aircrafts"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Основные поля допускают NULL: PUT заменяет запись целиком
        manager
            .create_table(
                Table::create()
                    .table(Aircrafts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Aircrafts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Aircrafts::Model).string().null())
                    .col(ColumnDef::new(Aircrafts::EngineAmount).integer().null())
                    .col(ColumnDef::new(Aircrafts::PassengerCapacity).integer().null())
                    .col(ColumnDef::new(Aircrafts::RangeInKm).integer().null())
                    .col(ColumnDef::new(Aircrafts::MediaId).integer().null())
                    .col(ColumnDef::new(Aircrafts::AirplaneTypeId).integer().null())
                    .col(ColumnDef::new(Aircrafts::EngineTypeId).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_aircrafts_media")
                            .from(Aircrafts::Table, Aircrafts::MediaId)
                            .to(Media::Table, Media::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_aircrafts_airplane_type")
                            .from(Aircrafts::Table, Aircrafts::AirplaneTypeId)
                            .to(AirplaneTypes::Table, AirplaneTypes::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_aircrafts_engine_type")
                            .from(Aircrafts::Table, Aircrafts::EngineTypeId)
                            .to(EngineTypes::Table, EngineTypes::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Aircrafts::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Aircrafts {
    #[iden = "Aircrafts"]
    Table,
    Id,
    #[iden = "Model"]
    Model,
    EngineAmount,
    PassengerCapacity,
    RangeInKm,
    MediaId,
    AirplaneTypeId,
    EngineTypeId,
}
