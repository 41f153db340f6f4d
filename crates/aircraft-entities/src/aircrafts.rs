//! Entity для таблицы Aircrafts.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Aircrafts")]
pub struct Model {
    /// Первичный ключ, выдаётся базой при вставке
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Модель самолёта (колонка исторически называется `Model`)
    #[sea_orm(column_name = "Model")]
    pub model: Option<String>,

    /// Количество двигателей
    pub engine_amount: Option<i32>,

    /// Пассажировместимость
    pub passenger_capacity: Option<i32>,

    /// Дальность полёта, км
    pub range_in_km: Option<i32>,

    /// Изображение самолёта
    pub media_id: Option<i32>,

    pub airplane_type_id: Option<i32>,

    pub engine_type_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::media::Entity",
        from = "Column::MediaId",
        to = "super::media::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Media,
    #[sea_orm(
        belongs_to = "super::airplane_types::Entity",
        from = "Column::AirplaneTypeId",
        to = "super::airplane_types::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    AirplaneType,
    #[sea_orm(
        belongs_to = "super::engine_types::Entity",
        from = "Column::EngineTypeId",
        to = "super::engine_types::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    EngineType,
}

impl Related<super::media::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Media.def()
    }
}

impl Related<super::airplane_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AirplaneType.def()
    }
}

impl Related<super::engine_types::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EngineType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
