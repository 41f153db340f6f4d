//! Справочник типов двигателей.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "engine_types")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub engine_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::aircrafts::Entity")]
    Aircrafts,
}

impl Related<super::aircrafts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Aircrafts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
