//! Миграции схемы: справочники, затем Aircrafts.

pub use sea_orm_migration::prelude::*;

mod m001_create_lookup_tables;
mod m002_create_aircrafts;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m001_create_lookup_tables::Migration),
            Box::new(m002_create_aircrafts::Migration),
        ]
    }
}
