//! Общие хелперы тестов: in-memory SQLite с применёнными миграциями.

use aircraft_entities::{aircrafts, airplane_types, engine_types, media};
use aircraft_migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, ConnectOptions, Database, DatabaseConnection};

pub async fn test_db() -> DatabaseConnection {
    // Одно соединение: у каждого соединения с :memory: своя база
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).sqlx_logging(false);

    let db = Database::connect(options).await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

/// Вставить справочные записи и самолёт, который на них ссылается.
/// Возвращает id самолёта.
pub async fn insert_lookups(db: &DatabaseConnection) -> i32 {
    let airplane_type = airplane_types::ActiveModel {
        type_name: Set("narrow-body".into()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    let engine_type = engine_types::ActiveModel {
        engine_name: Set("turbofan".into()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    let image = insert_media(db, "https://img.example.com/b737.jpg").await;

    aircrafts::ActiveModel {
        model: Set(Some("B737".into())),
        engine_amount: Set(Some(2)),
        passenger_capacity: Set(Some(189)),
        range_in_km: Set(Some(5600)),
        media_id: Set(Some(image)),
        airplane_type_id: Set(Some(airplane_type.id)),
        engine_type_id: Set(Some(engine_type.id)),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
    .id
}

pub async fn insert_media(db: &DatabaseConnection, image_url: &str) -> i32 {
    media::ActiveModel {
        image_url: Set(image_url.into()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
    .id
}
