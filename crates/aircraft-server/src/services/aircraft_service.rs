//! Сервис самолётов: по одному SQL-запросу на операцию.

use aircraft_entities::{
    aircrafts::{ActiveModel, Column, Entity as AircraftEntity, Relation},
    airplane_types, engine_types, media,
};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    FromQueryResult, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

/// Строка списка самолётов.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct AircraftSummary {
    pub id: i32,
    pub model: Option<String>,
}

/// Карточка самолёта с данными справочников.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct AircraftDetail {
    pub id: i32,
    pub model: Option<String>,
    pub engine_amount: Option<i32>,
    pub passenger_capacity: Option<i32>,
    pub range_in_km: Option<i32>,
    pub airplane_type: Option<String>,
    pub engine_type: Option<String>,
    pub image_url: Option<String>,
}

/// Данные для создания самолёта.
#[derive(Debug, Clone)]
pub struct NewAircraft {
    pub model: String,
    pub engine_amount: i32,
    pub passenger_capacity: i32,
    pub range_in_km: i32,
}

/// Полная замена полей самолёта. `None` записывается как NULL.
#[derive(Debug, Clone, Default)]
pub struct AircraftReplacement {
    pub model: Option<String>,
    pub engine_amount: Option<i32>,
    pub passenger_capacity: Option<i32>,
    pub range_in_km: Option<i32>,
    pub media_id: Option<i32>,
}

/// Все самолёты по возрастанию id.
pub async fn list_aircrafts(db: &DatabaseConnection) -> Result<Vec<AircraftSummary>, DbErr> {
    AircraftEntity::find()
        .select_only()
        .column_as(Column::Id, "id")
        .column_as(Column::Model, "model")
        .order_by_asc(Column::Id)
        .into_model::<AircraftSummary>()
        .all(db)
        .await
}

/// Самолёт по id вместе с типом, двигателем и изображением (LEFT JOIN).
pub async fn get_aircraft_detail(
    db: &DatabaseConnection,
    id: i32,
) -> Result<Option<AircraftDetail>, DbErr> {
    AircraftEntity::find()
        .select_only()
        .column_as(Column::Id, "id")
        .column_as(Column::Model, "model")
        .column_as(Column::EngineAmount, "engine_amount")
        .column_as(Column::PassengerCapacity, "passenger_capacity")
        .column_as(Column::RangeInKm, "range_in_km")
        .column_as(airplane_types::Column::TypeName, "airplane_type")
        .column_as(engine_types::Column::EngineName, "engine_type")
        .column_as(media::Column::ImageUrl, "image_url")
        .join(JoinType::LeftJoin, Relation::Media.def())
        .join(JoinType::LeftJoin, Relation::AirplaneType.def())
        .join(JoinType::LeftJoin, Relation::EngineType.def())
        .filter(Column::Id.eq(id))
        .limit(1)
        .into_model::<AircraftDetail>()
        .one(db)
        .await
}

/// Создать самолёт. Возвращает id новой записи.
pub async fn create_aircraft(db: &DatabaseConnection, data: NewAircraft) -> Result<i32, DbErr> {
    let model = ActiveModel {
        model: Set(Some(data.model)),
        engine_amount: Set(Some(data.engine_amount)),
        passenger_capacity: Set(Some(data.passenger_capacity)),
        range_in_km: Set(Some(data.range_in_km)),
        ..Default::default()
    };
    let created = model.insert(db).await?;
    Ok(created.id)
}

/// Заменить поля самолёта. Возвращает число затронутых строк.
pub async fn update_aircraft(
    db: &DatabaseConnection,
    id: i32,
    data: AircraftReplacement,
) -> Result<u64, DbErr> {
    let result = AircraftEntity::update_many()
        .col_expr(Column::Model, Expr::value(data.model))
        .col_expr(Column::EngineAmount, Expr::value(data.engine_amount))
        .col_expr(Column::PassengerCapacity, Expr::value(data.passenger_capacity))
        .col_expr(Column::RangeInKm, Expr::value(data.range_in_km))
        .col_expr(Column::MediaId, Expr::value(data.media_id))
        .filter(Column::Id.eq(id))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}

/// Удалить самолёт по id. Возвращает число затронутых строк.
pub async fn delete_aircraft(db: &DatabaseConnection, id: i32) -> Result<u64, DbErr> {
    let result = AircraftEntity::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{insert_lookups, test_db};

    fn a320() -> NewAircraft {
        NewAircraft {
            model: "A320".into(),
            engine_amount: 2,
            passenger_capacity: 180,
            range_in_km: 6100,
        }
    }

    #[tokio::test]
    async fn create_then_detail_has_null_lookups() {
        let db = test_db().await;

        let id = create_aircraft(&db, a320()).await.unwrap();
        let detail = get_aircraft_detail(&db, id).await.unwrap().unwrap();

        assert_eq!(
            detail,
            AircraftDetail {
                id,
                model: Some("A320".into()),
                engine_amount: Some(2),
                passenger_capacity: Some(180),
                range_in_km: Some(6100),
                airplane_type: None,
                engine_type: None,
                image_url: None,
            }
        );
    }

    #[tokio::test]
    async fn detail_joins_lookup_names() {
        let db = test_db().await;
        let id = insert_lookups(&db).await;

        let detail = get_aircraft_detail(&db, id).await.unwrap().unwrap();

        assert_eq!(detail.airplane_type.as_deref(), Some("narrow-body"));
        assert_eq!(detail.engine_type.as_deref(), Some("turbofan"));
        assert_eq!(
            detail.image_url.as_deref(),
            Some("https://img.example.com/b737.jpg")
        );
    }

    #[tokio::test]
    async fn detail_of_missing_id_is_none() {
        let db = test_db().await;
        assert!(get_aircraft_detail(&db, 42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_is_ordered_by_id() {
        let db = test_db().await;
        for name in ["A320", "B737", "E190"] {
            create_aircraft(
                &db,
                NewAircraft {
                    model: name.into(),
                    ..a320()
                },
            )
            .await
            .unwrap();
        }

        let list = list_aircrafts(&db).await.unwrap();
        let ids: Vec<i32> = list.iter().map(|a| a.id).collect();
        let mut sorted = ids.clone();
        sorted.sort();

        assert_eq!(list.len(), 3);
        assert_eq!(ids, sorted);
        assert_eq!(list[0].model.as_deref(), Some("A320"));
    }

    #[tokio::test]
    async fn update_replaces_every_field() {
        let db = test_db().await;
        let id = create_aircraft(&db, a320()).await.unwrap();

        let affected = update_aircraft(
            &db,
            id,
            AircraftReplacement {
                model: Some("A321neo".into()),
                engine_amount: Some(2),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(affected, 1);

        let detail = get_aircraft_detail(&db, id).await.unwrap().unwrap();
        assert_eq!(detail.model.as_deref(), Some("A321neo"));
        assert_eq!(detail.engine_amount, Some(2));
        assert_eq!(detail.passenger_capacity, None);
        assert_eq!(detail.range_in_km, None);
    }

    #[tokio::test]
    async fn update_and_delete_of_missing_id_affect_nothing() {
        let db = test_db().await;
        let id = create_aircraft(&db, a320()).await.unwrap();

        assert_eq!(
            update_aircraft(&db, id + 100, AircraftReplacement::default())
                .await
                .unwrap(),
            0
        );
        assert_eq!(delete_aircraft(&db, id + 100).await.unwrap(), 0);

        let detail = get_aircraft_detail(&db, id).await.unwrap().unwrap();
        assert_eq!(detail.model.as_deref(), Some("A320"));
    }

    #[tokio::test]
    async fn delete_removes_row() {
        let db = test_db().await;
        let id = create_aircraft(&db, a320()).await.unwrap();

        assert_eq!(delete_aircraft(&db, id).await.unwrap(), 1);
        assert!(get_aircraft_detail(&db, id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn deleting_media_nulls_the_image() {
        let db = test_db().await;
        let id = insert_lookups(&db).await;

        let media_id = AircraftEntity::find_by_id(id)
            .one(&db)
            .await
            .unwrap()
            .unwrap()
            .media_id
            .unwrap();
        media::Entity::delete_by_id(media_id)
            .exec(&db)
            .await
            .unwrap();

        let row = AircraftEntity::find_by_id(id).one(&db).await.unwrap().unwrap();
        assert_eq!(row.media_id, None);

        let detail = get_aircraft_detail(&db, id).await.unwrap().unwrap();
        assert_eq!(detail.image_url, None);
        assert_eq!(detail.model.as_deref(), Some("B737"));
        assert_eq!(detail.airplane_type.as_deref(), Some("narrow-body"));
    }
}
