//! Маршруты ресурса Aircrafts: список, карточка, создание, замена, удаление.

use crate::api::extract::{parse_positive_id, storage_id, AircraftId};
use crate::api::form::{parse_form, CreateAircraftForm, DeleteAircraftForm, UpdateAircraftForm};
use crate::api::response::PrettyJson;
use crate::api::AppState;
use crate::error::AppError;
use crate::services::aircraft_service::{self, AircraftDetail, AircraftSummary};
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, MethodRouter};
use axum::Router;
use serde::Serialize;
use serde_json::json;

// ── Типы ответов ─────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AircraftListItem {
    pub id: i32,
    pub model: Option<String>,
    pub link: String,
}

#[derive(Debug, Serialize)]
pub struct AircraftDetailResponse {
    pub id: i32,
    pub model: Option<String>,
    pub engine_amount: Option<i32>,
    pub passenger_capacity: Option<i32>,
    pub range_in_km: Option<i32>,
    pub airplane_type: Option<String>,
    pub engine_type: Option<String>,
    pub image_url: Option<String>,
}

impl From<AircraftDetail> for AircraftDetailResponse {
    fn from(a: AircraftDetail) -> Self {
        AircraftDetailResponse {
            id: a.id,
            model: a.model,
            engine_amount: a.engine_amount,
            passenger_capacity: a.passenger_capacity,
            range_in_km: a.range_in_km,
            airplane_type: a.airplane_type,
            engine_type: a.engine_type,
            image_url: a.image_url,
        }
    }
}

pub fn routes() -> Router<AppState> {
    // Один набор обработчиков на коллекцию и на элемент: id может прийти и в query
    let resource = || -> MethodRouter<AppState> {
        get(read_aircrafts)
            .post(create_aircraft)
            .put(update_aircraft)
            .delete(delete_aircraft)
    };

    Router::new()
        .route("/aircrafts", resource())
        .route("/aircrafts/", resource())
        .route("/aircrafts/{id}", resource())
        .route("/aircrafts/{id}/", resource())
}

/// Ссылка на карточку самолёта.
pub fn detail_link(public_url: &str, id: i32) -> String {
    format!("{}/aircrafts/?id={id}", public_url.trim_end_matches('/'))
}

// ── Обработчики ──────────────────────────────────────────────────────────────

/// GET /aircrafts/ — список; GET /aircrafts/{id} или ?id= — карточка.
async fn read_aircrafts(
    State(state): State<AppState>,
    AircraftId(id): AircraftId,
) -> Result<Response, AppError> {
    match id {
        Some(id) => {
            let aircraft = match storage_id(id) {
                Some(key) => aircraft_service::get_aircraft_detail(&state.db, key)
                    .await
                    .map_err(AppError::storage("Failed to fetch aircraft"))?,
                None => None,
            }
            .ok_or_else(AppError::aircraft_not_found)?;

            tracing::debug!("Карточка самолёта: {id}");
            Ok(PrettyJson(AircraftDetailResponse::from(aircraft)).into_response())
        }
        None => {
            let aircrafts = aircraft_service::list_aircrafts(&state.db)
                .await
                .map_err(AppError::storage("Failed to fetch aircrafts"))?;

            tracing::debug!("Список самолётов: {} записей", aircrafts.len());

            let items: Vec<AircraftListItem> = aircrafts
                .into_iter()
                .map(|AircraftSummary { id, model }| AircraftListItem {
                    id,
                    model,
                    link: detail_link(&state.public_url, id),
                })
                .collect();

            Ok(PrettyJson(items).into_response())
        }
    }
}

/// POST /aircrafts/ — создание из формы.
async fn create_aircraft(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, AppError> {
    let aircraft = parse_form::<CreateAircraftForm>(&body)?.into_new_aircraft()?;

    let id = aircraft_service::create_aircraft(&state.db, aircraft)
        .await
        .map_err(AppError::storage("Failed to create aircraft"))?;

    tracing::info!("Самолёт создан: {id}");

    Ok((
        StatusCode::CREATED,
        PrettyJson(json!({
            "message": "Aircraft created successfully",
            "id": id,
        })),
    )
        .into_response())
}

/// PUT /aircrafts/{id} — полная замена полей.
async fn update_aircraft(
    State(state): State<AppState>,
    AircraftId(id): AircraftId,
    body: Bytes,
) -> Result<Response, AppError> {
    let Some(id) = id else {
        return Err(AppError::BadRequest(
            "Aircraft ID is required in URL path".into(),
        ));
    };

    let form: UpdateAircraftForm = parse_form(&body)?;

    let affected = match storage_id(id) {
        Some(key) => aircraft_service::update_aircraft(&state.db, key, form.into())
            .await
            .map_err(AppError::storage("Failed to update aircraft"))?,
        None => 0,
    };

    if affected == 0 {
        return Err(AppError::aircraft_not_found());
    }

    tracing::info!("Самолёт обновлён: {id}");

    Ok(PrettyJson(json!({ "message": "Aircraft updated successfully" })).into_response())
}

/// DELETE /aircrafts/{id} — удаление; id может прийти и в теле формы.
async fn delete_aircraft(
    State(state): State<AppState>,
    AircraftId(id): AircraftId,
    body: Bytes,
) -> Result<Response, AppError> {
    let id = id.or_else(|| body_aircraft_id(&body));

    let Some(id) = id else {
        return Err(AppError::BadRequest("Aircraft ID is required".into()));
    };

    let affected = match storage_id(id) {
        Some(key) => aircraft_service::delete_aircraft(&state.db, key)
            .await
            .map_err(AppError::storage("Failed to delete aircraft"))?,
        None => 0,
    };

    if affected == 0 {
        return Err(AppError::aircraft_not_found_with_id(id));
    }

    tracing::info!("Самолёт удалён: {id}");

    Ok(PrettyJson(json!({
        "message": "Aircraft deleted successfully",
        "deleted_id": id,
    }))
    .into_response())
}

/// Id из тела DELETE. Тело только запасной источник: ошибка разбора даёт `None`.
fn body_aircraft_id(body: &[u8]) -> Option<i64> {
    match parse_form::<DeleteAircraftForm>(body) {
        Ok(form) => form.id.and_then(|raw| parse_positive_id(&raw)),
        Err(e) => {
            tracing::debug!("Тело DELETE не разобрано, id не найден: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_link_embeds_id() {
        assert_eq!(
            detail_link("http://localhost:8888/aircraft-api", 12),
            "http://localhost:8888/aircraft-api/aircrafts/?id=12"
        );
    }

    #[test]
    fn body_id_is_read_from_form() {
        assert_eq!(body_aircraft_id(b"id=15"), Some(15));
        assert_eq!(body_aircraft_id(b"id=abc"), None);
        assert_eq!(body_aircraft_id(b""), None);
    }

    #[test]
    fn malformed_body_yields_no_id() {
        // Повторяющееся поле не разбирается в структуру
        assert_eq!(body_aircraft_id(b"id=1&id=2"), None);
    }

    #[test]
    fn detail_link_ignores_trailing_slash() {
        assert_eq!(
            detail_link("https://api.example.com/", 1),
            "https://api.example.com/aircrafts/?id=1"
        );
    }
}
