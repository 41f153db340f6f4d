//! Экстракторы запроса: id самолёта из query или пути.

use axum::extract::{FromRequestParts, Query, RawPathParams};
use axum::http::request::Parts;
use serde::Deserialize;
use std::convert::Infallible;

/// Id самолёта, если он указан в запросе.
///
/// `?id=` имеет приоритет над сегментом пути `/aircrafts/{id}`.
/// Значение, которое не является положительным целым, считается отсутствующим.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AircraftId(pub Option<i64>);

#[derive(Debug, Deserialize)]
struct IdQuery {
    id: Option<String>,
}

impl<S> FromRequestParts<S> for AircraftId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let query_id = Query::<IdQuery>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(q)| q.id);

        let path_id = match RawPathParams::from_request_parts(parts, state).await {
            Ok(params) => params
                .iter()
                .find(|(name, _)| *name == "id")
                .map(|(_, value)| value.to_owned()),
            Err(_) => None,
        };

        Ok(AircraftId(resolve_aircraft_id(
            query_id.as_deref(),
            path_id.as_deref(),
        )))
    }
}

/// Выбрать id: сначала query, затем путь.
pub fn resolve_aircraft_id(query: Option<&str>, path: Option<&str>) -> Option<i64> {
    query
        .and_then(parse_positive_id)
        .or_else(|| path.and_then(parse_positive_id))
}

/// Положительное целое или `None`.
pub fn parse_positive_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

/// Id в диапазоне колонки `Aircrafts.id`. Больший id не может существовать в таблице.
pub fn storage_id(id: i64) -> Option<i32> {
    i32::try_from(id).ok()
}
