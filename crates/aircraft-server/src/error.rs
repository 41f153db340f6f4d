//! Типы ошибок сервиса самолётов.

use crate::api::response::PrettyJson;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Не найдено: {message}")]
    NotFound {
        message: String,
        /// Искомый id, возвращается клиенту только для DELETE
        searched_id: Option<i64>,
    },

    #[error("Неверный запрос: {0}")]
    BadRequest(String),

    #[error("{message}: {source}")]
    Storage {
        message: &'static str,
        #[source]
        source: sea_orm::DbErr,
    },
}

impl AppError {
    pub fn aircraft_not_found() -> Self {
        AppError::NotFound {
            message: "Aircraft not found".into(),
            searched_id: None,
        }
    }

    pub fn aircraft_not_found_with_id(id: i64) -> Self {
        AppError::NotFound {
            message: "Aircraft not found".into(),
            searched_id: Some(id),
        }
    }

    /// Обернуть ошибку БД в 500 с сообщением для клиента.
    ///
    /// Используется как `.map_err(AppError::storage("Failed to update aircraft"))`.
    pub fn storage(message: &'static str) -> impl FnOnce(sea_orm::DbErr) -> AppError {
        move |source| AppError::Storage { message, source }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound {
                message,
                searched_id: Some(id),
            } => (
                StatusCode::NOT_FOUND,
                PrettyJson(json!({ "error": message, "searched_id": id })),
            )
                .into_response(),
            AppError::NotFound { message, .. } => {
                (StatusCode::NOT_FOUND, PrettyJson(json!({ "error": message }))).into_response()
            }
            AppError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                PrettyJson(json!({ "error": message })),
            )
                .into_response(),
            AppError::Storage { message, source } => {
                // Детали DbErr остаются в логах
                tracing::error!("{message}: {source}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    PrettyJson(json!({ "error": message })),
                )
                    .into_response()
            }
        }
    }
}
