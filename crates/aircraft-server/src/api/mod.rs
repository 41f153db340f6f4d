//! HTTP API: маршрутизация и состояние приложения.

pub mod aircraft_routes;
pub mod extract;
pub mod form;
pub mod response;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use sea_orm::{ConnectionTrait, DatabaseConnection};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Общее состояние приложения.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Внешний адрес API для ссылок в списке (без завершающего `/`)
    pub public_url: String,
}

/// Построить маршрутизатор Axum.
///
/// `base_path` — префикс ресурса, например `/aircraft-api`; пустая строка монтирует в корень.
pub fn build_router(state: AppState, base_path: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new().route("/health", get(health_check));

    let router = if base_path.is_empty() {
        router.merge(aircraft_routes::routes())
    } else {
        router.nest(base_path, aircraft_routes::routes())
    };

    router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health — проверка работоспособности сервера.
async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    let db_ok = state.db.execute_unprepared("SELECT 1").await.is_ok();
    Json(serde_json::json!({
        "status": if db_ok { "ok" } else { "error" },
        "database": db_ok,
        "service": "aircraft-server"
    }))
}
