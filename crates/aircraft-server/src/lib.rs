//! Ядро REST-сервиса самолётов.

pub mod api;
pub mod config;
pub mod error;
pub mod serve;
pub mod services;

#[cfg(test)]
mod test_support;

use aircraft_migration::{Migrator, MigratorTrait};
use api::AppState;
use config::ServerConfig;
use sea_orm::{Database, DatabaseConnection};
use tokio::sync::watch;
use tracing::info;

/// Запустить сервис самолётов.
pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    // 1. Подключение к БД
    info!("Подключение к базе данных: {}", config.db_url);
    let db: DatabaseConnection = Database::connect(&config.db_url).await?;

    // 2. Автоматические миграции
    info!("Выполнение миграций...");
    Migrator::up(&db, None).await?;

    // 3. Состояние приложения
    let state = AppState {
        db: db.clone(),
        public_url: config.public_url.clone(),
    };

    // 4. Маршрутизатор
    let app = api::build_router(state, &config.base_path);

    // 5. Graceful shutdown
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.ok();
        info!("Получен сигнал завершения, останавливаю сервер...");
        let _ = shutdown_tx.send(true);
    });

    // 6. Запуск сервера
    info!(
        "Сервис самолётов запущен (ресурс: {}/aircrafts/)",
        config.base_path
    );
    serve::serve(&config, app, shutdown_rx).await?;

    db.close().await?;
    info!("Сервис самолётов остановлен");
    Ok(())
}
