//! HTTP-сервер с корректным завершением по сигналу.

use crate::config::ServerConfig;
use axum::Router;
use std::net::SocketAddr;
use tracing::info;

/// Слушать `config.listen`, пока в `shutdown_rx` не придёт `true`.
pub async fn serve(
    config: &ServerConfig,
    app: Router,
    mut shutdown_rx: tokio::sync::watch::Receiver<bool>,
) -> anyhow::Result<()> {
    let addr: SocketAddr = config.listen.parse()?;
    info!("Запуск HTTP сервера на {addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            while !*shutdown_rx.borrow_and_update() {
                if shutdown_rx.changed().await.is_err() {
                    break;
                }
            }
        })
        .await?;
    Ok(())
}
