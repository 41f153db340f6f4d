//! Точка входа сервиса самолётов.

use aircraft_server::config::ServerConfig;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "aircraft-server",
    about = "Aircraft API — REST CRUD для таблицы Aircrafts"
)]
struct Cli {
    /// Адрес для прослушивания (host:port)
    #[arg(long, default_value = "0.0.0.0:8888", env = "LISTEN_ADDR")]
    listen: String,

    /// URL базы данных
    #[arg(
        long,
        default_value = "sqlite:./aircrafts.db?mode=rwc",
        env = "DATABASE_URL"
    )]
    db_url: String,

    /// Префикс маршрутов ресурса
    #[arg(long, default_value = "/aircraft-api", env = "BASE_PATH")]
    base_path: String,

    /// Внешний адрес API для ссылок в списке
    #[arg(
        long,
        default_value = "http://localhost:8888/aircraft-api",
        env = "PUBLIC_URL"
    )]
    public_url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env необязателен
    dotenvy::dotenv().ok();

    // Инициализация логгера
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = ServerConfig::new(cli.listen, cli.db_url, &cli.base_path, &cli.public_url)
        .map_err(|e| anyhow::anyhow!(e))?;

    aircraft_server::run(config).await
}
