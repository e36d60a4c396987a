use clap::Parser;
use keyhole_gateway::app::App;
use keyhole_gateway::config::Config;
use keyhole_gateway::state::AppState;
use keyhole_storage::{MemoryRepository, MySqlRepository};
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::parse();

    let state = match &config.database_url {
        Some(database_url) => {
            info!("using mysql storage backend");
            AppState::with_repository(MySqlRepository::connect(database_url).await?)
        }
        None => {
            info!("no DATABASE_URL set, using in-memory storage");
            AppState::with_repository(MemoryRepository::new())
        }
    };

    let app = App::router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!(listen_addr = %listener.local_addr()?, "starting gateway server");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
