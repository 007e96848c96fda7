//! TCP message broker binary.

use broker_server::config::Config;
use broker_server::engine::Engine;
use broker_server::{handlers, server};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        max_clients = config.max_clients,
        "starting broker-server"
    );

    let engine = Engine::new(handlers::event_map());

    server::run(config, engine).await
}
