//! TCP listener and top-level server wiring.
//!
//! This module:
//! - Listens on the configured address/port.
//! - Accepts new TCP connections (up to `max_clients`).
//! - Spawns one task per connection for its dispatch loop.
//! - Spawns the periodic connections driver.
//!
//! The per-client logic lives in the `client` module; the periodic
//! driver lives in `ticker`.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{error, info, warn};

use crate::client;
use crate::config::Config;
use crate::engine::Engine;
use crate::ticker;

/// Run the TCP server with the given configuration and engine.
pub async fn run(config: Config, engine: Arc<Engine>) -> anyhow::Result<()> {
    let addr = config.socket_addr_string();
    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, "listening");

    // Periodic driver: synthesizes a connections-listing frame and
    // pushes it through the same dispatch path as inbound frames.
    tokio::spawn(ticker::run_connections_ticker(
        engine.clone(),
        config.connections_interval,
    ));

    loop {
        let (stream, peer_addr) = listener.accept().await?;

        if engine.connections().len() >= config.max_clients {
            warn!(
                %peer_addr,
                max_clients = config.max_clients,
                "rejecting connection: max_clients reached"
            );
            // Just drop the stream; the client sees the connection close.
            continue;
        }

        info!(%peer_addr, "accepted connection");

        let engine = engine.clone();
        tokio::spawn(async move {
            if let Err(err) = client::run_client(engine, stream).await {
                error!(%peer_addr, %err, "client task failed");
            }
        });
    }
}
