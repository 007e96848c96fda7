//! Periodic connections driver.
//!
//! Every tick, builds a `[connections][...]` frame from a registry
//! snapshot, runs it through the normal dispatch entry point — the
//! engine must not care whether a frame came off a socket or was
//! synthesized here — and broadcasts the response to every peer.

use std::sync::Arc;
use std::time::Duration;

use tokio::time;
use tracing::{debug, error};

use crate::engine::Engine;

pub async fn run_connections_ticker(engine: Arc<Engine>, period: Duration) {
    let mut interval = time::interval(period);

    loop {
        interval.tick().await;

        let labels = engine.connections().snapshot();
        let joined = if labels.is_empty() {
            "<no conn>".to_string()
        } else {
            labels.join(", ")
        };

        let msg = format!("[connections][{joined}]");

        match engine.process_message(&msg) {
            Ok(response) => {
                debug!(frame = %response, "broadcasting connections listing");
                engine.connections().broadcast(&response);
            }
            Err(err) => error!(%err, "connections listing dispatch failed"),
        }
    }
}
