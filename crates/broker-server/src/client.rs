//! Per-connection dispatch loop.
//!
//! Lifecycle: register -> announce -> welcome -> frame loop -> close.
//! Frames are newline-delimited bracketed messages. Only a transport
//! error (or EOF) ends a session; malformed frames, unknown topics,
//! and handler failures are written back to the sender as plain text
//! and the loop keeps going.

use std::error::Error;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::engine::Engine;
use crate::types::OutboundRx;

/// Run the client I/O loop for a single connection.
pub async fn run_client(engine: Arc<Engine>, stream: TcpStream) -> Result<(), Box<dyn Error>> {
    let (read_half, write_half) = stream.into_split();

    // Writer task: drain outbound frames onto the socket. When it
    // stops (write error or channel closed), the write half drops and
    // the transport closes.
    let (out_tx, out_rx) = mpsc::unbounded_channel();
    let (client_id, label) = engine.connections().register(out_tx);

    tokio::spawn(run_writer(label.clone(), write_half, out_rx));

    info!(client = %label, "client connected");

    // Announce the new peer to everyone, then welcome it privately
    // with its assigned identifier.
    engine.connections().broadcast("[broker][client_added]");
    engine
        .connections()
        .unicast(client_id, &format!("[broker_id][{label}]"));

    let mut lines = BufReader::new(read_half).lines();

    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                debug!(client = %label, frame = line, "frame received");

                match engine.process_message(line) {
                    Ok(response) => engine.connections().unicast(client_id, &response),
                    Err(err) => {
                        // Recoverable: report to the sender, stay open.
                        warn!(client = %label, %err, "dispatch failed");
                        engine.connections().unicast(client_id, &err.to_string());
                    }
                }
            }
            Ok(None) => {
                info!(client = %label, "client disconnected");
                break;
            }
            Err(err) => {
                warn!(client = %label, %err, "read error");
                break;
            }
        }
    }

    engine.connections().unregister(client_id);

    Ok(())
}

/// Drain outbound frames for one client onto its write half.
async fn run_writer(
    label: String,
    mut write_half: tokio::net::tcp::OwnedWriteHalf,
    mut out_rx: OutboundRx,
) {
    while let Some(frame) = out_rx.recv().await {
        if let Err(err) = write_frame(&mut write_half, &frame).await {
            warn!(client = %label, %err, "write error");
            break;
        }
    }
}

async fn write_frame(
    write_half: &mut tokio::net::tcp::OwnedWriteHalf,
    frame: &str,
) -> std::io::Result<()> {
    write_half.write_all(frame.as_bytes()).await?;
    write_half.write_all(b"\n").await?;
    write_half.flush().await
}
