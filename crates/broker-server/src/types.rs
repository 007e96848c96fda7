//! Shared types for the broker TCP server.
//!
//! This module defines:
//! - `ClientId`: a lightweight handle for connected clients
//! - channel aliases between the registry and per-client writer tasks

use tokio::sync::mpsc;

/// Identifier for a connected client.
///
/// This is intentionally opaque; we just guarantee uniqueness
/// over the lifetime of the process (the counter behind it never
/// resets, so ids are not reused across disconnect/reconnect churn).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientId(pub u64);

/// Outbound wire frames from the broker to a given client.
///
/// The receiving end is drained by that client's writer task; a
/// closed receiver means the writer is gone and the transport with it.
pub type OutboundTx = mpsc::UnboundedSender<String>;
pub type OutboundRx = mpsc::UnboundedReceiver<String>;
