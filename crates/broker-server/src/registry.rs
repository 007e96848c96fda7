//! Connection registry and broadcaster.
//!
//! Tracks the set of currently-open connections, assigns display
//! identifiers, and provides best-effort fan-out. The registry owns
//! its lock internally; callers never touch synchronization
//! primitives.
//!
//! Display identifiers come from a monotonically increasing counter
//! that never decrements, so `Client-7` can never be handed out twice
//! even after disconnect/reconnect churn.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use tracing::warn;

use crate::types::{ClientId, OutboundTx};

#[derive(Debug, Clone)]
struct Peer {
    label: String,
    tx: OutboundTx,
}

/// Shared registry of live connections.
///
/// Every read (snapshot, size) and every write (register, unregister)
/// is serialized on one internal lock. Fan-out snapshots the peer
/// list under the lock and releases it before sending, so a slow
/// broadcast never stalls registration.
#[derive(Debug, Default)]
pub struct ConnectionRegistry {
    peers: Mutex<HashMap<ClientId, Peer>>,
    next_id: AtomicU64,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        ConnectionRegistry::default()
    }

    /// Register a new connection and assign its display identifier.
    ///
    /// `tx` is the outbound channel drained by the connection's
    /// writer task.
    pub fn register(&self, tx: OutboundTx) -> (ClientId, String) {
        let id = ClientId(self.next_id.fetch_add(1, Ordering::Relaxed) + 1);
        let label = format!("Client-{}", id.0);

        let mut peers = self.peers.lock();
        peers.insert(
            id,
            Peer {
                label: label.clone(),
                tx,
            },
        );

        (id, label)
    }

    /// Remove a connection. Removing an absent id is a no-op.
    pub fn unregister(&self, id: ClientId) {
        let mut peers = self.peers.lock();
        peers.remove(&id);
    }

    /// Best-effort fan-out of one frame to every live connection.
    ///
    /// A failed send means the peer's writer task is gone; that peer
    /// is removed on the spot and delivery continues to the rest.
    pub fn broadcast(&self, text: &str) {
        let targets: Vec<(ClientId, Peer)> = {
            let peers = self.peers.lock();
            peers.iter().map(|(id, peer)| (*id, peer.clone())).collect()
        };

        for (id, peer) in targets {
            if peer.tx.send(text.to_string()).is_err() {
                warn!(client = %peer.label, "broadcast failed, removing client");
                self.unregister(id);
            }
        }
    }

    /// Send one frame to exactly one connection.
    ///
    /// Same dead-peer handling as [`broadcast`](Self::broadcast).
    pub fn unicast(&self, id: ClientId, text: &str) {
        let peer = {
            let peers = self.peers.lock();
            peers.get(&id).cloned()
        };

        if let Some(peer) = peer {
            if peer.tx.send(text.to_string()).is_err() {
                warn!(client = %peer.label, "unicast failed, removing client");
                self.unregister(id);
            }
        }
    }

    /// One consistent view of the current display identifiers.
    pub fn snapshot(&self) -> Vec<String> {
        let peers = self.peers.lock();
        let mut labels: Vec<String> = peers.values().map(|p| p.label.clone()).collect();
        labels.sort();
        labels
    }

    /// Number of live connections.
    pub fn len(&self) -> usize {
        self.peers.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.peers.lock().is_empty()
    }
}
