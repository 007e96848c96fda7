//! Dispatch engine.
//!
//! Owns the three pieces every handler needs: the immutable topic ->
//! handler table, the connection registry, and the game store. One
//! `Arc<Engine>` is shared by every connection task and by the
//! periodic driver; [`Engine::process_message`] accepts synthesized
//! frames identically to transport-sourced ones.

use std::collections::HashMap;
use std::sync::Arc;

use broker_core::GameStore;
use broker_protocol::frame;

use crate::error::{EngineError, HandlerError};
use crate::registry::ConnectionRegistry;

/// A registered topic handler: `(engine, payload) -> result`.
///
/// Handlers run synchronously on the calling connection's task. A
/// handler returns its result to the caller; any broadcast to other
/// peers is an explicit, separate effect it performs through
/// [`Engine::connections`].
pub type Handler = Box<dyn Fn(&Engine, &str) -> Result<String, HandlerError> + Send + Sync>;

/// Immutable mapping from topic name to handler.
///
/// Built once at startup and moved into the engine; after
/// construction it is only ever read, so concurrent lookup needs no
/// locking.
pub type HandlerMap = HashMap<String, Handler>;

/// The broker engine shared across all connection tasks.
pub struct Engine {
    handlers: HandlerMap,
    connections: ConnectionRegistry,
    games: GameStore,
}

impl Engine {
    pub fn new(handlers: HandlerMap) -> Arc<Self> {
        Arc::new(Engine {
            handlers,
            connections: ConnectionRegistry::new(),
            games: GameStore::new(),
        })
    }

    pub fn connections(&self) -> &ConnectionRegistry {
        &self.connections
    }

    pub fn games(&self) -> &GameStore {
        &self.games
    }

    /// Decode, dispatch, and re-encode one wire message.
    ///
    /// On success the returned string is the full `[topic][result]`
    /// response for the originating connection. Any failure is
    /// reported to the caller; none of them are fatal to a session.
    pub fn process_message(&self, raw: &str) -> Result<String, EngineError> {
        let frame = frame::decode(raw)?;

        let handler = self
            .handlers
            .get(&frame.topic)
            .ok_or_else(|| EngineError::TopicNotFound(frame.topic.clone()))?;

        let result = handler(self, &frame.payload).map_err(|source| EngineError::Handler {
            topic: frame.topic.clone(),
            source,
        })?;

        Ok(frame::encode(&frame.topic, &result))
    }
}
