//! Startup handler table.
//!
//! The host application hands the engine this topic -> handler map
//! once, before any connection is accepted. Handlers that mutate
//! shared state return their result to the caller *and* broadcast the
//! delta to all peers as two explicit effects, so each can be
//! asserted on independently.

use broker_core::MoveOutcome;
use tracing::debug;

use crate::engine::{Engine, Handler, HandlerMap};
use crate::error::HandlerError;

/// The broker's default event map: game lifecycle, connection
/// reporting, and a diagnostic echo.
pub fn event_map() -> HandlerMap {
    let mut map: HandlerMap = HandlerMap::new();
    map.insert("start".to_string(), Box::new(start_handler) as Handler);
    map.insert("move".to_string(), Box::new(move_handler) as Handler);
    map.insert(
        "connections".to_string(),
        Box::new(connections_handler) as Handler,
    );
    map.insert("broker".to_string(), Box::new(broker_handler) as Handler);
    map
}

/// `[start][gameID]` — create-or-reset the game, tell everyone.
fn start_handler(engine: &Engine, game_id: &str) -> Result<String, HandlerError> {
    debug!(game = game_id, "start requested");
    let state = engine.games().start(game_id);
    engine
        .connections()
        .broadcast(&format!("[update][{game_id},{state}]"));
    Ok(state)
}

/// `[move][gameID,moveToken]` — apply one move, tell everyone.
///
/// A move on a game that is not in progress is answered with the
/// unchanged state but broadcasts nothing: only an applied move is a
/// state delta worth announcing.
fn move_handler(engine: &Engine, payload: &str) -> Result<String, HandlerError> {
    let (game_id, mv) = payload
        .split_once(',')
        .ok_or_else(|| HandlerError::BadPayload(payload.to_string()))?;

    debug!(game = game_id, mv, "move requested");
    let outcome = engine.games().make_move(game_id, mv)?;
    if let MoveOutcome::Applied(state) = &outcome {
        engine
            .connections()
            .broadcast(&format!("[update][{game_id},{state}]"));
    }
    Ok(outcome.into_state())
}

/// `[connections][...]` — echo back the pre-formatted identifier
/// list. The periodic driver builds the payload from a registry
/// snapshot and broadcasts the response itself.
fn connections_handler(_engine: &Engine, connections: &str) -> Result<String, HandlerError> {
    Ok(connections.to_string())
}

/// `[broker][...]` — diagnostic echo for poking the dispatch path.
fn broker_handler(_engine: &Engine, input: &str) -> Result<String, HandlerError> {
    Ok(format!("hi from broker handler. you gave me: {input}"))
}
