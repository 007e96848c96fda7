//! broker-server
//!
//! Multi-client async TCP message broker: bracketed wire protocol,
//! topic dispatch, connection registry with best-effort broadcast,
//! and the tic-tac-toe handlers driving the game state machine.

pub mod config;
pub mod engine;
pub mod error;
pub mod handlers;
pub mod registry;
pub mod server;
pub mod types;

// these are internal modules, not re-exported
mod client;
mod ticker;
