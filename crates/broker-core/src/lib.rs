//! broker-core
//!
//! Pure tic-tac-toe domain logic:
//! - marks and lifecycle states
//! - the per-game state machine
//! - the shared, lock-owning game store

pub mod error;
pub mod game;
pub mod store;

pub use error::GameError;
pub use game::{Game, GameState, Mark, MoveOutcome, Winner};
pub use store::GameStore;
