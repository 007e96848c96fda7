//! Error types for the game domain.

use thiserror::Error;

/// A rejected game operation.
///
/// Every variant is a well-typed refusal, not a crash: malformed or
/// inconsistent input from a client must never panic the process.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// `Move` was called for a game id that was never started.
    #[error("game not found: {0}")]
    GameNotFound(String),

    /// The move token was not exactly `<mark><position>`.
    #[error("invalid move format: {0}")]
    InvalidMoveFormat(String),

    /// The mark in the move token does not match the player to act.
    #[error("not {0}'s turn")]
    WrongTurn(char),

    /// The position character did not resolve to a board cell.
    #[error("invalid position")]
    InvalidPosition(char),

    /// The target cell is already occupied.
    #[error("cell already taken")]
    CellOccupied(usize),
}
