//! Shared game store.
//!
//! Owns the id -> [`Game`] mapping and its lock, so callers never
//! touch synchronization primitives directly. The mapping grows
//! monotonically: games are created on first `start` and never
//! deleted for the lifetime of the process.

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::error::GameError;
use crate::game::{Game, MoveOutcome};

/// Mutex-guarded mapping from game id to game instance.
///
/// Each operation runs entirely under the store lock, so a
/// validate-then-mutate sequence on one game id can never interleave
/// with another move on the same id. The critical sections are short
/// and contain no I/O.
#[derive(Debug, Default)]
pub struct GameStore {
    games: Mutex<HashMap<String, Game>>,
}

impl GameStore {
    pub fn new() -> Self {
        GameStore::default()
    }

    /// Start (or restart) the game for `game_id`.
    ///
    /// Creates the game on first use, then performs a full reset —
    /// re-invoking `start` on an existing id always wipes the board.
    /// Returns the formatted state after the reset.
    pub fn start(&self, game_id: &str) -> String {
        let mut games = self.games.lock();
        let game = games.entry(game_id.to_string()).or_default();
        game.reset();
        game.format_state()
    }

    /// Apply a move token to the game for `game_id`.
    ///
    /// Fails with [`GameError::GameNotFound`] when the id was never
    /// started; all other validation lives in [`Game::make_move`].
    /// The returned [`MoveOutcome`] distinguishes an applied move
    /// from a not-in-progress no-op.
    pub fn make_move(&self, game_id: &str, mv: &str) -> Result<MoveOutcome, GameError> {
        let mut games = self.games.lock();
        let game = games
            .get_mut(game_id)
            .ok_or_else(|| GameError::GameNotFound(game_id.to_string()))?;
        game.make_move(mv)
    }

    /// Current formatted state for `game_id`, if it exists.
    pub fn state_of(&self, game_id: &str) -> Option<String> {
        let games = self.games.lock();
        games.get(game_id).map(Game::format_state)
    }

    /// Number of games ever started.
    pub fn len(&self) -> usize {
        self.games.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_creates_and_resets() {
        let store = GameStore::new();
        assert_eq!(store.start("g1"), "-,-,-,-,-,-,-,-,-,X,?,1");
        assert_eq!(store.len(), 1);

        // Restarting the same id wipes it rather than creating a second instance.
        store.make_move("g1", "X5").unwrap();
        assert_eq!(store.start("g1"), "-,-,-,-,-,-,-,-,-,X,?,1");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn move_on_unknown_game_fails() {
        let store = GameStore::new();
        assert_eq!(
            store.make_move("missing", "X5"),
            Err(GameError::GameNotFound("missing".to_string()))
        );
    }

    #[test]
    fn move_places_mark_and_toggles_player() {
        let store = GameStore::new();
        store.start("g1");
        let outcome = store.make_move("g1", "X5").unwrap();
        assert_eq!(outcome.state(), "-,-,-,-,X,-,-,-,-,O,?,1");
        assert_eq!(store.state_of("g1").as_deref(), Some(outcome.state()));
        assert!(matches!(outcome, MoveOutcome::Applied(_)));
    }

    #[test]
    fn move_on_finished_game_is_ignored() {
        let store = GameStore::new();
        store.start("g1");
        for mv in ["X1", "O4", "X2", "O5", "X3"] {
            store.make_move("g1", mv).unwrap();
        }
        let finished = store.state_of("g1").unwrap();
        let outcome = store.make_move("g1", "O6").unwrap();
        assert_eq!(outcome, MoveOutcome::Ignored(finished));
    }

    #[test]
    fn games_are_independent() {
        let store = GameStore::new();
        store.start("g1");
        store.start("g2");
        store.make_move("g1", "X5").unwrap();
        assert_eq!(store.state_of("g2").unwrap(), "-,-,-,-,-,-,-,-,-,X,?,1");
    }
}
