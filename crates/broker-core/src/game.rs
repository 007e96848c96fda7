//! Per-game state machine.
//!
//! Lifecycle: `NotStarted(0)` -> `InProgress(1)` -> `Done(2)`. `Done`
//! is terminal; a finished game only changes again through a full
//! [`Game::reset`].
//!
//! The formatted state is a single flat comma-joined string consumed
//! by both the direct handler response and the broadcast payload:
//!
//! ```text
//! c1,c2,c3,c4,c5,c6,c7,c8,c9,currentPlayer,winner,stateCode
//! ```

use crate::error::GameError;

/// Player mark: X or O.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn as_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    /// The opposing mark.
    pub fn other(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// Game lifecycle state, rendered on the wire as its numeric code.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameState {
    NotStarted,
    InProgress,
    Done,
}

impl GameState {
    pub fn code(self) -> u8 {
        match self {
            GameState::NotStarted => 0,
            GameState::InProgress => 1,
            GameState::Done => 2,
        }
    }
}

/// Game outcome, rendered as `?` (undecided), `X`, `O`, or `T` (tie).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Winner {
    Undecided,
    Mark(Mark),
    Tie,
}

impl Winner {
    pub fn as_char(self) -> char {
        match self {
            Winner::Undecided => '?',
            Winner::Mark(m) => m.as_char(),
            Winner::Tie => 'T',
        }
    }
}

/// Result of an accepted [`Game::make_move`] call.
///
/// A move on a game that is not in progress is accepted but changes
/// nothing; callers that publish state deltas must only do so for
/// `Applied` outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The mark was placed and the game advanced.
    Applied(String),

    /// The game was not in progress; the state is unchanged.
    Ignored(String),
}

impl MoveOutcome {
    /// The formatted state, whether or not the move was applied.
    pub fn state(&self) -> &str {
        match self {
            MoveOutcome::Applied(state) | MoveOutcome::Ignored(state) => state,
        }
    }

    pub fn into_state(self) -> String {
        match self {
            MoveOutcome::Applied(state) | MoveOutcome::Ignored(state) => state,
        }
    }
}

/// The eight winning triples: three rows, three columns, two diagonals.
const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// One tic-tac-toe game.
///
/// Cells are 0-indexed internally; the wire uses 1-based positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: [Option<Mark>; 9],
    current_player: Mark,
    winner: Winner,
    state: GameState,
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    /// A fresh game that has not been started yet.
    pub fn new() -> Self {
        Game {
            board: [None; 9],
            current_player: Mark::X,
            winner: Winner::Undecided,
            state: GameState::NotStarted,
        }
    }

    /// Full reset: empty board, X to move, no winner, in progress.
    ///
    /// Always resets completely, even mid-game or after `Done`.
    pub fn reset(&mut self) {
        self.board = [None; 9];
        self.current_player = Mark::X;
        self.winner = Winner::Undecided;
        self.state = GameState::InProgress;
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn winner(&self) -> Winner {
        self.winner
    }

    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Apply one move token (`<mark><position>`, e.g. `X5`).
    ///
    /// Before the game has started, and after it is done, this is a
    /// silent no-op: the unchanged formatted state comes back as
    /// [`MoveOutcome::Ignored`] and nothing should be published.
    /// Otherwise the token is validated in order: length, turn,
    /// position, cell occupancy; the first failure wins.
    pub fn make_move(&mut self, mv: &str) -> Result<MoveOutcome, GameError> {
        match self.state {
            GameState::NotStarted | GameState::Done => {
                return Ok(MoveOutcome::Ignored(self.format_state()))
            }
            GameState::InProgress => {}
        }

        let mut chars = mv.chars();
        let (mark_ch, pos_ch) = match (chars.next(), chars.next(), chars.next()) {
            (Some(mark), Some(pos), None) => (mark, pos),
            _ => return Err(GameError::InvalidMoveFormat(mv.to_string())),
        };

        if mark_ch != self.current_player.as_char() {
            return Err(GameError::WrongTurn(mark_ch));
        }

        // 1-based wire position -> 0-based board index.
        let pos = match pos_ch.to_digit(10) {
            Some(d @ 1..=9) => (d - 1) as usize,
            _ => return Err(GameError::InvalidPosition(pos_ch)),
        };

        if self.board[pos].is_some() {
            return Err(GameError::CellOccupied(pos + 1));
        }

        let mark = self.current_player;
        self.board[pos] = Some(mark);

        if self.has_won(mark) {
            self.winner = Winner::Mark(mark);
            self.state = GameState::Done;
        } else if self.is_full() {
            self.winner = Winner::Tie;
            self.state = GameState::Done;
        } else {
            self.current_player = mark.other();
        }

        Ok(MoveOutcome::Applied(self.format_state()))
    }

    fn has_won(&self, mark: Mark) -> bool {
        WIN_LINES
            .iter()
            .any(|line| line.iter().all(|&cell| self.board[cell] == Some(mark)))
    }

    fn is_full(&self) -> bool {
        self.board.iter().all(Option::is_some)
    }

    /// Flat wire representation: nine cells, current player, winner,
    /// numeric state code, comma-joined.
    pub fn format_state(&self) -> String {
        let mut out = String::with_capacity(32);
        for cell in &self.board {
            match cell {
                Some(mark) => out.push(mark.as_char()),
                None => out.push('-'),
            }
            out.push(',');
        }
        out.push(self.current_player.as_char());
        out.push(',');
        out.push(self.winner.as_char());
        out.push(',');
        out.push_str(&self.state.code().to_string());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> Game {
        let mut game = Game::new();
        game.reset();
        game
    }

    #[test]
    fn new_game_formats_as_not_started() {
        let game = Game::new();
        assert_eq!(game.format_state(), "-,-,-,-,-,-,-,-,-,X,?,0");
    }

    #[test]
    fn move_before_start_is_ignored() {
        let mut game = Game::new();
        let outcome = game.make_move("X5").unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Ignored("-,-,-,-,-,-,-,-,-,X,?,0".to_string())
        );
        assert_eq!(game.state(), GameState::NotStarted);
    }

    #[test]
    fn first_move_places_mark_and_toggles_player() {
        let mut game = started();
        let outcome = game.make_move("X5").unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Applied("-,-,-,-,X,-,-,-,-,O,?,1".to_string())
        );
        assert_eq!(game.current_player(), Mark::O);
    }

    #[test]
    fn wrong_turn_is_rejected_and_board_unchanged() {
        let mut game = started();
        let before = game.format_state();
        assert_eq!(game.make_move("O1"), Err(GameError::WrongTurn('O')));
        assert_eq!(game.format_state(), before);
    }

    #[test]
    fn unknown_mark_is_reported_as_wrong_turn() {
        let mut game = started();
        assert_eq!(game.make_move("Z1"), Err(GameError::WrongTurn('Z')));
    }

    #[test]
    fn occupied_cell_is_rejected_and_state_unchanged() {
        let mut game = started();
        game.make_move("X5").unwrap();
        let before = game.format_state();
        assert_eq!(game.make_move("O5"), Err(GameError::CellOccupied(5)));
        assert_eq!(game.format_state(), before);
    }

    #[test]
    fn position_zero_is_invalid() {
        let mut game = started();
        assert_eq!(game.make_move("X0"), Err(GameError::InvalidPosition('0')));
    }

    #[test]
    fn non_digit_position_is_invalid() {
        let mut game = started();
        assert_eq!(game.make_move("Xa"), Err(GameError::InvalidPosition('a')));
    }

    #[test]
    fn move_token_must_be_two_chars() {
        let mut game = started();
        assert!(matches!(
            game.make_move("X12"),
            Err(GameError::InvalidMoveFormat(_))
        ));
        assert!(matches!(
            game.make_move("X"),
            Err(GameError::InvalidMoveFormat(_))
        ));
    }

    #[test]
    fn completing_a_row_wins() {
        let mut game = started();
        // X takes the top row, O plays elsewhere.
        for mv in ["X1", "O4", "X2", "O5", "X3"] {
            game.make_move(mv).unwrap();
        }
        assert_eq!(game.winner(), Winner::Mark(Mark::X));
        assert_eq!(game.state(), GameState::Done);
        assert_eq!(game.format_state(), "X,X,X,O,O,-,-,-,-,X,X,2");
    }

    #[test]
    fn completing_a_diagonal_wins() {
        let mut game = started();
        for mv in ["X1", "O2", "X5", "O3", "X9"] {
            game.make_move(mv).unwrap();
        }
        assert_eq!(game.winner(), Winner::Mark(Mark::X));
        assert_eq!(game.state(), GameState::Done);
    }

    #[test]
    fn full_board_without_winner_is_a_tie() {
        let mut game = started();
        // X O X / X O O / O X X — no three-in-a-row.
        for mv in ["X1", "O2", "X3", "O5", "X4", "O6", "X8", "O7", "X9"] {
            game.make_move(mv).unwrap();
        }
        assert_eq!(game.winner(), Winner::Tie);
        assert_eq!(game.state(), GameState::Done);
        assert_eq!(game.format_state(), "X,O,X,X,O,O,O,X,X,X,T,2");
    }

    #[test]
    fn moves_after_done_are_ignored() {
        let mut game = started();
        for mv in ["X1", "O4", "X2", "O5", "X3"] {
            game.make_move(mv).unwrap();
        }
        let finished = game.format_state();
        // Neither player can change a finished game, and the outcome
        // says so: an `Ignored` result is what tells callers not to
        // publish an update.
        assert_eq!(
            game.make_move("O6").unwrap(),
            MoveOutcome::Ignored(finished.clone())
        );
        assert_eq!(
            game.make_move("X6").unwrap(),
            MoveOutcome::Ignored(finished.clone())
        );
        assert_eq!(game.format_state(), finished);
    }

    #[test]
    fn reset_clears_a_finished_game() {
        let mut game = started();
        for mv in ["X1", "O4", "X2", "O5", "X3"] {
            game.make_move(mv).unwrap();
        }
        game.reset();
        assert_eq!(game.format_state(), "-,-,-,-,-,-,-,-,-,X,?,1");
    }
}
