use super::board::{Board, GRID_CELLS};
use super::types::{GameStatus, Mark, Outcome};

/// Session state machine: `NotStarted` until both players are assigned,
/// `InProgress` while marks alternate, `Over` the moment the board
/// evaluates to a decisive outcome. `reset` returns to `NotStarted`.
#[derive(Debug)]
pub struct TicTacToeGameState {
    board: Board,
    human_mark: Option<Mark>,
    ai_mark: Option<Mark>,
    current_mark: Mark,
    status: GameStatus,
    outcome: Option<Outcome>,
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            human_mark: None,
            ai_mark: None,
            current_mark: Mark::X,
            status: GameStatus::NotStarted,
            outcome: None,
        }
    }

    /// Assigns the human's mark; the AI gets the other one. X always
    /// opens. Panics when called with `Mark::Empty` or on a session that
    /// already started.
    pub fn assign_players(&mut self, human_mark: Mark) {
        if self.status != GameStatus::NotStarted {
            panic!("players can only be assigned before the game starts");
        }

        let ai_mark = match human_mark.opponent() {
            Some(mark) => mark,
            None => panic!("human player must be X or O"),
        };

        self.human_mark = Some(human_mark);
        self.ai_mark = Some(ai_mark);
        self.current_mark = Mark::X;
        self.status = GameStatus::InProgress;
    }

    pub fn place_mark(&mut self, mark: Mark, index: usize) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is not in progress".to_string());
        }
        if mark != self.current_mark {
            return Err("Not your turn".to_string());
        }
        if index >= GRID_CELLS {
            return Err(format!("Cell index {} is out of bounds", index));
        }
        if self.board.grid()[index] != Mark::Empty {
            return Err("Cell is already marked".to_string());
        }

        self.board.place(index, mark);
        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        if let Some(next_mark) = self.current_mark.opponent() {
            self.current_mark = next_mark;
        }
    }

    fn check_game_over(&mut self) {
        if let Some(outcome) = self.board.winner() {
            self.outcome = Some(outcome);
            self.status = GameStatus::Over;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn human_mark(&self) -> Option<Mark> {
        self.human_mark
    }

    pub fn ai_mark(&self) -> Option<Mark> {
        self.ai_mark
    }

    pub fn is_ai_turn(&self) -> bool {
        self.status == GameStatus::InProgress && self.ai_mark == Some(self.current_mark)
    }
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}
