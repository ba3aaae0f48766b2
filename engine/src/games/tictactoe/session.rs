use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::config::Validate;
use crate::games::SessionRng;
use super::bot_controller::{calculate_move, BotInput};
use super::game_state::TicTacToeGameState;
use super::types::{BotDifficulty, GameStatus, Mark, Outcome};
use super::win_detector::check_win_with_line;

pub const MAX_AI_MOVE_DELAY_MS: u64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToeSessionSettings {
    pub difficulty: BotDifficulty,
    pub ai_move_delay_ms: u64,
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            difficulty: BotDifficulty::Medium,
            ai_move_delay_ms: 500,
        }
    }
}

impl Validate for TicTacToeSessionSettings {
    fn validate(&self) -> Result<(), String> {
        if self.ai_move_delay_ms > MAX_AI_MOVE_DELAY_MS {
            return Err(format!(
                "AI move delay ({} ms) cannot exceed {} ms",
                self.ai_move_delay_ms, MAX_AI_MOVE_DELAY_MS
            ));
        }
        Ok(())
    }
}

struct SessionInner {
    game: TicTacToeGameState,
    rng: SessionRng,
    // Bumped on reset; a deferred AI turn holding a stale epoch is discarded.
    epoch: u64,
}

/// One human-versus-AI game. The AI's move is applied after an artificial
/// pacing delay by a spawned task; the game state has a single logical
/// writer per turn, and `reset` invalidates any pending AI turn.
#[derive(Clone)]
pub struct TicTacToeSession {
    inner: Arc<Mutex<SessionInner>>,
    settings: TicTacToeSessionSettings,
}

impl TicTacToeSession {
    pub fn new(settings: TicTacToeSessionSettings, seed: u64) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SessionInner {
                game: TicTacToeGameState::new(),
                rng: SessionRng::new(seed),
                epoch: 0,
            })),
            settings,
        }
    }

    pub fn from_random_seed(settings: TicTacToeSessionSettings) -> Self {
        Self::new(settings, rand::random())
    }

    pub fn settings(&self) -> &TicTacToeSessionSettings {
        &self.settings
    }

    /// Assigns the human's mark and starts the game. When the AI holds X
    /// it opens, after the pacing delay.
    pub async fn start(&self, human_mark: Mark) {
        {
            let mut inner = self.inner.lock().await;
            inner.game.assign_players(human_mark);
        }
        crate::log!("Game started, human plays {}", human_mark);
        self.schedule_bot_turn().await;
    }

    pub async fn human_move(&self, index: usize) -> Result<(), String> {
        {
            let mut inner = self.inner.lock().await;
            let human_mark = match inner.game.human_mark() {
                Some(mark) => mark,
                None => return Err("Players are not assigned".to_string()),
            };
            inner.game.place_mark(human_mark, index)?;
            log_if_over(&inner.game);
        }
        self.schedule_bot_turn().await;
        Ok(())
    }

    /// Returns the session to `NotStarted` with a fresh board. A pending
    /// AI move never applies to the reset board.
    pub async fn reset(&self) {
        let mut inner = self.inner.lock().await;
        inner.epoch += 1;
        inner.game.reset();
        crate::log!("Session reset");
    }

    async fn schedule_bot_turn(&self) {
        let epoch = {
            let inner = self.inner.lock().await;
            if !inner.game.is_ai_turn() {
                return;
            }
            inner.epoch
        };

        let session = self.clone();
        tokio::spawn(async move {
            session.play_bot_turn(epoch).await;
        });
    }

    async fn play_bot_turn(&self, epoch: u64) {
        tokio::time::sleep(Duration::from_millis(self.settings.ai_move_delay_ms)).await;

        let mut inner = self.inner.lock().await;
        if inner.epoch != epoch || !inner.game.is_ai_turn() {
            return;
        }

        let bot_input = BotInput::from_game_state(&inner.game);
        let SessionInner { game, rng, .. } = &mut *inner;

        if let Some(index) = calculate_move(self.settings.difficulty, &bot_input, rng) {
            let _ = game.place_mark(bot_input.current_mark, index);
            crate::log!("AI placed {} at cell {}", bot_input.current_mark, index);
            log_if_over(game);
        }
    }

    pub async fn grid(&self) -> [Mark; super::board::GRID_CELLS] {
        *self.inner.lock().await.game.board().grid()
    }

    pub async fn status(&self) -> GameStatus {
        self.inner.lock().await.game.status()
    }

    pub async fn outcome(&self) -> Option<Outcome> {
        self.inner.lock().await.game.outcome()
    }

    pub async fn current_mark(&self) -> Mark {
        self.inner.lock().await.game.current_mark()
    }

    pub async fn winning_line(&self) -> Option<(Mark, [usize; 3])> {
        check_win_with_line(self.inner.lock().await.game.board().grid())
    }
}

fn log_if_over(game: &TicTacToeGameState) {
    if game.status() != GameStatus::Over {
        return;
    }
    match game.outcome() {
        Some(Outcome::Draw) => crate::log!("Game over: draw\n{}", game.board()),
        Some(outcome) => {
            if let Some(mark) = outcome.winning_mark() {
                crate::log!("Game over: {} wins\n{}", mark, game.board());
            }
        }
        None => {}
    }
}
