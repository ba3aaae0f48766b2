mod board;
mod bot_controller;
mod game_state;
mod minimax;
mod session;
mod types;
mod win_detector;

pub use board::{Board, GRID_CELLS, GRID_SIDE};
pub use bot_controller::{calculate_minimax_move, calculate_move, BotInput};
pub use game_state::TicTacToeGameState;
pub use minimax::{minimax, DRAW_SCORE, LOSS_SCORE, WIN_SCORE};
pub use session::{TicTacToeSession, TicTacToeSessionSettings, MAX_AI_MOVE_DELAY_MS};
pub use types::{BotDifficulty, GameStatus, Mark, Outcome};
pub use win_detector::{check_win, check_win_with_line};
