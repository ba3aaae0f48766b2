use crate::games::SessionRng;
use super::board::Board;
use super::game_state::TicTacToeGameState;
use super::minimax::minimax;
use super::types::{BotDifficulty, Mark};

pub struct BotInput {
    pub board: Board,
    pub current_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: state.board().clone(),
            current_mark: state.current_mark(),
        }
    }
}

/// Picks a cell for `current_mark`, or None when the board is full.
pub fn calculate_move(
    difficulty: BotDifficulty,
    input: &BotInput,
    rng: &mut SessionRng,
) -> Option<usize> {
    match difficulty {
        BotDifficulty::Easy => calculate_random_move(input, rng),
        BotDifficulty::Medium => {
            // Fair coin per turn; an empty board is always played randomly.
            if !input.board.is_empty() && rng.random_bool() {
                calculate_minimax_move(input)
            } else {
                calculate_random_move(input, rng)
            }
        }
        BotDifficulty::Difficult => {
            // Every opening is equally optimal, so vary it.
            if input.board.is_empty() {
                calculate_random_move(input, rng)
            } else {
                calculate_minimax_move(input)
            }
        }
    }
}

fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = input.board.empty_cell_indexes();
    if available_moves.is_empty() {
        return None;
    }
    Some(available_moves[rng.random_range(0..available_moves.len())])
}

pub fn calculate_minimax_move(input: &BotInput) -> Option<usize> {
    let (_, index) = minimax(&input.board, input.current_mark);
    index
}
