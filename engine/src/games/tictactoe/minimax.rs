use super::board::Board;
use super::types::{Mark, Outcome};

pub const WIN_SCORE: i32 = 1;
pub const DRAW_SCORE: i32 = 0;
pub const LOSS_SCORE: i32 = -1;

/// Exhaustive game-tree search. Returns the best reachable score from
/// `ai_mark`'s perspective together with the cell to play, or `None` for
/// the cell when the board is already decided. Among equally scored
/// moves the lowest index wins.
pub fn minimax(board: &Board, ai_mark: Mark) -> (i32, Option<usize>) {
    search(board, ai_mark, ai_mark)
}

fn search(board: &Board, ai_mark: Mark, to_move: Mark) -> (i32, Option<usize>) {
    if let Some(outcome) = board.winner() {
        let score = match outcome {
            Outcome::Draw => DRAW_SCORE,
            won if won.winning_mark() == Some(ai_mark) => WIN_SCORE,
            _ => LOSS_SCORE,
        };
        return (score, None);
    }

    // The mover alternates per level; scores stay relative to ai_mark.
    let maximizing = to_move == ai_mark;
    let next_to_move = to_move.opponent().unwrap();

    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
    let mut best_index = None;

    for index in board.empty_cell_indexes() {
        let mut hypothetical = board.clone();
        hypothetical.place(index, to_move);

        let (score, _) = search(&hypothetical, ai_mark, next_to_move);

        let better = if maximizing {
            score > best_score
        } else {
            score < best_score
        };

        if better {
            best_score = score;
            best_index = Some(index);
        }
    }

    (best_score, best_index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::board::GRID_CELLS;

    fn board_from_chars(cells: [char; GRID_CELLS]) -> Board {
        let mut grid = [Mark::Empty; GRID_CELLS];
        for (index, c) in cells.iter().enumerate() {
            grid[index] = match c {
                'X' => Mark::X,
                'O' => Mark::O,
                _ => Mark::Empty,
            };
        }
        Board::from_grid(grid)
    }

    #[test]
    fn test_decided_board_returns_no_move() {
        let board = board_from_chars(['X', 'X', 'X', 'O', 'O', '.', '.', '.', '.']);

        assert_eq!(minimax(&board, Mark::X), (WIN_SCORE, None));
        assert_eq!(minimax(&board, Mark::O), (LOSS_SCORE, None));

        let drawn = board_from_chars(['X', 'O', 'X', 'O', 'X', 'O', 'O', 'X', 'O']);
        assert_eq!(minimax(&drawn, Mark::X), (DRAW_SCORE, None));
    }

    #[test]
    fn test_takes_immediate_win() {
        let board = board_from_chars(['X', 'X', '.', 'O', 'O', '.', '.', '.', '.']);
        let (score, index) = minimax(&board, Mark::X);

        assert_eq!(score, WIN_SCORE);
        assert_eq!(index, Some(2));
    }

    #[test]
    fn test_double_threat_ties_resolve_to_lowest_index() {
        // O to move can win at 5 right away, but playing 2 also forces a
        // win; with undiscounted scores both are worth +1 and the
        // ascending scan keeps index 2.
        let board = board_from_chars(['X', 'X', '.', 'O', 'O', '.', '.', '.', '.']);
        let (score, index) = minimax(&board, Mark::O);

        assert_eq!(score, WIN_SCORE);
        assert_eq!(index, Some(2));
    }

    #[test]
    fn test_blocks_opponent_threat() {
        // X threatens the top row; O has no win of its own anywhere.
        let board = board_from_chars(['X', 'X', '.', '.', 'O', '.', '.', '.', '.']);
        let (_, index) = minimax(&board, Mark::O);

        assert_eq!(index, Some(2));
    }

    #[test]
    fn test_win_at_index_zero_is_chosen() {
        let board = board_from_chars(['.', 'O', 'O', 'X', 'X', '.', '.', '.', 'X']);
        let (score, index) = minimax(&board, Mark::O);

        assert_eq!(score, WIN_SCORE);
        assert_eq!(index, Some(0));
    }

    #[test]
    fn test_self_play_from_empty_board_is_a_draw() {
        let mut board = Board::new();
        let mut to_move = Mark::X;

        while board.winner().is_none() {
            let (_, index) = minimax(&board, to_move);
            board.place(index.unwrap(), to_move);
            to_move = to_move.opponent().unwrap();
        }

        assert_eq!(board.winner(), Some(Outcome::Draw));
    }
}
