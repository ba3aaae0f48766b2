use super::board::GRID_CELLS;
use super::types::Mark;

// 3 rows, 3 columns, 2 diagonals.
const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(grid: &[Mark; GRID_CELLS]) -> Option<Mark> {
    check_win_with_line(grid).map(|(mark, _)| mark)
}

pub fn check_win_with_line(grid: &[Mark; GRID_CELLS]) -> Option<(Mark, [usize; 3])> {
    for line in WINNING_LINES {
        let [a, b, c] = line;
        if grid[a] != Mark::Empty && grid[a] == grid[b] && grid[a] == grid[c] {
            return Some((grid[a], line));
        }
    }
    None
}
