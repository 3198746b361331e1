use serde::Serialize;

use crate::board::Board;
use crate::player::PlayerId;
use crate::types::Position;

pub const RUN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalDownRight,
    DiagonalDownLeft,
}

impl Direction {
    /// Scan order used by `find_winning_run`.
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
    ];

    /// `(row, col)` step between consecutive cells of a run.
    fn step(self) -> (isize, isize) {
        match self {
            Self::Horizontal => (0, 1),
            Self::Vertical => (1, 0),
            Self::DiagonalDownRight => (1, 1),
            Self::DiagonalDownLeft => (1, -1),
        }
    }
}

/// Four same-owner cells in a line, listed from the start cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Run {
    pub direction: Direction,
    pub cells: [Position; RUN_LENGTH],
}

/// Returns true when `player` owns four in a row anywhere on the board.
pub fn check_win(board: &Board, player: PlayerId) -> bool {
    find_winning_run(board, player).is_some()
}

/// Scans every cell as a potential run start, in row-major order, and returns
/// the first complete run owned by `player`.
///
/// The whole board is checked on every call, not only lines through the last
/// move.
pub fn find_winning_run(board: &Board, player: PlayerId) -> Option<Run> {
    for row in 0..board.height() {
        for col in 0..board.width() {
            for direction in Direction::ALL {
                if let Some(run) = run_from(board, row, col, direction, player) {
                    return Some(run);
                }
            }
        }
    }
    None
}

fn run_from(
    board: &Board,
    row: usize,
    col: usize,
    direction: Direction,
    player: PlayerId,
) -> Option<Run> {
    let (dr, dc) = direction.step();
    let mut cells = [Position::new(0, 0); RUN_LENGTH];

    for (k, slot) in cells.iter_mut().enumerate() {
        let r = row.checked_add_signed(dr * k as isize)?;
        let c = col.checked_add_signed(dc * k as isize)?;
        if board.get(r, c) != Some(player) {
            return None;
        }
        *slot = Position::new(r, c);
    }

    Some(Run { direction, cells })
}
