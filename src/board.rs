use crate::error::BoardError;
use crate::player::PlayerId;

pub const DEFAULT_WIDTH: usize = 7;
pub const DEFAULT_HEIGHT: usize = 6;

/// An empty cell or the seat of the player whose piece sits there.
pub type Cell = Option<PlayerId>;

/// Connect Four grid stored row-major. Row 0 is the top row; pieces land on
/// the highest-indexed empty row of a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty `width` x `height` board.
    /// Dimensions are validated by `GameConfig`; a zero dimension gives a
    /// board with no cells.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    /// Owner of the cell, or `None` when it is empty or off the board.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        if self.contains(row, col) {
            self.cells[self.index(row, col)]
        } else {
            None
        }
    }

    /// Returns the row a piece dropped into `col` lands on, or `None` when
    /// the column is full (or does not exist).
    pub fn drop_target(&self, col: usize) -> Option<usize> {
        if col >= self.width {
            return None;
        }
        (0..self.height)
            .rev()
            .find(|&row| self.cells[self.index(row, col)].is_none())
    }

    /// Marks an empty cell as owned by `player`.
    /// The board is left unchanged when the cell is off the board or taken.
    pub fn place(&mut self, row: usize, col: usize, player: PlayerId) -> Result<(), BoardError> {
        if !self.contains(row, col) {
            return Err(BoardError::OutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }

        let idx = self.index(row, col);
        if self.cells[idx].is_some() {
            return Err(BoardError::Occupied { row, col });
        }

        self.cells[idx] = Some(player);
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Iterates the rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        (0..self.height).map(move |row| &self.cells[row * self.width..(row + 1) * self.width])
    }

    /// Converts the board to row-major codes where 0=empty, 1=player one,
    /// 2=player two.
    pub fn to_array(&self) -> Vec<u8> {
        self.cells
            .iter()
            .map(|cell| cell.map_or(0, PlayerId::code))
            .collect()
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Builds a board from text rows, top row first: `.` empty, `1`/`2`
    /// owned cells.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        let mut board = Self::new(width, height);
        for (row, line) in rows.iter().enumerate() {
            assert_eq!(line.len(), width, "ragged test board");
            for (col, ch) in line.chars().enumerate() {
                let owner = match ch {
                    '1' => Some(PlayerId::One),
                    '2' => Some(PlayerId::Two),
                    _ => None,
                };
                if let Some(player) = owner {
                    board.place(row, col, player).unwrap();
                }
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}
