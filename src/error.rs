/// Rejected game configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board dimensions must be non-zero (got {width}x{height})")]
    EmptyBoard { width: usize, height: usize },

    #[error("board of {width}x{height} exceeds the {max_cells} cell limit")]
    BoardTooLarge {
        width: usize,
        height: usize,
        max_cells: usize,
    },

    #[error("players must use different markers (both chose {0:?})")]
    DuplicateMarker(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("cell ({row}, {col}) is outside the {width}x{height} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },

    #[error("cell ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },
}

/// A move the game refused. A full column is not an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is out of range (board has {width} columns)")]
    ColumnOutOfRange { column: usize, width: usize },

    #[error("game is already over")]
    GameOver,

    #[error("board rejected the move: {0}")]
    Board(#[from] BoardError),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("no game has been started")]
    NoActiveGame,

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("illegal move: {0}")]
    Move(#[from] MoveError),
}
