use serde::{Deserialize, Serialize};

/// Seat of a player in the game. Player one always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "u8")]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// Cell code used in board snapshots: 1 or 2 (0 is an empty cell).
    pub fn code(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }
}

impl From<PlayerId> for u8 {
    fn from(id: PlayerId) -> Self {
        id.code()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Color or label the page draws this player's pieces with.
    pub marker: String,
    pub name: String,
}

impl Player {
    pub fn new(marker: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            name: name.into(),
        }
    }
}
