use serde::{Deserialize, Serialize};

/// State of a single hole on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// Occupied playable hole.
    Peg,
    /// Unoccupied playable hole, a valid landing target.
    Empty,
    /// Filler outside the cross shape, fixed for the whole game.
    Invalid,
}

impl Cell {
    pub const fn is_peg(self) -> bool {
        matches!(self, Self::Peg)
    }

    pub const fn is_vacant(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn is_playable(self) -> bool {
        matches!(self, Self::Peg | Self::Empty)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Invalid
    }
}
