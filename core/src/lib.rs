#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use hint::*;
pub use rules::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod hint;
mod rules;
mod types;

/// Side length of the standard English board.
pub const BOARD_SIZE: Coord = 7;

/// Square grid of holes. A value type: `Clone` yields an independent
/// snapshot, which is what makes the engine's history stack safe.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    /// Standard English cross: 33 playable holes, every hole pegged except
    /// the center, the four 2x2 corners outside the cross.
    pub fn standard() -> Self {
        let size = BOARD_SIZE as usize;
        let center = size / 2;
        let arm = |i: usize| (2..size - 2).contains(&i);
        let cells = Array2::from_shape_fn((size, size), |(r, c)| {
            if !arm(r) && !arm(c) {
                Cell::Invalid
            } else if (r, c) == (center, center) {
                Cell::Empty
            } else {
                Cell::Peg
            }
        });
        Self { cells }
    }

    /// Builds a board from an explicit grid, for tests and custom positions.
    pub fn from_cells(cells: Array2<Cell>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        if rows != cols || rows == 0 || rows > Coord::MAX as usize {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self { cells })
    }

    pub fn size(&self) -> Coord {
        self.cells.dim().0.try_into().unwrap()
    }

    pub fn in_bounds(&self, (r, c): Pos) -> bool {
        let size = self.size();
        r < size && c < size
    }

    pub fn validate_pos(&self, pos: Pos) -> Result<Pos> {
        if self.in_bounds(pos) {
            Ok(pos)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// Bounds-checked lookup; `None` outside the grid.
    pub fn get(&self, pos: Pos) -> Option<Cell> {
        self.in_bounds(pos).then(|| self.cells[pos.to_nd_index()])
    }

    pub fn cell_at(&self, pos: Pos) -> Cell {
        self.cells[pos.to_nd_index()]
    }

    pub fn peg_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| cell.is_peg())
            .count()
            .try_into()
            .unwrap()
    }

    /// Every position of the grid in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + use<> {
        let size = self.size();
        (0..size).flat_map(move |r| (0..size).map(move |c| (r, c)))
    }

    /// The in-bounds cardinal jumps from `from`, as `(over, to)` pairs.
    pub fn iter_jumps(&self, from: Pos) -> JumpIter {
        JumpIter::new(from, self.size())
    }

    pub(crate) fn set(&mut self, pos: Pos, cell: Cell) {
        self.cells[pos.to_nd_index()] = cell;
    }
}

impl Index<Pos> for Board {
    type Output = Cell;

    fn index(&self, pos: Pos) -> &Self::Output {
        &self.cells[pos.to_nd_index()]
    }
}
