#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use input::*;
pub use render::*;
pub use shuffle::*;
pub use symbols::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod input;
mod render;
mod shuffle;
mod symbols;
mod types;

/// Board dimensions, validated once at construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2) -> Self {
        Self { size }
    }

    pub fn new(rows: Coord, cols: Coord) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GameError::EmptyBoard);
        }
        let cells = mult(rows, cols);
        if !cells.is_multiple_of(2) {
            return Err(GameError::OddCellCount { cells });
        }
        Ok(Self::new_unchecked((rows, cols)))
    }

    pub const fn rows(&self) -> Coord {
        self.size.0
    }

    pub const fn cols(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn pair_count(&self) -> CellCount {
        self.total_cells() / 2
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked((4, 4))
    }
}

/// Grid of cards. Symbols are fixed at construction; only the cell flags change afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    /// Places `symbols` row-major into a board of `size`.
    ///
    /// Every symbol must occur exactly twice and the sequence must fill the board exactly.
    pub fn from_symbols(size: Coord2, symbols: &[char]) -> Result<Self> {
        if usize::from(mult(size.0, size.1)) != symbols.len() {
            return Err(GameError::InvalidBoardShape);
        }

        for &symbol in symbols {
            if symbols.iter().filter(|&&other| other == symbol).count() != 2 {
                return Err(GameError::UnpairedSymbol(symbol));
            }
        }

        let cells = Array2::from_shape_fn(size.to_nd_index(), |(row, col)| {
            Cell::new(symbols[row * usize::from(size.1) + col])
        });
        Ok(Self { cells })
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len().try_into().unwrap()
    }

    pub fn pair_count(&self) -> CellCount {
        self.total_cells() / 2
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        let size = self.size();
        coords.0 < size.0 && coords.1 < size.1
    }

    /// Cells revealed during the current turn and not yet matched.
    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_open()).count()
    }

    pub fn matched_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.matched).count()
    }

    /// Distinct symbols on the board, in first-seen row-major order.
    pub fn symbols_in_use(&self) -> Vec<char> {
        let mut symbols = Vec::new();
        for cell in self.cells.iter() {
            if !symbols.contains(&cell.symbol) {
                symbols.push(cell.symbol);
            }
        }
        symbols
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Board {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}
