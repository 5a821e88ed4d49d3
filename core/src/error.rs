use thiserror::Error;

use crate::CellCount;

/// Fatal errors: bad board configuration or a driver feeding the engine out of order.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board must have at least one row and one column")]
    EmptyBoard,
    #[error("Board has {cells} cells, which cannot be split into pairs")]
    OddCellCount { cells: CellCount },
    #[error("Not enough unique symbols to create pairs, need {required} but only {available} available. Reduce board size.")]
    NotEnoughSymbols { required: usize, available: usize },
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Symbol {0:?} does not appear exactly twice")]
    UnpairedSymbol(char),
    #[error("Input {0} is not accepted in the current turn state")]
    UnexpectedInput(&'static str),
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

impl GameError {
    /// Whether the error stems from the board configuration rather than from play.
    pub const fn is_configuration(self) -> bool {
        !matches!(self, Self::UnexpectedInput(_) | Self::AlreadyEnded)
    }
}

pub type Result<T> = core::result::Result<T, GameError>;

/// Recoverable problems with a single pick. The player is simply asked again.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum PickError {
    #[error("Invalid input. Please enter two numbers.")]
    Malformed,
    #[error("Coordinates out of range. Try again.")]
    OutOfRange,
    #[error("That card is already matched. Pick another.")]
    AlreadyMatched,
    #[error("That card is already revealed this turn. Pick another.")]
    AlreadyRevealed,
    #[error("You picked the same card twice. Try again.")]
    DuplicatePick,
}

