use serde::{Deserialize, Serialize};

/// One card on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub symbol: char,
    /// Face up for the current turn only.
    pub revealed: bool,
    /// Permanently face up; `revealed` no longer matters once set.
    pub matched: bool,
}

impl Cell {
    pub const fn new(symbol: char) -> Self {
        Self {
            symbol,
            revealed: false,
            matched: false,
        }
    }

    pub const fn is_shown(self) -> bool {
        self.matched || self.revealed
    }

    pub const fn is_open(self) -> bool {
        self.revealed && !self.matched
    }
}
