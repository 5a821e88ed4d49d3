use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    #[default]
    AwaitingFirstPick,
    AwaitingSecondPick { first: Coord2 },
    /// Two mismatched cards are face up until the player acknowledges them.
    Resolving { first: Coord2, second: Coord2 },
    Won,
}

impl TurnState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won)
    }
}

/// What the driver hands the engine for one transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TurnInput {
    Pick(Coord2),
    /// The player typed something that could not be turned into a pick.
    Invalid(PickError),
    Acknowledge,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    FirstRevealed(Coord2),
    /// `abandoned` is the first card of the turn, hidden again because the second pick failed.
    Rejected {
        error: PickError,
        abandoned: Option<Coord2>,
    },
    Matched {
        first: Coord2,
        second: Coord2,
        symbol: char,
    },
    Mismatched {
        first: Coord2,
        second: Coord2,
    },
    Hidden {
        first: Coord2,
        second: Coord2,
    },
}

/// Turn resolver: the only mutator of the board once play starts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayEngine {
    board: Board,
    state: TurnState,
    moves: u32,
    pairs_found: CellCount,
    total_pairs: CellCount,
}

impl PlayEngine {
    pub fn new(board: Board) -> Self {
        let total_pairs = board.pair_count();
        Self {
            board,
            state: Default::default(),
            moves: 0,
            pairs_found: 0,
            total_pairs,
        }
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Completed two-card attempts.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn pairs_found(&self) -> CellCount {
        self.pairs_found
    }

    pub fn total_pairs(&self) -> CellCount {
        self.total_pairs
    }

    pub fn step(&mut self, input: TurnInput) -> Result<TurnOutcome> {
        use TurnInput::*;
        use TurnState::*;

        let outcome = match (self.state, input) {
            (Won, _) => return Err(GameError::AlreadyEnded),
            (Resolving { first, second }, Acknowledge) => self.hide_pair(first, second),
            (Resolving { .. }, _) => return Err(GameError::UnexpectedInput("pick")),
            (_, Acknowledge) => return Err(GameError::UnexpectedInput("acknowledgment")),
            (AwaitingFirstPick, Pick(coords)) => match self.validate_pick(coords, None) {
                Ok(coords) => {
                    self.board[coords].revealed = true;
                    self.state = AwaitingSecondPick { first: coords };
                    TurnOutcome::FirstRevealed(coords)
                }
                Err(error) => TurnOutcome::Rejected {
                    error,
                    abandoned: None,
                },
            },
            (AwaitingFirstPick, Invalid(error)) => TurnOutcome::Rejected {
                error,
                abandoned: None,
            },
            (AwaitingSecondPick { first }, Pick(coords)) => {
                match self.validate_pick(coords, Some(first)) {
                    Ok(second) => {
                        self.board[second].revealed = true;
                        self.moves += 1;
                        self.resolve_pair(first, second)
                    }
                    Err(error) => self.abandon_turn(first, error),
                }
            }
            (AwaitingSecondPick { first }, Invalid(error)) => self.abandon_turn(first, error),
        };

        log::debug!("{outcome:?} -> {:?}", self.state);
        Ok(outcome)
    }

    /// Checks a pick against the board. `first` is the card already face up this turn, if any.
    pub fn validate_pick(
        &self,
        coords: Coord2,
        first: Option<Coord2>,
    ) -> core::result::Result<Coord2, PickError> {
        if !self.board.contains(coords) {
            return Err(PickError::OutOfRange);
        }

        let cell = self.board[coords];
        if cell.matched {
            Err(PickError::AlreadyMatched)
        } else if first == Some(coords) {
            Err(PickError::DuplicatePick)
        } else if cell.revealed {
            Err(PickError::AlreadyRevealed)
        } else {
            Ok(coords)
        }
    }

    fn resolve_pair(&mut self, first: Coord2, second: Coord2) -> TurnOutcome {
        let symbol = self.board[first].symbol;
        if symbol != self.board[second].symbol {
            self.state = TurnState::Resolving { first, second };
            return TurnOutcome::Mismatched { first, second };
        }

        self.board[first].matched = true;
        self.board[second].matched = true;
        self.pairs_found += 1;
        self.state = if self.pairs_found == self.total_pairs {
            TurnState::Won
        } else {
            TurnState::AwaitingFirstPick
        };

        TurnOutcome::Matched {
            first,
            second,
            symbol,
        }
    }

    fn hide_pair(&mut self, first: Coord2, second: Coord2) -> TurnOutcome {
        self.board[first].revealed = false;
        self.board[second].revealed = false;
        self.state = TurnState::AwaitingFirstPick;
        TurnOutcome::Hidden { first, second }
    }

    fn abandon_turn(&mut self, first: Coord2, error: PickError) -> TurnOutcome {
        self.board[first].revealed = false;
        self.state = TurnState::AwaitingFirstPick;
        TurnOutcome::Rejected {
            error,
            abandoned: Some(first),
        }
    }
}
