use anyhow::Result;
use memomatch_core::{Board, CellCount, Coord2, PickError, TurnInput};
use std::time::Duration;

/// Which card of the turn is being asked for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Slot {
    First,
    Second,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub moves: u32,
    pub pairs: CellCount,
    pub elapsed: Duration,
}

/// User-facing messages emitted by the session.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Report {
    Welcome { total_pairs: CellCount },
    Match,
    NoMatch,
    Rejected(PickError),
    Finished(Summary),
}

/// Everything the session needs from the outside world.
pub trait Presentation {
    fn render(&mut self, board: &Board) -> Result<()>;

    /// Asks for one pick on a board of `size`. Unparseable input comes back as
    /// [`TurnInput::Invalid`], never as an error.
    fn read_pick(&mut self, slot: Slot, size: Coord2) -> Result<TurnInput>;

    /// Blocks until the player is ready for mismatched cards to be hidden.
    fn await_acknowledgment(&mut self) -> Result<()>;

    fn report(&mut self, report: &Report) -> Result<()>;
}

/// Formats a duration as `minutes:seconds`.
pub fn format_elapsed(elapsed: Duration) -> String {
    let seconds = elapsed.as_secs();
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_minutes_and_padded_seconds() {
        assert_eq!(format_elapsed(Duration::from_secs(0)), "0:00");
        assert_eq!(format_elapsed(Duration::from_millis(65_900)), "1:05");
        assert_eq!(format_elapsed(Duration::from_secs(3600)), "60:00");
    }
}
