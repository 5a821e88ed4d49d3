use anyhow::Result;
use log::{debug, info};
use memomatch_core::{Board, PlayEngine, TurnInput, TurnOutcome, TurnState};
use web_time::Instant;

use crate::presentation::*;

/// One game from the first render to the final summary.
pub struct GameSession {
    engine: PlayEngine,
    started_at: Instant,
}

impl GameSession {
    pub fn new(board: Board) -> Self {
        Self {
            engine: PlayEngine::new(board),
            started_at: Instant::now(),
        }
    }

    /// Plays until every pair is matched.
    pub fn run(&mut self, ui: &mut impl Presentation) -> Result<Summary> {
        ui.report(&Report::Welcome {
            total_pairs: self.engine.total_pairs(),
        })?;
        self.started_at = Instant::now();
        info!(
            "Game started on a {:?} board with {} pairs",
            self.engine.board().size(),
            self.engine.total_pairs()
        );

        loop {
            let slot = match self.engine.state() {
                TurnState::Won => break,
                TurnState::Resolving { .. } => {
                    ui.await_acknowledgment()?;
                    self.engine.step(TurnInput::Acknowledge)?;
                    continue;
                }
                TurnState::AwaitingFirstPick => {
                    ui.render(self.engine.board())?;
                    Slot::First
                }
                TurnState::AwaitingSecondPick { .. } => Slot::Second,
            };

            let input = ui.read_pick(slot, self.engine.board().size())?;
            match self.engine.step(input)? {
                TurnOutcome::Rejected { error, abandoned } => {
                    debug!("{slot:?} pick rejected: {error:?}, abandoned {abandoned:?}");
                    ui.report(&Report::Rejected(error))?;
                }
                TurnOutcome::FirstRevealed(_) => ui.render(self.engine.board())?,
                TurnOutcome::Matched { .. } => {
                    ui.render(self.engine.board())?;
                    ui.report(&Report::Match)?;
                }
                TurnOutcome::Mismatched { .. } => {
                    ui.render(self.engine.board())?;
                    ui.report(&Report::NoMatch)?;
                }
                TurnOutcome::Hidden { .. } => {}
            }
        }

        let summary = Summary {
            moves: self.engine.moves(),
            pairs: self.engine.pairs_found(),
            elapsed: self.started_at.elapsed(),
        };
        info!(
            "Game won in {} moves, {:?}",
            summary.moves, summary.elapsed
        );
        ui.report(&Report::Finished(summary))?;
        Ok(summary)
    }
}
