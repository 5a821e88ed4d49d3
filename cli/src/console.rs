use std::io::{BufRead, Write};

use anyhow::{Result, bail};
use memomatch_core::{Board, Coord2, TurnInput, parse_pick, render_board};

use crate::presentation::*;

/// Line-oriented terminal front end.
pub struct Console<R, W> {
    input: R,
    output: W,
    line: String,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: String::new(),
        }
    }

    /// Reads one full line, so anything typed after the pick is discarded with it.
    fn read_line(&mut self) -> Result<&str> {
        self.line.clear();
        if self.input.read_line(&mut self.line)? == 0 {
            bail!("input closed before the game was finished");
        }
        Ok(&self.line)
    }
}

impl<R: BufRead, W: Write> Presentation for Console<R, W> {
    fn render(&mut self, board: &Board) -> Result<()> {
        write!(self.output, "\n{}\n", render_board(board))?;
        Ok(())
    }

    fn read_pick(&mut self, slot: Slot, (rows, cols): Coord2) -> Result<TurnInput> {
        match slot {
            Slot::First => writeln!(self.output, "Pick first card:")?,
            Slot::Second => writeln!(self.output, "Pick second card:")?,
        }
        write!(
            self.output,
            "Enter row (1-{rows}) and column (1-{cols}) separated by space: "
        )?;
        self.output.flush()?;

        let line = self.read_line()?;
        log::trace!("pick input {line:?}");
        Ok(match parse_pick(line) {
            Ok(coords) => TurnInput::Pick(coords),
            Err(error) => TurnInput::Invalid(error),
        })
    }

    fn await_acknowledgment(&mut self) -> Result<()> {
        write!(self.output, "Press Enter to continue...")?;
        self.output.flush()?;
        self.read_line()?;
        Ok(())
    }

    fn report(&mut self, report: &Report) -> Result<()> {
        let out = &mut self.output;
        match report {
            Report::Welcome { total_pairs } => {
                writeln!(out, "Welcome to Memory Match!")?;
                writeln!(
                    out,
                    "Match all {total_pairs} pairs. Enter coordinates as row and column (1-based).\n"
                )?;
            }
            Report::Match => writeln!(out, "Nice! It's a match.\n")?,
            Report::NoMatch => writeln!(out, "Not a match. Cards will be hidden.\n")?,
            Report::Rejected(error) => writeln!(out, "{error}\n")?,
            Report::Finished(summary) => {
                writeln!(out, "CONGRATULATIONS! You matched all pairs.")?;
                writeln!(out, "Moves: {}", summary.moves)?;
                writeln!(
                    out,
                    "Time: {} (minutes:seconds)",
                    format_elapsed(summary.elapsed)
                )?;
            }
        }
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use memomatch_core::PickError;
    use std::io::Cursor;

    fn console<'a>(
        input: &str,
        out: &'a mut Vec<u8>,
    ) -> Console<Cursor<Vec<u8>>, &'a mut Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), out)
    }

    #[test]
    fn read_pick_prompts_and_parses() {
        let mut out = Vec::new();
        let mut console = console("2 3 \nfoo\n", &mut out);

        assert_eq!(
            console.read_pick(Slot::First, (4, 4)).unwrap(),
            TurnInput::Pick((1, 2))
        );
        assert_eq!(
            console.read_pick(Slot::Second, (4, 4)).unwrap(),
            TurnInput::Invalid(PickError::Malformed)
        );

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Pick first card:\n"));
        assert!(out.contains("Pick second card:\n"));
        assert!(out.contains("Enter row (1-4) and column (1-4) separated by space: "));
    }

    #[test]
    fn end_of_input_is_an_error() {
        let mut out = Vec::new();
        let mut console = console("", &mut out);

        assert!(console.read_pick(Slot::First, (4, 4)).is_err());
        assert!(console.await_acknowledgment().is_err());
    }

    #[test]
    fn rejected_picks_use_error_messages() {
        let cases = [
            (
                PickError::DuplicatePick,
                "You picked the same card twice. Try again.\n\n",
            ),
            (PickError::OutOfRange, "Coordinates out of range. Try again.\n\n"),
            (
                PickError::AlreadyMatched,
                "That card is already matched. Pick another.\n\n",
            ),
            (
                PickError::AlreadyRevealed,
                "That card is already revealed this turn. Pick another.\n\n",
            ),
            (
                PickError::Malformed,
                "Invalid input. Please enter two numbers.\n\n",
            ),
        ];

        for (error, expected) in cases {
            let mut out = Vec::new();
            console("", &mut out)
                .report(&Report::Rejected(error))
                .unwrap();

            assert_eq!(String::from_utf8(out).unwrap(), expected);
        }
    }

    #[test]
    fn summary_shows_moves_and_time() {
        let mut out = Vec::new();

        console("", &mut out)
            .report(&Report::Finished(Summary {
                moves: 12,
                pairs: 8,
                elapsed: std::time::Duration::from_secs(75),
            }))
            .unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Moves: 12\n"));
        assert!(out.contains("Time: 1:15 (minutes:seconds)\n"));
    }
}
