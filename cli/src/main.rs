//! Terminal memory match game.
//!
//! Deals pairs of symbols face down on a grid; the player turns over two cards per move
//! until every pair is matched.
use std::io;

use anyhow::Result;
use clap::Parser;
use log::info;
use memomatch_core::{BoardGenerator, RandomBoardGenerator};

use crate::config::{Cli, Settings};
use crate::console::Console;
use crate::session::GameSession;

mod config;
mod console;
mod presentation;
mod session;

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    let settings = Settings::from_cli(&cli)?;
    info!(
        "Dealing {}x{} board with seed {}",
        settings.game.rows(),
        settings.game.cols(),
        settings.seed
    );
    let board = RandomBoardGenerator::new(settings.seed).generate(settings.game)?;

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    GameSession::new(board).run(&mut console)?;
    Ok(())
}
