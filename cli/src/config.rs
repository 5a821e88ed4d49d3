use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use memomatch_core::{Coord, GameConfig};
use serde::Deserialize;
use web_time::{SystemTime, UNIX_EPOCH};

#[derive(Parser, Debug)]
#[command(name = "memomatch")]
#[command(about = "Terminal memory match (concentration) game")]
#[command(version)]
pub struct Cli {
    /// Board rows (default 4)
    #[arg(long)]
    pub rows: Option<Coord>,

    /// Board columns (default 4)
    #[arg(long)]
    pub cols: Option<Coord>,

    /// Seed for dealing the cards; the clock is used when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// TOML file providing `rows`, `cols` and `seed`; flags take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub verbose: Verbosity<WarnLevel>,
}

/// Contents of the optional configuration file.
#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub rows: Option<Coord>,
    pub cols: Option<Coord>,
    pub seed: Option<u64>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config file {}", path.display()))
    }
}

/// Fully resolved settings for one run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub game: GameConfig,
    pub seed: u64,
}

impl Settings {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Self::merge(cli, file)
    }

    fn merge(cli: &Cli, file: FileConfig) -> Result<Self> {
        let defaults = GameConfig::default();
        let rows = cli.rows.or(file.rows).unwrap_or(defaults.rows());
        let cols = cli.cols.or(file.cols).unwrap_or(defaults.cols());
        let game = GameConfig::new(rows, cols)?;
        let seed = cli.seed.or(file.seed).unwrap_or_else(clock_seed);
        Ok(Self { game, seed })
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|since| since.as_nanos() as u64)
        .unwrap_or_default()
}
