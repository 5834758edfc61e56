use std::path::PathBuf;
use std::time::Duration;

use clap::Args;

use crate::domain::DEFAULT_SIZE;

/// Settings shared by the menu and the one-shot subcommands.
#[derive(Args, Clone, Debug, PartialEq)]
pub struct Config {
    /// Side length of the Game of Life board.
    #[arg(long, default_value_t = DEFAULT_SIZE, global = true)]
    pub grid_size: usize,

    /// Seed file read when the board is loaded from disk.
    #[arg(long = "file", default_value = "matriz", global = true)]
    pub seed_path: PathBuf,

    /// Generations simulated when no count is given.
    #[arg(long, default_value_t = 5, global = true)]
    pub iterations: u32,

    /// Pause between generations, in milliseconds.
    #[arg(long = "delay-ms", default_value = "1000", value_parser = parse_millis, global = true)]
    pub step_delay: Duration,

    /// Sample count offered for the π estimate.
    #[arg(long = "points", default_value_t = 1_000_000, global = true)]
    pub default_points: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_SIZE,
            seed_path: PathBuf::from("matriz"),
            iterations: 5,
            step_delay: Duration::from_secs(1),
            default_points: 1_000_000,
        }
    }
}

fn parse_millis(raw: &str) -> Result<Duration, String> {
    raw.parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|err| format!("invalid delay `{raw}`: {err}"))
}
