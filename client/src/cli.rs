use std::path::PathBuf;

use clap::Parser;

use crate::config::RunConfig;

/// Play the game of life given an initial state and a number of generations.
#[derive(Debug, Parser)]
#[command(name = "life")]
pub struct Cli {
    /// The universe is toroidal.
    #[arg(short, long)]
    pub toroidal: bool,

    /// Silent mode. Don't display the evolution over generations.
    #[arg(short, long)]
    pub silent: bool,

    /// Number of generations [default: 100].
    #[arg(short = 'n', long)]
    pub generations: Option<u64>,

    /// Initial state file. Reads stdin when omitted.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// File for the final state. Writes to stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// JSON run config. Flags given on the command line take precedence.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Milliseconds each generation stays on screen [default: 50].
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

impl Cli {
    pub fn run_config(&self) -> anyhow::Result<RunConfig> {
        let config = match &self.config {
            Some(config_path) => RunConfig::load(config_path)?,
            None => RunConfig::default(),
        };

        Ok(self.apply(config))
    }

    fn apply(&self, mut config: RunConfig) -> RunConfig {
        config.toroidal |= self.toroidal;
        config.silent |= self.silent;

        if let Some(generations) = self.generations {
            config.generations = generations;
        }

        if let Some(delay_ms) = self.delay_ms {
            config.delay_ms = delay_ms;
        }

        config
    }
}
