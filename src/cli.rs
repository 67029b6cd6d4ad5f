use clap::Parser;
use std::path::PathBuf;

use crate::config::AppConfig;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Per-location measurement table (CSV, Latin-1)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Path to config TOML
    #[arg(long, default_value = "urbanfig.toml")]
    pub config: String,

    /// Directory for figures, summary and workbook (defaults to the input's directory)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Bootstrap draws per period (overrides config)
    #[arg(long)]
    pub iterations: Option<usize>,

    /// Seed for the bootstrap generator (overrides config)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Skip the PNG figures; write only the summary and workbook
    #[arg(long, default_value_t = false)]
    pub no_figures: bool,
}

impl Args {
    /// Folds command-line overrides into the loaded config.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(iterations) = self.iterations {
            config.bootstrap.iterations = iterations;
        }
        if self.seed.is_some() {
            config.bootstrap.seed = self.seed;
        }
    }
}
