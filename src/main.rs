// Entry point: parses arguments, loads config and runs the batch once.
use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use urbanfig::cli::Args;
use urbanfig::config::AppConfig;
use urbanfig::pipeline::{self, RunOptions};

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();
    let mut config = AppConfig::load_or_default(&args.config);
    args.apply(&mut config);

    let options = RunOptions {
        out_dir: args.out_dir.clone(),
        figures: !args.no_figures,
    };
    let report = pipeline::run(&config, &args.input, &options)
        .with_context(|| format!("processing {}", args.input.display()))?;

    info!(
        rows = report.rows,
        figures = report.figures.len(),
        summary = %report.summary.display(),
        workbook = %report.workbook.display(),
        "done"
    );
    Ok(())
}
