//! CSV in, figures + summary + workbook out.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::analysis::analyze_cohort;
use crate::config::AppConfig;
use crate::core::bootstrap::make_rng;
use crate::data::{Cohort, group_by_region, read_records};
use crate::error::{Error, Result};
use crate::figure::{FigureSpec, render_cohort};
use crate::report::{BootstrapWorkbook, WORKBOOK_FILE_NAME, cohort_summary, summary_file_name};

#[derive(Clone, Debug)]
pub struct RunOptions {
    /// Defaults to the input file's directory.
    pub out_dir: Option<PathBuf>,
    pub figures: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            out_dir: None,
            figures: true,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct RunReport {
    pub rows: usize,
    pub summary: PathBuf,
    pub workbook: PathBuf,
    pub figures: Vec<PathBuf>,
}

fn output_dir(input: &Path, options: &RunOptions) -> PathBuf {
    match &options.out_dir {
        Some(dir) => dir.clone(),
        None => input
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    }
}

/// Seed of the jitter generator, one past the bootstrap seed.
fn jitter_seed(seed: Option<u64>) -> Option<u64> {
    seed.map(|s| s.wrapping_add(1))
}

/// Runs the whole batch for one input table. Cohorts are processed in the
/// order all, above, below. Bootstrap and jitter draw from separate
/// generators, so a configured seed gives the same summary and workbook
/// whether or not figures are drawn.
pub fn run(config: &AppConfig, input: &Path, options: &RunOptions) -> Result<RunReport> {
    let specs = FigureSpec::all(&config.axes);
    if options.figures {
        for spec in &specs {
            spec.ticks()?;
        }
    }

    let out_dir = output_dir(input, options);
    fs::create_dir_all(&out_dir).map_err(|e| Error::io(&out_dir, e))?;

    let records = read_records(input)?;
    let rows = records.len();
    info!(input = %input.display(), rows, "input read");
    let table = group_by_region(records);

    let mut rng = make_rng(config.bootstrap.seed);
    let mut jitter_rng = make_rng(jitter_seed(config.bootstrap.seed));
    let mut summary = String::new();
    let mut workbook = BootstrapWorkbook::new();
    let mut figures = Vec::new();

    for cohort in Cohort::ALL {
        let cohort_table = table.cohort(cohort, config.cohorts.size_threshold);
        info!(cohort = %cohort, rows = cohort_table.row_count(), "bootstrapping cohort");
        let analysis = analyze_cohort(
            &cohort_table,
            cohort,
            config.bootstrap.iterations,
            &mut rng,
        )?;

        summary.push_str(&cohort_summary(&analysis));
        workbook.add_cohort(&analysis)?;
        if options.figures {
            figures.extend(render_cohort(
                &analysis,
                &specs,
                &config.figure,
                &out_dir,
                &mut jitter_rng,
            )?);
        }
    }

    let extension = input.extension().and_then(|e| e.to_str());
    let summary_path = out_dir.join(summary_file_name(extension));
    fs::write(&summary_path, summary).map_err(|e| Error::io(&summary_path, e))?;
    info!(path = %summary_path.display(), "summary written");

    let workbook_path = out_dir.join(WORKBOOK_FILE_NAME);
    let sheets = workbook.sheet_count();
    workbook.save(&workbook_path)?;
    info!(path = %workbook_path.display(), sheets, "bootstrap workbook written");

    Ok(RunReport {
        rows,
        summary: summary_path,
        workbook: workbook_path,
        figures,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jitter_seed_differs_from_bootstrap_seed() {
        assert_eq!(jitter_seed(Some(41)), Some(42));
        assert_eq!(jitter_seed(Some(u64::MAX)), Some(0));
        assert_eq!(jitter_seed(None), None);
    }

    #[test]
    fn bad_axis_limits_fail_before_any_output() {
        let mut config = AppConfig::default();
        config.axes.rates_log = [0.1, f64::INFINITY];
        let out = std::env::temp_dir().join(format!(
            "urbanfig_bad_axes_{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_nanos()
        ));
        let options = RunOptions {
            out_dir: Some(out.clone()),
            figures: true,
        };
        let err = run(&config, Path::new("missing.csv"), &options).unwrap_err();
        assert!(matches!(err, Error::Plot(_)));
        assert!(!out.exists());
    }

    #[test]
    fn output_defaults_to_input_directory() {
        let opts = RunOptions::default();
        assert_eq!(
            output_dir(Path::new("/data/in.csv"), &opts),
            PathBuf::from("/data")
        );
        assert_eq!(output_dir(Path::new("in.csv"), &opts), PathBuf::from("."));

        let opts = RunOptions {
            out_dir: Some(PathBuf::from("/tmp/out")),
            figures: false,
        };
        assert_eq!(
            output_dir(Path::new("/data/in.csv"), &opts),
            PathBuf::from("/tmp/out")
        );
    }
}
