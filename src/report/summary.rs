use std::fmt::Write as _;

use crate::analysis::CohortAnalysis;
use crate::core::metric::Metric;
use crate::core::stats;

/// Summary file name; the extension follows the input file.
pub fn summary_file_name(input_extension: Option<&str>) -> String {
    match input_extension {
        Some(ext) if !ext.is_empty() => format!("regional_location_summary.{ext}"),
        _ => "regional_location_summary".to_string(),
    }
}

/// 15 decimals, `nan`/`inf` spelled in lower case.
pub fn format_value(v: f64) -> String {
    if v.is_nan() {
        "nan".to_string()
    } else if v.is_infinite() {
        if v > 0.0 { "inf" } else { "-inf" }.to_string()
    } else {
        format!("{v:.15}")
    }
}

/// Mean and median blocks of one cohort: every region's urban expansion
/// block, then every region's density block.
pub fn cohort_summary(analysis: &CohortAnalysis) -> String {
    let mut out = String::new();
    for metric in [Metric::UrbanExpansion, Metric::Density] {
        for (region, draws) in analysis.draws(metric) {
            let _ = writeln!(out, "{}", region.key());
            let _ = writeln!(out, "{}", metric.summary_title());
            let _ = writeln!(out, "{}", analysis.cohort.tag());
            for (label, period) in metric.summary_labels().iter().zip(&draws.draws) {
                let _ = writeln!(out, "{label} Mean,{}", format_value(stats::mean(period)));
                let _ = writeln!(out, "{label} Median,{}", format_value(stats::median(period)));
            }
        }
    }
    out
}
