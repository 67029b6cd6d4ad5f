use crate::core::metric::Metric;
use crate::core::stats;
use crate::data::LocationRecord;

/// One sample per period, each holding one value per contributing location.
pub type PeriodSeries = Vec<Vec<f64>>;

/// Collapses studies covering the same agglomeration into one value per
/// period.
///
/// Rows are grouped by location name in first-appearance order. For each
/// period the location's value is the mean of its non-missing studies; a
/// location whose studies all miss a period is left out of that period, so
/// periods may end up with different sample sizes.
pub fn location_average(rows: &[LocationRecord], metric: Metric) -> PeriodSeries {
    let columns = metric.columns();
    let mut names: Vec<&str> = Vec::new();
    // per location: (sum, count) per period
    let mut acc: Vec<Vec<(f64, usize)>> = Vec::new();

    for row in rows {
        let slot = match names.iter().position(|n| *n == row.name) {
            Some(i) => i,
            None => {
                names.push(&row.name);
                acc.push(vec![(0.0, 0); columns.len()]);
                names.len() - 1
            }
        };
        for (period, column) in columns.clone().enumerate() {
            if let Some(v) = row.value(column) {
                let (sum, count) = &mut acc[slot][period];
                *sum += v;
                *count += 1;
            }
        }
    }

    let mut series: PeriodSeries = vec![Vec::with_capacity(names.len()); columns.len()];
    for location in &acc {
        for (period, &(sum, count)) in location.iter().enumerate() {
            if count > 0 {
                series[period].push(sum / count as f64);
            }
        }
    }
    series
}

/// Mean of each period; `NaN` for a period no location contributes to.
pub fn series_means(series: &PeriodSeries) -> Vec<f64> {
    series.iter().map(|period| stats::mean(period)).collect()
}

/// Number of contributing locations per period.
pub fn series_counts(series: &PeriodSeries) -> Vec<usize> {
    series.iter().map(Vec::len).collect()
}
