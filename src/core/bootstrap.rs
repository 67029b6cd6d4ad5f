//! Bootstrap distributions of the location-averaged regional mean.
//!
//! Each draw resamples the `n` location values of one period with
//! replacement and records their mean. Periods are resampled
//! independently.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::location::PeriodSeries;
use crate::core::metric::Metric;
use crate::core::stats;
use crate::error::{Error, Result};

pub const DEFAULT_ITERATIONS: usize = 1000;

/// Seeded generator when a seed is given, OS entropy otherwise.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// `iterations` means of size-`n` resamples of `sample`. An empty sample
/// has no bootstrap distribution and yields an empty vector.
pub fn bootstrap_means<R: Rng>(sample: &[f64], iterations: usize, rng: &mut R) -> Vec<f64> {
    let n = sample.len();
    if n == 0 {
        return Vec::new();
    }
    let mut resample = vec![0.0; n];
    (0..iterations)
        .map(|_| {
            for slot in resample.iter_mut() {
                *slot = sample[rng.random_range(0..n)];
            }
            stats::mean(&resample)
        })
        .collect()
}

/// Bootstraps every period of a location-averaged series after dividing
/// by the metric's display divisor. The series must have one entry per
/// period of `metric`.
pub fn bootstrap_series<R: Rng>(
    series: &PeriodSeries,
    metric: Metric,
    iterations: usize,
    rng: &mut R,
) -> Result<PeriodSeries> {
    if series.len() != metric.period_count() {
        return Err(Error::PeriodCount {
            expected: metric.period_count(),
            found: series.len(),
        });
    }
    let divisor = metric.divisor();
    Ok(series
        .iter()
        .map(|period| {
            let scaled: Vec<f64> = period.iter().map(|v| v / divisor).collect();
            bootstrap_means(&scaled, iterations, rng)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sample_has_no_draws() {
        let mut rng = make_rng(Some(1));
        assert!(bootstrap_means(&[], 1000, &mut rng).is_empty());
    }

    #[test]
    fn draws_stay_within_sample_range() {
        let mut rng = make_rng(Some(42));
        let sample = [2.0, 3.0, 10.0];
        let draws = bootstrap_means(&sample, 500, &mut rng);
        assert_eq!(draws.len(), 500);
        assert!(draws.iter().all(|&d| (2.0..=10.0).contains(&d)));
    }

    #[test]
    fn constant_sample_is_degenerate() {
        let mut rng = make_rng(Some(3));
        let draws = bootstrap_means(&[4.5; 6], 50, &mut rng);
        assert!(draws.iter().all(|&d| d == 4.5));
    }

    #[test]
    fn bootstrap_mean_tracks_sample_mean() {
        let mut rng = make_rng(Some(7));
        let sample: Vec<f64> = (1..=20).map(f64::from).collect();
        let draws = bootstrap_means(&sample, 4000, &mut rng);
        let m = stats::mean(&draws);
        assert!((m - 10.5).abs() < 0.2, "bootstrap mean {m}");
    }

    #[test]
    fn same_seed_same_draws() {
        let sample = [1.0, 5.0, 9.0, 13.0];
        let a = bootstrap_means(&sample, 100, &mut make_rng(Some(99)));
        let b = bootstrap_means(&sample, 100, &mut make_rng(Some(99)));
        assert_eq!(a, b);
    }

    #[test]
    fn density_is_scaled_to_thousands() {
        let series = vec![vec![2000.0], vec![4000.0], vec![], vec![6000.0], vec![8000.0]];
        let mut rng = make_rng(Some(5));
        let out = bootstrap_series(&series, Metric::Density, 10, &mut rng).unwrap();
        assert_eq!(out[0], vec![2.0; 10]);
        assert!(out[2].is_empty());
        assert_eq!(out[4], vec![8.0; 10]);
    }

    #[test]
    fn wrong_period_count_is_rejected() {
        let series = vec![vec![1.0]; 3];
        let mut rng = make_rng(Some(5));
        let err = bootstrap_series(&series, Metric::UrbanExpansion, 10, &mut rng).unwrap_err();
        assert!(matches!(err, Error::PeriodCount { expected: 4, found: 3 }));
    }

    #[test]
    fn period_count_must_match_metric() {
        let five = vec![vec![1.0]; 5];
        let mut rng = make_rng(Some(5));
        let err = bootstrap_series(&five, Metric::UrbanExpansion, 10, &mut rng).unwrap_err();
        assert!(matches!(err, Error::PeriodCount { expected: 4, found: 5 }));

        let four = vec![vec![1.0]; 4];
        let err = bootstrap_series(&four, Metric::Density, 10, &mut rng).unwrap_err();
        assert!(matches!(err, Error::PeriodCount { expected: 5, found: 4 }));
    }

    #[test]
    fn density_divides_by_a_thousand() {
        // 4068 * (1 / 1000) lands one ulp above 4.068
        let series = vec![vec![4068.0]; 5];
        let mut rng = make_rng(Some(8));
        let out = bootstrap_series(&series, Metric::Density, 1000, &mut rng).unwrap();
        assert!(out[4].iter().all(|&d| d == 4.068));
        assert_eq!(stats::mean(&out[4]), 4.068);
    }
}
