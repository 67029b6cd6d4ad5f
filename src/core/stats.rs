//! Summary statistics over bootstrap draws.
//!
//! Empty inputs yield `NaN` rather than an error: a region with no
//! measurements for a period still gets a summary line, reading `nan`.

use std::cmp::Ordering;

/// Arithmetic mean. Deviations from the first value are summed with
/// Neumaier compensation, so a constant sample returns its value exactly
/// however long it is.
pub fn mean(data: &[f64]) -> f64 {
    let Some(&shift) = data.first() else {
        return f64::NAN;
    };
    shift + compensated_sum(data.iter().map(|&x| x - shift)) / data.len() as f64
}

fn compensated_sum(values: impl Iterator<Item = f64>) -> f64 {
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for x in values {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }
    sum + c
}

pub fn median(data: &[f64]) -> f64 {
    let sorted = sorted_copy(data);
    quantile_sorted(&sorted, 0.5)
}

/// Linear interpolation between closest ranks (R-7, numpy's default).
/// `sorted` must be in non-decreasing order.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return f64::NAN;
    }
    if n == 1 {
        return sorted[0];
    }
    let h = (n - 1) as f64 * p.clamp(0.0, 1.0);
    let j = h.floor() as usize;
    let g = h - h.floor();
    if j + 1 >= n {
        sorted[n - 1]
    } else {
        (1.0 - g) * sorted[j] + g * sorted[j + 1]
    }
}

fn sorted_copy(data: &[f64]) -> Vec<f64> {
    let mut sorted: Vec<f64> = data.iter().copied().filter(|x| !x.is_nan()).collect();
    sorted.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    sorted
}

/// Box-plot geometry: quartiles plus Tukey whiskers at 1.5 × IQR, clipped
/// to the most extreme observation inside the fence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxStats {
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub whisker_lo: f64,
    pub whisker_hi: f64,
}

impl BoxStats {
    pub const WHISKER_IQR: f64 = 1.5;

    pub fn from_values(data: &[f64]) -> Option<Self> {
        let sorted = sorted_copy(data);
        if sorted.is_empty() {
            return None;
        }
        let q1 = quantile_sorted(&sorted, 0.25);
        let median = quantile_sorted(&sorted, 0.5);
        let q3 = quantile_sorted(&sorted, 0.75);
        let iqr = q3 - q1;
        let lo_fence = q1 - Self::WHISKER_IQR * iqr;
        let hi_fence = q3 + Self::WHISKER_IQR * iqr;

        let whisker_lo = sorted
            .iter()
            .copied()
            .find(|&x| x >= lo_fence)
            .unwrap_or(q1)
            .min(q1);
        let whisker_hi = sorted
            .iter()
            .rev()
            .copied()
            .find(|&x| x <= hi_fence)
            .unwrap_or(q3)
            .max(q3);

        Some(Self {
            q1,
            median,
            q3,
            whisker_lo,
            whisker_hi,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_nan() {
        assert!(mean(&[]).is_nan());
        assert!(median(&[]).is_nan());
        assert!(BoxStats::from_values(&[]).is_none());
    }

    #[test]
    fn mean_of_constant_sample_is_exact() {
        // a plain running sum drifts to 4.068000000000098 here
        assert_eq!(mean(&[4.068; 1000]), 4.068);
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert_eq!(mean(&[0.1, 0.2, 0.3]), 0.2);
    }

    #[test]
    fn median_averages_middle_pair() {
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), 2.5);
        assert_eq!(median(&[5.0, 1.0, 3.0]), 3.0);
    }

    #[test]
    fn quantiles_interpolate_linearly() {
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(quantile_sorted(&sorted, 0.25), 2.0);
        assert_eq!(quantile_sorted(&sorted, 0.75), 4.0);
        assert!((quantile_sorted(&[1.0, 2.0], 0.25) - 1.25).abs() < 1e-12);
    }

    #[test]
    fn whiskers_stop_at_last_point_inside_fence() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 100.0];
        let b = BoxStats::from_values(&data).unwrap();
        assert!((b.q1 - 2.25).abs() < 1e-12);
        assert!((b.q3 - 4.75).abs() < 1e-12);
        assert_eq!(b.whisker_lo, 1.0);
        assert_eq!(b.whisker_hi, 5.0);
    }

    #[test]
    fn single_value_collapses_box() {
        let b = BoxStats::from_values(&[7.0]).unwrap();
        assert_eq!(b.q1, 7.0);
        assert_eq!(b.q3, 7.0);
        assert_eq!(b.whisker_lo, 7.0);
        assert_eq!(b.whisker_hi, 7.0);
    }
}
