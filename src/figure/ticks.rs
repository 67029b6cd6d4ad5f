//! Y tick positions. The lower and upper limits are always ticks; the
//! interior ticks get gridlines.

/// Generators stop once they pass this many ticks.
pub const MAX_TICKS: usize = 50;

/// `lo, lo+step, …` up to `hi`, with `hi` appended if the steps miss it.
pub fn stepped(lo: f64, hi: f64, step: f64) -> Vec<f64> {
    let mut ticks = Vec::new();
    let mut k = 0u32;
    loop {
        let t = lo + step * f64::from(k);
        if t > hi + 1e-9 || ticks.len() > MAX_TICKS {
            break;
        }
        ticks.push(t);
        k += 1;
    }
    close_with(ticks, hi)
}

/// `lo`, then powers of two from 1 up to `hi`, then `hi`.
pub fn powers_of_two(lo: f64, hi: f64) -> Vec<f64> {
    let mut ticks = vec![lo];
    let mut t = 1.0f64;
    while t <= hi && ticks.len() <= MAX_TICKS {
        if t != lo {
            ticks.push(t);
        }
        t *= 2.0;
    }
    close_with(ticks, hi)
}

/// `lo`, then multiples of `step` strictly below `hi`, then `hi`.
pub fn multiples(lo: f64, hi: f64, step: f64) -> Vec<f64> {
    let mut ticks = vec![lo];
    let mut t = step;
    while t < hi && ticks.len() <= MAX_TICKS {
        if t != lo {
            ticks.push(t);
        }
        t += step;
    }
    close_with(ticks, hi)
}

fn close_with(mut ticks: Vec<f64>, hi: f64) -> Vec<f64> {
    if ticks.last().is_none_or(|&last| (last - hi).abs() > 1e-9) {
        ticks.push(hi);
    }
    ticks
}

/// Ticks that get a gridline: all but the first and last.
pub fn interior(ticks: &[f64]) -> &[f64] {
    if ticks.len() <= 2 {
        &[]
    } else {
        &ticks[1..ticks.len() - 1]
    }
}
