//! Skip-missing aggregates. NaN entries are ignored; infinities are not.

pub fn count_present(values: &[f64]) -> usize {
    values.iter().filter(|v| !v.is_nan()).count()
}

/// NaN when no value is present.
pub fn mean_skipna(values: &[f64]) -> f64 {
    let mut sum = 0.0f64;
    let mut n = 0usize;
    for &v in values {
        if v.is_nan() {
            continue;
        }
        sum += v;
        n += 1;
    }
    if n == 0 { f64::NAN } else { sum / n as f64 }
}

/// Bessel-corrected (N-1) standard deviation; NaN with fewer than two values.
pub fn sample_std_skipna(values: &[f64]) -> f64 {
    let n = count_present(values);
    if n < 2 {
        return f64::NAN;
    }
    let mean = mean_skipna(values);
    let mut ss = 0.0f64;
    for &v in values {
        if v.is_nan() {
            continue;
        }
        let d = v - mean;
        ss += d * d;
    }
    (ss / (n - 1) as f64).sqrt()
}
