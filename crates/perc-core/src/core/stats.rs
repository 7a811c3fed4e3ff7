/// Standard normal quantile for a two-sided 95% confidence interval.
pub const CONFIDENCE_95_Z: f64 = 1.96;

/// Arithmetic mean of `samples`, or NaN when `samples` is empty.
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return f64::NAN;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Bessel-corrected sample standard deviation of `samples`.
///
/// The estimate is undefined for fewer than two samples; NaN is returned in that case.
pub fn stddev(samples: &[f64]) -> f64 {
    if samples.len() < 2 {
        return f64::NAN;
    }
    let mu = mean(samples);
    let sum_sq: f64 = samples.iter().map(|&x| (x - mu) * (x - mu)).sum();
    (sum_sq / (samples.len() - 1) as f64).sqrt()
}

/// Endpoints of the 95% confidence interval for a mean estimated from `count` samples,
/// under the normal approximation.
///
/// # Return
///
/// `(lo, hi)` with `lo = mean - 1.96 * stddev / sqrt(count)` and the symmetric `hi`.
pub fn confidence_interval(mean: f64, stddev: f64, count: usize) -> (f64, f64) {
    let half_width = CONFIDENCE_95_Z * stddev / (count as f64).sqrt();
    (mean - half_width, mean + half_width)
}
