//! Summary statistics for per-call timing series.

/// Arithmetic mean. NaN for an empty slice.
pub fn mean(samples: &[f64]) -> f64 {
    let n = samples.len() as f64;
    samples.iter().sum::<f64>() / n
}

/// Sample standard deviation via the single-pass sum/sum-of-squares form:
/// sqrt((Σx² − n·mean²) / (n − 1)).
///
/// This form loses precision for large n or large-magnitude values
/// compared to the two-pass mean-centered form; it is adequate for a few
/// hundred millisecond-scale samples. Returns NaN for fewer than two
/// samples (the divisor is zero).
pub fn std_dev(samples: &[f64]) -> f64 {
    let n = samples.len() as f64;
    let (sum, sum2) = samples
        .iter()
        .fold((0.0, 0.0), |(sum, sum2), &x| (sum + x, sum2 + x * x));
    let mean = sum / n;
    ((sum2 - n * mean * mean) / (n - 1.0)).sqrt()
}
