//! Statistical primitives for the debias bias-adjustment toolkit.
//!
//! Everything in this crate operates on plain `&[f64]` slices so the
//! adjustment methods can compose these helpers freely over whole series
//! and over pooled day-of-year windows alike.
//!
//! The empirical distribution helpers ([`get_pdf`], [`get_cdf`],
//! [`interpolate`]) have precisely defined boundary behavior that the
//! quantile-mapping methods depend on; see their docs before changing it.

mod error;

pub mod distribution;
pub mod factor;
pub mod interpolate;
pub mod metrics;

pub use distribution::{get_cdf, get_pdf};
pub use error::StatsError;
pub use factor::{clamp_scaling_factor, safe_ratio};
pub use interpolate::interpolate;
pub use metrics::{correlation_coefficient, index_of_agreement, mbe, rmse};

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Population variance: the mean of squared deviations from the mean.
///
/// Note the N denominator. The bias-adjustment formulas are defined in
/// terms of this variance, not the N-1 sample estimator.
pub fn variance(data: &[f64]) -> f64 {
    let m = mean(data);
    let sq_devs: Vec<f64> = data.iter().map(|&x| (x - m) * (x - m)).collect();
    mean(&sq_devs)
}

/// Population standard deviation, `sqrt(variance)`.
pub fn sd(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Median by sorting a copy and taking the element at index `len / 2`.
///
/// For even-length input this is the upper of the two middle elements;
/// no interpolation is performed.
///
/// # Panics
///
/// Panics if `data` is empty.
pub fn median(data: &[f64]) -> f64 {
    assert!(!data.is_empty(), "median: input must not be empty");
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    sorted[sorted.len() / 2]
}
