//! Goodness-of-fit metrics between a reference and a prediction series.
//!
//! All metrics require equal-length inputs and return
//! [`StatsError::LengthMismatch`] otherwise.

use crate::{mean, StatsError};

fn check_lengths(x: &[f64], y: &[f64]) -> Result<(), StatsError> {
    if x.len() != y.len() {
        return Err(StatsError::LengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    Ok(())
}

/// Pearson correlation coefficient between `x` (reference) and `y` (prediction).
pub fn correlation_coefficient(x: &[f64], y: &[f64]) -> Result<f64, StatsError> {
    check_lengths(x, y)?;

    let n = x.len() as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    let mut sum_yy = 0.0;

    for (&xi, &yi) in x.iter().zip(y.iter()) {
        sum_x += xi;
        sum_y += yi;
        sum_xy += xi * yi;
        sum_xx += xi * xi;
        sum_yy += yi * yi;
    }

    let numerator = n * sum_xy - sum_x * sum_y;
    let denominator = ((n * sum_xx - sum_x * sum_x) * (n * sum_yy - sum_y * sum_y)).sqrt();
    Ok(numerator / denominator)
}

/// Root mean square error between `x` (reference) and `y` (prediction).
pub fn rmse(x: &[f64], y: &[f64]) -> Result<f64, StatsError> {
    check_lengths(x, y)?;

    let n = x.len() as f64;
    let sum_sq: f64 = x
        .iter()
        .zip(y.iter())
        .map(|(&xi, &yi)| (yi - xi) * (yi - xi))
        .sum();
    Ok((sum_sq / n).sqrt())
}

/// Mean bias error between `x` (reference) and `y` (prediction).
///
/// Positive values mean the prediction is biased high relative to the
/// reference.
pub fn mbe(x: &[f64], y: &[f64]) -> Result<f64, StatsError> {
    check_lengths(x, y)?;

    let sum: f64 = x.iter().zip(y.iter()).map(|(&xi, &yi)| yi - xi).sum();
    Ok(sum / x.len() as f64)
}

/// Willmott's index of agreement between `x` (reference) and `y` (prediction).
pub fn index_of_agreement(x: &[f64], y: &[f64]) -> Result<f64, StatsError> {
    check_lengths(x, y)?;

    let m = mean(x);
    let mut upper = 0.0;
    let mut lower = 0.0;
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        upper += (xi - yi) * (xi - yi);
        let dev = (yi - m).abs() + (xi - m).abs();
        lower += dev * dev;
    }
    Ok(1.0 - upper / lower)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn correlation_perfect_positive() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 4.0, 6.0, 8.0, 10.0];
        assert_relative_eq!(
            correlation_coefficient(&x, &y).unwrap(),
            1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn correlation_perfect_negative() {
        let x = [1.0, 2.0, 3.0];
        let y = [3.0, 2.0, 1.0];
        assert_relative_eq!(
            correlation_coefficient(&x, &y).unwrap(),
            -1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn correlation_length_mismatch() {
        assert_eq!(
            correlation_coefficient(&[1.0, 2.0], &[1.0]).unwrap_err(),
            StatsError::LengthMismatch { x_len: 2, y_len: 1 }
        );
    }

    #[test]
    fn rmse_known_value() {
        let x = [1.0, 2.0, 3.0];
        let y = [2.0, 3.0, 4.0];
        assert_relative_eq!(rmse(&x, &y).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn rmse_identical_is_zero() {
        let x = [1.5, 2.5, 3.5];
        assert_relative_eq!(rmse(&x, &x).unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn rmse_length_mismatch() {
        assert!(rmse(&[1.0], &[1.0, 2.0]).is_err());
    }

    #[test]
    fn mbe_constant_offset() {
        let x = [1.0, 2.0, 3.0];
        let y = [3.0, 4.0, 5.0];
        assert_relative_eq!(mbe(&x, &y).unwrap(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn mbe_sign_convention() {
        // prediction biased low => negative
        let x = [5.0, 5.0];
        let y = [4.0, 4.0];
        assert_relative_eq!(mbe(&x, &y).unwrap(), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn mbe_length_mismatch() {
        assert!(mbe(&[1.0, 2.0, 3.0], &[1.0]).is_err());
    }

    #[test]
    fn ioa_identical_is_one() {
        let x = [1.0, 2.0, 3.0, 4.0];
        assert_relative_eq!(index_of_agreement(&x, &x).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn ioa_degrades_with_error() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [1.5, 2.5, 2.5, 3.5];
        let d = index_of_agreement(&x, &y).unwrap();
        assert!(d < 1.0);
        assert!(d > 0.0);
    }

    #[test]
    fn ioa_length_mismatch() {
        assert!(index_of_agreement(&[1.0], &[1.0, 2.0]).is_err());
    }
}
