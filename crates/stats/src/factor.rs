//! Scaling-factor clamping for multiplicative adjustments.
//!
//! Ratios of means or standard deviations blow up when the denominator
//! approaches zero. The adjustment methods never treat that as an error;
//! they cap the factor instead.

/// Returns `factor` unchanged unless its magnitude exceeds `|max_factor|`,
/// in which case `±|max_factor|` is returned with the sign of `factor`.
pub fn clamp_scaling_factor(factor: f64, max_factor: f64) -> f64 {
    let cap = max_factor.abs();
    if factor > cap {
        cap
    } else if factor < -cap {
        -cap
    } else {
        factor
    }
}

/// `numerator / denominator`, clamped via [`clamp_scaling_factor`].
///
/// A zero denominator produces an infinite ratio which the clamp then
/// caps, so no division error can escape.
pub fn safe_ratio(numerator: f64, denominator: f64, max_factor: f64) -> f64 {
    clamp_scaling_factor(numerator / denominator, max_factor)
}
