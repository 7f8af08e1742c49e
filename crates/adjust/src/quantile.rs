//! Empirical quantile mapping methods.

use debias_stats::{get_cdf, interpolate, safe_ratio};

use crate::config::{AdjustmentSettings, Kind};
use crate::error::AdjustError;

/// Edge policy for the shared bin vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinPolicy {
    /// Edges span `[min(a, b), max(a, b)]`.
    Regular,
    /// Edges span `[0, max(a, b)]`, for non-negative ratio variables.
    Bounded,
}

fn min_of(series: &[f64]) -> f64 {
    series.iter().copied().fold(f64::INFINITY, f64::min)
}

fn max_of(series: &[f64]) -> f64 {
    series.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Builds the ascending bin-edge vector spanning the combined range of
/// `a` and `b` with `n_quantiles` steps.
///
/// Edges are accumulated from the lower bound until the upper bound is
/// reached, so the final edge lands at or just above the maximum.
pub(crate) fn build_xbins(
    a: &[f64],
    b: &[f64],
    n_quantiles: usize,
    policy: BinPolicy,
) -> Result<Vec<f64>, AdjustError> {
    let global_max = max_of(a).max(max_of(b));

    let (start, wide) = match policy {
        BinPolicy::Regular => {
            let global_min = min_of(a).min(min_of(b));
            (
                global_min,
                (global_max - global_min).abs() / n_quantiles as f64,
            )
        }
        BinPolicy::Bounded => (0.0, global_max / n_quantiles as f64),
    };

    let mut bins = vec![start];
    if wide > 0.0 {
        while *bins.last().unwrap_or(&start) < global_max {
            bins.push(bins[bins.len() - 1] + wide);
        }
    }

    if bins.len() < 2 {
        return Err(AdjustError::DegenerateBins { max: global_max });
    }
    Ok(bins)
}

/// Empirical CDF of `arr` over `bins` as interpolation levels.
fn cdf_levels(arr: &[f64], bins: &[f64]) -> Vec<f64> {
    get_cdf(arr, bins).into_iter().map(|c| c as f64).collect()
}

/// Quantile mapping: map each scenario value through the control CDF and
/// back through the inverse reference CDF.
pub(crate) fn quantile_mapping(
    reference: &[f64],
    control: &[f64],
    scenario: &[f64],
    settings: &AdjustmentSettings,
) -> Result<Vec<f64>, AdjustError> {
    match settings.kind() {
        Kind::Additive => {
            let bins = build_xbins(reference, control, settings.n_quantiles(), BinPolicy::Regular)?;
            let ref_cdf = cdf_levels(reference, &bins);
            let contr_cdf = cdf_levels(control, &bins);

            Ok(scenario
                .iter()
                .map(|&s| {
                    let epsilon = interpolate(&bins, &contr_cdf, s, false);
                    interpolate(&ref_cdf, &bins, epsilon, false)
                })
                .collect())
        }
        Kind::Multiplicative => {
            let bins = build_xbins(reference, control, settings.n_quantiles(), BinPolicy::Bounded)?;
            let ref_cdf = cdf_levels(reference, &bins);
            let contr_cdf = cdf_levels(control, &bins);

            // extrapolation past the bin range is allowed here, but the
            // variable is non-negative, so both lookups are floored at 0
            Ok(scenario
                .iter()
                .map(|&s| {
                    let epsilon = interpolate(&bins, &contr_cdf, s, true).max(0.0);
                    interpolate(&ref_cdf, &bins, epsilon, true).max(0.0)
                })
                .collect())
        }
    }
}

/// Quantile delta mapping: quantile mapping that additionally preserves
/// the scenario's own distributional change signal.
pub(crate) fn quantile_delta_mapping(
    reference: &[f64],
    control: &[f64],
    scenario: &[f64],
    settings: &AdjustmentSettings,
) -> Result<Vec<f64>, AdjustError> {
    let policy = match settings.kind() {
        Kind::Additive => BinPolicy::Regular,
        Kind::Multiplicative => BinPolicy::Bounded,
    };
    let bins = build_xbins(reference, control, settings.n_quantiles(), policy)?;

    let ref_cdf = cdf_levels(reference, &bins);
    let contr_cdf = cdf_levels(control, &bins);
    let scen_cdf = cdf_levels(scenario, &bins);

    Ok(scenario
        .iter()
        .map(|&s| {
            // the scenario value's position in its own distribution
            let epsilon = interpolate(&bins, &scen_cdf, s, false);
            // mapped through the inverse reference CDF
            let qdm1 = interpolate(&ref_cdf, &bins, epsilon, false);
            // the control's inverse CDF at the same position
            let contr_inv = interpolate(&contr_cdf, &bins, epsilon, false);

            match settings.kind() {
                Kind::Additive => qdm1 + s - contr_inv,
                Kind::Multiplicative => {
                    qdm1 * safe_ratio(s, contr_inv, settings.max_scaling_factor())
                }
            }
        })
        .collect())
}
