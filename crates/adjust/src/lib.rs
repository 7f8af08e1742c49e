//! Bias-adjustment methods for single-cell climate time series.
//!
//! Each adjustment consumes three aligned series for one grid cell:
//!
//! 1. **reference** — observed data over the control period
//! 2. **control** — modeled data over the control period
//! 3. **scenario** — modeled data to be corrected
//!
//! and produces a corrected scenario series. Five methods are available,
//! selected through [`AdjustmentSettings`]; see [`Method`] for the list.
//!
//! # Quick Start
//!
//! ```
//! use debias_adjust::{adjust, AdjustmentSettings, Kind, Method};
//!
//! let reference = vec![10.0, 10.0, 10.0];
//! let control = vec![8.0, 8.0, 8.0];
//! let scenario = vec![5.0, 6.0, 7.0];
//!
//! let settings = AdjustmentSettings::new(Method::LinearScaling, Kind::Additive)
//!     .with_interval31_scaling(false);
//! let corrected = adjust(&reference, &control, &scenario, &settings).unwrap();
//! assert_eq!(corrected, vec![7.0, 8.0, 9.0]);
//! ```

mod config;
mod error;
pub(crate) mod quantile;
pub(crate) mod scaling;

pub use config::{AdjustmentSettings, Kind, Method};
pub use error::AdjustError;

use debias_window::WindowError;
use tracing::debug;

pub(crate) fn wrap_window_err(role: &'static str) -> impl Fn(WindowError) -> AdjustError {
    move |source| AdjustError::NotWholeYears { role, source }
}

/// Validates the inputs to [`adjust`] against the configured method.
fn validate_inputs(
    reference: &[f64],
    control: &[f64],
    scenario: &[f64],
    settings: &AdjustmentSettings,
) -> Result<(), AdjustError> {
    // 1. No input series may be empty.
    for (role, series) in [
        ("reference", reference),
        ("control", control),
        ("scenario", scenario),
    ] {
        if series.is_empty() {
            return Err(AdjustError::EmptyData { role });
        }
    }

    // 2. The delta method corrects the reference element-wise with the
    //    modeled change signal, so both periods must line up.
    if settings.method() == Method::DeltaMethod && reference.len() != scenario.len() {
        return Err(AdjustError::LengthMismatch {
            reference_len: reference.len(),
            scenario_len: scenario.len(),
        });
    }

    // 3. With 31-day interval scaling on, every input must span whole
    //    no-leap years. Enforced for all methods, even the quantile ones
    //    that never pool, so switching methods cannot change which inputs
    //    are accepted.
    if settings.interval31_scaling() {
        for (role, series) in [
            ("reference", reference),
            ("control", control),
            ("scenario", scenario),
        ] {
            if series.len() % debias_window::DAYS_PER_YEAR != 0 {
                return Err(AdjustError::NotWholeYears {
                    role,
                    source: WindowError::NotWholeYears { len: series.len() },
                });
            }
        }
    }

    Ok(())
}

/// Adjusts one grid cell's scenario series against reference and control.
///
/// This is the single dispatch point for all five methods: settings are
/// validated first, then the selected method runs to completion. The
/// output has the same length as `scenario` (the delta method requires
/// `reference` to match that length, so its output does too).
///
/// # Errors
///
/// Returns [`AdjustError`] for unsupported method/kind combinations,
/// empty inputs, a delta-method length mismatch, or partial years under
/// 31-day interval scaling. Numeric edge cases (zero denominators,
/// out-of-range interpolation) never fail; they are clamped.
pub fn adjust(
    reference: &[f64],
    control: &[f64],
    scenario: &[f64],
    settings: &AdjustmentSettings,
) -> Result<Vec<f64>, AdjustError> {
    settings.validate()?;
    validate_inputs(reference, control, scenario, settings)?;

    debug!(
        method = %settings.method(),
        kind = %settings.kind(),
        n_time = scenario.len(),
        "adjusting cell"
    );

    match settings.method() {
        Method::LinearScaling => scaling::linear_scaling(reference, control, scenario, settings),
        Method::VarianceScaling => {
            scaling::variance_scaling(reference, control, scenario, settings)
        }
        Method::DeltaMethod => scaling::delta_method(reference, control, scenario, settings),
        Method::QuantileMapping => {
            quantile::quantile_mapping(reference, control, scenario, settings)
        }
        Method::QuantileDeltaMapping => {
            quantile::quantile_delta_mapping(reference, control, scenario, settings)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(n: usize, offset: f64) -> Vec<f64> {
        (0..n).map(|i| offset + (i as f64 * 0.1).sin()).collect()
    }

    #[test]
    fn rejects_empty_reference() {
        let s = AdjustmentSettings::new(Method::LinearScaling, Kind::Additive)
            .with_interval31_scaling(false);
        let err = adjust(&[], &[1.0], &[1.0], &s).unwrap_err();
        assert_eq!(err, AdjustError::EmptyData { role: "reference" });
    }

    #[test]
    fn rejects_delta_method_length_mismatch() {
        let s = AdjustmentSettings::new(Method::DeltaMethod, Kind::Additive)
            .with_interval31_scaling(false);
        let err = adjust(&series(10, 0.0), &series(10, 0.0), &series(20, 0.0), &s).unwrap_err();
        assert_eq!(
            err,
            AdjustError::LengthMismatch {
                reference_len: 10,
                scenario_len: 20,
            }
        );
    }

    #[test]
    fn rejects_partial_years_under_seasonal_scaling() {
        let s = AdjustmentSettings::new(Method::LinearScaling, Kind::Additive);
        let err = adjust(&series(100, 0.0), &series(100, 0.0), &series(100, 0.0), &s).unwrap_err();
        assert!(matches!(
            err,
            AdjustError::NotWholeYears {
                role: "reference",
                ..
            }
        ));
    }

    #[test]
    fn quantile_methods_reject_partial_years_when_grouped() {
        // quantile mapping never pools, but the whole-years requirement
        // still holds whenever 31-day interval scaling is on
        let s = AdjustmentSettings::new(Method::QuantileMapping, Kind::Additive);
        let err = adjust(&series(100, 0.0), &series(100, 0.5), &series(100, 0.5), &s).unwrap_err();
        assert!(matches!(err, AdjustError::NotWholeYears { .. }));
    }

    #[test]
    fn quantile_methods_accept_partial_years_when_ungrouped() {
        let s = AdjustmentSettings::new(Method::QuantileMapping, Kind::Additive)
            .with_interval31_scaling(false);
        let out = adjust(&series(100, 0.0), &series(100, 0.5), &series(100, 0.5), &s);
        assert!(out.is_ok());
    }

    #[test]
    fn rejects_invalid_settings_before_computation() {
        let s = AdjustmentSettings::new(Method::VarianceScaling, Kind::Multiplicative)
            .with_interval31_scaling(false);
        let err = adjust(&series(10, 0.0), &series(10, 0.0), &series(10, 0.0), &s).unwrap_err();
        assert!(matches!(err, AdjustError::InvalidConfig { .. }));
    }

    #[test]
    fn output_length_matches_scenario() {
        for method in [
            Method::LinearScaling,
            Method::VarianceScaling,
            Method::QuantileMapping,
            Method::QuantileDeltaMapping,
        ] {
            let s = AdjustmentSettings::new(method, Kind::Additive).with_interval31_scaling(false);
            let out = adjust(&series(50, 1.0), &series(40, 1.5), &series(30, 1.5), &s).unwrap();
            assert_eq!(out.len(), 30, "method {method} output length");
        }
    }
}
