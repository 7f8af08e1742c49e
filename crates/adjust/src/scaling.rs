//! Mean- and variance-based scaling methods.
//!
//! Each method exists in a whole-series form and a seasonal form that
//! replaces global means and standard deviations with per-day-of-year
//! statistics from pooled 31-day windows, indexed by `t % 365`.

use debias_stats::{mean, safe_ratio, sd};
use debias_window::{doy_means, doy_sds, DAYS_PER_YEAR};

use crate::config::{AdjustmentSettings, Kind};
use crate::error::AdjustError;
use crate::wrap_window_err;

/// Linear scaling: correct the scenario by the mean bias between
/// reference and control.
pub(crate) fn linear_scaling(
    reference: &[f64],
    control: &[f64],
    scenario: &[f64],
    settings: &AdjustmentSettings,
) -> Result<Vec<f64>, AdjustError> {
    if settings.interval31_scaling() {
        let ref_means = doy_means(reference).map_err(wrap_window_err("reference"))?;
        let contr_means = doy_means(control).map_err(wrap_window_err("control"))?;

        let out = match settings.kind() {
            Kind::Additive => scenario
                .iter()
                .enumerate()
                .map(|(t, &v)| v + (ref_means[t % DAYS_PER_YEAR] - contr_means[t % DAYS_PER_YEAR]))
                .collect(),
            Kind::Multiplicative => {
                let factors: Vec<f64> = ref_means
                    .iter()
                    .zip(contr_means.iter())
                    .map(|(&r, &c)| safe_ratio(r, c, settings.max_scaling_factor()))
                    .collect();
                scenario
                    .iter()
                    .enumerate()
                    .map(|(t, &v)| v * factors[t % DAYS_PER_YEAR])
                    .collect()
            }
        };
        Ok(out)
    } else {
        let ref_mean = mean(reference);
        let contr_mean = mean(control);

        let out = match settings.kind() {
            Kind::Additive => {
                let offset = ref_mean - contr_mean;
                scenario.iter().map(|&v| v + offset).collect()
            }
            Kind::Multiplicative => {
                let factor = safe_ratio(ref_mean, contr_mean, settings.max_scaling_factor());
                scenario.iter().map(|&v| v * factor).collect()
            }
        };
        Ok(out)
    }
}

/// Variance scaling: linear scaling followed by a standard-deviation
/// correction of the zero-mean residuals. Additive only; the
/// multiplicative form is rejected during settings validation.
pub(crate) fn variance_scaling(
    reference: &[f64],
    control: &[f64],
    scenario: &[f64],
    settings: &AdjustmentSettings,
) -> Result<Vec<f64>, AdjustError> {
    // Step 1: additive linear scaling of control (against itself) and scenario.
    let ls_contr = linear_scaling(reference, control, control, settings)?;
    let ls_scen = linear_scaling(reference, control, scenario, settings)?;

    if settings.interval31_scaling() {
        let ls_contr_means = doy_means(&ls_contr).map_err(wrap_window_err("control"))?;
        let ls_scen_means = doy_means(&ls_scen).map_err(wrap_window_err("scenario"))?;

        // Step 2: zero-mean residuals per day-of-year.
        let vs1_contr: Vec<f64> = ls_contr
            .iter()
            .enumerate()
            .map(|(t, &v)| v - ls_contr_means[t % DAYS_PER_YEAR])
            .collect();
        let vs1_scen: Vec<f64> = ls_scen
            .iter()
            .enumerate()
            .map(|(t, &v)| v - ls_scen_means[t % DAYS_PER_YEAR])
            .collect();

        // Step 3: per-day standard-deviation ratio, clamped.
        let ref_sds = doy_sds(reference).map_err(wrap_window_err("reference"))?;
        let vs1_contr_sds = doy_sds(&vs1_contr).map_err(wrap_window_err("control"))?;
        let factors: Vec<f64> = ref_sds
            .iter()
            .zip(vs1_contr_sds.iter())
            .map(|(&r, &c)| safe_ratio(r, c, settings.max_scaling_factor()))
            .collect();

        // Step 4: rescale residuals and re-add the seasonal mean.
        Ok(vs1_scen
            .iter()
            .enumerate()
            .map(|(t, &v)| {
                v * factors[t % DAYS_PER_YEAR] + ls_scen_means[t % DAYS_PER_YEAR]
            })
            .collect())
    } else {
        let ls_contr_mean = mean(&ls_contr);
        let ls_scen_mean = mean(&ls_scen);

        let vs1_contr: Vec<f64> = ls_contr.iter().map(|&v| v - ls_contr_mean).collect();
        let vs1_scen: Vec<f64> = ls_scen.iter().map(|&v| v - ls_scen_mean).collect();

        let factor = safe_ratio(
            sd(reference),
            sd(&vs1_contr),
            settings.max_scaling_factor(),
        );

        Ok(vs1_scen
            .iter()
            .map(|&v| v * factor + ls_scen_mean)
            .collect())
    }
}

/// Delta method: apply the modeled change signal between scenario and
/// control to the observed reference. Requires equal-length reference and
/// scenario series (validated by the entry point).
pub(crate) fn delta_method(
    reference: &[f64],
    control: &[f64],
    scenario: &[f64],
    settings: &AdjustmentSettings,
) -> Result<Vec<f64>, AdjustError> {
    if settings.interval31_scaling() {
        let contr_means = doy_means(control).map_err(wrap_window_err("control"))?;
        let scen_means = doy_means(scenario).map_err(wrap_window_err("scenario"))?;

        let out = match settings.kind() {
            Kind::Additive => reference
                .iter()
                .enumerate()
                .map(|(t, &v)| v + (scen_means[t % DAYS_PER_YEAR] - contr_means[t % DAYS_PER_YEAR]))
                .collect(),
            Kind::Multiplicative => {
                let factors: Vec<f64> = scen_means
                    .iter()
                    .zip(contr_means.iter())
                    .map(|(&s, &c)| safe_ratio(s, c, settings.max_scaling_factor()))
                    .collect();
                reference
                    .iter()
                    .enumerate()
                    .map(|(t, &v)| v * factors[t % DAYS_PER_YEAR])
                    .collect()
            }
        };
        Ok(out)
    } else {
        let contr_mean = mean(control);
        let scen_mean = mean(scenario);

        let out = match settings.kind() {
            Kind::Additive => {
                let delta = scen_mean - contr_mean;
                reference.iter().map(|&v| v + delta).collect()
            }
            Kind::Multiplicative => {
                let factor = safe_ratio(scen_mean, contr_mean, settings.max_scaling_factor());
                reference.iter().map(|&v| v * factor).collect()
            }
        };
        Ok(out)
    }
}
