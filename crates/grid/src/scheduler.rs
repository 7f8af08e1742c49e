//! Bounded-parallel execution of bias adjustment over a lat/lon grid.

use debias_adjust::AdjustmentSettings;
use ndarray::Array3;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::error::GridError;
use crate::source::{GridExtents, Role, TimeSeriesSource};

/// Adjusts a single cell's scenario series.
///
/// Thin wrapper over [`debias_adjust::adjust`] carrying the grid error
/// type. Point (1-D) runs call it directly and [`adjust_grid`] routes
/// every cell of the grid through it.
pub fn adjust_cell(
    reference: &[f64],
    control: &[f64],
    scenario: &[f64],
    settings: &AdjustmentSettings,
) -> Result<Vec<f64>, GridError> {
    Ok(debias_adjust::adjust(reference, control, scenario, settings)?)
}

/// Tags a cell failure with its grid coordinates.
fn at_cell(lat: usize, lon: usize) -> impl Fn(GridError) -> GridError {
    move |e| match e {
        GridError::Adjust(source) => GridError::Cell { lat, lon, source },
        other => other,
    }
}

/// Checks that the three inputs agree on their spatial dimensions and
/// returns the scenario extents. Differing time lengths are allowed for
/// every method except the delta method, which catches its own mismatch
/// per cell, so only a warning is logged here.
fn validate_extents<S: TimeSeriesSource>(source: &S) -> Result<GridExtents, GridError> {
    let reference = source.extents(Role::Reference);
    let control = source.extents(Role::Control);
    let scenario = source.extents(Role::Scenario);

    if reference.n_lat != control.n_lat || reference.n_lat != scenario.n_lat {
        return Err(GridError::ExtentsMismatch {
            dim: "lat",
            lengths: [reference.n_lat, control.n_lat, scenario.n_lat],
        });
    }
    if reference.n_lon != control.n_lon || reference.n_lon != scenario.n_lon {
        return Err(GridError::ExtentsMismatch {
            dim: "lon",
            lengths: [reference.n_lon, control.n_lon, scenario.n_lon],
        });
    }
    if reference.n_time != scenario.n_time || control.n_time != scenario.n_time {
        warn!(
            reference = reference.n_time,
            control = control.n_time,
            scenario = scenario.n_time,
            "input datasets differ in time dimension length"
        );
    }

    Ok(scenario)
}

/// Runs the configured adjustment over every cell of a lat/lon grid.
///
/// Columns are processed one longitude at a time: the three input
/// columns are fetched from `source` on the calling thread, the cells of
/// the column are adjusted in parallel on a pool of `n_jobs` workers,
/// and the results land in the output cube before the next column is
/// fetched. `on_progress` is invoked once per finished column with
/// `(columns_done, n_lon)`.
///
/// The first failing cell aborts the run. Columns finished before the
/// failure are not rolled back, but no partial output is returned.
///
/// # Errors
///
/// Returns [`GridError`] for invalid settings, mismatched spatial
/// extents, `n_jobs == 0`, a pool that cannot be built, a failing
/// source, or a failing cell adjustment.
pub fn adjust_grid<S, F>(
    source: &S,
    settings: &AdjustmentSettings,
    n_jobs: usize,
    mut on_progress: F,
) -> Result<Array3<f64>, GridError>
where
    S: TimeSeriesSource,
    F: FnMut(usize, usize),
{
    settings.validate().map_err(GridError::Adjust)?;
    if n_jobs == 0 {
        return Err(GridError::InvalidJobs { n_jobs });
    }
    let extents = validate_extents(source)?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(n_jobs)
        .build()?;

    debug!(
        n_lat = extents.n_lat,
        n_lon = extents.n_lon,
        n_time = extents.n_time,
        n_jobs,
        "starting grid run"
    );

    let mut cube = Array3::<f64>::zeros((extents.n_time, extents.n_lat, extents.n_lon));

    for lon in 0..extents.n_lon {
        let reference = source.column_series(Role::Reference, lon)?;
        let control = source.column_series(Role::Control, lon)?;
        let scenario = source.column_series(Role::Scenario, lon)?;

        let column: Vec<Vec<f64>> = pool.install(|| {
            (0..extents.n_lat)
                .into_par_iter()
                .map(|lat| {
                    adjust_cell(&reference[lat], &control[lat], &scenario[lat], settings)
                        .map_err(at_cell(lat, lon))
                })
                .collect::<Result<Vec<_>, _>>()
        })?;

        for (lat, series) in column.iter().enumerate() {
            for (t, &value) in series.iter().enumerate() {
                cube[[t, lat, lon]] = value;
            }
        }

        debug!(lon = lon + 1, n_lon = extents.n_lon, "column adjusted");
        on_progress(lon + 1, extents.n_lon);
    }

    Ok(cube)
}
