//! Integration tests for the grid scheduler.

use debias_adjust::{AdjustmentSettings, Kind, Method};
use debias_grid::{adjust_cell, adjust_grid, GridError, InMemorySource, Role, TimeSeriesSource};

const N_TIME: usize = 12;
const N_LAT: usize = 3;
const N_LON: usize = 4;

fn cell_series(lat: usize, lon: usize, offset: f64) -> Vec<f64> {
    (0..N_TIME)
        .map(|t| offset + (lat * N_LON + lon) as f64 + (t as f64 * 0.3).sin())
        .collect()
}

/// A grid where the control runs exactly 2.0 warm against the reference
/// in every cell.
fn biased_source() -> InMemorySource {
    let build = |offset: f64| -> Vec<Vec<Vec<f64>>> {
        (0..N_LAT)
            .map(|lat| {
                (0..N_LON)
                    .map(|lon| cell_series(lat, lon, offset))
                    .collect()
            })
            .collect()
    };
    InMemorySource::new(build(10.0), build(12.0), build(12.0))
}

fn whole_series_settings() -> AdjustmentSettings {
    AdjustmentSettings::new(Method::LinearScaling, Kind::Additive).with_interval31_scaling(false)
}

#[test]
fn grid_run_matches_per_cell_adjustment() {
    let source = biased_source();
    let settings = whole_series_settings();

    let cube = adjust_grid(&source, &settings, 2, |_, _| {}).unwrap();
    assert_eq!(cube.shape(), &[N_TIME, N_LAT, N_LON]);

    for lon in 0..N_LON {
        let reference = source.column_series(Role::Reference, lon).unwrap();
        let control = source.column_series(Role::Control, lon).unwrap();
        let scenario = source.column_series(Role::Scenario, lon).unwrap();
        for lat in 0..N_LAT {
            let expected =
                adjust_cell(&reference[lat], &control[lat], &scenario[lat], &settings).unwrap();
            for (t, &want) in expected.iter().enumerate() {
                assert_eq!(cube[[t, lat, lon]], want, "cell ({lat}, {lon}) step {t}");
            }
        }
    }
}

#[test]
fn grid_run_is_independent_of_worker_count() {
    let source = biased_source();
    let settings = whole_series_settings();

    let serial = adjust_grid(&source, &settings, 1, |_, _| {}).unwrap();
    let parallel = adjust_grid(&source, &settings, 4, |_, _| {}).unwrap();
    assert_eq!(serial, parallel);
}

#[test]
fn progress_reports_once_per_column_in_order() {
    let source = biased_source();
    let settings = whole_series_settings();

    let mut reports = Vec::new();
    adjust_grid(&source, &settings, 2, |done, total| {
        reports.push((done, total));
    })
    .unwrap();

    let expected: Vec<(usize, usize)> = (1..=N_LON).map(|done| (done, N_LON)).collect();
    assert_eq!(reports, expected);
}

#[test]
fn failing_cell_aborts_with_its_coordinates() {
    // one constant cell makes quantile mapping's bins degenerate
    let mut reference = vec![vec![vec![0.0; 50]; N_LON]; N_LAT];
    for (lat, row) in reference.iter_mut().enumerate() {
        for (lon, series) in row.iter_mut().enumerate() {
            if (lat, lon) != (1, 2) {
                *series = (0..50).map(|t| (lat + lon) as f64 + t as f64 * 0.1).collect();
            }
        }
    }
    let source = InMemorySource::new(reference.clone(), reference.clone(), reference);

    let settings = AdjustmentSettings::new(Method::QuantileMapping, Kind::Additive)
        .with_interval31_scaling(false);
    let err = adjust_grid(&source, &settings, 2, |_, _| {}).unwrap_err();
    assert!(
        matches!(err, GridError::Cell { lat: 1, lon: 2, .. }),
        "unexpected error: {err}"
    );
}

#[test]
fn rejects_zero_jobs() {
    let source = biased_source();
    let err = adjust_grid(&source, &whole_series_settings(), 0, |_, _| {}).unwrap_err();
    assert!(matches!(err, GridError::InvalidJobs { n_jobs: 0 }));
}

#[test]
fn rejects_mismatched_spatial_extents() {
    let reference = vec![vec![vec![1.0; N_TIME]; N_LON]; N_LAT];
    let smaller = vec![vec![vec![1.0; N_TIME]; N_LON]; N_LAT - 1];
    let source = InMemorySource::new(reference.clone(), smaller, reference);

    let err = adjust_grid(&source, &whole_series_settings(), 1, |_, _| {}).unwrap_err();
    assert!(matches!(err, GridError::ExtentsMismatch { dim: "lat", .. }));
}

#[test]
fn rejects_invalid_settings_before_touching_the_source() {
    let source = biased_source();
    let settings = AdjustmentSettings::new(Method::VarianceScaling, Kind::Multiplicative)
        .with_interval31_scaling(false);
    let err = adjust_grid(&source, &settings, 1, |_, _| {}).unwrap_err();
    assert!(matches!(err, GridError::Adjust(_)));
}

#[test]
fn adjust_cell_corrects_point_series() {
    let out = adjust_cell(
        &[10.0, 10.0, 10.0],
        &[8.0, 8.0, 8.0],
        &[5.0, 6.0],
        &whole_series_settings(),
    )
    .unwrap();
    assert_eq!(out, vec![7.0, 8.0]);
}
