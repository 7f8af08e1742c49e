//! Abstract interfaces between the grid scheduler and its data backends.

use ndarray::Array3;

use crate::error::GridError;

/// The role a dataset plays in an adjustment run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Observed data over the control period.
    Reference,
    /// Modeled data over the control period.
    Control,
    /// Modeled data to be corrected.
    Scenario,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Reference => write!(f, "reference"),
            Role::Control => write!(f, "control"),
            Role::Scenario => write!(f, "scenario"),
        }
    }
}

/// Dimension lengths of one gridded dataset.
///
/// A point (1-D) dataset reports `n_lat == 1` and `n_lon == 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridExtents {
    /// Number of time steps.
    pub n_time: usize,
    /// Number of latitude cells.
    pub n_lat: usize,
    /// Number of longitude cells.
    pub n_lon: usize,
}

/// Read access to the three input datasets of an adjustment run.
///
/// Implementations must return series in time order and columns in
/// latitude order. The scheduler calls [`column_series`] from a single
/// thread, one longitude at a time, so implementations may keep open
/// file handles without internal locking.
///
/// [`column_series`]: TimeSeriesSource::column_series
pub trait TimeSeriesSource {
    /// Dimension lengths of the dataset serving `role`.
    fn extents(&self, role: Role) -> GridExtents;

    /// The single time series of a point (1-D) dataset.
    fn cell_series(&self, role: Role) -> Result<Vec<f64>, GridError>;

    /// All cell series of one longitude column, indexed by latitude.
    fn column_series(&self, role: Role, lon: usize) -> Result<Vec<Vec<f64>>, GridError>;
}

/// Write access for corrected output.
pub trait TimeSeriesSink {
    /// Writes the corrected series of a point (1-D) run.
    fn write_series(&mut self, series: &[f64]) -> Result<(), GridError>;

    /// Writes the full corrected cube, indexed `[time, lat, lon]`.
    fn write_cube(&mut self, cube: &Array3<f64>) -> Result<(), GridError>;
}
