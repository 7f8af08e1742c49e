//! An in-memory [`TimeSeriesSource`] for tests and synthetic runs.

use crate::error::GridError;
use crate::source::{GridExtents, Role, TimeSeriesSource};

/// Holds all three input datasets as owned vectors.
///
/// Each dataset is indexed `[lat][lon]` and holds one time series per
/// cell. All cells of a dataset must have equal length.
#[derive(Debug, Clone)]
pub struct InMemorySource {
    reference: Vec<Vec<Vec<f64>>>,
    control: Vec<Vec<Vec<f64>>>,
    scenario: Vec<Vec<Vec<f64>>>,
}

impl InMemorySource {
    /// Builds a source from three `[lat][lon]` grids of cell series.
    pub fn new(
        reference: Vec<Vec<Vec<f64>>>,
        control: Vec<Vec<Vec<f64>>>,
        scenario: Vec<Vec<Vec<f64>>>,
    ) -> Self {
        InMemorySource {
            reference,
            control,
            scenario,
        }
    }

    /// Builds a 1x1 source from three point series.
    pub fn from_cell(reference: Vec<f64>, control: Vec<f64>, scenario: Vec<f64>) -> Self {
        InMemorySource {
            reference: vec![vec![reference]],
            control: vec![vec![control]],
            scenario: vec![vec![scenario]],
        }
    }

    fn grid(&self, role: Role) -> &Vec<Vec<Vec<f64>>> {
        match role {
            Role::Reference => &self.reference,
            Role::Control => &self.control,
            Role::Scenario => &self.scenario,
        }
    }
}

impl TimeSeriesSource for InMemorySource {
    fn extents(&self, role: Role) -> GridExtents {
        let grid = self.grid(role);
        let n_lat = grid.len();
        let n_lon = grid.first().map_or(0, |row| row.len());
        let n_time = grid
            .first()
            .and_then(|row| row.first())
            .map_or(0, |series| series.len());
        GridExtents {
            n_time,
            n_lat,
            n_lon,
        }
    }

    fn cell_series(&self, role: Role) -> Result<Vec<f64>, GridError> {
        Ok(self.grid(role)[0][0].clone())
    }

    fn column_series(&self, role: Role, lon: usize) -> Result<Vec<Vec<f64>>, GridError> {
        Ok(self
            .grid(role)
            .iter()
            .map(|row| row[lon].clone())
            .collect())
    }
}
