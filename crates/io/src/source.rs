//! A file-backed [`TimeSeriesSource`] over three NetCDF inputs.

use std::path::Path;

use debias_grid::{GridError, GridExtents, Role, TimeSeriesSource};
use tracing::debug;

use crate::dataset::NcDataset;
use crate::error::IoError;

/// Serves reference, control, and scenario data from three NetCDF files
/// sharing one variable name.
pub struct NcSource {
    reference: NcDataset,
    control: NcDataset,
    scenario: NcDataset,
}

impl NcSource {
    /// Opens the three input files.
    ///
    /// With `one_dim` the data variable in each file must be a plain time
    /// series; otherwise it must span `(time, lat, lon)`.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`] if any file is missing or unreadable, or the
    /// variable is absent or wrongly shaped in any of them.
    pub fn open(
        reference: &Path,
        control: &Path,
        scenario: &Path,
        variable: &str,
        one_dim: bool,
    ) -> Result<Self, IoError> {
        let reference = NcDataset::open(reference, variable, one_dim)?;
        let control = NcDataset::open(control, variable, one_dim)?;
        let scenario = NcDataset::open(scenario, variable, one_dim)?;

        debug!(
            variable,
            reference = %reference.path().display(),
            control = %control.path().display(),
            scenario = %scenario.path().display(),
            "opened input datasets"
        );

        Ok(NcSource {
            reference,
            control,
            scenario,
        })
    }

    fn dataset(&self, role: Role) -> &NcDataset {
        match role {
            Role::Reference => &self.reference,
            Role::Control => &self.control,
            Role::Scenario => &self.scenario,
        }
    }

    /// The scenario dataset, used as the template for output files.
    pub fn scenario(&self) -> &NcDataset {
        &self.scenario
    }
}

impl TimeSeriesSource for NcSource {
    fn extents(&self, role: Role) -> GridExtents {
        self.dataset(role).extents()
    }

    fn cell_series(&self, role: Role) -> Result<Vec<f64>, GridError> {
        Ok(self.dataset(role).timeseries()?)
    }

    fn column_series(&self, role: Role, lon: usize) -> Result<Vec<Vec<f64>>, GridError> {
        Ok(self.dataset(role).column(lon)?)
    }
}
