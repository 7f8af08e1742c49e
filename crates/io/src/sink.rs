//! A file-backed [`TimeSeriesSink`] writing corrected output to NetCDF.

use std::path::{Path, PathBuf};

use debias_grid::{GridError, TimeSeriesSink};
use ndarray::Array3;
use tracing::debug;

use crate::dataset::NcDataset;
use crate::error::IoError;

/// Coordinate values and attributes carried over from the scenario file.
struct OutputTemplate {
    time: Vec<f64>,
    time_units: Option<String>,
    time_calendar: Option<String>,
    lat: Vec<f64>,
    lon: Vec<f64>,
    variable_units: Option<String>,
}

/// Writes corrected data to a new NetCDF file, copying the coordinate
/// variables of the scenario input.
pub struct NcSink {
    path: PathBuf,
    variable: String,
    template: OutputTemplate,
}

impl NcSink {
    /// Prepares a sink for `path`, taking coordinates from `scenario`.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`] if the scenario's coordinate variables cannot
    /// be read.
    pub fn from_scenario(
        path: &Path,
        variable: &str,
        scenario: &NcDataset,
    ) -> Result<Self, IoError> {
        let (time_units, time_calendar) = scenario.time_attributes();
        let template = OutputTemplate {
            time: scenario.time_values()?,
            time_units,
            time_calendar,
            lat: scenario.lat_values()?,
            lon: scenario.lon_values()?,
            variable_units: scenario.variable_units(),
        };
        Ok(NcSink {
            path: path.to_path_buf(),
            variable: variable.to_string(),
            template,
        })
    }

    fn write_time_var(&self, file: &mut netcdf::FileMut, n_time: usize) -> Result<(), IoError> {
        file.add_dimension("time", n_time)?;
        let mut var = file.add_variable::<f64>("time", &["time"])?;
        var.put_values(&self.template.time[..n_time.min(self.template.time.len())], ..)?;
        if let Some(units) = &self.template.time_units {
            var.put_attribute("units", units.as_str())?;
        }
        if let Some(calendar) = &self.template.time_calendar {
            var.put_attribute("calendar", calendar.as_str())?;
        }
        Ok(())
    }

    fn write_units(&self, var: &mut netcdf::VariableMut<'_>) -> Result<(), IoError> {
        if let Some(units) = &self.template.variable_units {
            var.put_attribute("units", units.as_str())?;
        }
        Ok(())
    }

    fn write_series_impl(&self, series: &[f64]) -> Result<(), IoError> {
        let mut file = netcdf::create(&self.path)?;
        self.write_time_var(&mut file, series.len())?;

        let mut var = file.add_variable::<f64>(&self.variable, &["time"])?;
        self.write_units(&mut var)?;
        var.put_values(series, ..)?;

        debug!(path = %self.path.display(), n_time = series.len(), "wrote point output");
        Ok(())
    }

    fn write_cube_impl(&self, cube: &Array3<f64>) -> Result<(), IoError> {
        let shape = cube.shape();
        let (n_time, n_lat, n_lon) = (shape[0], shape[1], shape[2]);

        let mut file = netcdf::create(&self.path)?;
        self.write_time_var(&mut file, n_time)?;
        file.add_dimension("lat", n_lat)?;
        file.add_dimension("lon", n_lon)?;

        {
            let mut var = file.add_variable::<f64>("lat", &["lat"])?;
            var.put_values(&self.template.lat[..n_lat.min(self.template.lat.len())], ..)?;
        }
        {
            let mut var = file.add_variable::<f64>("lon", &["lon"])?;
            var.put_values(&self.template.lon[..n_lon.min(self.template.lon.len())], ..)?;
        }

        let mut var = file.add_variable::<f64>(&self.variable, &["time", "lat", "lon"])?;
        self.write_units(&mut var)?;
        // iteration order of a standard-layout cube matches (time, lat, lon)
        let flat: Vec<f64> = cube.iter().copied().collect();
        var.put_values(&flat, ..)?;

        debug!(
            path = %self.path.display(),
            n_time, n_lat, n_lon,
            "wrote grid output"
        );
        Ok(())
    }
}

impl TimeSeriesSink for NcSink {
    fn write_series(&mut self, series: &[f64]) -> Result<(), GridError> {
        Ok(self.write_series_impl(series)?)
    }

    fn write_cube(&mut self, cube: &Array3<f64>) -> Result<(), GridError> {
        Ok(self.write_cube_impl(cube)?)
    }
}
