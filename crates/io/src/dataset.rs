//! Read access to one NetCDF input file.

use std::path::{Path, PathBuf};

use debias_grid::GridExtents;

use crate::error::IoError;

pub(crate) const LAT_ALIASES: &[&str] = &["lat", "latitude"];
pub(crate) const LON_ALIASES: &[&str] = &["lon", "longitude"];

/// Open a NetCDF file at `path`, returning [`IoError::FileNotFound`] if the
/// path does not exist on disk.
pub(crate) fn open_file(path: &Path) -> Result<netcdf::File, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(netcdf::open(path)?)
}

/// Read a 1-D `f64` variable, trying each alias in order.
pub(crate) fn read_1d_f64(
    file: &netcdf::File,
    aliases: &[&str],
) -> Result<Option<Vec<f64>>, IoError> {
    for &alias in aliases {
        if let Some(var) = file.variable(alias) {
            return Ok(Some(var.get_values::<f64, _>(..)?));
        }
    }
    Ok(None)
}

/// Read a string attribute of a variable, if present.
pub(crate) fn str_attribute(var: &netcdf::Variable<'_>, name: &str) -> Option<String> {
    var.attribute_value(name)
        .and_then(|res| res.ok())
        .and_then(|av| match av {
            netcdf::AttributeValue::Str(s) => Some(s),
            _ => None,
        })
}

/// One open NetCDF input file holding a single data variable over either
/// `(time, lat, lon)` or `(time)` dimensions.
#[derive(Debug)]
pub struct NcDataset {
    file: netcdf::File,
    path: PathBuf,
    variable: String,
    extents: GridExtents,
}

impl NcDataset {
    /// Opens `path` and locates `variable`, checking its dimensionality.
    ///
    /// With `one_dim` the variable must have exactly one dimension (time)
    /// and the dataset reports a 1x1 spatial grid. Otherwise it must have
    /// exactly three dimensions in `(time, lat, lon)` order.
    ///
    /// # Errors
    ///
    /// Returns [`IoError`] if the file is missing or unreadable, the
    /// variable is absent, or its dimension count does not match.
    pub fn open(path: &Path, variable: &str, one_dim: bool) -> Result<Self, IoError> {
        let file = open_file(path)?;
        let extents = {
            let var = file
                .variable(variable)
                .ok_or_else(|| IoError::MissingVariable {
                    name: variable.to_string(),
                    path: path.to_path_buf(),
                })?;
            let dims = var.dimensions();
            let expected = if one_dim { 1 } else { 3 };
            if dims.len() != expected {
                return Err(IoError::DimensionMismatch {
                    name: variable.to_string(),
                    path: path.to_path_buf(),
                    expected,
                    got: dims.len(),
                });
            }
            if one_dim {
                GridExtents {
                    n_time: dims[0].len(),
                    n_lat: 1,
                    n_lon: 1,
                }
            } else {
                GridExtents {
                    n_time: dims[0].len(),
                    n_lat: dims[1].len(),
                    n_lon: dims[2].len(),
                }
            }
        };

        Ok(NcDataset {
            file,
            path: path.to_path_buf(),
            variable: variable.to_string(),
            extents,
        })
    }

    /// Path this dataset was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Dimension lengths of the data variable.
    pub fn extents(&self) -> GridExtents {
        self.extents
    }

    fn data_variable(&self) -> Result<netcdf::Variable<'_>, IoError> {
        self.file
            .variable(&self.variable)
            .ok_or_else(|| IoError::MissingVariable {
                name: self.variable.clone(),
                path: self.path.clone(),
            })
    }

    /// Reads the whole series of a point (time-only) dataset.
    pub fn timeseries(&self) -> Result<Vec<f64>, IoError> {
        let var = self.data_variable()?;
        Ok(var.get_values::<f64, _>(..)?)
    }

    /// Reads one longitude column, returning a series per latitude.
    pub fn column(&self, lon: usize) -> Result<Vec<Vec<f64>>, IoError> {
        let var = self.data_variable()?;
        // flat layout is (time, lat) for the fixed longitude
        let flat = var.get_values::<f64, _>((.., .., lon..lon + 1))?;

        let n_time = self.extents.n_time;
        let n_lat = self.extents.n_lat;
        let mut column = vec![Vec::with_capacity(n_time); n_lat];
        for t in 0..n_time {
            for (lat, series) in column.iter_mut().enumerate() {
                series.push(flat[t * n_lat + lat]);
            }
        }
        Ok(column)
    }

    /// Reads the time coordinate values, falling back to step indices when
    /// the file carries no `time` variable.
    pub fn time_values(&self) -> Result<Vec<f64>, IoError> {
        match read_1d_f64(&self.file, &["time"])? {
            Some(values) => Ok(values),
            None => Ok((0..self.extents.n_time).map(|t| t as f64).collect()),
        }
    }

    /// Reads the `units` and `calendar` attributes of the time variable.
    pub fn time_attributes(&self) -> (Option<String>, Option<String>) {
        match self.file.variable("time") {
            Some(var) => (
                str_attribute(&var, "units"),
                str_attribute(&var, "calendar"),
            ),
            None => (None, None),
        }
    }

    /// Reads the latitude coordinate values, falling back to cell indices.
    pub fn lat_values(&self) -> Result<Vec<f64>, IoError> {
        match read_1d_f64(&self.file, LAT_ALIASES)? {
            Some(values) => Ok(values),
            None => Ok((0..self.extents.n_lat).map(|i| i as f64).collect()),
        }
    }

    /// Reads the longitude coordinate values, falling back to cell indices.
    pub fn lon_values(&self) -> Result<Vec<f64>, IoError> {
        match read_1d_f64(&self.file, LON_ALIASES)? {
            Some(values) => Ok(values),
            None => Ok((0..self.extents.n_lon).map(|i| i as f64).collect()),
        }
    }

    /// Reads the `units` attribute of the data variable, if present.
    pub fn variable_units(&self) -> Option<String> {
        self.file
            .variable(&self.variable)
            .and_then(|var| str_attribute(&var, "units"))
    }
}
