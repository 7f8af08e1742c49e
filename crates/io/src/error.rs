//! Error types for debias-io.

use std::path::PathBuf;

use debias_grid::GridError;

/// Error type for all fallible operations in the debias-io crate.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an error originating from the NetCDF library.
    #[error("netcdf error: {reason}")]
    Netcdf {
        /// Description of the underlying NetCDF failure.
        reason: String,
    },

    /// Returned when a required variable is not present in a file.
    #[error("variable '{name}' not found in {}", path.display())]
    MissingVariable {
        /// Name of the missing variable.
        name: String,
        /// Path to the file that was inspected.
        path: PathBuf,
    },

    /// Returned when a variable has an unexpected number of dimensions.
    #[error(
        "variable '{name}' in {} has {got} dimension(s), expected {expected}",
        path.display()
    )]
    DimensionMismatch {
        /// Name of the variable.
        name: String,
        /// Path to the file that was inspected.
        path: PathBuf,
        /// Expected number of dimensions.
        expected: usize,
        /// Actual number of dimensions.
        got: usize,
    },
}

impl From<netcdf::Error> for IoError {
    fn from(e: netcdf::Error) -> Self {
        IoError::Netcdf {
            reason: e.to_string(),
        }
    }
}

impl From<IoError> for GridError {
    fn from(e: IoError) -> Self {
        GridError::source_err(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_file_not_found() {
        let err = IoError::FileNotFound {
            path: PathBuf::from("/tmp/missing.nc"),
        };
        assert_eq!(err.to_string(), "file not found: /tmp/missing.nc");
    }

    #[test]
    fn display_missing_variable() {
        let err = IoError::MissingVariable {
            name: "tas".to_string(),
            path: PathBuf::from("/data/obs.nc"),
        };
        assert_eq!(err.to_string(), "variable 'tas' not found in /data/obs.nc");
    }

    #[test]
    fn display_dimension_mismatch() {
        let err = IoError::DimensionMismatch {
            name: "tas".to_string(),
            path: PathBuf::from("/data/obs.nc"),
            expected: 3,
            got: 1,
        };
        assert_eq!(
            err.to_string(),
            "variable 'tas' in /data/obs.nc has 1 dimension(s), expected 3"
        );
    }

    #[test]
    fn from_netcdf_error() {
        let nc_err = netcdf::Error::Str("test nc error".to_string());
        let err: IoError = nc_err.into();
        assert!(matches!(err, IoError::Netcdf { .. }));
        assert!(err.to_string().contains("test nc error"));
    }

    #[test]
    fn converts_into_grid_error() {
        let err = IoError::FileNotFound {
            path: PathBuf::from("/tmp/missing.nc"),
        };
        let grid_err: GridError = err.into();
        assert!(grid_err.to_string().contains("/tmp/missing.nc"));
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<IoError>();
    }
}
