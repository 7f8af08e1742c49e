//! Error types for the debias-grid crate.

use debias_adjust::AdjustError;

/// Error type for all fallible operations in the debias-grid crate.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// Returned when the adjustment of a single (1-D) series fails.
    #[error(transparent)]
    Adjust(#[from] AdjustError),

    /// Returned when the adjustment of one grid cell fails during a grid
    /// run. The whole run aborts; columns already written to the output
    /// cube are not rolled back.
    #[error("adjustment failed at cell (lat {lat}, lon {lon}): {source}")]
    Cell {
        /// Latitude index of the failing cell.
        lat: usize,
        /// Longitude index of the failing cell.
        lon: usize,
        /// The underlying adjustment error.
        source: AdjustError,
    },

    /// Returned when the three inputs disagree on a spatial dimension.
    #[error("input grids have unequal lengths of the `{dim}` dimension: {lengths:?}")]
    ExtentsMismatch {
        /// Name of the offending dimension.
        dim: &'static str,
        /// The (reference, control, scenario) lengths.
        lengths: [usize; 3],
    },

    /// Returned when the requested parallelism is zero.
    #[error("n_jobs must be at least 1, got {n_jobs}")]
    InvalidJobs {
        /// The requested number of jobs.
        n_jobs: usize,
    },

    /// Returned when the bounded worker pool cannot be constructed.
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// Returned when a [`TimeSeriesSource`](crate::TimeSeriesSource) or
    /// [`TimeSeriesSink`](crate::TimeSeriesSink) implementation fails.
    #[error("data source/sink error: {0}")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl GridError {
    /// Wraps an arbitrary source/sink implementation error.
    pub fn source_err<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        GridError::Source(Box::new(error))
    }
}
