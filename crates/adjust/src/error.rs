//! Error types for the debias-adjust crate.

use debias_window::WindowError;

/// Error type for all fallible operations in the debias-adjust crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AdjustError {
    /// Returned when the settings describe an unsupported combination.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when one of the input series is empty.
    #[error("{role} series is empty")]
    EmptyData {
        /// Which input series was empty.
        role: &'static str,
    },

    /// Returned by the delta method when reference and scenario lengths differ.
    #[error(
        "delta method requires reference and scenario series of equal length, \
         got {reference_len} and {scenario_len}"
    )]
    LengthMismatch {
        /// Length of the reference series.
        reference_len: usize,
        /// Length of the scenario series.
        scenario_len: usize,
    },

    /// Returned when 31-day interval scaling is requested on partial years.
    #[error("{role}: {source}")]
    NotWholeYears {
        /// Which input series has the offending length.
        role: &'static str,
        /// The underlying window error.
        source: WindowError,
    },

    /// Returned when reference and control span no value range at all, so
    /// no ascending bin edges can be constructed. This is the one place a
    /// numeric degeneracy becomes an error instead of being clamped.
    #[error("cannot build probability bins: reference and control span no value range (max = {max})")]
    DegenerateBins {
        /// The shared maximum of both series.
        max: f64,
    },
}
