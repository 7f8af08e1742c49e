//! Error types for the debias-stats crate.

/// Error type for all fallible operations in the debias-stats crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatsError {
    /// Returned when two series that must be compared element-wise differ in length.
    #[error("length mismatch: x has {x_len} elements, y has {y_len}")]
    LengthMismatch {
        /// Length of the first series.
        x_len: usize,
        /// Length of the second series.
        y_len: usize,
    },
}
