//! Concurrent execution of bias adjustment over spatial grids.
//!
//! The scheduler walks a lat/lon grid one longitude column at a time,
//! adjusting the cells of each column in parallel on a bounded worker
//! pool. Data access goes through the [`TimeSeriesSource`] and
//! [`TimeSeriesSink`] traits so that file-backed and in-memory backends
//! share the same run loop.
//!
//! # Quick Start
//!
//! ```
//! use debias_adjust::{AdjustmentSettings, Kind, Method};
//! use debias_grid::{adjust_grid, InMemorySource};
//!
//! let reference = vec![vec![vec![10.0, 10.0, 10.0]; 2]; 2];
//! let control = vec![vec![vec![8.0, 8.0, 8.0]; 2]; 2];
//! let scenario = vec![vec![vec![5.0, 6.0, 7.0]; 2]; 2];
//! let source = InMemorySource::new(reference, control, scenario);
//!
//! let settings = AdjustmentSettings::new(Method::LinearScaling, Kind::Additive)
//!     .with_interval31_scaling(false);
//! let cube = adjust_grid(&source, &settings, 2, |_, _| {}).unwrap();
//! assert_eq!(cube[[0, 1, 1]], 7.0);
//! ```

mod error;
mod memory;
mod scheduler;
mod source;

pub use error::GridError;
pub use memory::InMemorySource;
pub use scheduler::{adjust_cell, adjust_grid};
pub use source::{GridExtents, Role, TimeSeriesSink, TimeSeriesSource};
