//! NetCDF backends for the grid scheduler.
//!
//! [`NcSource`] serves reference, control, and scenario series from three
//! NetCDF files; [`NcSink`] writes the corrected output next to them,
//! carrying the scenario's coordinate variables over. Both plug into the
//! [`debias_grid`] traits, so runs over files and runs over in-memory
//! data share the same scheduler.

mod dataset;
mod error;
mod sink;
mod source;

pub use dataset::NcDataset;
pub use error::IoError;
pub use sink::NcSink;
pub use source::NcSource;
