//! Pipeline orchestration for the two tools.

pub mod convert;
pub mod export;

// Re-export key entry points for convenience
pub use convert::{basename, convert_directory, dump_snapshots};
pub use export::{export_snapshot, ExportReport};
