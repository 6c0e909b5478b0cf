//! Core data types and I/O operations.

pub mod loaders;
pub mod records;
pub mod writers;

pub use loaders::{list_dataset_files, load_dataset, load_snapshot, LoaderError};
pub use records::{Dataset, Reading, Snapshot, SnapshotEntry};
pub use writers::{
    write_json, write_readings_csv, write_snapshot_xml, write_summary_csv, WriteError,
};
