//! Sensor snapshot conversion pipeline.
//!
//! This crate provides tools for:
//! - Loading sensor snapshot datasets from JSON files
//! - Projecting raw readings onto a narrower snapshot shape
//! - Emitting JSON, XML, and CSV renditions of a dataset
//! - Rendering a line chart of selected sensor series
//!
//! # Example
//!
//! ```no_run
//! use snapshot_pipeline::core::{load_dataset, Snapshot};
//!
//! let dataset = load_dataset("dataset.json").unwrap();
//! let snapshot = Snapshot::from_dataset(&dataset);
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod processors;
pub mod visualization;

pub use config::{ChartConfig, CsvConfig, PipelineConfig};
pub use core::records::{Dataset, Reading, Snapshot, SnapshotEntry};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
