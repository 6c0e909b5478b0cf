//! Emitters for the snapshot output formats.
//!
//! This module provides functions for writing converted data to:
//! - JSON (2-space indentation, schema-declared key order)
//! - XML (hand-built element tree, 2-space indentation)
//! - CSV (comma-separated, LF line endings, explicit flush)

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::config::CsvConfig;
use super::records::{Reading, Snapshot, READING_CSV_HEADER, SUMMARY_CSV_HEADER};

/// Errors that can occur during write operations.
#[derive(Error, Debug)]
pub enum WriteError {
    /// Failed to create parent directories.
    #[error("failed to create parent directories for '{path}': {source}")]
    CreateDirectory {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create or open file for writing.
    #[error("failed to create file '{path}': {source}")]
    CreateFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write data to file.
    #[error("failed to write to file '{path}': {source}")]
    WriteFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error.
    #[error("failed to encode JSON for '{path}': {source}")]
    Encode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// CSV writing error.
    #[error("CSV write error for '{path}': {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },
}

/// Result type for write operations.
pub type Result<T> = std::result::Result<T, WriteError>;

/// Creates parent directories for a file path if they don't exist.
fn ensure_parent_dirs(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| WriteError::CreateDirectory {
                path: parent.display().to_string(),
                source: e,
            })?;
        }
    }
    Ok(())
}

/// Write a fully serialized buffer with create-or-truncate semantics.
fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    ensure_parent_dirs(path)?;

    let mut file = File::create(path).map_err(|e| WriteError::CreateFile {
        path: path.display().to_string(),
        source: e,
    })?;

    file.write_all(bytes).map_err(|e| WriteError::WriteFile {
        path: path.display().to_string(),
        source: e,
    })
}

/// Serialize a value as pretty JSON (2-space indentation) and write it.
///
/// Key order follows the struct declaration order of `T`. The value is
/// serialized in full before the file is touched, so an encoding failure
/// leaves no partial output.
pub fn write_json<T: Serialize, P: AsRef<Path>>(path: P, value: &T) -> Result<()> {
    let path = path.as_ref();

    let json = serde_json::to_string_pretty(value).map_err(|e| WriteError::Encode {
        path: path.display().to_string(),
        source: e,
    })?;

    write_bytes(path, json.as_bytes())
}

/// Format a float the way the XML encoder does: shortest representation
/// that round-trips (`21`, `12.345`).
fn xml_float(value: f64) -> String {
    format!("{}", value)
}

/// Serialize a snapshot as XML and write it.
///
/// The sequence is wrapped in a `<snapshot>` root with one `<data>` element
/// per entry and per-field child elements, indented two spaces per nesting
/// level. No XML declaration is emitted.
pub fn write_snapshot_xml<P: AsRef<Path>>(path: P, snapshot: &Snapshot) -> Result<()> {
    let path = path.as_ref();

    if snapshot.data.is_empty() {
        return write_bytes(path, b"<snapshot></snapshot>");
    }

    let mut xml = String::from("<snapshot>\n");
    for entry in &snapshot.data {
        xml.push_str("  <data>\n");
        xml.push_str(&format!("    <motion>{}</motion>\n", entry.motion));
        xml.push_str(&format!("    <sound>{}</sound>\n", xml_float(entry.sound)));
        xml.push_str(&format!(
            "    <illuminance>{}</illuminance>\n",
            xml_float(entry.illuminance)
        ));
        xml.push_str(&format!(
            "    <temperature>{}</temperature>\n",
            xml_float(entry.temperature)
        ));
        xml.push_str("  </data>\n");
    }
    xml.push_str("</snapshot>");

    write_bytes(path, xml.as_bytes())
}

/// Build a CSV writer over a buffered file handle.
fn create_csv_writer(path: &Path, delimiter: char) -> Result<csv::Writer<BufWriter<File>>> {
    ensure_parent_dirs(path)?;

    let file = File::create(path).map_err(|e| WriteError::CreateFile {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(csv::WriterBuilder::new()
        .delimiter(delimiter as u8)
        .from_writer(BufWriter::new(file)))
}

/// Write the summary CSV: `sound,illuminance,voltage` header followed by
/// one row per reading at the configured precision.
///
/// Line endings are LF. The writer is flushed before the handle is
/// released; an empty record set produces exactly the header line.
pub fn write_summary_csv<P: AsRef<Path>>(
    path: P,
    readings: &[Reading],
    config: &CsvConfig,
) -> Result<()> {
    let path = path.as_ref();
    let mut writer = create_csv_writer(path, config.delimiter)?;
    let path_str = path.display().to_string();

    writer
        .write_record(SUMMARY_CSV_HEADER)
        .map_err(|e| WriteError::Csv {
            path: path_str.clone(),
            source: e,
        })?;

    for reading in readings {
        writer
            .write_record(&reading.summary_csv_row(config.precision))
            .map_err(|e| WriteError::Csv {
                path: path_str.clone(),
                source: e,
            })?;
    }

    writer.flush().map_err(|e| WriteError::WriteFile {
        path: path_str,
        source: e,
    })?;

    Ok(())
}

/// Write the full readings CSV: all eight columns, floats at fixed
/// 6-decimal precision, integers decimal, timestamp verbatim.
pub fn write_readings_csv<P: AsRef<Path>>(
    path: P,
    readings: &[Reading],
    config: &CsvConfig,
) -> Result<()> {
    let path = path.as_ref();
    let mut writer = create_csv_writer(path, config.delimiter)?;
    let path_str = path.display().to_string();

    writer
        .write_record(READING_CSV_HEADER)
        .map_err(|e| WriteError::Csv {
            path: path_str.clone(),
            source: e,
        })?;

    for reading in readings {
        writer
            .write_record(&reading.csv_row())
            .map_err(|e| WriteError::Csv {
                path: path_str.clone(),
                source: e,
            })?;
    }

    writer.flush().map_err(|e| WriteError::WriteFile {
        path: path_str,
        source: e,
    })?;

    Ok(())
}
