//! Data loaders for snapshot dataset files.
//!
//! This module provides:
//! - Typed JSON loading for the dataset and snapshot wire shapes
//! - Deterministic directory listing for batch processing

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use super::records::{Dataset, Snapshot};

/// Errors that can occur during file loading.
#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON in '{path}': {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// Result type for loader operations.
pub type Result<T> = std::result::Result<T, LoaderError>;

/// Read a file and deserialize its contents as JSON into `T`.
///
/// The whole file is read before parsing; either the full content
/// deserializes or the call fails with [`LoaderError::Decode`]. An absent
/// container key is a decode failure, not a partial result.
pub fn read_json_file<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let path = path.as_ref();
    let file = File::open(path)?;

    let mut bytes = Vec::new();
    BufReader::new(file).read_to_end(&mut bytes)?;

    serde_json::from_slice(&bytes).map_err(|e| LoaderError::Decode {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load a raw dataset file.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    read_json_file(path)
}

/// Load a snapshot file previously written by the batch converter.
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<Snapshot> {
    read_json_file(path)
}

/// List the regular files of a directory, sorted lexicographically by file
/// name.
///
/// The sort makes batch processing order deterministic regardless of the
/// order the filesystem returns entries in. Non-regular entries
/// (directories, symlinks) are skipped.
pub fn list_dataset_files<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();

    if !dir.is_dir() {
        return Err(LoaderError::NotADirectory(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}
