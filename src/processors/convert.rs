//! Batch conversion of dataset directories to snapshot files.
//!
//! For every dataset file in the input directory, the converter loads the
//! raw readings, projects them onto the snapshot shape, and writes a JSON
//! and an XML rendition next to each other in the output directory. A
//! second pass re-reads the written JSON files and dumps their records to
//! the console.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use crate::core::loaders::{list_dataset_files, load_dataset, load_snapshot};
use crate::core::records::Snapshot;
use crate::core::writers::{write_json, write_snapshot_xml};

/// File name without its trailing extension.
///
/// Only the last `.`-delimited segment is stripped; a name without a dot is
/// returned whole.
pub fn basename(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(idx) => &filename[..idx],
        None => filename,
    }
}

/// Convert every dataset file in `input_dir` to snapshot JSON and XML
/// files in `output_dir`.
///
/// Files are processed in lexicographic filename order. The output
/// directory is created if missing. Returns the written JSON paths in
/// processing order; the first failing file aborts the batch, leaving
/// earlier output on disk.
pub fn convert_directory(input_dir: &Path, output_dir: &Path) -> Result<Vec<PathBuf>> {
    if !output_dir.exists() {
        fs::create_dir_all(output_dir).with_context(|| {
            format!("failed to create output directory {}", output_dir.display())
        })?;
    }

    let dataset_files = list_dataset_files(input_dir)
        .with_context(|| format!("failed to list dataset directory {}", input_dir.display()))?;

    let mut written = Vec::with_capacity(dataset_files.len());
    for path in &dataset_files {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let dataset = load_dataset(path)
            .with_context(|| format!("failed to load dataset {}", path.display()))?;
        let snapshot = Snapshot::from_dataset(&dataset);

        let base = basename(&file_name);

        let json_path = output_dir.join(format!("{}.json", base));
        write_json(&json_path, &snapshot)
            .with_context(|| format!("failed to write {}", json_path.display()))?;

        let xml_path = output_dir.join(format!("{}.xml", base));
        write_snapshot_xml(&xml_path, &snapshot)
            .with_context(|| format!("failed to write {}", xml_path.display()))?;

        info!("converted {} ({} records)", file_name, snapshot.data.len());
        written.push(json_path);
    }

    Ok(written)
}

/// Re-read the snapshot JSON files in `dir` and dump their records.
///
/// Entries are selected by a substring match on `.json` in the file name
/// (tolerating names where the extension is not the final segment). Each
/// file gets a banner line, one line per record, and a blank separator.
pub fn dump_snapshots<W: Write>(dir: &Path, out: &mut W) -> Result<()> {
    let files = list_dataset_files(dir)
        .with_context(|| format!("failed to list snapshot directory {}", dir.display()))?;

    for path in &files {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        if !file_name.contains(".json") {
            continue;
        }

        writeln!(out, "========{}========", file_name)?;

        let snapshot = load_snapshot(path)
            .with_context(|| format!("failed to load snapshot {}", path.display()))?;

        for (i, entry) in snapshot.data.iter().enumerate() {
            writeln!(out, "[{}/{}]: {}", file_name, i, entry)?;
        }

        writeln!(out)?;
        writeln!(out)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const DATASET_JSON: &str = r#"{
        "data": [
            {
                "voltage": 3.31,
                "motion": 1,
                "temperature": 21.0,
                "sound": 12.345,
                "voc": 210,
                "illuminace": 50.1,
                "humidity": 40.25,
                "timestamp": "2021-03-14T09:26:53"
            }
        ]
    }"#;

    #[test]
    fn test_basename() {
        assert_eq!(basename("a.b.json"), "a.b");
        assert_eq!(basename("noext"), "noext");
        assert_eq!(basename("dataset.json"), "dataset");
    }

    #[test]
    fn test_convert_directory() {
        let input = tempdir().unwrap();
        let output = tempdir().unwrap();

        // Written out of order; processing must be lexicographic
        fs::write(input.path().join("second.json"), DATASET_JSON).unwrap();
        fs::write(input.path().join("first.json"), DATASET_JSON).unwrap();

        let written = convert_directory(input.path(), output.path()).unwrap();

        let names: Vec<_> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, ["first.json", "second.json"]);

        for base in ["first", "second"] {
            assert!(output.path().join(format!("{}.json", base)).exists());
            assert!(output.path().join(format!("{}.xml", base)).exists());
        }

        // Output uses the corrected illuminance spelling
        let content = fs::read_to_string(output.path().join("first.json")).unwrap();
        assert!(content.contains("\"illuminance\": 50.1"));
        assert!(!content.contains("illuminace"));

        let snapshot = load_snapshot(output.path().join("first.json")).unwrap();
        assert_eq!(snapshot.data.len(), 1);
        assert_eq!(snapshot.data[0].motion, 1);
    }

    #[test]
    fn test_convert_directory_creates_output_dir() {
        let input = tempdir().unwrap();
        let parent = tempdir().unwrap();
        let output = parent.path().join("snapshot_dump");

        fs::write(input.path().join("a.json"), DATASET_JSON).unwrap();

        convert_directory(input.path(), &output).unwrap();

        assert!(output.join("a.json").exists());
    }

    #[test]
    fn test_convert_directory_empty_dataset() {
        let input = tempdir().unwrap();
        let output = tempdir().unwrap();

        fs::write(input.path().join("empty.json"), r#"{"data": []}"#).unwrap();

        convert_directory(input.path(), output.path()).unwrap();

        let content = fs::read_to_string(output.path().join("empty.json")).unwrap();
        assert_eq!(content, "{\n  \"data\": []\n}");
    }

    #[test]
    fn test_convert_directory_aborts_on_first_error() {
        let input = tempdir().unwrap();
        let output = tempdir().unwrap();

        fs::write(input.path().join("a.json"), DATASET_JSON).unwrap();
        fs::write(input.path().join("b.json"), "{broken").unwrap();
        fs::write(input.path().join("c.json"), DATASET_JSON).unwrap();

        let result = convert_directory(input.path(), output.path());

        assert!(result.is_err());
        // Output written before the failure stays on disk; later files are
        // never reached.
        assert!(output.path().join("a.json").exists());
        assert!(!output.path().join("c.json").exists());
    }

    #[test]
    fn test_dump_snapshots() {
        let input = tempdir().unwrap();
        let output = tempdir().unwrap();

        fs::write(input.path().join("room.json"), DATASET_JSON).unwrap();
        convert_directory(input.path(), output.path()).unwrap();

        let mut buf = Vec::new();
        dump_snapshots(output.path(), &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("========room.json========"));
        assert!(text.contains(
            "[room.json/0]: Motion: 1, Sound: 12.35, Illuminance: 50.10, Temperature: 21.00"
        ));
    }

    #[test]
    fn test_dump_snapshots_substring_match() {
        let dir = tempdir().unwrap();

        let snapshot_json = r#"{"data": []}"#;
        fs::write(dir.path().join("a.json"), snapshot_json).unwrap();
        // Extension not in final position still matches the substring rule
        fs::write(dir.path().join("b.json.bak"), snapshot_json).unwrap();
        fs::write(dir.path().join("c.xml"), "<snapshot></snapshot>").unwrap();

        let mut buf = Vec::new();
        dump_snapshots(dir.path(), &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("========a.json========"));
        assert!(text.contains("========b.json.bak========"));
        assert!(!text.contains("c.xml"));
    }
}
