//! Record types for sensor snapshot datasets.
//!
//! A dataset file carries raw readings under a single `data` key. The batch
//! converter projects readings onto the narrower snapshot shape; the
//! exporter formats them as CSV rows.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One raw sensor reading as it appears in a dataset file (wire format).
///
/// Field declaration order matches the wire schema and fixes the column
/// order of [`Reading::csv_row`] and the key order of JSON output. The wire
/// key for illuminance is the historical misspelling `illuminace`; the
/// in-memory field uses the correct spelling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub voltage: f64,
    pub motion: i64,
    pub temperature: f64,
    pub sound: f64,
    pub voc: i64,
    #[serde(rename = "illuminace")]
    pub illuminance: f64,
    pub humidity: f64,
    pub timestamp: String,
}

/// An ordered sequence of raw readings, wrapped in the `data` container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub data: Vec<Reading>,
}

/// Projection of a [`Reading`] onto the four summary fields.
///
/// Serialized under the corrected `illuminance` spelling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotEntry {
    pub motion: i64,
    pub sound: f64,
    pub illuminance: f64,
    pub temperature: f64,
}

/// An ordered sequence of summary entries, same container shape as
/// [`Dataset`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub data: Vec<SnapshotEntry>,
}

impl Reading {
    /// Project this reading onto the four summary fields.
    pub fn summarize(&self) -> SnapshotEntry {
        SnapshotEntry {
            motion: self.motion,
            sound: self.sound,
            illuminance: self.illuminance,
            temperature: self.temperature,
        }
    }

    /// Format all eight fields as a CSV row.
    ///
    /// Floats are fixed 6-decimal, integers are decimal strings, and the
    /// timestamp passes through verbatim. Column order equals field
    /// declaration order.
    pub fn csv_row(&self) -> [String; 8] {
        [
            format!("{:.6}", self.voltage),
            self.motion.to_string(),
            format!("{:.6}", self.temperature),
            format!("{:.6}", self.sound),
            self.voc.to_string(),
            format!("{:.6}", self.illuminance),
            format!("{:.6}", self.humidity),
            self.timestamp.clone(),
        ]
    }

    /// Format the summary columns (sound, illuminance, voltage) at the
    /// given decimal precision.
    pub fn summary_csv_row(&self, precision: usize) -> [String; 3] {
        [
            format!("{:.prec$}", self.sound, prec = precision),
            format!("{:.prec$}", self.illuminance, prec = precision),
            format!("{:.prec$}", self.voltage, prec = precision),
        ]
    }
}

/// Column names for [`Reading::csv_row`], in row order.
pub const READING_CSV_HEADER: [&str; 8] = [
    "voltage",
    "motion",
    "temperature",
    "sound",
    "voc",
    "illuminance",
    "humidity",
    "timestamp",
];

/// Column names for [`Reading::summary_csv_row`], in row order.
pub const SUMMARY_CSV_HEADER: [&str; 3] = ["sound", "illuminance", "voltage"];

impl Snapshot {
    /// Build a snapshot by projecting every reading of a dataset, order
    /// preserved 1:1.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        Self {
            data: dataset.data.iter().map(Reading::summarize).collect(),
        }
    }
}

impl fmt::Display for SnapshotEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Motion: {}, Sound: {:.2}, Illuminance: {:.2}, Temperature: {:.2}",
            self.motion, self.sound, self.illuminance, self.temperature
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_reading() -> Reading {
        Reading {
            voltage: 3.31,
            motion: 1,
            temperature: 21.0,
            sound: 12.345,
            voc: 210,
            illuminance: 50.1,
            humidity: 40.25,
            timestamp: "2021-03-14T09:26:53".to_string(),
        }
    }

    #[test]
    fn test_wire_key_illuminace_maps_to_illuminance() {
        let json = r#"{
            "voltage": 3.31,
            "motion": 1,
            "temperature": 21.0,
            "sound": 12.345,
            "voc": 210,
            "illuminace": 50.1,
            "humidity": 40.25,
            "timestamp": "2021-03-14T09:26:53"
        }"#;

        let reading: Reading = serde_json::from_str(json).unwrap();
        assert_eq!(reading.illuminance, 50.1);
    }

    #[test]
    fn test_summarize_copies_four_fields() {
        let entry = sample_reading().summarize();

        assert_eq!(entry.motion, 1);
        assert_eq!(entry.sound, 12.345);
        assert_eq!(entry.illuminance, 50.1);
        assert_eq!(entry.temperature, 21.0);
    }

    #[test]
    fn test_snapshot_from_dataset_preserves_order() {
        let mut second = sample_reading();
        second.motion = 0;
        second.sound = 1.5;

        let dataset = Dataset {
            data: vec![sample_reading(), second],
        };

        let snapshot = Snapshot::from_dataset(&dataset);
        assert_eq!(snapshot.data.len(), 2);
        assert_eq!(snapshot.data[0].motion, 1);
        assert_eq!(snapshot.data[1].motion, 0);
        assert_eq!(snapshot.data[1].sound, 1.5);
    }

    #[test]
    fn test_snapshot_entry_serializes_with_corrected_spelling() {
        let entry = sample_reading().summarize();
        let json = serde_json::to_string(&entry).unwrap();

        assert_eq!(
            json,
            r#"{"motion":1,"sound":12.345,"illuminance":50.1,"temperature":21.0}"#
        );
    }

    #[test]
    fn test_csv_row_formatting() {
        let row = sample_reading().csv_row();

        assert_eq!(row[0], "3.310000");
        assert_eq!(row[1], "1");
        assert_eq!(row[2], "21.000000");
        assert_eq!(row[3], "12.345000");
        assert_eq!(row[4], "210");
        assert_eq!(row[5], "50.100000");
        assert_eq!(row[6], "40.250000");
        assert_eq!(row[7], "2021-03-14T09:26:53");
    }

    #[test]
    fn test_summary_csv_row_precision() {
        let row = sample_reading().summary_csv_row(2);

        assert_eq!(row, ["12.35".to_string(), "50.10".to_string(), "3.31".to_string()]);
    }

    #[test]
    fn test_dump_line_format() {
        let entry = sample_reading().summarize();

        assert_eq!(
            entry.to_string(),
            "Motion: 1, Sound: 12.35, Illuminance: 50.10, Temperature: 21.00"
        );
    }
}
