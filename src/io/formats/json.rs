//! JSON format adapter.
//!
//! Newline-delimited JSON output: one self-describing object per line with
//! tags as a native ordered array. The sink keeps no buffer of its own, so
//! `finalize` only flushes the underlying stream.

use crate::io::traits::RowSink;
use crate::models::SolutionRow;
use crate::{Error, Result};
use std::io::Write;

/// NDJSON row sink.
pub struct JsonRowSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonRowSink<W> {
    /// Creates a new NDJSON sink.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send> RowSink for JsonRowSink<W> {
    fn write(&mut self, row: &SolutionRow) -> Result<()> {
        serde_json::to_writer(&mut self.writer, row).map_err(|e| Error::OperationFailed {
            operation: "write_json".to_string(),
            cause: e.to_string(),
        })?;
        writeln!(self.writer).map_err(|e| Error::OperationFailed {
            operation: "write_json".to_string(),
            cause: e.to_string(),
        })
    }

    fn finalize(mut self: Box<Self>) -> Result<()> {
        self.writer.flush().map_err(|e| Error::OperationFailed {
            operation: "flush_json".to_string(),
            cause: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row(id: i64, language: &str) -> SolutionRow {
        SolutionRow {
            id,
            title: "Two-Sum".to_string(),
            difficulty: "Easy".to_string(),
            description: "Given an array of integers...".to_string(),
            tags: vec!["Array".to_string(), "Hash Table".to_string()],
            language: language.to_string(),
            solution: "def twoSum(): ...".to_string(),
        }
    }

    #[test]
    fn test_one_object_per_line() {
        let mut output = Vec::new();
        {
            let mut sink = JsonRowSink::new(&mut output);
            sink.write(&sample_row(1, "Python")).unwrap();
            sink.write(&sample_row(1, "Go")).unwrap();
            Box::new(sink).finalize().unwrap();
        }

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_round_trip_preserves_fields_and_tag_order() {
        let original = sample_row(1, "Python");
        let mut output = Vec::new();
        {
            let mut sink = JsonRowSink::new(&mut output);
            sink.write(&original).unwrap();
            Box::new(sink).finalize().unwrap();
        }

        let text = String::from_utf8(output).unwrap();
        let parsed: SolutionRow = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(parsed, original);
        assert_eq!(parsed.tags, vec!["Array", "Hash Table"]);
    }

    #[test]
    fn test_tags_serialize_as_array() {
        let mut output = Vec::new();
        {
            let mut sink = JsonRowSink::new(&mut output);
            sink.write(&sample_row(1, "Python")).unwrap();
            Box::new(sink).finalize().unwrap();
        }

        let text = String::from_utf8(output).unwrap();
        let value: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
        assert!(value["tags"].is_array());
    }
}
