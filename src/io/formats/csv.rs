//! CSV format adapter.
//!
//! Delimited text output: a header record naming the fields, then one record
//! per row with the tag sequence joined by `"; "`.

use crate::io::traits::RowSink;
use crate::models::SolutionRow;
use crate::{Error, Result};
use std::io::Write;

/// CSV row sink.
///
/// The header record is written at construction, so a construction failure
/// aborts the run before any traversal starts.
pub struct CsvRowSink<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvRowSink<W> {
    /// Creates a new CSV sink and writes the header record.
    ///
    /// # Errors
    ///
    /// Returns an error if the header cannot be written.
    pub fn new(writer: W) -> Result<Self> {
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false) // Headers are written manually
            .from_writer(writer);

        csv_writer
            .write_record(SolutionRow::FIELDS)
            .map_err(|e| Error::OperationFailed {
                operation: "write_csv_header".to_string(),
                cause: e.to_string(),
            })?;

        Ok(Self { writer: csv_writer })
    }
}

impl<W: Write + Send> RowSink for CsvRowSink<W> {
    fn write(&mut self, row: &SolutionRow) -> Result<()> {
        self.writer
            .write_record([
                row.id.to_string().as_str(),
                &row.title,
                &row.difficulty,
                &row.description,
                &row.tags_joined(),
                &row.language,
                &row.solution,
            ])
            .map_err(|e| Error::OperationFailed {
                operation: "write_csv".to_string(),
                cause: e.to_string(),
            })
    }

    fn finalize(mut self: Box<Self>) -> Result<()> {
        self.writer.flush().map_err(|e| Error::OperationFailed {
            operation: "flush_csv".to_string(),
            cause: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> SolutionRow {
        SolutionRow {
            id: 146,
            title: "LRU-Cache".to_string(),
            difficulty: "Medium".to_string(),
            description: "Design a data structure...".to_string(),
            tags: vec!["Hash Table".to_string(), "Design".to_string()],
            language: "Python".to_string(),
            solution: "class LRUCache:\n    pass\n".to_string(),
        }
    }

    #[test]
    fn test_header_written_at_construction() {
        let mut output = Vec::new();
        {
            let sink = CsvRowSink::new(&mut output).unwrap();
            Box::new(sink).finalize().unwrap();
        }

        let text = String::from_utf8(output).unwrap();
        assert_eq!(
            text.trim_end(),
            "id,title,difficulty,description,tags,language,solution"
        );
    }

    #[test]
    fn test_write_row() {
        let mut output = Vec::new();
        {
            let mut sink = CsvRowSink::new(&mut output).unwrap();
            sink.write(&sample_row()).unwrap();
            Box::new(sink).finalize().unwrap();
        }

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("146,LRU-Cache,Medium"));
        assert!(text.contains("Hash Table; Design"));
    }

    #[test]
    fn test_multiline_solution_round_trip() {
        let mut output = Vec::new();
        {
            let mut sink = CsvRowSink::new(&mut output).unwrap();
            sink.write(&sample_row()).unwrap();
            Box::new(sink).finalize().unwrap();
        }

        let mut reader = csv::Reader::from_reader(output.as_slice());
        let records: Vec<csv::StringRecord> =
            reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 1);
        assert_eq!(&records[0][0], "146");
        assert_eq!(&records[0][6], "class LRUCache:\n    pass\n");
    }
}
