//! Format adapters for dataset output.
//!
//! Each format implements the [`crate::io::traits::RowSink`] trait. Adding a
//! format means adding one variant and one adapter; the orchestrator is
//! untouched.

pub mod csv;
pub mod json;
pub mod parquet;

use crate::io::traits::RowSink;
use crate::{Error, Result};
use std::io::Write;
use std::str::FromStr;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Apache Parquet columnar format.
    Parquet,
    /// CSV with a header record.
    Csv,
    /// Newline-delimited JSON (NDJSON).
    Json,
}

impl Format {
    /// Returns all available formats.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Parquet, Self::Csv, Self::Json]
    }

    /// Returns the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Parquet => "parquet",
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    /// Returns the MIME type for this format.
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::Parquet => "application/vnd.apache.parquet",
            Self::Csv => "text/csv",
            Self::Json => "application/x-ndjson",
        }
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "parquet" | "pq" => Ok(Self::Parquet),
            "csv" => Ok(Self::Csv),
            "json" | "ndjson" | "jsonl" => Ok(Self::Json),
            _ => Err(Error::InvalidInput(format!("unknown format: {s}"))),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Creates a row sink for the given format and writer.
///
/// This is the single construction path for sinks; a failure here (for
/// example the CSV header write) must abort the run before any traversal.
///
/// # Errors
///
/// Returns an error if sink construction fails.
pub fn create_row_sink<W: Write + Send + 'static>(
    writer: W,
    format: Format,
) -> Result<Box<dyn RowSink>> {
    match format {
        Format::Parquet => Ok(Box::new(parquet::ParquetRowSink::new(writer)?)),
        Format::Csv => Ok(Box::new(csv::CsvRowSink::new(writer)?)),
        Format::Json => Ok(Box::new(json::JsonRowSink::new(writer))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!(Format::from_str("parquet").unwrap(), Format::Parquet);
        assert_eq!(Format::from_str("PARQUET").unwrap(), Format::Parquet);
        assert_eq!(Format::from_str("csv").unwrap(), Format::Csv);
        assert_eq!(Format::from_str("json").unwrap(), Format::Json);
        assert_eq!(Format::from_str("jsonl").unwrap(), Format::Json);
        assert!(Format::from_str("xml").is_err());
        assert!(Format::from_str("").is_err());
    }

    #[test]
    fn test_format_extension() {
        assert_eq!(Format::Parquet.extension(), "parquet");
        assert_eq!(Format::Csv.extension(), "csv");
        assert_eq!(Format::Json.extension(), "json");
    }

    #[test]
    fn test_format_display_roundtrip() {
        for format in Format::all() {
            assert_eq!(Format::from_str(&format.to_string()).unwrap(), *format);
        }
    }

    #[test]
    fn test_create_row_sink() {
        for format in Format::all() {
            assert!(create_row_sink(Vec::new(), *format).is_ok());
        }
    }
}
