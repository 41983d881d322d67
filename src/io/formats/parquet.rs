//! Apache Parquet format adapter.
//!
//! Typed columnar output with an embedded schema. Rows are buffered and
//! written as a single record batch on finalize, with Snappy compression.

use crate::io::traits::RowSink;
use crate::models::SolutionRow;
use crate::{Error, Result};
use arrow::array::{ArrayRef, Int64Array, ListBuilder, StringArray, StringBuilder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;
use std::io::Write;
use std::sync::Arc;

/// Parquet row sink.
///
/// Buffers rows in memory and writes the Parquet file on finalize. The
/// footer write happens in `finalize`, so an unfinalized sink produces no
/// usable output.
pub struct ParquetRowSink<W: Write + Send> {
    writer: Option<W>,
    /// Buffered rows for the single batch write.
    rows: Vec<SolutionRow>,
}

impl<W: Write + Send> ParquetRowSink<W> {
    /// Creates a new Parquet row sink.
    ///
    /// # Errors
    ///
    /// Returns an error if initialization fails.
    pub fn new(writer: W) -> Result<Self> {
        Ok(Self {
            writer: Some(writer),
            rows: Vec::new(),
        })
    }

    /// Creates the Arrow schema for solution rows.
    ///
    /// All columns are non-nullable; tags is a list of Utf8 items.
    fn schema() -> Schema {
        Schema::new(vec![
            Field::new("id", DataType::Int64, false),
            Field::new("title", DataType::Utf8, false),
            Field::new("difficulty", DataType::Utf8, false),
            Field::new("description", DataType::Utf8, false),
            Field::new(
                "tags",
                DataType::List(Arc::new(Field::new("item", DataType::Utf8, true))),
                false,
            ),
            Field::new("language", DataType::Utf8, false),
            Field::new("solution", DataType::Utf8, false),
        ])
    }

    /// Converts buffered rows to a record batch.
    fn to_record_batch(&self) -> Result<RecordBatch> {
        let schema = Arc::new(Self::schema());

        let ids: Int64Array = self.rows.iter().map(|r| Some(r.id)).collect();
        let titles: StringArray = self.rows.iter().map(|r| Some(r.title.as_str())).collect();
        let difficulties: StringArray = self
            .rows
            .iter()
            .map(|r| Some(r.difficulty.as_str()))
            .collect();
        let descriptions: StringArray = self
            .rows
            .iter()
            .map(|r| Some(r.description.as_str()))
            .collect();
        let languages: StringArray = self
            .rows
            .iter()
            .map(|r| Some(r.language.as_str()))
            .collect();
        let solutions: StringArray = self
            .rows
            .iter()
            .map(|r| Some(r.solution.as_str()))
            .collect();

        let mut tags_builder = ListBuilder::new(StringBuilder::new());
        for row in &self.rows {
            for tag in &row.tags {
                tags_builder.values().append_value(tag);
            }
            tags_builder.append(true);
        }
        let tags = tags_builder.finish();

        let columns: Vec<ArrayRef> = vec![
            Arc::new(ids),
            Arc::new(titles),
            Arc::new(difficulties),
            Arc::new(descriptions),
            Arc::new(tags),
            Arc::new(languages),
            Arc::new(solutions),
        ];

        RecordBatch::try_new(schema, columns).map_err(|e| Error::OperationFailed {
            operation: "build_record_batch".to_string(),
            cause: e.to_string(),
        })
    }
}

impl<W: Write + Send> RowSink for ParquetRowSink<W> {
    fn write(&mut self, row: &SolutionRow) -> Result<()> {
        self.rows.push(row.clone());
        Ok(())
    }

    fn finalize(mut self: Box<Self>) -> Result<()> {
        let writer = self.writer.take().ok_or_else(|| Error::OperationFailed {
            operation: "finalize_parquet".to_string(),
            cause: "writer already consumed".to_string(),
        })?;

        let schema = Arc::new(Self::schema());
        let props = WriterProperties::builder()
            .set_compression(Compression::SNAPPY)
            .build();

        let mut arrow_writer =
            ArrowWriter::try_new(writer, schema, Some(props)).map_err(|e| {
                Error::OperationFailed {
                    operation: "create_parquet_writer".to_string(),
                    cause: e.to_string(),
                }
            })?;

        let batch = self.to_record_batch()?;
        arrow_writer.write(&batch).map_err(|e| Error::OperationFailed {
            operation: "write_parquet_batch".to_string(),
            cause: e.to_string(),
        })?;

        arrow_writer.close().map_err(|e| Error::OperationFailed {
            operation: "close_parquet_writer".to_string(),
            cause: e.to_string(),
        })?;

        Ok(())
    }
}
