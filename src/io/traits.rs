//! Core trait for dataset output.

use crate::Result;
use crate::models::SolutionRow;

/// Sink for output rows.
///
/// Implementations serialize rows into a specific format (Parquet, CSV,
/// NDJSON). The orchestrator writes rows one at a time in traversal order and
/// finalizes exactly once when the walk completes.
///
/// # Lifecycle
///
/// 1. Create the sink with an output destination
///    ([`crate::io::formats::create_row_sink`])
/// 2. Call `write()` for each row
/// 3. Call `finalize()` to flush buffers and write any footer
///
/// # Example Implementation
///
/// ```rust,ignore
/// impl RowSink for JsonRowSink {
///     fn write(&mut self, row: &SolutionRow) -> Result<()> {
///         serde_json::to_writer(&mut self.writer, row)?;
///         writeln!(self.writer)?;
///         Ok(())
///     }
///
///     fn finalize(self: Box<Self>) -> Result<()> {
///         self.writer.flush()?;
///         Ok(())
///     }
/// }
/// ```
pub trait RowSink {
    /// Writes a single row to the sink.
    ///
    /// A failure here is scoped to the one row; the caller may log and
    /// continue with subsequent rows.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or I/O fails.
    fn write(&mut self, row: &SolutionRow) -> Result<()>;

    /// Finalizes the output, writing any footers and flushing buffers.
    ///
    /// This method consumes the sink. For the columnar format this performs
    /// the actual file write, so skipping it loses the output.
    ///
    /// # Errors
    ///
    /// Returns an error if I/O fails.
    fn finalize(self: Box<Self>) -> Result<()>;
}
