//! # Leetset
//!
//! Converts a LeetCode-style solutions repository into a tabular dataset.
//!
//! A solutions repository is a tree of per-problem directories, each named
//! `<id>.<title>` and containing a `README_EN.md` metadata document plus one
//! or more `Solution.*` source files. Leetset walks that tree and emits one
//! row per (problem, language) pair into a Parquet, CSV, or NDJSON file.
//!
//! ## Example
//!
//! ```rust,ignore
//! use leetset::{ConvertService, Format};
//!
//! let service = ConvertService::new("leetcode/solution");
//! let file = std::fs::File::create("solutions.parquet")?;
//! let report = service.convert_to_writer(file, Format::Parquet)?;
//! println!("{} rows from {} problems", report.rows_written, report.processed);
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error as ThisError;

// Module declarations
pub mod config;
pub mod extract;
pub mod io;
pub mod models;
pub mod services;

// Re-exports for convenience
pub use config::ConvertConfig;
pub use extract::LanguageMap;
pub use io::formats::Format;
pub use io::traits::RowSink;
pub use models::SolutionRow;
pub use services::{ConvertReport, ConvertService};

/// Error type for leetset operations.
///
/// Uses `thiserror` for automatic `Display` and `Error` trait implementations.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `InvalidInput` | Directory name does not match `<id>.<title>`, malformed frontmatter, missing description markers, unknown format selector |
/// | `OperationFailed` | Filesystem I/O errors, serialization failures, sink construction failures |
#[derive(Debug, ThisError)]
pub enum Error {
    /// Invalid input was provided.
    ///
    /// Raised when:
    /// - A problem directory name does not match the `<digits>.<title>` shape
    /// - A metadata document has malformed or unterminated YAML frontmatter
    /// - The description markers are missing or out of order
    /// - An unknown output format selector is given
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation failed.
    ///
    /// Raised when:
    /// - Filesystem I/O errors occur (unreadable tree, unreadable files)
    /// - A row fails to serialize or the sink fails to write
    /// - A format writer cannot be constructed or finalized
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

/// Result type alias for leetset operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidInput("test error".to_string());
        assert_eq!(err.to_string(), "invalid input: test error");

        let err = Error::OperationFailed {
            operation: "test".to_string(),
            cause: "failed".to_string(),
        };
        assert_eq!(err.to_string(), "operation 'test' failed: failed");
    }
}
