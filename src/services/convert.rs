//! Conversion service.
//!
//! Walks the solutions tree, extracts per-problem metadata, and pushes one
//! row per (problem, language) pair into a [`RowSink`].
//!
//! The walk is single-threaded and synchronous: output order must match
//! traversal order, and the sink is one shared resource written by exactly
//! one writer. Traversal is sorted by file name so two runs over an
//! unchanged tree produce identical output.

use crate::extract::{LanguageMap, extract_metadata, parse_problem_dir};
use crate::io::formats::{Format, create_row_sink};
use crate::io::traits::RowSink;
use crate::models::SolutionRow;
use crate::{Error, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// File name identifying a problem directory.
pub const METADATA_FILE: &str = "README_EN.md";

/// Prefix identifying candidate solution files.
pub const SOLUTION_PREFIX: &str = "Solution.";

/// Result of a conversion run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertReport {
    /// Problem directories whose metadata document was encountered.
    pub processed: usize,
    /// Directories skipped with a directory-scoped failure.
    pub failed: usize,
    /// Rows written to the sink.
    pub rows_written: usize,
}

impl ConvertReport {
    /// Returns whether every encountered directory converted cleanly.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.failed == 0
    }
}

/// Service converting a solutions tree into a tabular dataset.
pub struct ConvertService {
    /// Root of the tree walk.
    root: PathBuf,
    /// Extension to language mapping.
    languages: LanguageMap,
}

impl ConvertService {
    /// Creates a conversion service over the given root with the built-in
    /// language mapping.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            languages: LanguageMap::builtin(),
        }
    }

    /// Replaces the language mapping.
    #[must_use]
    pub fn with_languages(mut self, languages: LanguageMap) -> Self {
        self.languages = languages;
        self
    }

    /// Converts the tree into the given writer using the selected format.
    ///
    /// The sink is built up front (construction failure is fatal) and
    /// finalized exactly once on every exit path, including a failed walk. A
    /// finalize failure is logged rather than propagated, since there is no
    /// recovery path for it.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink cannot be constructed or the tree walk
    /// itself fails (for example a missing root).
    pub fn convert_to_writer<W: Write + Send + 'static>(
        &self,
        writer: W,
        format: Format,
    ) -> Result<ConvertReport> {
        let mut sink = create_row_sink(writer, format)?;
        // Finalize on every exit path; rows written before a mid-walk
        // failure still reach the output.
        let result = self.convert_to_sink(sink.as_mut());
        if let Err(e) = sink.finalize() {
            warn!(error = %e, "failed to finalize output");
        }
        result
    }

    /// Converts the tree into an already-constructed sink.
    ///
    /// The sink is not finalized; the caller owns that step.
    ///
    /// # Errors
    ///
    /// Returns an error only for traversal-level failures. Directory- and
    /// file-scoped failures are logged, counted, and recovered locally.
    pub fn convert_to_sink(&self, sink: &mut dyn RowSink) -> Result<ConvertReport> {
        let mut report = ConvertReport::default();
        let root_metadata = self.root.join(METADATA_FILE);

        for entry in WalkDir::new(&self.root).sort_by_file_name() {
            let entry = entry.map_err(|e| Error::OperationFailed {
                operation: "walk_tree".to_string(),
                cause: e.to_string(),
            })?;

            if entry.file_type().is_dir()
                || entry.file_name() != METADATA_FILE
                || entry.path() == root_metadata
            {
                continue;
            }

            let Some(dir) = entry.path().parent() else {
                continue;
            };

            report.processed += 1;
            if let Err(e) = self.process_dir(dir, sink, &mut report.rows_written) {
                report.failed += 1;
                warn!(dir = %dir.display(), error = %e, "skipping problem directory");
            }

            if report.processed % 100 == 0 {
                info!(processed = report.processed, "processed directories");
            }
        }

        info!(
            processed = report.processed,
            failed = report.failed,
            rows = report.rows_written,
            "processing complete"
        );
        Ok(report)
    }

    /// Processes one problem directory, emitting one row per recognized
    /// solution file.
    ///
    /// Returns an error for directory-scoped failures; file-scoped failures
    /// are logged and skipped inside the loop.
    fn process_dir(
        &self,
        dir: &Path,
        sink: &mut dyn RowSink,
        rows_written: &mut usize,
    ) -> Result<()> {
        let dir_name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let (id, title) = parse_problem_dir(&dir_name)?;

        let document =
            fs::read_to_string(dir.join(METADATA_FILE)).map_err(|e| Error::OperationFailed {
                operation: "read_metadata".to_string(),
                cause: e.to_string(),
            })?;
        let meta = extract_metadata(&document)?;

        let mut entries: Vec<_> = fs::read_dir(dir)
            .map_err(|e| Error::OperationFailed {
                operation: "read_dir".to_string(),
                cause: e.to_string(),
            })?
            .filter_map(std::result::Result::ok)
            .collect();
        entries.sort_by_key(std::fs::DirEntry::file_name);

        let mut recognized = 0;
        for file in entries {
            let file_name = file.file_name().to_string_lossy().into_owned();
            let is_dir = file.file_type().is_ok_and(|t| t.is_dir());
            if is_dir || !file_name.starts_with(SOLUTION_PREFIX) {
                continue;
            }

            let extension = extension_of(&file_name);
            let Some(language) = self.languages.resolve(&extension) else {
                warn!(file = %file_name, dir = %dir_name, ext = %extension, "unknown solution language");
                continue;
            };
            recognized += 1;

            let solution = match fs::read_to_string(file.path()) {
                Ok(content) => content,
                Err(e) => {
                    warn!(file = %file_name, error = %e, "failed to read solution file");
                    continue;
                },
            };

            let row = SolutionRow {
                id,
                title: title.clone(),
                difficulty: meta.difficulty.clone(),
                description: meta.description.clone(),
                tags: meta.tags.clone(),
                language: language.to_string(),
                solution,
            };

            if let Err(e) = sink.write(&row) {
                warn!(file = %file_name, error = %e, "failed to write row");
                continue;
            }
            *rows_written += 1;
            debug!(id, language, "wrote row");
        }

        if recognized == 0 {
            return Err(Error::InvalidInput(format!(
                "no solution files found in {dir_name}"
            )));
        }

        Ok(())
    }
}

/// Returns the file extension including the leading dot, or an empty string.
fn extension_of(file_name: &str) -> String {
    file_name
        .rfind('.')
        .map(|i| file_name[i..].to_string())
        .unwrap_or_default()
}
