//! Configuration management.

use crate::io::formats::Format;
use std::path::{Path, PathBuf};

/// Directory under the repository root holding the per-problem directories.
pub const SOLUTION_SUBDIR: &str = "solution";

/// Configuration for one conversion run.
///
/// Built and validated by the binary; the core receives already-validated
/// values and does not parse arguments or create files itself.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Path to the solutions repository.
    pub repo_path: PathBuf,
    /// Selected output format.
    pub format: Format,
    /// Base name of the output file, without extension.
    pub output_base: String,
}

impl ConvertConfig {
    /// Creates a configuration.
    pub fn new(repo_path: impl Into<PathBuf>, format: Format, output_base: impl Into<String>) -> Self {
        Self {
            repo_path: repo_path.into(),
            format,
            output_base: output_base.into(),
        }
    }

    /// Returns the root under which the tree walk begins.
    #[must_use]
    pub fn walk_root(&self) -> PathBuf {
        self.repo_path.join(SOLUTION_SUBDIR)
    }

    /// Returns the output file path, `<output_base>.<format extension>`.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        Path::new(&self.output_base).with_extension(self.format.extension())
    }
}
