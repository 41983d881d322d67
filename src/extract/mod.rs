//! Extraction of structured fields from the solutions tree.
//!
//! Three independent pieces feed the orchestrator:
//! - [`LanguageMap`]: file extension to canonical language label
//! - [`parse_problem_dir`]: directory base name to (id, title)
//! - [`extract_metadata`]: metadata document to (difficulty, tags, description)

mod dirname;
mod language;
mod metadata;

pub use dirname::parse_problem_dir;
pub use language::LanguageMap;
pub use metadata::{ProblemMeta, extract_metadata};
