//! The output row type.

use serde::{Deserialize, Serialize};

/// One (problem, language) record in the output dataset.
///
/// A row is assembled transiently per solution file, handed to the sink, and
/// dropped. All rows from the same problem directory share `id`, `title`,
/// `difficulty`, `description`, and `tags`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionRow {
    /// Problem identifier, parsed from the directory name. Strictly positive.
    pub id: i64,
    /// Problem title, parsed from the directory name.
    pub title: String,
    /// Difficulty label (Easy/Medium/Hard), or empty if the frontmatter
    /// omitted it.
    pub difficulty: String,
    /// Markdown problem description. May be empty.
    pub description: String,
    /// Topic tags in frontmatter order.
    pub tags: Vec<String>,
    /// Canonical language label for the solution file.
    pub language: String,
    /// Full solution source text.
    pub solution: String,
}

impl SolutionRow {
    /// Separator used when a format needs the tag sequence as one string.
    pub const TAG_SEPARATOR: &'static str = "; ";

    /// Output field names, in column order.
    pub const FIELDS: [&'static str; 7] = [
        "id",
        "title",
        "difficulty",
        "description",
        "tags",
        "language",
        "solution",
    ];

    /// Returns the tag sequence joined with [`Self::TAG_SEPARATOR`].
    #[must_use]
    pub fn tags_joined(&self) -> String {
        self.tags.join(Self::TAG_SEPARATOR)
    }
}
