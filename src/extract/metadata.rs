//! Metadata document extraction.
//!
//! The per-problem `README_EN.md` carries YAML frontmatter followed by a
//! markdown body with an HTML-comment-delimited description region:
//!
//! ```text
//! ---
//! difficulty: Medium
//! tags:
//!   - Hash Table
//!   - Design
//! ---
//!
//! <!-- description:start -->
//! Design a data structure...
//! <!-- description:end -->
//! ```
//!
//! The frontmatter is load-bearing, so malformed or unterminated frontmatter
//! and missing description markers are extraction failures. The caller treats
//! them as directory-scoped: the directory yields no rows and the walk
//! continues.

use crate::{Error, Result};
use serde::Deserialize;

/// The frontmatter delimiter line.
const DELIMITER: &str = "---";

/// Start marker for the description region.
const DESC_START: &str = "<!-- description:start -->";

/// End marker for the description region.
const DESC_END: &str = "<!-- description:end -->";

/// Frontmatter fields of a metadata document.
#[derive(Debug, Default, Deserialize)]
struct FrontMatter {
    /// Difficulty label. Empty when the document omits it.
    #[serde(default)]
    difficulty: String,
    /// Topic tags in document order.
    #[serde(default)]
    tags: Vec<String>,
}

/// Structured fields recovered from one metadata document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProblemMeta {
    /// Difficulty label (Easy/Medium/Hard), or empty.
    pub difficulty: String,
    /// Topic tags in frontmatter order.
    pub tags: Vec<String>,
    /// Description text between the markers, trimmed.
    pub description: String,
}

/// Extracts (difficulty, tags, description) from a metadata document.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if the frontmatter delimiters are missing,
/// the frontmatter YAML is malformed, or the description markers are missing
/// or out of order.
pub fn extract_metadata(document: &str) -> Result<ProblemMeta> {
    let lines: Vec<&str> = document.lines().collect();

    let (front_matter, body_start) = parse_front_matter(&lines)?;
    let description = parse_description(&lines[body_start..])?;

    Ok(ProblemMeta {
        difficulty: front_matter.difficulty,
        tags: front_matter.tags,
        description,
    })
}

/// Parses the frontmatter block and returns it with the index of the first
/// body line.
fn parse_front_matter(lines: &[&str]) -> Result<(FrontMatter, usize)> {
    // The document must open with a delimiter line; tolerate leading blanks.
    let open = lines
        .iter()
        .position(|line| !line.trim().is_empty())
        .filter(|&i| lines[i].trim_end() == DELIMITER)
        .ok_or_else(|| Error::InvalidInput("missing frontmatter delimiter".to_string()))?;

    let close = lines
        .iter()
        .skip(open + 1)
        .position(|line| line.trim_end() == DELIMITER)
        .map(|i| open + 1 + i)
        .ok_or_else(|| Error::InvalidInput("unterminated frontmatter".to_string()))?;

    let yaml = lines[open + 1..close].join("\n");
    let front_matter: FrontMatter = if yaml.trim().is_empty() {
        FrontMatter::default()
    } else {
        serde_yaml_ng::from_str(&yaml)
            .map_err(|e| Error::InvalidInput(format!("malformed frontmatter: {e}")))?
    };

    Ok((front_matter, close + 1))
}

/// Extracts the text strictly between the description markers.
fn parse_description(body: &[&str]) -> Result<String> {
    let mut start = None;
    let mut end = None;

    for (i, line) in body.iter().enumerate() {
        if line.contains(DESC_START) {
            start = Some(i);
        }
        if line.contains(DESC_END) {
            end = Some(i);
            break;
        }
    }

    // Both markers on one line leaves no region between them; treat it the
    // same as out-of-order markers.
    match (start, end) {
        (Some(s), Some(e)) if s < e => Ok(body[s + 1..e].join("\n").trim().to_string()),
        _ => Err(Error::InvalidInput(
            "description markers not found".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r"---
difficulty: Medium
tags:
  - Hash Table
  - Linked List
  - Design
---

# 146. LRU Cache

<!-- description:start -->

Design a data structure that follows the constraints of a
**Least Recently Used (LRU) cache**.

<!-- description:end -->

## Solutions
";

    #[test]
    fn test_extract_full_document() {
        let meta = extract_metadata(SAMPLE).unwrap();
        assert_eq!(meta.difficulty, "Medium");
        assert_eq!(meta.tags, vec!["Hash Table", "Linked List", "Design"]);
        assert!(meta.description.starts_with("Design a data structure"));
        assert!(meta.description.ends_with("cache**."));
    }

    #[test]
    fn test_description_is_trimmed() {
        let doc = "---\ndifficulty: Easy\n---\n<!-- description:start -->\n\n  text  \n\n<!-- description:end -->\n";
        let meta = extract_metadata(doc).unwrap();
        assert_eq!(meta.description, "text");
    }

    #[test]
    fn test_inline_tag_list() {
        let doc = "---\ndifficulty: Hard\ntags: [Array, Greedy]\n---\n<!-- description:start -->\nx\n<!-- description:end -->\n";
        let meta = extract_metadata(doc).unwrap();
        assert_eq!(meta.tags, vec!["Array", "Greedy"]);
    }

    #[test]
    fn test_empty_front_matter_defaults() {
        let doc = "---\n---\n<!-- description:start -->\nx\n<!-- description:end -->\n";
        let meta = extract_metadata(doc).unwrap();
        assert_eq!(meta.difficulty, "");
        assert!(meta.tags.is_empty());
    }

    #[test]
    fn test_missing_difficulty_defaults_empty() {
        let doc = "---\ntags: [Array]\n---\n<!-- description:start -->\nx\n<!-- description:end -->\n";
        let meta = extract_metadata(doc).unwrap();
        assert_eq!(meta.difficulty, "");
    }

    #[test]
    fn test_missing_opening_delimiter() {
        let doc = "difficulty: Medium\n<!-- description:start -->\nx\n<!-- description:end -->\n";
        assert!(extract_metadata(doc).is_err());
    }

    #[test]
    fn test_unterminated_front_matter() {
        let doc = "---\ndifficulty: Medium\n";
        assert!(extract_metadata(doc).is_err());
    }

    #[test]
    fn test_malformed_yaml() {
        let doc = "---\ndifficulty: [unclosed\n---\n<!-- description:start -->\nx\n<!-- description:end -->\n";
        assert!(extract_metadata(doc).is_err());
    }

    #[test]
    fn test_missing_description_markers() {
        let doc = "---\ndifficulty: Medium\n---\nNo markers here.\n";
        assert!(extract_metadata(doc).is_err());
    }

    #[test]
    fn test_markers_on_one_line() {
        let doc = "---\ndifficulty: Medium\n---\n<!-- description:start --> x <!-- description:end -->\n";
        assert!(extract_metadata(doc).is_err());
    }

    #[test]
    fn test_end_marker_before_start_marker() {
        let doc = "---\ndifficulty: Medium\n---\n<!-- description:end -->\nx\n<!-- description:start -->\n";
        assert!(extract_metadata(doc).is_err());
    }

    #[test]
    fn test_leading_blank_lines_tolerated() {
        let doc = "\n\n---\ndifficulty: Easy\n---\n<!-- description:start -->\nbody\n<!-- description:end -->\n";
        let meta = extract_metadata(doc).unwrap();
        assert_eq!(meta.difficulty, "Easy");
        assert_eq!(meta.description, "body");
    }
}
