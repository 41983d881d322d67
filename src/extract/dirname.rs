//! Problem directory name parsing.

use crate::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Matches `<digits>.<title>`, e.g. `146.LRU-Cache`.
static DIR_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+)\.(.+)$").unwrap_or_else(|e| panic!("invalid directory name regex: {e}"))
});

/// Parses a problem directory base name into (id, title).
///
/// The name must match `<digits>.<title>`; the digits become the numeric
/// problem id and the remainder becomes the title.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if the name does not match the expected
/// shape, the id is not strictly positive, or the id does not fit in an
/// `i64`. This is fatal for the one directory, not for the overall run.
pub fn parse_problem_dir(name: &str) -> Result<(i64, String)> {
    let captures = DIR_NAME
        .captures(name)
        .ok_or_else(|| Error::InvalidInput(format!("directory name does not match: {name}")))?;

    let id = captures[1]
        .parse::<i64>()
        .map_err(|e| Error::InvalidInput(format!("invalid problem id in {name}: {e}")))?;
    if id <= 0 {
        return Err(Error::InvalidInput(format!(
            "problem id must be positive: {name}"
        )));
    }

    Ok((id, captures[2].to_string()))
}
