//! Extension to language resolution.

/// Immutable mapping from file extension to canonical language label.
///
/// Built once at startup and injected into the walker rather than referenced
/// as ambient global state, which keeps resolution independently testable.
#[derive(Debug, Clone)]
pub struct LanguageMap {
    entries: &'static [(&'static str, &'static str)],
}

/// The closed set of recognized solution-file extensions.
const BUILTIN: &[(&str, &str)] = &[
    (".c", "C"),
    (".cj", "Cangjie"),
    (".cpp", "C++"),
    (".cs", "C#"),
    (".dart", "Dart"),
    (".go", "Go"),
    (".java", "Java"),
    (".js", "JavaScript"),
    (".kt", "Kotlin"),
    (".nim", "Nim"),
    (".php", "PHP"),
    (".py", "Python"),
    (".rb", "Ruby"),
    (".rs", "Rust"),
    (".scala", "Scala"),
    (".sh", "Bash"),
    (".sql", "SQL"),
    (".swift", "Swift"),
    (".ts", "TypeScript"),
];

impl LanguageMap {
    /// Creates the map with the built-in extension table.
    #[must_use]
    pub const fn builtin() -> Self {
        Self { entries: BUILTIN }
    }

    /// Resolves a file extension (including the leading dot, e.g. `.py`) to
    /// its canonical language label.
    ///
    /// Returns `None` for extensions outside the closed mapping. An
    /// unrecognized extension is never an error; the caller decides whether
    /// to skip the file.
    #[must_use]
    pub fn resolve(&self, extension: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(ext, _)| *ext == extension)
            .map(|(_, language)| *language)
    }

    /// Returns the number of recognized extensions.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the map is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for LanguageMap {
    fn default() -> Self {
        Self::builtin()
    }
}
