//! Merging extracted text into a single paragraph.
//!
//! Collapses blank-line runs, then joins every remaining line with a
//! configurable separator (default: a single space).

use regex::Regex;
use std::sync::LazyLock;

/// A newline, optional whitespace, and another newline.
static BLANK_RUN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Joins the lines of extracted text into one paragraph.
#[derive(Debug, Clone)]
pub struct LineMerger {
    /// Text placed between consecutive lines.
    separator: String,
}

impl Default for LineMerger {
    fn default() -> Self {
        Self {
            separator: " ".to_string(),
        }
    }
}

impl LineMerger {
    /// Create a merger that joins lines with a single space.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom separator between lines.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Merge text into one paragraph.
    ///
    /// # Example output
    /// ```text
    /// Hello there General Kenobi
    /// ```
    /// for the input `"Hello there\n\nGeneral Kenobi\n"`.
    pub fn merge(&self, text: &str) -> String {
        let collapsed = BLANK_RUN_REGEX.replace_all(text, "\n");
        let collapsed = collapsed.trim();

        if collapsed.is_empty() {
            return String::new();
        }

        collapsed.split('\n').collect::<Vec<_>>().join(&self.separator)
    }
}
