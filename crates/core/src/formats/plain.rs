//! Best-effort extraction for content whose format could not be detected.

use super::CueExtractor;
use crate::clean::clean_html_tags;
use crate::cue::CueBuffer;
use crate::error::Result;
use crate::patterns::{is_sequence_number, is_timestamp_line, split_lines};

/// Extractor that keeps every line that is not a timing line, a bare number or blank.
///
/// Blank lines separate cues.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainExtractor;

impl PlainExtractor {
    /// Create a new fallback extractor.
    pub fn new() -> Self {
        Self
    }
}

impl CueExtractor for PlainExtractor {
    fn extract_cues(&self, content: &str, cues: &mut CueBuffer) -> Result<()> {
        for raw in split_lines(content) {
            let line = raw.trim();

            if line.is_empty() {
                cues.finalize();
            } else if !is_timestamp_line(line) && !is_sequence_number(line) {
                cues.push(clean_html_tags(line));
            }
        }

        cues.finalize();
        Ok(())
    }
}
