//! YouTube SBV cue extraction.

use super::CueExtractor;
use crate::clean::clean_html_tags;
use crate::cue::CueBuffer;
use crate::error::Result;
use crate::patterns::{is_sbv_timestamp_line, split_lines};

/// Extractor for SBV content.
///
/// A cue is the run of non-blank lines following a `start,end` timing line.
/// Anything not inside such a run is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct SbvExtractor;

impl SbvExtractor {
    /// Create a new SBV extractor.
    pub fn new() -> Self {
        Self
    }
}

impl CueExtractor for SbvExtractor {
    fn extract_cues(&self, content: &str, cues: &mut CueBuffer) -> Result<()> {
        let lines = split_lines(content);
        let mut i = 0;

        while i < lines.len() {
            if !is_sbv_timestamp_line(lines[i].trim()) {
                i += 1;
                continue;
            }

            cues.finalize();
            i += 1;

            while i < lines.len() {
                let line = lines[i].trim();
                if line.is_empty() || is_sbv_timestamp_line(line) {
                    break;
                }
                cues.push(clean_html_tags(line));
                i += 1;
            }

            cues.finalize();
        }

        Ok(())
    }
}
