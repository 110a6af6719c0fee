//! SubStation Alpha / Advanced SubStation Alpha cue extraction.

use super::CueExtractor;
use crate::clean::clean_ssa_tags;
use crate::cue::CueBuffer;
use crate::error::Result;
use crate::patterns::{split_lines, starts_with_ignore_case};

/// Number of comma-separated fields before the free-form text of an event line.
const FIELDS_BEFORE_TEXT: usize = 9;

/// Extractor for SSA/ASS scripts.
///
/// Only event lines inside the `[Events]` section are read. Each event is one
/// cue; `\N` escapes inside it become line breaks.
#[derive(Debug, Clone, Copy)]
pub struct AssExtractor {
    /// Whether `Comment:` events are extracted alongside `Dialogue:` events.
    include_comments: bool,
}

impl Default for AssExtractor {
    fn default() -> Self {
        Self {
            include_comments: true,
        }
    }
}

impl AssExtractor {
    /// Create an extractor that reads both dialogue and comment events.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether `Comment:` events are extracted.
    pub fn with_comments(mut self, include: bool) -> Self {
        self.include_comments = include;
        self
    }

    fn is_event_line(&self, line: &str) -> bool {
        starts_with_ignore_case(line, "dialogue:")
            || (self.include_comments && starts_with_ignore_case(line, "comment:"))
    }
}

impl CueExtractor for AssExtractor {
    fn extract_cues(&self, content: &str, cues: &mut CueBuffer) -> Result<()> {
        let mut in_events = false;

        for raw in split_lines(content) {
            let line = raw.trim();

            if line.eq_ignore_ascii_case("[events]") {
                in_events = true;
                continue;
            }
            if line.starts_with('[') && line.ends_with(']') {
                in_events = false;
                continue;
            }

            if !in_events || !self.is_event_line(line) {
                continue;
            }

            cues.finalize();

            // The text field may itself contain commas.
            let fields: Vec<&str> = line.split(',').collect();
            if fields.len() > FIELDS_BEFORE_TEXT {
                let text = fields[FIELDS_BEFORE_TEXT..].join(",");
                cues.push(clean_ssa_tags(text.trim()));
                cues.finalize();
            }
        }

        Ok(())
    }
}
