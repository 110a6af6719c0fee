//! SubRip and WebVTT cue extraction.
//!
//! Both formats are blank-line separated blocks introduced by a
//! `start --> end` timing line, so they share one state machine. WebVTT adds
//! a header, metadata lines and STYLE blocks that are skipped; SubRip adds
//! numeric cue indices.

use super::CueExtractor;
use crate::clean::clean_html_tags;
use crate::cue::CueBuffer;
use crate::error::Result;
use crate::patterns::{
    is_sequence_number, is_timestamp_line, is_vtt_metadata, split_lines, starts_with_ignore_case,
};

/// Extractor for SRT and WebVTT content.
#[derive(Debug, Clone, Copy, Default)]
pub struct SrtExtractor {
    /// Apply WebVTT rules (metadata and STYLE skipping) instead of SRT index rules.
    webvtt: bool,
}

impl SrtExtractor {
    /// Extractor for SubRip content.
    pub fn srt() -> Self {
        Self { webvtt: false }
    }

    /// Extractor for WebVTT content.
    pub fn vtt() -> Self {
        Self { webvtt: true }
    }
}

impl CueExtractor for SrtExtractor {
    fn extract_cues(&self, content: &str, cues: &mut CueBuffer) -> Result<()> {
        let lines = split_lines(content);
        let mut in_style_block = false;

        for (index, raw) in lines.iter().enumerate() {
            let line = raw.trim();

            if self.webvtt && starts_with_ignore_case(line, "STYLE") {
                in_style_block = true;
            }
            if in_style_block {
                if line.is_empty() {
                    in_style_block = false;
                }
                continue;
            }

            if self.webvtt && is_vtt_metadata(line) {
                continue;
            }

            if is_timestamp_line(line) {
                cues.finalize();
                continue;
            }

            // Only SRT treats digits as an index, and only right before a timing line.
            if !self.webvtt
                && is_sequence_number(line)
                && lines
                    .get(index + 1)
                    .is_some_and(|next| is_timestamp_line(next.trim()))
            {
                cues.finalize();
                continue;
            }

            if line.is_empty() {
                cues.finalize();
                continue;
            }

            cues.push(clean_html_tags(line));
        }

        cues.finalize();
        Ok(())
    }
}
