//! Format dispatch and the end-to-end extraction entry points.

use crate::cue::CueBuffer;
use crate::detect::detect;
use crate::error::{ErrorKind, Result};
use crate::formats::{
    AssExtractor, CueExtractor, PlainExtractor, SbvExtractor, SmiExtractor, SrtExtractor,
};
use crate::types::{ExtractionResult, RawInput, SubtitleFormat};

/// Extracts dialogue text from subtitle content.
#[derive(Debug, Clone)]
pub struct SubtitleExtractor {
    /// Whether SSA/ASS `Comment:` events are extracted.
    include_ass_comments: bool,
}

impl Default for SubtitleExtractor {
    fn default() -> Self {
        Self {
            include_ass_comments: true,
        }
    }
}

impl SubtitleExtractor {
    /// Create an extractor with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether SSA/ASS `Comment:` events are extracted.
    pub fn with_ass_comments(mut self, include: bool) -> Self {
        self.include_ass_comments = include;
        self
    }

    /// Extract text from content already known to be in `format`.
    ///
    /// Returns the trimmed text, one cue per paragraph. Only malformed SMI
    /// markup is an error; an empty string means nothing was found.
    pub fn extract(&self, content: &str, format: SubtitleFormat) -> Result<String> {
        let mut cues = CueBuffer::new();

        match format {
            SubtitleFormat::Srt => SrtExtractor::srt().extract_cues(content, &mut cues)?,
            SubtitleFormat::Vtt => SrtExtractor::vtt().extract_cues(content, &mut cues)?,
            SubtitleFormat::Sbv => SbvExtractor::new().extract_cues(content, &mut cues)?,
            SubtitleFormat::AssSsa => AssExtractor::new()
                .with_comments(self.include_ass_comments)
                .extract_cues(content, &mut cues)?,
            SubtitleFormat::Smi => SmiExtractor::new().extract_cues(content, &mut cues)?,
            SubtitleFormat::Unknown => PlainExtractor::new().extract_cues(content, &mut cues)?,
        }

        log::debug!("Extracted {} cues as {}", cues.cue_count(), format);
        Ok(cues.into_text())
    }

    /// Detect the format of an input and extract its text.
    pub fn process(&self, input: &RawInput) -> Result<ExtractionResult> {
        let format = detect(content_of(input), input.file_name_hint.as_deref());
        log::debug!(
            "Detected {} for {}",
            format,
            input.file_name_hint.as_deref().unwrap_or("pasted text")
        );
        self.process_as(input, format)
    }

    /// Extract an input as a given format, skipping detection.
    pub fn process_as(&self, input: &RawInput, format: SubtitleFormat) -> Result<ExtractionResult> {
        if format == SubtitleFormat::Unknown {
            log::warn!("Subtitle format not recognized, falling back to generic extraction");
        }

        let text = self.extract(content_of(input), format)?;

        let error = if text.is_empty() {
            Some(ErrorKind::NoTextExtracted)
        } else if format == SubtitleFormat::Unknown {
            Some(ErrorKind::FormatUndetected)
        } else {
            None
        };

        Ok(ExtractionResult {
            text,
            format,
            error,
        })
    }
}

/// Input text without a leading byte-order mark.
fn content_of(input: &RawInput) -> &str {
    input
        .content
        .strip_prefix('\u{feff}')
        .unwrap_or(&input.content)
}

/// Extract text from content in a known format with default settings.
pub fn extract(content: &str, format: SubtitleFormat) -> Result<String> {
    SubtitleExtractor::new().extract(content, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_dispatch_by_format() {
        let srt = "1\n00:00:01,000 --> 00:00:02,000\nHello\n";
        assert_eq!(extract(srt, SubtitleFormat::Srt).unwrap(), "Hello");
        // The same text read as SBV has no SBV timing lines
        assert_eq!(extract(srt, SubtitleFormat::Sbv).unwrap(), "");
    }

    #[test]
    fn test_process_detects_and_extracts() {
        let input = RawInput::new("WEBVTT\n\n00:00:00.000 --> 00:00:01.000\n<v Alice>Hi there</v>\n")
            .with_file_name("talk.vtt");
        let result = SubtitleExtractor::new().process(&input).unwrap();
        assert_eq!(result.format, SubtitleFormat::Vtt);
        assert_eq!(result.text, "Hi there");
        assert_eq!(result.error, None);
    }

    #[test]
    fn test_process_ignores_bom() {
        let content = "\u{feff}WEBVTT\n\n00:00:00.000 --> 00:00:01.000\nHi\n";
        let result = SubtitleExtractor::new().process(&RawInput::new(content)).unwrap();
        assert_eq!(result.format, SubtitleFormat::Vtt);
        assert_eq!(result.text, "Hi");

        // Built field by field, bypassing the constructor
        let input = RawInput {
            content: content.to_string(),
            file_name_hint: None,
        };
        let result = SubtitleExtractor::new().process(&input).unwrap();
        assert_eq!(result.format, SubtitleFormat::Vtt);
        assert_eq!(result.text, "Hi");
    }

    #[test]
    fn test_process_unknown_warns() {
        let input = RawInput::new("just some pasted words\n\nand more");
        let result = SubtitleExtractor::new().process(&input).unwrap();
        assert_eq!(result.format, SubtitleFormat::Unknown);
        assert_eq!(result.text, "just some pasted words\nand more");
        assert_eq!(result.error, Some(ErrorKind::FormatUndetected));
    }

    #[test]
    fn test_process_empty_result() {
        let input = RawInput::new("WEBVTT\n\nNOTE nothing here\n");
        let result = SubtitleExtractor::new().process(&input).unwrap();
        assert_eq!(result.format, SubtitleFormat::Vtt);
        assert!(result.is_empty());
        assert_eq!(result.error, Some(ErrorKind::NoTextExtracted));
    }

    #[test]
    fn test_process_malformed_smi() {
        let input = RawInput::new("<SAMI><BODY><SYNC Start=\"0\"><P>oops</BODY></SAMI>");
        let result = SubtitleExtractor::new().process(&input);
        assert!(matches!(result, Err(Error::MarkupParseError(_))));
    }

    #[test]
    fn test_ass_comment_setting() {
        let content = "[Script Info]\n[Events]\n\
                       Comment: 0,0:00:01.00,0:00:02.00,Default,,0,0,0,,Note\n\
                       Dialogue: 0,0:00:02.00,0:00:03.00,Default,,0,0,0,,Line\n";
        assert_eq!(
            SubtitleExtractor::new().extract(content, SubtitleFormat::AssSsa).unwrap(),
            "Note\nLine"
        );
        assert_eq!(
            SubtitleExtractor::new()
                .with_ass_comments(false)
                .extract(content, SubtitleFormat::AssSsa)
                .unwrap(),
            "Line"
        );
    }
}
