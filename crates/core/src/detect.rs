//! Subtitle format detection.
//!
//! Content sniffing wins over the filename, since pasted text has no name
//! and uploaded files are often mislabeled. The extension is only consulted
//! to force an SBV check and as a last resort.

use crate::patterns::{contains_sbv_timestamp, is_sbv_timestamp_line, split_lines};
use crate::types::SubtitleFormat;

/// File extensions accepted by the extraction tools.
pub const ACCEPTED_EXTENSIONS: &[&str] = &[".srt", ".vtt", ".ass", ".ssa", ".sbv", ".smi"];

/// Lowercased extension of a filename, without the dot.
fn file_extension(file_name: &str) -> Option<String> {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
}

/// Whether a filename ends with one of the [`ACCEPTED_EXTENSIONS`].
pub fn is_supported_file_name(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    ACCEPTED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Classify subtitle content, using the filename only as a hint.
///
/// Never fails: content that matches nothing is [`SubtitleFormat::Unknown`].
pub fn detect(content: &str, file_name_hint: Option<&str>) -> SubtitleFormat {
    let ext = file_name_hint.and_then(file_extension);

    if content.to_ascii_uppercase().contains("<SAMI>") {
        return SubtitleFormat::Smi;
    }

    if content.contains("[Script Info]") && content.contains("[Events]") {
        return SubtitleFormat::AssSsa;
    }

    if content
        .get(..6)
        .is_some_and(|head| head.eq_ignore_ascii_case("WEBVTT"))
    {
        return SubtitleFormat::Vtt;
    }

    if (ext.as_deref() == Some("sbv") || contains_sbv_timestamp(content)) && looks_like_sbv(content)
    {
        return SubtitleFormat::Sbv;
    }

    if content.contains("-->") {
        return SubtitleFormat::Srt;
    }

    match ext.as_deref().and_then(SubtitleFormat::from_extension) {
        // An .sbv file that failed the content check above stays undetected.
        Some(SubtitleFormat::Sbv) | None => SubtitleFormat::Unknown,
        Some(format) => format,
    }
}

/// SBV confirmation: the first line is a timing pair and the second has text.
fn looks_like_sbv(content: &str) -> bool {
    let lines = split_lines(content);
    lines.len() > 1 && is_sbv_timestamp_line(lines[0].trim()) && !lines[1].trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_sami() {
        assert_eq!(detect("<sami><body></body></sami>", None), SubtitleFormat::Smi);
        assert_eq!(
            detect("<SAMI>\n1\n00:00:01,000 --> 00:00:02,000\n", Some("a.srt")),
            SubtitleFormat::Smi
        );
    }

    #[test]
    fn test_detect_ass() {
        let content = "[Script Info]\nTitle: x\n\n[Events]\n";
        assert_eq!(detect(content, None), SubtitleFormat::AssSsa);
        // Section names are case-sensitive for sniffing
        assert_eq!(detect("[script info]\n[events]\n", None), SubtitleFormat::Unknown);
        assert_eq!(
            detect("[script info]\n[events]\n", Some("x.ssa")),
            SubtitleFormat::AssSsa
        );
    }

    #[test]
    fn test_detect_vtt() {
        assert_eq!(detect("WEBVTT\n\n00:00.000 --> 00:01.000\nHi", None), SubtitleFormat::Vtt);
        assert_eq!(detect("webvtt", None), SubtitleFormat::Vtt);
        // Must be at the very start
        assert_eq!(detect("\nWEBVTT\n", Some("a.vtt")), SubtitleFormat::Vtt);
        assert_eq!(detect("\nWEBVTT\n", None), SubtitleFormat::Unknown);
    }

    #[test]
    fn test_detect_sbv() {
        let content = "0:00:01.000,0:00:02.000\nHello\n";
        assert_eq!(detect(content, None), SubtitleFormat::Sbv);
        assert_eq!(detect(content, Some("clip.srt")), SubtitleFormat::Sbv);
    }

    #[test]
    fn test_detect_sbv_needs_confirmation() {
        // Timing pair present, but not on the first line
        let content = "Intro\n0:00:01.000,0:00:02.000\nHello\n";
        assert_eq!(detect(content, None), SubtitleFormat::Unknown);

        // First line matches, second line empty
        let content = "0:00:01.000,0:00:02.000\n\nHello\n";
        assert_eq!(detect(content, Some("clip.sbv")), SubtitleFormat::Unknown);
    }

    #[test]
    fn test_detect_srt() {
        let content = "1\n00:00:01,000 --> 00:00:02,000\nHello\n";
        assert_eq!(detect(content, None), SubtitleFormat::Srt);
        assert_eq!(detect(content, Some("mislabeled.vtt")), SubtitleFormat::Srt);
    }

    #[test]
    fn test_detect_extension_fallback() {
        assert_eq!(detect("Hello", Some("a.SRT")), SubtitleFormat::Srt);
        assert_eq!(detect("Hello", Some("a.vtt")), SubtitleFormat::Vtt);
        assert_eq!(detect("Hello", Some("a.ass")), SubtitleFormat::AssSsa);
        assert_eq!(detect("Hello", Some("a.ssa")), SubtitleFormat::AssSsa);
        assert_eq!(detect("Hello", Some("a.smi")), SubtitleFormat::Smi);
        assert_eq!(detect("Hello", Some("a.txt")), SubtitleFormat::Unknown);
        assert_eq!(detect("Hello", Some("noext")), SubtitleFormat::Unknown);
        assert_eq!(detect("Hello", None), SubtitleFormat::Unknown);
    }

    #[test]
    fn test_supported_file_names() {
        assert!(is_supported_file_name("movie.en.SRT"));
        assert!(is_supported_file_name("a.smi"));
        assert!(!is_supported_file_name("notes.txt"));
        assert!(!is_supported_file_name("srt"));
    }

    #[test]
    fn test_file_extension() {
        assert_eq!(file_extension("movie.en.SRT").as_deref(), Some("srt"));
        assert_eq!(file_extension("noext"), None);
    }
}
