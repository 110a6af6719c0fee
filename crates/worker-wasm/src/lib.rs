//! WASM-compatible wrapper for subtitle text extraction.
//!
//! This crate exposes the extraction engine to JavaScript for use in
//! browsers and Cloudflare Workers.

use subtext_core::{
    is_supported_file_name, Error, ExtractionResult, LineMerger, RawInput, SubtitleExtractor,
};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Extract text from subtitle content.
///
/// # Arguments
/// * `content` - The subtitle text
/// * `file_name` - The original filename, or undefined for pasted text
///
/// # Returns
/// A JavaScript object `{ text, format, error }`, or throws on error.
/// `error` is `"NoTextExtracted"` or `"FormatUndetected"` when extraction
/// ran but the caller should warn, otherwise `null`.
#[wasm_bindgen]
pub fn extract_subtitle(content: &str, file_name: Option<String>) -> Result<JsValue, JsValue> {
    let result = extract_subtitle_impl(content, file_name).map_err(|e| JsValue::from_str(&e))?;

    serde_wasm_bindgen::to_value(&result)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn extract_subtitle_impl(
    content: &str,
    file_name: Option<String>,
) -> Result<ExtractionResult, String> {
    if content.trim().is_empty() {
        return Err("No subtitle content provided".to_string());
    }

    if let Some(name) = file_name.as_deref() {
        if !is_supported_file_name(name) {
            return Err(Error::UnsupportedFileType(name.to_string()).to_string());
        }
    }

    let mut input = RawInput::new(content);
    if let Some(name) = file_name {
        input = input.with_file_name(name);
    }

    SubtitleExtractor::new()
        .process(&input)
        .map_err(|e| e.to_string())
}

/// Merge extracted text into one paragraph.
///
/// # Arguments
/// * `text` - Extracted text, one line per cue
/// * `separator` - Text placed between lines
#[wasm_bindgen]
pub fn merge_lines(text: &str, separator: &str) -> String {
    LineMerger::new().with_separator(separator).merge(text)
}

/// Whether a filename has one of the accepted subtitle extensions.
#[wasm_bindgen]
pub fn is_supported_file(file_name: &str) -> bool {
    is_supported_file_name(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use subtext_core::{ErrorKind, SubtitleFormat};

    #[test]
    fn test_extract_with_file_name() {
        let result = extract_subtitle_impl(
            "1\n00:00:01,000 --> 00:00:02,000\nHello\n\n2\n00:00:03,000 --> 00:00:04,000\nWorld\n",
            Some("clip.srt".to_string()),
        )
        .unwrap();

        assert_eq!(result.format, SubtitleFormat::Srt);
        assert_eq!(result.text, "Hello\nWorld");
        assert_eq!(result.error, None);
    }

    #[test]
    fn test_extract_pasted_text() {
        let result = extract_subtitle_impl("loose words", None).unwrap();

        assert_eq!(result.format, SubtitleFormat::Unknown);
        assert_eq!(result.text, "loose words");
        assert_eq!(result.error, Some(ErrorKind::FormatUndetected));
    }

    #[test]
    fn test_empty_result_reports_kind() {
        let result = extract_subtitle_impl("WEBVTT\n\nNOTE nothing\n", Some("a.vtt".into())).unwrap();

        assert_eq!(result.format, SubtitleFormat::Vtt);
        assert!(result.is_empty());
        assert_eq!(result.error, Some(ErrorKind::NoTextExtracted));
    }

    #[test]
    fn test_rejects_unsupported_file() {
        let err = extract_subtitle_impl("Hello", Some("notes.docx".to_string())).unwrap_err();
        assert!(err.contains("Unsupported file type"));
    }

    #[test]
    fn test_rejects_empty_content() {
        assert!(extract_subtitle_impl("   \n", None).is_err());
    }

    #[test]
    fn test_merge_lines() {
        assert_eq!(merge_lines("a\n\nb\nc", "-"), "a-b-c");
    }
}
