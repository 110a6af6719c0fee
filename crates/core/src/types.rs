//! Domain types for subtitle input and extraction output.

use crate::error::ErrorKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Raw subtitle text handed to the engine, with an optional filename hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawInput {
    /// The subtitle text.
    pub content: String,

    /// Original filename (without path). None for pasted text.
    pub file_name_hint: Option<String>,
}

impl RawInput {
    /// Create input from text with no filename hint.
    ///
    /// A leading byte-order mark is dropped.
    pub fn new(content: impl Into<String>) -> Self {
        let mut content = content.into();
        if content.starts_with('\u{feff}') {
            content.drain(..'\u{feff}'.len_utf8());
        }

        Self {
            content,
            file_name_hint: None,
        }
    }

    /// Attach a filename hint.
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name_hint = Some(name.into());
        self
    }

    /// Decode raw file bytes as text.
    ///
    /// Invalid UTF-8 sequences are replaced and a leading byte-order mark is dropped.
    pub fn from_bytes(bytes: &[u8], file_name: Option<&str>) -> Self {
        Self {
            file_name_hint: file_name.map(str::to_string),
            ..Self::new(String::from_utf8_lossy(bytes))
        }
    }
}

/// The subtitle format of a piece of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubtitleFormat {
    /// SubRip.
    #[serde(rename = "SRT")]
    Srt,
    /// WebVTT.
    #[serde(rename = "VTT")]
    Vtt,
    /// SubStation Alpha / Advanced SubStation Alpha.
    #[serde(rename = "ASS_SSA")]
    AssSsa,
    /// YouTube SubViewer.
    #[serde(rename = "SBV")]
    Sbv,
    /// SAMI.
    #[serde(rename = "SMI")]
    Smi,
    /// Nothing recognizable; extraction falls back to a best-effort pass.
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl SubtitleFormat {
    /// Map a file extension (without the dot) to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "srt" => Some(Self::Srt),
            "vtt" => Some(Self::Vtt),
            "ass" | "ssa" => Some(Self::AssSsa),
            "sbv" => Some(Self::Sbv),
            "smi" => Some(Self::Smi),
            _ => None,
        }
    }

    /// Parse a user-supplied format name such as `srt` or `ASS_SSA`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "SRT" => Some(Self::Srt),
            "VTT" | "WEBVTT" => Some(Self::Vtt),
            "ASS" | "SSA" | "ASS_SSA" => Some(Self::AssSsa),
            "SBV" => Some(Self::Sbv),
            "SMI" | "SAMI" => Some(Self::Smi),
            "UNKNOWN" => Some(Self::Unknown),
            _ => None,
        }
    }

    /// Display label, e.g. `ASS_SSA`.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Srt => "SRT",
            Self::Vtt => "VTT",
            Self::AssSsa => "ASS_SSA",
            Self::Sbv => "SBV",
            Self::Smi => "SMI",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for SubtitleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of running detection and extraction over one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Extracted text, one paragraph per cue.
    pub text: String,

    /// Format the content was extracted as.
    pub format: SubtitleFormat,

    /// Soft condition the caller should surface, if any.
    pub error: Option<ErrorKind>,
}

impl ExtractionResult {
    /// Whether nothing was extracted.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
