//! Format detection, cue extraction and tag cleaning for subtitle text
//! extraction.
//!
//! Supports SRT, WebVTT, SSA/ASS, SBV and SAMI, plus a best-effort mode for
//! content whose format cannot be detected.

pub mod clean;
pub mod cue;
pub mod detect;
pub mod error;
pub mod extract;
pub mod formats;
pub mod markup;
pub mod merge;
mod patterns;
pub mod types;

pub use clean::{clean_html_tags, clean_ssa_tags};
pub use detect::{detect, is_supported_file_name, ACCEPTED_EXTENSIONS};
pub use error::{Error, ErrorKind, Result};
pub use extract::{extract, SubtitleExtractor};
pub use merge::LineMerger;
pub use types::{ExtractionResult, RawInput, SubtitleFormat};
