//! Per-format cue extractors.
//!
//! Each extractor walks one subtitle syntax and feeds cue text into a
//! [`CueBuffer`]. Dispatch over the closed set of formats happens in
//! [`crate::SubtitleExtractor`].

pub mod ass;
pub mod plain;
pub mod sbv;
pub mod smi;
pub mod srt;

pub use ass::AssExtractor;
pub use plain::PlainExtractor;
pub use sbv::SbvExtractor;
pub use smi::SmiExtractor;
pub use srt::SrtExtractor;

use crate::cue::CueBuffer;
use crate::error::Result;

/// A parser that turns one subtitle syntax into cues.
pub trait CueExtractor {
    /// Walk `content` and push every cue into `cues`.
    ///
    /// Pending cue text may be left in the buffer; the caller finalizes it.
    fn extract_cues(&self, content: &str, cues: &mut CueBuffer) -> Result<()>;

    /// Convenience wrapper returning the finished text.
    fn extract_text(&self, content: &str) -> Result<String> {
        let mut cues = CueBuffer::new();
        self.extract_cues(content, &mut cues)?;
        Ok(cues.into_text())
    }
}
