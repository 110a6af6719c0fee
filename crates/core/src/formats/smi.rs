//! SAMI (.smi) cue extraction.

use super::CueExtractor;
use crate::clean::clean_html_tags;
use crate::cue::CueBuffer;
use crate::error::Result;
use crate::markup;
use regex::Regex;
use std::sync::LazyLock;

/// `<br>`, `<br/>` and `<br />` in any case.
static BR_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());

/// Extractor for SAMI documents.
///
/// The document must be well-formed markup. Every `SYNC` element contributes
/// the text of its first `P` as one cue.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmiExtractor;

impl SmiExtractor {
    /// Create a new SMI extractor.
    pub fn new() -> Self {
        Self
    }
}

impl CueExtractor for SmiExtractor {
    fn extract_cues(&self, content: &str, cues: &mut CueBuffer) -> Result<()> {
        let document = markup::parse(content)?;
        let syncs = document.elements_named("SYNC");
        log::debug!("SMI document has {} SYNC elements", syncs.len());

        for sync in syncs {
            let Some(paragraph) = sync.first_descendant("P") else {
                continue;
            };

            let text = BR_REGEX.replace_all(&paragraph.inner_markup, "\n");
            let text = clean_html_tags(&text);
            if !text.is_empty() {
                cues.push(text);
                cues.finalize();
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const DOCUMENT: &str = r#"<SAMI>
<HEAD>
<TITLE>Sample</TITLE>
<STYLE TYPE="text/css"><!--
P { font-family: Arial; }
.ENCC { Name: English; lang: en-US; }
--></STYLE>
</HEAD>
<BODY>
<SYNC Start="1000"><P Class="ENCC">Hello &amp; welcome<br/>to the <i>show</i></P></SYNC>
<SYNC Start="3000"><P Class="ENCC">&nbsp;</P></SYNC>
<SYNC Start="4000"><P Class="ENCC"><font color="red">Bye</font></P></SYNC>
<SYNC Start="5000"></SYNC>
</BODY>
</SAMI>
"#;

    #[test]
    fn test_smi_document() {
        assert_eq!(
            SmiExtractor::new().extract_text(DOCUMENT).unwrap(),
            "Hello & welcome\nto the show\nBye"
        );
    }

    #[test]
    fn test_smi_lowercase_elements() {
        let content = "<sami><body><sync start=\"0\"><p>lower</p></sync></body></sami>";
        assert_eq!(SmiExtractor::new().extract_text(content).unwrap(), "lower");
    }

    #[test]
    fn test_smi_malformed_is_an_error() {
        let content = "<SAMI><BODY><SYNC Start=\"0\"><P>Unclosed</SYNC></BODY></SAMI>";
        let result = SmiExtractor::new().extract_text(content);
        assert!(matches!(result, Err(Error::MarkupParseError(_))));
    }

    #[test]
    fn test_smi_error_leaves_no_partial_text() {
        let content = "<SAMI><BODY><SYNC Start=\"0\"><P>Kept?</P></SYNC><SYNC Start=\"1\"><P>Broken";
        let mut cues = CueBuffer::new();
        assert!(SmiExtractor::new().extract_cues(content, &mut cues).is_err());
        assert_eq!(cues.into_text(), "");
    }
}
