//! Inline markup cleaning for cue text.
//!
//! Two cleaners: one for HTML-style and WebVTT tags (used by every format
//! except SSA/ASS), and one for SSA/ASS override blocks and escaped breaks.

use regex::Regex;
use std::sync::LazyLock;

/// WebVTT class spans: `<c.yellow>` and `</c>`.
static CLASS_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<c\.[^>]+>|</c>").unwrap());

/// WebVTT voice spans: `<v Alice>` and `</v>`.
static VOICE_TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<v\s*[^>]*>|</v>").unwrap());

/// WebVTT language spans: `<lang en>` and `</lang>`.
static LANG_TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<lang\s*[^>]*>|</lang>").unwrap());

/// Ruby containers, keeping their content.
static RUBY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<ruby[^>]*>(.*?)</ruby>").unwrap());

/// Ruby annotations, dropped with their content.
static RUBY_TEXT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<rt[^>]*>.*?</rt>").unwrap());

/// Bold, italic, underline and font tags, attributes included.
static STYLE_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<b[^>]*>|</b>|<i[^>]*>|</i>|<u[^>]*>|</u>|<font[^>]*>|</font>").unwrap()
});

/// Anything else that looks like a tag.
static ANY_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

static NBSP_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)&nbsp;").unwrap());
static LT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)&lt;").unwrap());
static GT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)&gt;").unwrap());
static AMP_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)&amp;").unwrap());

/// SSA/ASS override blocks such as `{\i1}` or `{\pos(10,20)}`.
static SSA_OVERRIDE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{\\[^}]+\}").unwrap());

/// Remove HTML and WebVTT markup from a line and decode basic entities.
///
/// Tags with content-preserving rules (ruby, class spans) are handled before
/// the generic tag strip so their text survives. The result is trimmed.
pub fn clean_html_tags(text: &str) -> String {
    let cleaned = CLASS_TAG_REGEX.replace_all(text, "");
    let cleaned = VOICE_TAG_REGEX.replace_all(&cleaned, "");
    let cleaned = LANG_TAG_REGEX.replace_all(&cleaned, "");
    let cleaned = RUBY_REGEX.replace_all(&cleaned, "${1}");
    let cleaned = RUBY_TEXT_REGEX.replace_all(&cleaned, "");
    let cleaned = STYLE_TAG_REGEX.replace_all(&cleaned, "");
    let cleaned = ANY_TAG_REGEX.replace_all(&cleaned, "");

    decode_entities(&cleaned).trim().to_string()
}

/// Decode `&nbsp;`, `&lt;`, `&gt;` and `&amp;`, in that order, once.
pub fn decode_entities(text: &str) -> String {
    let decoded = NBSP_REGEX.replace_all(text, " ");
    let decoded = LT_REGEX.replace_all(&decoded, "<");
    let decoded = GT_REGEX.replace_all(&decoded, ">");
    AMP_REGEX.replace_all(&decoded, "&").into_owned()
}

/// Remove SSA/ASS override blocks and turn `\N` / `\n` escapes into line breaks.
pub fn clean_ssa_tags(text: &str) -> String {
    SSA_OVERRIDE_REGEX
        .replace_all(text, "")
        .replace("\\N", "\n")
        .replace("\\n", "\n")
        .trim()
        .to_string()
}
