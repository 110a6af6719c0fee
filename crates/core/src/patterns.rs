//! Line matchers shared by the detector and the per-format extractors.

use regex::Regex;
use std::sync::LazyLock;

/// SRT/WebVTT timing line: `[hh:]mm:ss[,.]mmm --> [hh:]mm:ss[,.]mmm`.
static TIMESTAMP_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:[0-9]{2}:)?[0-9]{2}:[0-9]{2}[,.][0-9]{3}\s*-->\s*(?:[0-9]{2}:)?[0-9]{2}:[0-9]{2}[,.][0-9]{3}",
    )
    .unwrap()
});

/// A line made only of digits (SRT cue index).
static SEQUENCE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+$").unwrap());

/// WebVTT header, metadata and block keywords.
static VTT_METADATA_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(WEBVTT|KIND|LANGUAGE|::cue|DEFAULT|HEADER|NOTE|STYLE|REGION|TITLE|DESCRIPTION|CHAPTER)",
    )
    .unwrap()
});

/// An entire SBV timing line: `h:mm:ss.mmm,h:mm:ss.mmm`.
static SBV_TIMESTAMP_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{1,2}:[0-9]{2}:[0-9]{2}\.[0-9]{3},[0-9]{1,2}:[0-9]{2}:[0-9]{2}\.[0-9]{3}$")
        .unwrap()
});

/// Any line of a document starting with an SBV timing pair.
static SBV_TIMESTAMP_ANYWHERE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[0-9]{1,2}:[0-9]{2}:[0-9]{2}\.[0-9]{3},[0-9]{1,2}:[0-9]{2}:[0-9]{2}\.[0-9]{3}")
        .unwrap()
});

pub(crate) fn is_timestamp_line(line: &str) -> bool {
    TIMESTAMP_REGEX.is_match(line)
}

pub(crate) fn is_sequence_number(line: &str) -> bool {
    SEQUENCE_REGEX.is_match(line)
}

pub(crate) fn is_vtt_metadata(line: &str) -> bool {
    VTT_METADATA_REGEX.is_match(line)
}

pub(crate) fn is_sbv_timestamp_line(line: &str) -> bool {
    SBV_TIMESTAMP_REGEX.is_match(line)
}

pub(crate) fn contains_sbv_timestamp(content: &str) -> bool {
    SBV_TIMESTAMP_ANYWHERE_REGEX.is_match(content)
}

/// Split content into lines on `\n` or `\r\n`.
///
/// Unlike `str::lines`, a trailing newline yields a final empty line.
pub(crate) fn split_lines(content: &str) -> Vec<&str> {
    content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// ASCII case-insensitive `starts_with`.
pub(crate) fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}
