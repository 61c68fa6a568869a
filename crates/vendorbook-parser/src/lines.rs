//! Line normalization: the first pass over pasted vendor text.

use std::sync::LazyLock;

use regex::Regex;

/// A line that is nothing but a list ordinal, e.g. `"3"` or `"3."`.
static BARE_ORDINAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.?$").expect("valid bare ordinal regex"));
/// A leading `"1. "` list prefix.
static ORDINAL_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s+").expect("valid ordinal prefix regex"));

/// Splits raw text into trimmed data lines.
///
/// Blank lines, `#` comments and bare ordinals are dropped; a leading
/// `"<digits>. "` prefix is stripped from the rest. Order is preserved.
#[must_use]
pub fn normalize_lines(text: &str) -> Vec<&str> {
    text.lines().filter_map(normalize_line).collect()
}

fn normalize_line(raw: &str) -> Option<&str> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') || BARE_ORDINAL_RE.is_match(line) {
        return None;
    }

    let line = match ORDINAL_PREFIX_RE.find(line) {
        Some(prefix) => line[prefix.end()..].trim_start(),
        None => line,
    };
    (!line.is_empty()).then_some(line)
}
