//! Markup-to-text extraction used to feed the cap parsers.
//!
//! The output carries no semantic guarantees beyond marker words and
//! punctuation surviving in reading order; anything stronger belongs in the
//! parsers and the fallback ladder, not here.

use std::sync::LazyLock;

use regex::Regex;

static SCRIPT_STYLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script\b.*?</script>|<style\b.*?</style>")
        .expect("valid script/style regex")
});

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<[^>]+>").expect("valid tag regex"));

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Reduce an HTML document to cleaned plain text: script and style blocks are
/// dropped wholesale, remaining tags stripped, whitespace runs collapsed to
/// single spaces, ends trimmed.
pub fn extract_text(html: &str) -> String {
    let without_blocks = SCRIPT_STYLE_RE.replace_all(html, " ");
    let without_tags = TAG_RE.replace_all(&without_blocks, " ");
    WHITESPACE_RE
        .replace_all(&without_tags, " ")
        .trim()
        .to_string()
}
