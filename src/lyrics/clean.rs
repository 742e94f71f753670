// Markup-to-text cleanup for extracted lyrics blocks.

use once_cell::sync::Lazy;
use regex::Regex;

static P_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)</?p(?:\s[^>]*)?>").unwrap());
static DIV_TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)</?div(?:\s[^>]*)?>").unwrap());
static CANVAS_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)</?canvas(?:\s[^>]*)?>").unwrap());
static BR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)</?br\s*/?>").unwrap());

pub fn remove_p(markup: &str) -> String {
    P_TAG_RE.replace_all(markup, "").into_owned()
}

pub fn remove_div(markup: &str) -> String {
    DIV_TAG_RE.replace_all(markup, "").into_owned()
}

pub fn remove_canvas(markup: &str) -> String {
    CANVAS_TAG_RE.replace_all(markup, "").into_owned()
}

/// Every break tag becomes a newline. A stray `</br>` counts as a break,
/// which is also how the HTML parser reads it.
pub fn replace_br(markup: &str) -> String {
    BR_RE.replace_all(markup, "\n").into_owned()
}

/// Decode the handful of entities the serializer emits for text content.
pub fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Shared tail of every source's cleaning rule. Leading indentation is kept.
pub fn finish(text: &str) -> String {
    decode_entities(text).trim_end().to_string()
}
