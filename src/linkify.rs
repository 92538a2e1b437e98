//! URL detection in response text
//!
//! Splits a line into plain and link segments so URLs can render as
//! activatable hyperlinks. Concatenating the segments reproduces the input
//! byte-for-byte; only the segmentation distinguishes links.

use std::sync::OnceLock;

use regex::Regex;

static URL_REGEX: OnceLock<Regex> = OnceLock::new();

fn url_regex() -> &'static Regex {
    URL_REGEX.get_or_init(|| {
        Regex::new(r"https?://[^\s]+").expect("Failed to compile URL regex")
    })
}

/// One piece of a segmented line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Plain text, rendered as-is
    Text(String),
    /// An HTTP/HTTPS URL, rendered as an activatable link
    Link(String),
}

/// Split text into plain and link segments
///
/// Trailing sentence punctuation after a URL stays in the following text
/// segment rather than the link.
pub fn linkify(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last = 0;

    for m in url_regex().find_iter(text) {
        let url = m
            .as_str()
            .trim_end_matches(['.', ',', ';', ':', '!', '?', ')', '\'', '"']);
        if url.is_empty() {
            continue;
        }
        if m.start() > last {
            segments.push(Segment::Text(text[last..m.start()].to_string()));
        }
        segments.push(Segment::Link(url.to_string()));
        last = m.start() + url.len();
    }

    if last < text.len() {
        segments.push(Segment::Text(text[last..].to_string()));
    }

    segments
}
