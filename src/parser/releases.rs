//! Release list parser for the documentation home page.
//!
//! The home page links each release as `<a href="3.4/">Ruby 3.4</a>`,
//! newest first. Releases past end of support carry an extra word after the
//! version, and the list of usable releases ends at the first of those.

use regex::Regex;
use std::sync::LazyLock;

static RE_ANCHOR_TEXT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<a\b[^>]*>([^<]*)</a>").unwrap());

static RE_RELEASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\d+(?:\.\d+)*|master)$").unwrap());

/// Supported releases in page order.
pub fn parse(html: &str) -> Vec<String> {
    let mut releases = Vec::new();
    for line in html.lines() {
        let Some(caps) = RE_ANCHOR_TEXT.captures(line) else {
            continue;
        };
        let words: Vec<&str> = caps[1].split_whitespace().collect();
        let Some(release) = words.get(1) else {
            continue;
        };
        if !RE_RELEASE.is_match(release) {
            continue;
        }
        // "Ruby 3.1 (EOL)" and everything after it is unsupported
        if words.len() > 2 {
            break;
        }
        releases.push(release.to_string());
    }
    releases
}
