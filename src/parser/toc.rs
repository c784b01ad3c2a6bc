//! Table-of-contents parser: line-pattern matching over the site's TOC page.
//!
//! Every item is a triplet of lines:
//!
//! ```text
//! <li class="file">
//!   <a href="COPYING.html">COPYING</a>
//! </li>
//! ```
//!
//! The `class` attribute picks the index, the anchor supplies the path and
//! the name. Method anchors are split into singleton and instance methods by
//! their `method-c-` / `method-i-` fragment marker.

use crate::model::{Indexes, Kind};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static RE_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<li class="(\w+)""#).unwrap());

static RE_ANCHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<a\s+href="([^"]*)"[^>]*>([^<]*)<"#).unwrap());

/// Lines consumed per recognized item: marker, anchor, closing tag.
const ITEM_LINES: usize = 3;

/// The TOC does not look the way it always has.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: unknown item class '{class}'")]
    UnknownClass { line: usize, class: String },

    #[error("line {line}: unknown method marker in '{text}'")]
    UnknownMethodMarker { line: usize, text: String },

    #[error("line {line}: expected an anchor after the item marker")]
    MissingAnchor { line: usize },

    #[error("line {line}: malformed anchor '{text}'")]
    MalformedAnchor { line: usize, text: String },
}

// -- Public API ---------------------------------------------------------------

/// Parse the TOC page into the four per-kind indexes.
pub fn parse(html: &str) -> Result<Indexes, ParseError> {
    let lines: Vec<&str> = html.lines().collect();
    let mut indexes = Indexes::default();

    let mut i = 0;
    while i < lines.len() {
        let Some(caps) = RE_ITEM.captures(lines[i]) else {
            i += 1;
            continue;
        };
        let class = &caps[1];

        // None stands for a method, whose kind comes from the anchor
        let fixed_kind = match class {
            "class" | "module" => Some(Kind::ClassOrModule),
            "file" => Some(Kind::Page),
            "method" => None,
            _ => {
                return Err(ParseError::UnknownClass {
                    line: i + 1,
                    class: class.to_string(),
                })
            }
        };

        // 1-based line numbers for messages
        let anchor_no = i + 2;
        let anchor_line = lines
            .get(i + 1)
            .copied()
            .ok_or(ParseError::MissingAnchor { line: anchor_no })?;
        let (path, name) = parse_anchor(anchor_line, anchor_no)?;

        let kind = match fixed_kind {
            Some(kind) => kind,
            None => method_kind(anchor_line, anchor_no)?,
        };
        indexes.get_mut(kind).insert(&name, path);

        i += ITEM_LINES;
    }

    Ok(indexes)
}

// -- Helpers ------------------------------------------------------------------

/// Extract (href, decoded text) from an anchor line.
fn parse_anchor(line: &str, line_no: usize) -> Result<(&str, String), ParseError> {
    let caps = RE_ANCHOR.captures(line).ok_or_else(|| {
        if line.contains("<a") {
            ParseError::MalformedAnchor {
                line: line_no,
                text: line.trim().to_string(),
            }
        } else {
            ParseError::MissingAnchor { line: line_no }
        }
    })?;
    let path = caps.get(1).map_or("", |m| m.as_str());
    let name = decode_entities(caps[2].trim());
    if path.is_empty() || name.is_empty() {
        return Err(ParseError::MalformedAnchor {
            line: line_no,
            text: line.trim().to_string(),
        });
    }
    Ok((path, name))
}

fn method_kind(anchor_line: &str, line_no: usize) -> Result<Kind, ParseError> {
    if anchor_line.contains("method-c-") {
        Ok(Kind::SingletonMethod)
    } else if anchor_line.contains("method-i-") {
        Ok(Kind::InstanceMethod)
    } else {
        Err(ParseError::UnknownMethodMarker {
            line: line_no,
            text: anchor_line.trim().to_string(),
        })
    }
}

/// Decode the handful of entities rdoc emits in names (`#&lt;=&gt;`).
fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
