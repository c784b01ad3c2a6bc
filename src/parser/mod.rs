//! Parsers for the two pages fetched from the documentation site.

pub mod releases;
pub mod toc;
