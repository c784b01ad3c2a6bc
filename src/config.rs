//! Run configuration, built once at startup and shared by reference.

use crate::open::Platform;
use thiserror::Error;

/// Root of the official Ruby documentation.
pub const DOC_SITE: &str = "https://docs.ruby-lang.org/en/";

#[derive(Debug, Clone)]
pub struct Config {
    pub site_root: String,
    /// Documentation release, e.g. `3.4`.
    pub release: String,
    /// Print the browser command instead of running it.
    pub noop: bool,
    pub platform: Platform,
}

impl Config {
    /// `https://docs.ruby-lang.org/en/3.4`, without a trailing slash.
    pub fn release_root(&self) -> String {
        format!("{}/{}", self.site_root.trim_end_matches('/'), self.release)
    }

    pub fn toc_url(&self) -> String {
        format!("{}/table_of_contents.html", self.release_root())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReleaseError {
    #[error("unsupported or unknown documentation release '{release}'; supported releases are: {supported}")]
    Unsupported { release: String, supported: String },

    #[error("the documentation site lists no supported releases")]
    NoneListed,
}

/// Validate a requested release against the site's list, or default to the
/// newest numbered release.
pub fn select_release(requested: Option<&str>, available: &[String]) -> Result<String, ReleaseError> {
    match requested {
        Some(release) if available.iter().any(|r| r == release) => Ok(release.to_string()),
        Some(release) => Err(ReleaseError::Unsupported {
            release: release.to_string(),
            supported: available.join(", "),
        }),
        None => available
            .iter()
            .find(|r| r.as_str() != "master")
            .cloned()
            .ok_or(ReleaseError::NoneListed),
    }
}
