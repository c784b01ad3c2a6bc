//! Blocking HTTP access to the documentation site.

use std::io;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("cannot reach {url} (possibly not connected to the internet)")]
    Transport {
        url: String,
        #[source]
        source: Box<ureq::Transport>,
    },

    #[error("{url} answered with HTTP status {code}")]
    Status { url: String, code: u16 },

    #[error("failed to read the response from {url}")]
    Body {
        url: String,
        #[source]
        source: io::Error,
    },
}

/// GET `url` and return the body as text. No retries.
pub fn get_text(url: &str) -> Result<String, FetchError> {
    debug!(url, "fetching");
    let response = ureq::get(url).call().map_err(|e| match e {
        ureq::Error::Status(code, _) => FetchError::Status {
            url: url.to_string(),
            code,
        },
        ureq::Error::Transport(transport) => FetchError::Transport {
            url: url.to_string(),
            source: Box::new(transport),
        },
    })?;

    let body = response.into_string().map_err(|source| FetchError::Body {
        url: url.to_string(),
        source,
    })?;
    debug!(url, bytes = body.len(), "fetched");
    Ok(body)
}
