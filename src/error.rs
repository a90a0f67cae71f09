//! Fetch error types

use std::fmt;

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Response metadata and body captured when the server answers with a
/// non-success status.
///
/// This is the canonical representation of an HTTP-level failure; the
/// framed human-readable message is derived from it by the [`fmt::Display`]
/// impl. `body` is captured best-effort and is `None` when the response
/// body could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpFailure {
    /// HTTP status code
    pub status: u16,
    /// Canonical reason phrase for the status code, empty if unknown
    pub status_text: String,
    /// Final URL of the request
    pub url: String,
    /// Raw response body, if it could be read
    pub body: Option<Vec<u8>>,
}

impl HttpFailure {
    /// Body decoded as trimmed UTF-8 text, if it decodes and is non-blank.
    pub fn body_text(&self) -> Option<&str> {
        let text = std::str::from_utf8(self.body.as_deref()?).ok()?.trim();
        (!text.is_empty()).then_some(text)
    }

    /// Body parsed as JSON, if present and parseable.
    pub fn body_json<T: DeserializeOwned>(&self) -> Option<T> {
        serde_json::from_slice(self.body.as_deref()?).ok()
    }
}

impl fmt::Display for HttpFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "URL = {}, Status = {}, Status Text = {}",
            self.url, self.status, self.status_text
        )?;
        // A blank or undecodable body omits the framed block entirely.
        if let Some(text) = self.body_text() {
            let lines: Vec<&str> = text.split('\n').collect();
            let longest = lines
                .iter()
                .map(|line| line.chars().count())
                .max()
                .unwrap_or(0);
            writeln!(f)?;
            writeln!(f, "  {}", "-".repeat(longest))?;
            for line in &lines {
                writeln!(f, "  {line}")?;
            }
            write!(f, "  {}", "-".repeat(longest))?;
        }
        Ok(())
    }
}

impl std::error::Error for HttpFailure {}

/// Errors produced while building a client or executing a fetch
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request reached the server and came back with a non-success status
    #[error(transparent)]
    Http(#[from] HttpFailure),
    /// Network-level failure before a usable response was obtained
    #[error("Connection error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The cancellation token was signaled while the request was in flight
    #[error("Request cancelled")]
    Cancelled,
    /// Proxy configuration error
    #[error("Proxy error: {0}")]
    Proxy(String),
}

impl FetchError {
    /// Status code of the HTTP failure, if this is one
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http(failure) => Some(failure.status),
            _ => None,
        }
    }

    /// Whether this failure was caused by the cancellation token
    pub fn is_cancelled(&self) -> bool {
        matches!(self, FetchError::Cancelled)
    }
}
