//! Error types for cache-URL generation.

use thiserror::Error;

/// Errors that can occur while generating a cache URL.
///
/// Only the outer URL-handling surface can fail; the subdomain encoding path
/// is total and handles malformed hosts by policy instead of erroring.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheUrlError {
    /// The supplied URL was empty or whitespace-only.
    #[error("URL cannot be empty")]
    EmptyUrl,

    /// The URL parser rejected the input.
    #[error("URL parsing failed: {0}")]
    UrlParseError(String),

    /// The URL parsed but carries no usable host.
    #[error("URL has no host")]
    MissingHost,
}

impl From<url::ParseError> for CacheUrlError {
    fn from(err: url::ParseError) -> Self {
        CacheUrlError::UrlParseError(err.to_string())
    }
}
