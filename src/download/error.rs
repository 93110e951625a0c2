//! Error types for the download module.
//!
//! This module defines structured errors for building a downloader and for
//! the download operations themselves. A missing resource on
//! [`try_download_if_exists`](super::HttpDownloader::try_download_if_exists)
//! is not an error; see [`Fetched`](super::Fetched).

use reqwest::header::InvalidHeaderValue;
use thiserror::Error;

use crate::credentials::CredentialsError;

/// Errors that can occur while constructing an [`HttpDownloader`](super::HttpDownloader).
#[derive(Debug, Error)]
pub enum BuildError {
    /// The username/password pair cannot be sent with Basic authentication.
    #[error("invalid credentials: {0}")]
    InvalidCredentials(#[from] CredentialsError),

    /// The encoded authorization value was rejected as a header value.
    #[error("invalid authorization header value: {0}")]
    Header(#[source] InvalidHeaderValue),

    /// The HTTP stack failed to initialize (TLS backend, resolver, etc.)
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Errors that can occur during a download.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// The provided URL is malformed or not absolute.
    #[error("invalid URL: {url}")]
    InvalidUrl {
        /// The invalid URL string.
        url: String,
    },

    /// Network-level error (DNS resolution, connection refused, TLS errors, etc.)
    #[error("network error downloading {url}: {source}")]
    Network {
        /// The URL that failed to download.
        url: String,
        /// The underlying network error.
        #[source]
        source: reqwest::Error,
    },

    /// HTTP error response (4xx client errors, 5xx server errors).
    #[error("HTTP {status} downloading {url}")]
    HttpStatus {
        /// The URL that returned an error status.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// The response arrived but its body could not be read or decoded.
    #[error("failed to read response body from {url}: {source}")]
    Body {
        /// The URL whose body failed.
        url: String,
        /// The underlying read error.
        #[source]
        source: reqwest::Error,
    },

    /// The downloader was disposed before this call.
    #[error("downloader already disposed; cannot download {url}")]
    Disposed {
        /// The URL that was requested.
        url: String,
    },
}

impl DownloadError {
    /// Creates an invalid URL error.
    pub fn invalid_url(url: impl Into<String>) -> Self {
        Self::InvalidUrl { url: url.into() }
    }

    /// Creates a network error from a reqwest error.
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.into(),
            source,
        }
    }

    /// Creates an HTTP status error.
    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }

    /// Creates a body read error.
    pub fn body(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Body {
            url: url.into(),
            source,
        }
    }

    /// Creates a use-after-dispose error.
    pub fn disposed(url: impl Into<String>) -> Self {
        Self::Disposed { url: url.into() }
    }

    /// HTTP status code carried by the error, if the server answered.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            Self::Network { source, .. } | Self::Body { source, .. } => {
                source.status().map(|status| status.as_u16())
            }
            Self::InvalidUrl { .. } | Self::Disposed { .. } => None,
        }
    }
}

// No `From<reqwest::Error>`: every download variant needs the URL for context,
// so callers go through the helper constructors above.
