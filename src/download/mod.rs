//! HTTP downloads returning the response body as text.
//!
//! This module provides [`HttpDownloader`], a `reqwest`-backed client that
//! issues one GET per call, and the [`Downloader`] trait it implements so
//! callers can hold a `dyn Downloader` instead of the concrete type.
//!
//! # Features
//!
//! - Optional HTTP Basic authentication, fixed at construction
//! - HTTP 404 surfaced as [`Fetched::NotFound`] by
//!   [`try_download_if_exists`](HttpDownloader::try_download_if_exists)
//! - Structured error types with the failing URL attached
//! - Explicit, idempotent release of the underlying client
//!
//! # Example
//!
//! ```no_run
//! use basic_downloader::download::HttpDownloader;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut downloader = HttpDownloader::anonymous()?;
//! let body = downloader.download("https://example.com/readme.txt").await?;
//! println!("{body}");
//! downloader.dispose();
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;

mod client;
mod error;
mod outcome;

pub use client::HttpDownloader;
pub use error::{BuildError, DownloadError};
pub use outcome::Fetched;

/// Fetches URLs as text.
///
/// Implementors issue exactly one request per call and never retry.
#[async_trait]
pub trait Downloader: Send + Sync {
    /// Downloads `url` and returns the body as text.
    ///
    /// # Errors
    ///
    /// Any transport failure or non-success status, 404 included.
    async fn download(&self, url: &str) -> Result<String, DownloadError>;

    /// Downloads `url`, reporting HTTP 404 as [`Fetched::NotFound`].
    ///
    /// # Errors
    ///
    /// Any transport failure or non-success status other than 404.
    async fn try_download_if_exists(&self, url: &str) -> Result<Fetched, DownloadError>;
}
