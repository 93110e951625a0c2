//! Basic Downloader Library
//!
//! A small HTTP helper that fetches a URL and returns its body as text.
//!
//! # Architecture
//!
//! - [`credentials`] - Validated username/password pairs for HTTP Basic authentication
//! - [`download`] - The [`HttpDownloader`] client, the [`Downloader`] trait and its errors
//!
//! # Example
//!
//! ```no_run
//! use basic_downloader::{Fetched, HttpDownloader};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let downloader = HttpDownloader::new(Some("alice"), Some("secret"))?;
//! match downloader
//!     .try_download_if_exists("https://example.com/api/settings")
//!     .await?
//! {
//!     Fetched::Found(body) => println!("{body}"),
//!     Fetched::NotFound => println!("no settings published"),
//! }
//! # Ok(())
//! # }
//! ```

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod credentials;
pub mod download;
#[cfg(test)]
pub mod test_support;
pub(crate) mod user_agent;

// Re-export commonly used types
pub use credentials::{Credentials, CredentialsError};
pub use download::{BuildError, DownloadError, Downloader, Fetched, HttpDownloader};
