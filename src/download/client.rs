//! HTTP client wrapper for text downloads.
//!
//! This module provides the `HttpDownloader` struct which owns one
//! `reqwest::Client`, attaches the configured request headers to every GET,
//! and classifies responses into text, not-found, or errors.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, AsHeaderName, HeaderMap, HeaderValue};
use reqwest::tls::Version;
use reqwest::{Client, ClientBuilder, Response, StatusCode};
use tracing::{debug, instrument};
use url::Url;

use super::Downloader;
use super::error::{BuildError, DownloadError};
use super::outcome::Fetched;
use crate::credentials::Credentials;
use crate::user_agent;

/// Lowest TLS version the client will negotiate.
///
/// Older endpoints still speak TLS 1.0/1.1, so the floor is set there for
/// compatibility. Set on each client, never process-wide. Only the platform
/// backend (`native-tls` feature, on by default) implements versions below 1.2.
const MIN_TLS_VERSION: Version = Version::TLS_1_0;

/// HTTP client for downloading text, with optional Basic authentication.
///
/// Each instance exclusively owns its transport. Release it with
/// [`dispose`](Self::dispose) or by dropping the value; both are idempotent.
///
/// # Example
///
/// ```no_run
/// use basic_downloader::{Fetched, HttpDownloader};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let downloader = HttpDownloader::new(Some("alice"), Some("secret"))?;
/// assert_eq!(
///     downloader.header("Authorization"),
///     Some("Basic YWxpY2U6c2VjcmV0")
/// );
/// if let Fetched::Found(body) = downloader
///     .try_download_if_exists("https://example.com/config.json")
///     .await?
/// {
///     println!("{body}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct HttpDownloader {
    client: Option<Client>,
    headers: HeaderMap,
}

impl HttpDownloader {
    /// Creates a downloader, authenticating when both `username` and
    /// `password` are given.
    ///
    /// If either is `None` the downloader sends unauthenticated requests.
    ///
    /// # Errors
    ///
    /// - [`BuildError::InvalidCredentials`] if the username contains `:` or
    ///   either value is not ASCII.
    /// - [`BuildError::Client`] if the HTTP stack cannot be initialized.
    pub fn new(username: Option<&str>, password: Option<&str>) -> Result<Self, BuildError> {
        let credentials = match (username, password) {
            (Some(username), Some(password)) => Some(Credentials::new(username, password)?),
            _ => None,
        };
        Self::with_credentials(credentials.as_ref())
    }

    /// Creates a downloader that sends no `Authorization` header.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Client`] if the HTTP stack cannot be initialized.
    pub fn anonymous() -> Result<Self, BuildError> {
        Self::with_credentials(None)
    }

    /// Creates a downloader from already validated credentials.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Client`] if the HTTP stack cannot be initialized.
    #[instrument(level = "debug", skip_all, fields(authenticated = credentials.is_some()))]
    pub fn with_credentials(credentials: Option<&Credentials>) -> Result<Self, BuildError> {
        let mut headers = HeaderMap::new();
        if let Some(credentials) = credentials {
            let mut value = HeaderValue::from_str(&credentials.authorization_value())
                .map_err(BuildError::Header)?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = base_client_builder(headers.clone())
            .build()
            .map_err(BuildError::Client)?;
        debug!("downloader ready");

        Ok(Self {
            client: Some(client),
            headers,
        })
    }

    /// Downloads `url` and returns the body decoded as text.
    ///
    /// The charset comes from the response `Content-Type`, defaulting to UTF-8.
    ///
    /// # Errors
    ///
    /// Returns `DownloadError` if:
    /// - The URL is invalid
    /// - The request fails (DNS, connect, TLS)
    /// - The server returns any non-success status, 404 included
    /// - The body cannot be read
    /// - The downloader was disposed
    #[instrument(skip(self), fields(url = %url))]
    pub async fn download(&self, url: &str) -> Result<String, DownloadError> {
        let response = self.send(url).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::http_status(url, status.as_u16()));
        }
        read_text(url, response).await
    }

    /// Downloads `url`, reporting HTTP 404 as [`Fetched::NotFound`].
    ///
    /// A 404 response body is discarded.
    ///
    /// # Errors
    ///
    /// The same as [`download`](Self::download), except that 404 is not an error.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn try_download_if_exists(&self, url: &str) -> Result<Fetched, DownloadError> {
        let response = self.send(url).await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!("resource not found");
            return Ok(Fetched::NotFound);
        }
        if !status.is_success() {
            return Err(DownloadError::http_status(url, status.as_u16()));
        }
        read_text(url, response).await.map(Fetched::Found)
    }

    /// Returns a request header this downloader attaches to every request.
    ///
    /// This reads the outgoing configuration, not a response header. The only
    /// header ever configured is `Authorization`, and only with credentials.
    #[must_use]
    pub fn header<K: AsHeaderName>(&self, name: K) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    /// Releases the underlying HTTP client.
    ///
    /// Only the first call has an effect. Later downloads fail with
    /// [`DownloadError::Disposed`].
    pub fn dispose(&mut self) {
        if self.client.take().is_some() {
            debug!("downloader disposed");
        }
    }

    /// Whether [`dispose`](Self::dispose) has been called.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.client.is_none()
    }

    async fn send(&self, url: &str) -> Result<Response, DownloadError> {
        let client = self
            .client
            .as_ref()
            .ok_or_else(|| DownloadError::disposed(url))?;
        let parsed_url = Url::parse(url).map_err(|_| DownloadError::invalid_url(url))?;

        debug!("starting download");
        client
            .get(parsed_url)
            .send()
            .await
            .map_err(|e| DownloadError::network(url, e))
    }
}

impl Drop for HttpDownloader {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[async_trait]
impl Downloader for HttpDownloader {
    async fn download(&self, url: &str) -> Result<String, DownloadError> {
        HttpDownloader::download(self, url).await
    }

    async fn try_download_if_exists(&self, url: &str) -> Result<Fetched, DownloadError> {
        HttpDownloader::try_download_if_exists(self, url).await
    }
}

async fn read_text(url: &str, response: Response) -> Result<String, DownloadError> {
    let body = response
        .text()
        .await
        .map_err(|e| DownloadError::body(url, e))?;
    debug!(bytes = body.len(), "download complete");
    Ok(body)
}

fn base_client_builder(default_headers: HeaderMap) -> ClientBuilder {
    let builder = Client::builder()
        .default_headers(default_headers)
        .tls_version_min(MIN_TLS_VERSION)
        .gzip(true)
        .user_agent(user_agent::default_user_agent());
    #[cfg(feature = "native-tls")]
    let builder = builder.tls_backend_native();
    builder
}
