//! Result of an existence-checking download.

/// Outcome of [`try_download_if_exists`](super::HttpDownloader::try_download_if_exists).
///
/// HTTP 404 is reported as [`Fetched::NotFound`]; every other failure is a
/// [`DownloadError`](super::DownloadError).
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a NotFound result is easy to miss"]
pub enum Fetched {
    /// The server returned a success status with this body.
    Found(String),
    /// The server returned HTTP 404.
    NotFound,
}

impl Fetched {
    /// Returns `true` for [`Fetched::Found`].
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Converts into the body, or `None` when the resource was absent.
    #[must_use]
    pub fn into_option(self) -> Option<String> {
        match self {
            Self::Found(body) => Some(body),
            Self::NotFound => None,
        }
    }
}

impl From<Fetched> for Option<String> {
    fn from(fetched: Fetched) -> Self {
        fetched.into_option()
    }
}
