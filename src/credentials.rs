//! Username/password pairs for HTTP Basic authentication.
//!
//! Basic authentication sends `username:password` base64-encoded in the
//! `Authorization` header. Two constraints follow from that encoding and are
//! enforced when a [`Credentials`] value is created:
//!
//! - the username cannot contain `:` (it would move the split point)
//! - both halves must be ASCII, since they are encoded byte-for-byte
//!
//! # Example
//!
//! ```
//! use basic_downloader::Credentials;
//!
//! let credentials = Credentials::new("alice", "secret").unwrap();
//! assert_eq!(credentials.authorization_value(), "Basic YWxpY2U6c2VjcmV0");
//! ```

use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;
use thiserror::Error;

/// Reasons a username/password pair cannot be used for Basic authentication.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialsError {
    /// The username contains the `:` separator.
    #[error("username cannot contain the ':' character due to basic authentication limitations")]
    ColonInUsername,

    /// The username or password contains a character above U+007F.
    #[error(
        "username and password should contain only ASCII characters due to basic authentication limitations"
    )]
    NonAscii,
}

/// A validated username/password pair.
///
/// Fields are private so every instance has passed [`Credentials::new`].
/// Deserializing goes through the same validation.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawCredentials")]
pub struct Credentials {
    username: String,
    password: String,
}

#[derive(Deserialize)]
struct RawCredentials {
    username: String,
    password: String,
}

impl TryFrom<RawCredentials> for Credentials {
    type Error = CredentialsError;

    fn try_from(raw: RawCredentials) -> Result<Self, Self::Error> {
        Self::new(raw.username, raw.password)
    }
}

impl Credentials {
    /// Validates a username/password pair.
    ///
    /// Empty strings are accepted.
    ///
    /// # Errors
    ///
    /// - [`CredentialsError::ColonInUsername`] if `username` contains `:`,
    ///   whatever the password is.
    /// - [`CredentialsError::NonAscii`] if either value contains a non-ASCII
    ///   character.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, CredentialsError> {
        let username = username.into();
        let password = password.into();

        if username.contains(':') {
            return Err(CredentialsError::ColonInUsername);
        }
        if !username.is_ascii() || !password.is_ascii() {
            return Err(CredentialsError::NonAscii);
        }

        Ok(Self { username, password })
    }

    /// The username half of the pair.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Value for the `Authorization` request header: `Basic <base64(username:password)>`.
    #[must_use]
    pub fn authorization_value(&self) -> String {
        let pair = format!("{}:{}", self.username, self.password);
        format!("Basic {}", STANDARD.encode(pair.as_bytes()))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
