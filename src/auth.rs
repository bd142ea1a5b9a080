use crate::{Result, SpotifyError};
use serde::{Deserialize, Serialize};

/// Environment variable holding the Spotify application client id.
pub const CLIENT_ID_VAR: &str = "SPOTIFY_CLIENT_ID";
/// Environment variable holding the Spotify application client secret.
pub const CLIENT_SECRET_VAR: &str = "SPOTIFY_CLIENT_SECRET";

/// Application credentials for the client-credentials grant.
///
/// Credentials are process-wide configuration: supplied once at startup and
/// immutable for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// The Spotify application client id
    pub client_id: String,
    /// The Spotify application client secret
    pub client_secret: String,
}

impl Credentials {
    /// Create credentials from explicit values.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Read credentials from `SPOTIFY_CLIENT_ID` and `SPOTIFY_CLIENT_SECRET`.
    ///
    /// Returns [`SpotifyError::Config`] naming the variable that is missing.
    pub fn from_env() -> Result<Self> {
        let client_id = std::env::var(CLIENT_ID_VAR)
            .map_err(|_| SpotifyError::Config(format!("{CLIENT_ID_VAR} not set")))?;
        let client_secret = std::env::var(CLIENT_SECRET_VAR)
            .map_err(|_| SpotifyError::Config(format!("{CLIENT_SECRET_VAR} not set")))?;
        Ok(Self {
            client_id,
            client_secret,
        })
    }
}

/// Bearer token obtained from the client-credentials exchange.
///
/// The token is obtained once per client session and never renewed; there is
/// no expiry tracking. It is an opaque credential sent in the `Authorization`
/// header of search requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wrap a raw token string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw token string, exactly as returned by the token endpoint.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Render the token as an `Authorization` header value.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}
