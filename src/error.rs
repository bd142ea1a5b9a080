use thiserror::Error;

/// Error types for Spotify search operations.
///
/// Failures are never swallowed: every operation returns a `Result` so the
/// caller decides whether to abort, re-authenticate, or stop paginating.
/// The client itself performs no retries.
#[derive(Error, Debug)]
pub enum SpotifyError {
    /// Token exchange failed.
    ///
    /// This covers network failures during the credential exchange, non-2xx
    /// responses from the token endpoint, and responses that do not contain
    /// a usable `access_token`. It is also returned when an authenticated
    /// operation is attempted before [`authenticate`] has succeeded.
    ///
    /// [`authenticate`]: crate::SpotifySearchClient::authenticate
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Search page fetch failed.
    ///
    /// This covers network failures, non-2xx responses from the search
    /// endpoint, responses whose shape cannot be parsed, and invalid inputs
    /// such as an empty query or a zero page size.
    #[error("Search failed: {0}")]
    Search(String),

    /// Required configuration is missing.
    ///
    /// Credentials are read once at process start; the message names the
    /// environment variable that was absent.
    #[error("Configuration error: {0}")]
    Config(String),
}
