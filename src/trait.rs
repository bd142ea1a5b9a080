use crate::auth::AccessToken;
use crate::session::SearchSession;
use crate::track::ResultPage;
use crate::Result;
use async_trait::async_trait;

/// Trait for Spotify search client operations that can be mocked for testing.
///
/// This abstracts the two network operations of the client (token exchange
/// and page fetch) plus the higher-level `load_more` contract a presentation
/// layer drives, so pagination logic can be tested without a network.
///
/// # Mocking Support
///
/// When the `mock` feature is enabled, this crate provides
/// `MockSpotifySearchClient` that implements this trait using the `mockall`
/// library.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait(?Send)]
pub trait SpotifySearchClient {
    /// Exchange the application credentials for a bearer token.
    ///
    /// Performs a single client-credentials request to the token endpoint.
    /// On success the token is retained by the client for subsequent
    /// searches and also returned to the caller. There is no refresh or
    /// expiry handling; a token failure mid-session is fatal to further
    /// pagination until this is called again.
    async fn authenticate(&self) -> Result<AccessToken>;

    /// Whether a prior [`authenticate`](Self::authenticate) succeeded.
    fn is_authenticated(&self) -> bool;

    /// Fetch one page of track search results.
    ///
    /// Issues a single authenticated GET with market fixed to `us` and type
    /// fixed to `track`. `query` must be non-empty and `limit` greater than
    /// zero. The returned cursor already points at the next fetch.
    async fn search_page(&self, query: &str, offset: u32, limit: u32) -> Result<ResultPage>;

    /// Load the next page into `session`.
    ///
    /// Returns `Ok(false)` without issuing a request when a fetch is already
    /// in flight or the session is exhausted; `Ok(true)` when a page was
    /// fetched and applied. On failure the session's loading marker is
    /// cleared on the way out and the error is propagated, leaving the
    /// caller to decide whether to retry, re-authenticate, or stop.
    async fn load_more(&self, session: &mut SearchSession) -> Result<bool> {
        let token = match session.begin_fetch() {
            Some(token) => token,
            None => {
                log::debug!(
                    "load_more is a no-op for '{}' (loading: {}, has_more: {})",
                    session.query(),
                    session.is_loading(),
                    session.has_more()
                );
                return Ok(false);
            }
        };

        let query = session.query().to_string();
        match self
            .search_page(&query, session.next_offset(), session.limit())
            .await
        {
            Ok(page) => Ok(session.complete_fetch(token, page)),
            Err(e) => {
                session.fail_fetch(token);
                Err(e)
            }
        }
    }
}
