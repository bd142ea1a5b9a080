use crate::api;
use crate::auth::{AccessToken, Credentials};
use crate::iterator::TrackSearchIterator;
use crate::r#trait::SpotifySearchClient;
use crate::track::ResultPage;
use crate::{Result, SpotifyError};
use async_trait::async_trait;
use http_client::{HttpClient, Request};
use http_types::{Method, Url};
use std::sync::{Arc, Mutex};

/// Default base URL for the token endpoint.
pub const ACCOUNTS_BASE_URL: &str = "https://accounts.spotify.com";
/// Default base URL for the Web API.
pub const API_BASE_URL: &str = "https://api.spotify.com";
/// Market the search is pinned to.
pub const MARKET: &str = "us";
/// Page size the original screen requests.
pub const DEFAULT_LIMIT: u32 = 20;

/// Client for client-credentials authentication and paginated track search.
///
/// The client owns the access token for the session. It performs exactly one
/// outbound request per operation: no retries, no token refresh, no caching.
/// Timeout policy belongs to the injected [`HttpClient`] implementation.
///
/// # Examples
///
/// ```rust,no_run
/// use spotify_search::{Credentials, SpotifyClientImpl, SpotifySearchClient, Result};
///
/// #[tokio::main]
/// async fn main() -> Result<()> {
///     let http_client = http_client::native::NativeClient::new();
///     let client = SpotifyClientImpl::new(
///         Box::new(http_client),
///         Credentials::from_env()?,
///     );
///
///     client.authenticate().await?;
///     let page = client.search_page("coding", 0, 20).await?;
///     println!("{} of {} tracks", page.tracks.len(), page.cursor.total);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct SpotifyClientImpl {
    client: Arc<dyn HttpClient + Send + Sync>,
    credentials: Credentials,
    token: Arc<Mutex<Option<AccessToken>>>,
    accounts_base_url: String,
    api_base_url: String,
}

impl SpotifyClientImpl {
    /// Create a client against the real Spotify endpoints.
    ///
    /// # Arguments
    ///
    /// * `client` - Any HTTP client implementation that implements [`HttpClient`]
    /// * `credentials` - Application id and secret for the credential exchange
    pub fn new(client: Box<dyn HttpClient + Send + Sync>, credentials: Credentials) -> Self {
        Self::with_base_urls(
            client,
            credentials,
            ACCOUNTS_BASE_URL.to_string(),
            API_BASE_URL.to_string(),
        )
    }

    /// Create a client with custom base URLs.
    ///
    /// This is how the integration tests point the client at an in-process
    /// fixture instead of the live API.
    pub fn with_base_urls(
        client: Box<dyn HttpClient + Send + Sync>,
        credentials: Credentials,
        accounts_base_url: String,
        api_base_url: String,
    ) -> Self {
        Self {
            client: Arc::from(client),
            credentials,
            token: Arc::new(Mutex::new(None)),
            accounts_base_url,
            api_base_url,
        }
    }

    /// The token currently held, if any.
    pub fn access_token(&self) -> Option<AccessToken> {
        self.token.lock().unwrap().clone()
    }

    /// Create an iterator over all tracks matching `query`.
    ///
    /// The iterator pulls pages of [`DEFAULT_LIMIT`] tracks on demand; use
    /// [`with_limit`](Self::search_tracks_with_limit) for a different page
    /// size.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use spotify_search::{AsyncPaginatedIterator, Credentials, SpotifyClientImpl, SpotifySearchClient};
    /// # tokio_test::block_on(async {
    /// let client = SpotifyClientImpl::new(
    ///     Box::new(http_client::native::NativeClient::new()),
    ///     Credentials::new("id", "secret"),
    /// );
    /// client.authenticate().await?;
    ///
    /// let mut tracks = client.search_tracks("coding");
    /// while let Some(track) = tracks.next().await? {
    ///     println!("{} - {}", track.primary_artist().unwrap_or("?"), track.name);
    /// }
    /// # Ok::<(), spotify_search::SpotifyError>(())
    /// # });
    /// ```
    pub fn search_tracks(&self, query: &str) -> TrackSearchIterator<SpotifyClientImpl> {
        TrackSearchIterator::new(self.clone(), query.to_string(), DEFAULT_LIMIT)
    }

    /// Create a track iterator with an explicit page size.
    pub fn search_tracks_with_limit(
        &self,
        query: &str,
        limit: u32,
    ) -> TrackSearchIterator<SpotifyClientImpl> {
        TrackSearchIterator::new(self.clone(), query.to_string(), limit)
    }
}

#[async_trait(?Send)]
impl SpotifySearchClient for SpotifyClientImpl {
    async fn authenticate(&self) -> Result<AccessToken> {
        let token_url = format!("{}/api/token", self.accounts_base_url);
        log::debug!("Requesting client-credentials token from {token_url}");

        let mut request = Request::new(Method::Post, token_url.parse::<Url>().unwrap());
        request.insert_header("Content-Type", "application/x-www-form-urlencoded");
        request.set_body(format!(
            "grant_type=client_credentials&client_id={}&client_secret={}",
            urlencoding::encode(&self.credentials.client_id),
            urlencoding::encode(&self.credentials.client_secret),
        ));

        let mut response = self
            .client
            .send(request)
            .await
            .map_err(|e| SpotifyError::Auth(format!("token request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(SpotifyError::Auth(format!(
                "token endpoint returned HTTP {}",
                response.status()
            )));
        }

        let body = response
            .body_string()
            .await
            .map_err(|e| SpotifyError::Auth(format!("could not read token response: {e}")))?;

        let token = api::parse_token_response(&body)?;
        log::debug!("Token exchange succeeded");
        *self.token.lock().unwrap() = Some(token.clone());
        Ok(token)
    }

    fn is_authenticated(&self) -> bool {
        self.token.lock().unwrap().is_some()
    }

    async fn search_page(&self, query: &str, offset: u32, limit: u32) -> Result<ResultPage> {
        if query.is_empty() {
            return Err(SpotifyError::Search("query must not be empty".to_string()));
        }
        if limit == 0 {
            return Err(SpotifyError::Search(
                "limit must be greater than zero".to_string(),
            ));
        }

        let token = self.access_token().ok_or_else(|| {
            SpotifyError::Auth("no access token; call authenticate() first".to_string())
        })?;

        let url = format!(
            "{}/v1/search?q={}&market={}&type=track&limit={}&offset={}",
            self.api_base_url,
            urlencoding::encode(query),
            MARKET,
            limit,
            offset,
        );
        log::debug!("Fetching search page at offset {offset} (limit {limit}) for '{query}'");

        let mut request = Request::new(Method::Get, url.parse::<Url>().unwrap());
        let bearer = token.bearer();
        request.insert_header("Authorization", bearer.as_str());

        let mut response = self
            .client
            .send(request)
            .await
            .map_err(|e| SpotifyError::Search(format!("search request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(SpotifyError::Search(format!(
                "search endpoint returned HTTP {}",
                response.status()
            )));
        }

        let body = response
            .body_string()
            .await
            .map_err(|e| SpotifyError::Search(format!("could not read search response: {e}")))?;

        api::parse_search_response(&body, limit)
    }
}
