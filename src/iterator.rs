use crate::r#trait::SpotifySearchClient;
use crate::track::{ResultPage, Track};
use crate::Result;

use async_trait::async_trait;

/// Async iterator trait for paginated Spotify data.
///
/// This provides a uniform pull interface over offset/limit paginated
/// endpoints: items are yielded one at a time and new pages are fetched on
/// demand, exactly one at a time.
#[async_trait(?Send)]
pub trait AsyncPaginatedIterator<T> {
    /// Fetch the next item from the iterator.
    ///
    /// This method automatically handles pagination, fetching new pages as
    /// needed. Returns `None` when there are no more items available.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(item))` - Next item in the sequence
    /// - `Ok(None)` - No more items available
    /// - `Err(...)` - Network or parsing error occurred
    async fn next(&mut self) -> Result<Option<T>>;

    /// Collect all remaining items into a Vec.
    ///
    /// **Warning**: This fetches ALL remaining pages; prefer
    /// [`take`](Self::take) for bounded collection from large result sets.
    async fn collect_all(&mut self) -> Result<Vec<T>> {
        let mut items = Vec::new();
        while let Some(item) = self.next().await? {
            items.push(item);
        }
        Ok(items)
    }

    /// Take up to n items from the iterator.
    async fn take(&mut self, n: usize) -> Result<Vec<T>> {
        let mut items = Vec::new();
        for _ in 0..n {
            match self.next().await? {
                Some(item) => items.push(item),
                None => break,
            }
        }
        Ok(items)
    }

    /// Offset the next page fetch would request.
    fn current_offset(&self) -> u32;

    /// Server-reported total match count, if known.
    ///
    /// Returns `None` until at least one page has been fetched.
    fn total(&self) -> Option<u32> {
        None
    }
}

/// Iterator over tracks matching a search query.
///
/// Pages are fetched lazily as items are consumed; the iterator never holds
/// more than one page of tracks in its buffer and never fetches past the
/// server-reported total.
pub struct TrackSearchIterator<C: SpotifySearchClient> {
    client: C,
    query: String,
    limit: u32,
    offset: u32,
    has_more: bool,
    buffer: Vec<Track>,
    total: Option<u32>,
}

#[async_trait(?Send)]
impl<C: SpotifySearchClient> AsyncPaginatedIterator<Track> for TrackSearchIterator<C> {
    async fn next(&mut self) -> Result<Option<Track>> {
        // If buffer is empty, try to load next page
        if self.buffer.is_empty() {
            if let Some(page) = self.next_page().await? {
                self.buffer = page.tracks;
                self.buffer.reverse(); // Reverse so we can pop from end efficiently
            }
        }

        Ok(self.buffer.pop())
    }

    fn current_offset(&self) -> u32 {
        self.offset
    }

    fn total(&self) -> Option<u32> {
        self.total
    }
}

impl<C: SpotifySearchClient> TrackSearchIterator<C> {
    /// Create a new track search iterator starting at offset 0.
    ///
    /// This is typically called via
    /// [`SpotifyClientImpl::search_tracks`](crate::SpotifyClientImpl::search_tracks).
    pub fn new(client: C, query: String, limit: u32) -> Self {
        Self::with_starting_offset(client, query, limit, 0)
    }

    /// Create a new track search iterator starting from a specific offset.
    ///
    /// This allows resuming pagination from where a previous iteration left
    /// off rather than refetching earlier pages.
    pub fn with_starting_offset(client: C, query: String, limit: u32, starting_offset: u32) -> Self {
        Self {
            client,
            query,
            limit,
            offset: starting_offset,
            has_more: true,
            buffer: Vec::new(),
            total: None,
        }
    }

    /// Fetch the next page of search results.
    ///
    /// Returns `None` once the cursor has passed the server-reported total.
    pub async fn next_page(&mut self) -> Result<Option<ResultPage>> {
        if !self.has_more {
            return Ok(None);
        }

        log::debug!(
            "Fetching '{}' page at offset {} (total: {:?})",
            self.query,
            self.offset,
            self.total
        );

        let page = self
            .client
            .search_page(&self.query, self.offset, self.limit)
            .await?;

        self.has_more = page.cursor.has_more;
        self.offset = page.cursor.offset;
        self.total = Some(page.cursor.total);

        Ok(Some(page))
    }
}
