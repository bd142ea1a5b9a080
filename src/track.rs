//! Domain types for search results.
//!
//! These are the validated, owned forms of the data the Spotify Web API
//! returns; the raw wire shapes live in [`crate::api`].

use serde::{Deserialize, Serialize};

/// A single track from a search result.
///
/// Tracks are immutable once constructed and are held by the caller's
/// accumulated result list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Track {
    /// Spotify track id, unique within a result set
    pub id: String,
    /// The track name/title
    pub name: String,
    /// Artist names in the order the API reports them
    ///
    /// Empty only if the API returns a track with no artists; the
    /// presentation layer decides how to render that case.
    pub artists: Vec<String>,
    /// URL of the first (largest) album cover image, if any
    pub album_image_url: Option<String>,
    /// Track duration in milliseconds
    pub duration_ms: u64,
}

impl Track {
    /// The first-listed artist, the one the original UI displays.
    pub fn primary_artist(&self) -> Option<&str> {
        self.artists.first().map(String::as_str)
    }
}

/// Offset/limit pagination cursor.
///
/// After each page fetch, `offset` is the offset for the *next* fetch
/// (server offset plus `limit`, computed eagerly) and
/// `has_more == (offset < total)`. The offset strictly increases by `limit`
/// per successful fetch; it never decreases and never skips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCursor {
    /// Offset to request the next page at
    pub offset: u32,
    /// Page size used for the fetch
    pub limit: u32,
    /// Server-reported total number of matches
    pub total: u32,
    /// Whether another page is available
    pub has_more: bool,
}

impl SearchCursor {
    /// Cursor for a session that has not fetched anything yet.
    ///
    /// `has_more` starts true so the first fetch is attempted; the first
    /// page's response replaces this with server-reported values.
    pub fn initial(limit: u32) -> Self {
        Self {
            offset: 0,
            limit,
            total: 0,
            has_more: true,
        }
    }
}

/// The atomic unit returned by one page fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultPage {
    /// Tracks on this page, in API order
    pub tracks: Vec<Track>,
    /// Cursor state after this page
    pub cursor: SearchCursor,
}
