//! Pagination session state.
//!
//! A [`SearchSession`] holds everything the presentation layer needs between
//! "load next page" calls: the query, the accumulated tracks, the cursor,
//! and the in-flight fetch marker. Offset, total and `has_more` are only
//! ever updated together, by applying a whole [`ResultPage`], so related
//! fields cannot tear.

use crate::track::{ResultPage, SearchCursor, Track};
use serde::{Deserialize, Serialize};

/// Marker for a fetch the session has admitted.
///
/// Fetch tokens are monotonically increasing per session. A completion that
/// presents a token other than the currently admitted one is stale (the
/// session moved on, e.g. after the caller abandoned the fetch) and is
/// discarded without mutating any state. This replaces the boolean loading
/// flag the overlap guard would otherwise race on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchToken(u64);

/// Observable protocol state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No fetch outstanding, more pages may be available
    Idle,
    /// Exactly one fetch outstanding
    Fetching,
    /// The cursor has passed the server-reported total; terminal
    Exhausted,
}

/// Accumulated state for one query's pagination session.
///
/// The session is mutated only through [`begin_fetch`](Self::begin_fetch) /
/// [`complete_fetch`](Self::complete_fetch) / [`fail_fetch`](Self::fail_fetch),
/// normally driven by [`load_more`](crate::SpotifySearchClient::load_more).
/// At most one fetch is admitted at a time; this is a cooperative contract,
/// not a lock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSession {
    query: String,
    tracks: Vec<Track>,
    cursor: SearchCursor,
    #[serde(skip)]
    in_flight: Option<u64>,
    #[serde(skip)]
    next_fetch_id: u64,
}

impl SearchSession {
    /// Start a fresh session for `query` with the given page size.
    ///
    /// Restarting a search means constructing a new session; cursors never
    /// move backwards within one.
    pub fn new(query: impl Into<String>, limit: u32) -> Self {
        Self {
            query: query.into(),
            tracks: Vec::new(),
            cursor: SearchCursor::initial(limit),
            in_flight: None,
            next_fetch_id: 0,
        }
    }

    /// The query this session paginates.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// All tracks accumulated so far, in page order.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// The current cursor.
    pub fn cursor(&self) -> SearchCursor {
        self.cursor
    }

    /// Offset the next fetch should request.
    pub fn next_offset(&self) -> u32 {
        self.cursor.offset
    }

    /// Page size for this session.
    pub fn limit(&self) -> u32 {
        self.cursor.limit
    }

    /// Server-reported total match count, 0 before the first page arrives.
    pub fn total(&self) -> u32 {
        self.cursor.total
    }

    /// Whether another page is (or may be) available.
    pub fn has_more(&self) -> bool {
        self.cursor.has_more
    }

    /// Whether a fetch is currently outstanding.
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Current protocol phase.
    pub fn phase(&self) -> SessionPhase {
        if self.in_flight.is_some() {
            SessionPhase::Fetching
        } else if self.cursor.has_more {
            SessionPhase::Idle
        } else {
            SessionPhase::Exhausted
        }
    }

    /// Admit a fetch, if the session is idle and not exhausted.
    ///
    /// Returns `None` while a fetch is outstanding or once the session is
    /// exhausted; the caller treats that as a no-op. Exhaustion is
    /// monotonic: once `has_more` is false it never becomes true again for
    /// this session.
    pub fn begin_fetch(&mut self) -> Option<FetchToken> {
        if self.in_flight.is_some() || !self.cursor.has_more {
            return None;
        }
        let id = self.next_fetch_id;
        self.next_fetch_id += 1;
        self.in_flight = Some(id);
        Some(FetchToken(id))
    }

    /// Apply a successfully fetched page.
    ///
    /// The page's tracks are appended in page order (pure concatenation, no
    /// deduplication by id) and the cursor is replaced in the same step.
    /// Returns `false` without touching any state if `token` is stale.
    pub fn complete_fetch(&mut self, token: FetchToken, page: ResultPage) -> bool {
        if self.in_flight != Some(token.0) {
            log::debug!(
                "Discarding stale page for '{}' (fetch {} superseded)",
                self.query,
                token.0
            );
            return false;
        }
        self.in_flight = None;

        log::debug!(
            "Page applied for '{}': +{} tracks, next offset {}, {} of {} accumulated",
            self.query,
            page.tracks.len(),
            page.cursor.offset,
            self.tracks.len() + page.tracks.len(),
            page.cursor.total
        );

        self.tracks.extend(page.tracks);
        self.cursor = page.cursor;
        true
    }

    /// Record a failed fetch.
    ///
    /// Clears the in-flight marker (stale tokens are ignored) and leaves the
    /// cursor and accumulated tracks untouched, so the caller can retry or
    /// abandon the session.
    pub fn fail_fetch(&mut self, token: FetchToken) {
        if self.in_flight == Some(token.0) {
            self.in_flight = None;
        }
    }
}
