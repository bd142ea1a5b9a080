pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod format;
pub mod iterator;
pub mod session;
pub mod track;
pub mod r#trait;

pub use auth::{AccessToken, Credentials};
pub use client::SpotifyClientImpl;
pub use error::SpotifyError;
pub use format::format_duration_ms;
pub use iterator::{AsyncPaginatedIterator, TrackSearchIterator};
pub use r#trait::SpotifySearchClient;
pub use session::{FetchToken, SearchSession, SessionPhase};
pub use track::{ResultPage, SearchCursor, Track};

#[cfg(feature = "mock")]
pub use r#trait::MockSpotifySearchClient;

pub type Result<T> = std::result::Result<T, SpotifyError>;
