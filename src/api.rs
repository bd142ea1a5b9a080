//! Wire-format schema and parsing for the Spotify Web API responses.
//!
//! The raw JSON is deserialized into explicit serde structs and then
//! converted into the crate's domain types, with fallbacks for fields the
//! API sometimes omits (album images in particular). Nested fields are
//! never accessed unguarded.

use crate::auth::AccessToken;
use crate::track::{ResultPage, SearchCursor, Track};
use crate::{Result, SpotifyError};
use serde::Deserialize;

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct ApiSearchResponse {
    tracks: ApiTracks,
}

#[derive(Deserialize)]
struct ApiTracks {
    #[serde(default)]
    items: Vec<ApiTrack>,
    offset: u32,
    total: u32,
}

#[derive(Deserialize)]
struct ApiTrack {
    id: String,
    name: String,
    #[serde(default)]
    duration_ms: u64,
    #[serde(default)]
    album: ApiAlbum,
    #[serde(default)]
    artists: Vec<ApiArtist>,
}

#[derive(Deserialize, Default)]
struct ApiAlbum {
    #[serde(default)]
    images: Vec<ApiImage>,
}

#[derive(Deserialize)]
struct ApiImage {
    url: String,
}

#[derive(Deserialize)]
struct ApiArtist {
    name: String,
}

impl From<ApiTrack> for Track {
    fn from(t: ApiTrack) -> Self {
        Track {
            id: t.id,
            name: t.name,
            artists: t.artists.into_iter().map(|a| a.name).collect(),
            album_image_url: t.album.images.into_iter().next().map(|i| i.url),
            duration_ms: t.duration_ms,
        }
    }
}

/// Parse a token-endpoint response body into an [`AccessToken`].
///
/// The token must be present and non-empty; anything else is a malformed
/// exchange and yields [`SpotifyError::Auth`].
pub fn parse_token_response(json: &str) -> Result<AccessToken> {
    let response: TokenResponse = serde_json::from_str(json)
        .map_err(|e| SpotifyError::Auth(format!("malformed token response: {e}")))?;

    if response.access_token.is_empty() {
        return Err(SpotifyError::Auth(
            "token endpoint returned an empty access_token".to_string(),
        ));
    }

    Ok(AccessToken::new(response.access_token))
}

/// Parse a search-endpoint response body into a [`ResultPage`].
///
/// The returned cursor points at the *next* fetch: its offset is the
/// server-reported offset plus `limit`, and `has_more` is true iff that
/// offset is still below the server-reported total.
pub fn parse_search_response(json: &str, limit: u32) -> Result<ResultPage> {
    let response: ApiSearchResponse = serde_json::from_str(json)
        .map_err(|e| SpotifyError::Search(format!("malformed search response: {e}")))?;

    let next_offset = response.tracks.offset + limit;
    let total = response.tracks.total;
    let cursor = SearchCursor {
        offset: next_offset,
        limit,
        total,
        has_more: next_offset < total,
    };

    let tracks: Vec<Track> = response.tracks.items.into_iter().map(Track::from).collect();

    Ok(ResultPage { tracks, cursor })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_token_response() {
        let token = parse_token_response(r#"{"access_token": "abc", "token_type": "Bearer", "expires_in": 3600}"#).unwrap();
        assert_eq!(token.as_str(), "abc");
    }

    #[test]
    fn test_parse_token_response_rejects_missing_token() {
        assert!(matches!(
            parse_token_response(r#"{"error": "invalid_client"}"#),
            Err(SpotifyError::Auth(_))
        ));
        assert!(matches!(
            parse_token_response(r#"{"access_token": ""}"#),
            Err(SpotifyError::Auth(_))
        ));
        assert!(matches!(
            parse_token_response("not json"),
            Err(SpotifyError::Auth(_))
        ));
    }

    #[test]
    fn test_parse_search_response() {
        let json = r#"{
            "tracks": {
                "items": [
                    {
                        "id": "track1",
                        "name": "Test Track",
                        "duration_ms": 63000,
                        "album": {"images": [{"url": "https://img.example/a.jpg"}, {"url": "https://img.example/b.jpg"}]},
                        "artists": [{"name": "Test Artist"}, {"name": "Feature"}]
                    }
                ],
                "offset": 0,
                "total": 45
            }
        }"#;

        let page = parse_search_response(json, 20).unwrap();
        assert_eq!(page.tracks.len(), 1);
        assert_eq!(page.tracks[0].id, "track1");
        assert_eq!(page.tracks[0].name, "Test Track");
        assert_eq!(
            page.tracks[0].artists,
            vec!["Test Artist".to_string(), "Feature".to_string()]
        );
        assert_eq!(
            page.tracks[0].album_image_url.as_deref(),
            Some("https://img.example/a.jpg")
        );
        assert_eq!(page.tracks[0].duration_ms, 63000);
        assert_eq!(page.cursor.offset, 20);
        assert_eq!(page.cursor.total, 45);
        assert!(page.cursor.has_more);
    }

    #[test]
    fn test_parse_search_response_last_page() {
        let json = r#"{
            "tracks": {
                "items": [{"id": "t", "name": "n", "duration_ms": 1000, "album": {"images": []}, "artists": [{"name": "a"}]}],
                "offset": 40,
                "total": 45
            }
        }"#;

        let page = parse_search_response(json, 20).unwrap();
        assert_eq!(page.cursor.offset, 60);
        assert!(!page.cursor.has_more);
    }

    #[test]
    fn test_parse_search_response_absent_fields() {
        // No album images, no artists: the track still parses, with
        // explicit fallbacks instead of a failed lookup.
        let json = r#"{
            "tracks": {
                "items": [{"id": "t", "name": "n"}],
                "offset": 0,
                "total": 1
            }
        }"#;

        let page = parse_search_response(json, 20).unwrap();
        assert_eq!(page.tracks[0].album_image_url, None);
        assert!(page.tracks[0].artists.is_empty());
        assert_eq!(page.tracks[0].duration_ms, 0);
        assert!(!page.cursor.has_more);
    }

    #[test]
    fn test_parse_search_response_malformed() {
        assert!(matches!(
            parse_search_response(r#"{"albums": {}}"#, 20),
            Err(SpotifyError::Search(_))
        ));
        assert!(matches!(
            parse_search_response("<html>", 20),
            Err(SpotifyError::Search(_))
        ));
    }
}
