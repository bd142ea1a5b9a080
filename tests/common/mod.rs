#![allow(dead_code)]
//! In-process HTTP fixtures for integration tests.
//!
//! [`FixtureClient`] implements [`HttpClient`] over a list of canned
//! responses matched by method and URL substring, and records every request
//! so tests can assert on what was (and was not) sent.

use async_trait::async_trait;
use http_client::{HttpClient, Request, Response};
use http_types::{Method, StatusCode};
use serde_json::json;
use std::sync::{Arc, Mutex};

/// One request as the client sent it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub url: String,
    pub body: String,
    pub authorization: Option<String>,
}

/// Shared view of the requests a [`FixtureClient`] has served.
#[derive(Debug, Clone, Default)]
pub struct RequestLog(Arc<Mutex<Vec<RecordedRequest>>>);

impl RequestLog {
    pub fn all(&self) -> Vec<RecordedRequest> {
        self.0.lock().unwrap().clone()
    }

    /// Requests whose URL contains `pattern`.
    pub fn matching(&self, pattern: &str) -> Vec<RecordedRequest> {
        self.all()
            .into_iter()
            .filter(|r| r.url.contains(pattern))
            .collect()
    }

    fn push(&self, request: RecordedRequest) {
        self.0.lock().unwrap().push(request);
    }
}

#[derive(Debug)]
struct Route {
    method: Method,
    url_contains: String,
    status: u16,
    body: String,
}

/// Canned-response HTTP client for driving the real `SpotifyClientImpl`
/// without a network.
#[derive(Debug, Default)]
pub struct FixtureClient {
    routes: Vec<Route>,
    log: RequestLog,
}

impl FixtureClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a canned response for requests whose URL contains `url_contains`.
    ///
    /// Routes are tried in insertion order; the first match wins.
    pub fn on(
        mut self,
        method: Method,
        url_contains: &str,
        status: u16,
        body: impl Into<String>,
    ) -> Self {
        self.routes.push(Route {
            method,
            url_contains: url_contains.to_string(),
            status,
            body: body.into(),
        });
        self
    }

    /// Handle for inspecting served requests after the client is boxed.
    pub fn log(&self) -> RequestLog {
        self.log.clone()
    }
}

#[async_trait]
impl HttpClient for FixtureClient {
    async fn send(&self, mut req: Request) -> Result<Response, http_client::Error> {
        let url = req.url().to_string();
        let method = req.method();
        let authorization = req
            .header("Authorization")
            .map(|values| values.last().as_str().to_string());
        let body = req.body_string().await.unwrap_or_default();
        self.log.push(RecordedRequest {
            method,
            url: url.clone(),
            body,
            authorization,
        });

        for route in &self.routes {
            if route.method == method && url.contains(&route.url_contains) {
                let status = StatusCode::try_from(route.status)
                    .expect("fixture route has an invalid status code");
                let mut response = Response::new(status);
                response.insert_header("Content-Type", "application/json");
                response.set_body(route.body.clone());
                return Ok(response);
            }
        }

        Err(http_types::Error::from_str(
            StatusCode::NotFound,
            format!("no fixture for {method} {url}"),
        ))
    }
}

/// Token-endpoint body containing `token`.
pub fn token_body(token: &str) -> String {
    json!({
        "access_token": token,
        "token_type": "Bearer",
        "expires_in": 3600,
    })
    .to_string()
}

/// Search-endpoint body with `count` generated tracks starting at `offset`
/// out of `total` matches.
pub fn search_body(offset: u32, count: u32, total: u32) -> String {
    let items: Vec<_> = (0..count)
        .map(|i| {
            let n = offset + i;
            json!({
                "id": format!("track-{n}"),
                "name": format!("Track {n}"),
                "duration_ms": 63_000,
                "album": {"images": [{"url": format!("https://img.example/{n}.jpg")}]},
                "artists": [{"name": "Fixture Artist"}],
            })
        })
        .collect();

    json!({
        "tracks": {
            "items": items,
            "offset": offset,
            "total": total,
        }
    })
    .to_string()
}
