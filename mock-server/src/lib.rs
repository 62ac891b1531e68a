use std::{
    collections::HashMap,
    sync::{Arc, PoisonError, RwLock},
};

use axum::{
    body::Bytes,
    extract::{Path, RawQuery, State},
    http::{header, HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

/// Path prefix the mock serves under, mirroring the real API.
pub const API_PREFIX: &str = "/rest/1.0/";

/// A request as the mock received it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedRequest {
    pub method: String,
    /// Path relative to `API_PREFIX`.
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    pub fn body_str(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Canned answer for one `(method, path)`. `body: None` sends no body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fixture {
    pub status: u16,
    pub body: Option<String>,
}

/// Shared fixture table and request log. Clones share state.
#[derive(Clone, Debug, Default)]
pub struct MockApi {
    fixtures: Arc<RwLock<HashMap<(String, String), Fixture>>>,
    requests: Arc<RwLock<Vec<RecordedRequest>>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `method path` with `status` and, if given, a JSON body.
    pub fn respond(&self, method: &str, path: &str, status: u16, body: Option<&str>) -> &Self {
        let fixture = Fixture {
            status,
            body: body.map(str::to_string),
        };
        self.fixtures
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert((method.to_ascii_uppercase(), path.to_string()), fixture);
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests().pop()
    }

    fn fixture(&self, method: &str, path: &str) -> Option<Fixture> {
        self.fixtures
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&(method.to_string(), path.to_string()))
            .cloned()
    }

    fn record(&self, request: RecordedRequest) {
        self.requests
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);
    }
}

pub fn app(api: MockApi) -> Router {
    Router::new()
        .route("/rest/1.0/{*path}", any(handle))
        .with_state(api)
}

pub async fn run(listener: TcpListener, api: MockApi) -> Result<(), std::io::Error> {
    axum::serve(listener, app(api)).await
}

async fn handle(
    State(api): State<MockApi>,
    method: Method,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    let request = RecordedRequest {
        method: method.as_str().to_string(),
        path,
        query,
        authorization: header_value(header::AUTHORIZATION),
        content_type: header_value(header::CONTENT_TYPE),
        body: body.to_vec(),
    };
    tracing::debug!(method = %request.method, path = %request.path, "recorded request");

    let fixture = api.fixture(&request.method, &request.path);
    api.record(request);

    match fixture {
        Some(fixture) => fixture_response(fixture),
        None => (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "application/json")],
            r#"{"error":"unknown_ressource","error_code":0}"#,
        )
            .into_response(),
    }
}

fn fixture_response(fixture: Fixture) -> Response {
    let status = StatusCode::from_u16(fixture.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    match fixture.body {
        Some(body) => (status, [(header::CONTENT_TYPE, "application/json")], body).into_response(),
        None => status.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorded_request_roundtrips_through_json() {
        let request = RecordedRequest {
            method: "POST".to_string(),
            path: "unrestrict/check".to_string(),
            query: None,
            authorization: Some("Bearer t".to_string()),
            content_type: Some("application/x-www-form-urlencoded".to_string()),
            body: b"link=x&password=".to_vec(),
        };
        let json = serde_json::to_string(&request).unwrap();
        let back: RecordedRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }

    #[test]
    fn fixtures_are_keyed_by_uppercase_method() {
        let api = MockApi::new();
        api.respond("get", "time", 200, Some(r#""2024-01-01 00:00:00""#));
        assert_eq!(api.fixture("GET", "time").unwrap().status, 200);
        assert!(api.fixture("POST", "time").is_none());
    }

    #[test]
    fn later_fixture_replaces_earlier() {
        let api = MockApi::new();
        api.respond("GET", "user", 200, Some("{}"))
            .respond("GET", "user", 401, Some(r#"{"error":"bad_token","error_code":8}"#));
        assert_eq!(api.fixture("GET", "user").unwrap().status, 401);
    }

    #[test]
    fn clones_share_request_log() {
        let api = MockApi::new();
        let clone = api.clone();
        clone.record(RecordedRequest {
            method: "GET".to_string(),
            path: "hosts".to_string(),
            query: None,
            authorization: None,
            content_type: None,
            body: Vec::new(),
        });
        assert_eq!(api.requests().len(), 1);
    }
}
