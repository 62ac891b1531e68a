//! Request building and response classification for the REST API.
//!
//! # Design
//! `Session` holds only the bearer token and the base URL and carries no
//! mutable state between calls. A call is split into `Session::build`, which
//! turns a `Request` into an `HttpRequest`, and `parse_response`, which turns
//! an `HttpResponse` into an outcome. The transport executes the round-trip
//! in between, so both halves stay deterministic and free of I/O.

use serde_json::Value;
use tracing::debug;

use crate::error::{ApiError, Error, Result};
use crate::http::{HttpBody, HttpRequest, HttpResponse};
use crate::request::{Payload, Request, ResponseMode};

pub const DEFAULT_BASE_URL: &str = "https://api.real-debrid.com/rest/1.0/";

/// Environment variable holding the API token for `Session::from_env`.
pub const TOKEN_ENV: &str = "REAL_DEBRID_TOKEN";
/// Optional environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "REAL_DEBRID_BASE_URL";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const BINARY_CONTENT_TYPE: &str = "application/octet-stream";

/// Credential and endpoint shared by every call.
#[derive(Clone)]
pub struct Session {
    token: String,
    base_url: String,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(token, DEFAULT_BASE_URL)
    }

    /// The base URL is used verbatim; paths are appended to it as-is.
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            base_url: base_url.into(),
        }
    }

    /// Read the token from `REAL_DEBRID_TOKEN` and, if set, the base URL from
    /// `REAL_DEBRID_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(TOKEN_ENV).map_err(|_| Error::MissingConfig(TOKEN_ENV))?;
        Ok(match std::env::var(BASE_URL_ENV) {
            Ok(base_url) => Self::with_base_url(token, base_url),
            Err(_) => Self::new(token),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn bearer(&self) -> (String, String) {
        ("Authorization".to_string(), format!("Bearer {}", self.token))
    }

    fn default_headers(&self) -> Vec<(String, String)> {
        vec![
            self.bearer(),
            ("Accept".to_string(), "application/json".to_string()),
        ]
    }

    /// Build the outgoing request. Opens path-based uploads; the opened file
    /// moves into the returned body.
    pub fn build(&self, request: Request) -> Result<HttpRequest> {
        let Request {
            method,
            path,
            payload,
        } = request;
        let mut url = format!("{}{}", self.base_url, path);

        let (headers, body) = match payload {
            Payload::None => (self.default_headers(), HttpBody::Empty),
            Payload::Query(query) => {
                append_query(&mut url, &query.encode());
                (self.default_headers(), HttpBody::Empty)
            }
            Payload::Form(form) => {
                let mut headers = self.default_headers();
                headers.push(("Content-Type".to_string(), FORM_CONTENT_TYPE.to_string()));
                (headers, HttpBody::Form(form.encode()))
            }
            Payload::Binary { file, query } => {
                append_query(&mut url, &query.encode());
                // Uploads skip the default header set, so the credential is
                // attached here on its own.
                let headers = vec![
                    self.bearer(),
                    ("Content-Type".to_string(), BINARY_CONTENT_TYPE.to_string()),
                ];
                (headers, HttpBody::Stream(file.open()?))
            }
        };

        Ok(HttpRequest {
            method,
            url,
            headers,
            body,
        })
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish()
    }
}

fn append_query(url: &mut String, query: &str) {
    if !query.is_empty() {
        url.push('?');
        url.push_str(query);
    }
}

/// Classify a raw response.
///
/// A decoded body with a truthy `error` field is an `Api` error, any other
/// decoded body is returned unchanged. Without a body, 204 resolves to
/// `None` and every other status is an `EmptyResponse`.
pub fn parse_response(response: HttpResponse, mode: ResponseMode) -> Result<Option<Value>> {
    match decode_body(&response.body, mode)? {
        Some(body) => match api_error(&body) {
            Some(err) => {
                debug!(code = ?err.code, error = %err.error, "api error response");
                Err(Error::Api(err))
            }
            None => Ok(Some(body)),
        },
        None if response.status == 204 => Ok(None),
        None => Err(Error::EmptyResponse {
            status: response.status,
        }),
    }
}

fn decode_body(raw: &str, mode: ResponseMode) -> Result<Option<Value>> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    match mode {
        ResponseMode::Binary => Ok(Some(serde_json::from_str(raw)?)),
        ResponseMode::Structured => Ok(Some(serde_json::from_str(raw).unwrap_or_else(|err| {
            debug!(%err, "response is not JSON, keeping raw text");
            Value::String(raw.to_string())
        }))),
    }
}

fn api_error(body: &Value) -> Option<ApiError> {
    let error = body.get("error").filter(|e| is_truthy(e))?;
    let token = match error {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    Some(ApiError::new(body.get("error_code").and_then(Value::as_i64), token))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
