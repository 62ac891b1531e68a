//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. `Session`
//! builds `HttpRequest` values and the response classifier consumes
//! `HttpResponse` values without touching the network; a `Transport`
//! implementation performs the actual round-trip in between.
//!
//! Upload bodies are carried as an owned reader so the transport can stream
//! them. Whoever holds the `HttpRequest` owns the reader, and dropping the
//! request releases it.

use std::fmt;
use std::io::Read;

use serde::Deserialize;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of an outgoing request.
pub enum HttpBody {
    Empty,
    /// Already url-encoded `application/x-www-form-urlencoded` text.
    Form(String),
    /// Raw bytes streamed as-is.
    Stream(Box<dyn Read + Send>),
}

impl HttpBody {
    pub fn is_empty(&self) -> bool {
        matches!(self, HttpBody::Empty)
    }
}

impl fmt::Debug for HttpBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpBody::Empty => f.write_str("Empty"),
            HttpBody::Form(form) => f.debug_tuple("Form").field(form).finish(),
            HttpBody::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

/// An HTTP request described as plain data.
///
/// Built by `Session::build`. `url` is absolute and already carries the
/// encoded query string, if any.
#[derive(Debug)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: HttpBody,
}

impl HttpRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// An HTTP response described as plain data.
///
/// Produced by a `Transport` after executing an `HttpRequest`. The body is
/// kept raw; decoding is the classifier's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}
