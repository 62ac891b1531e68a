//! In-memory transport that records requests and replays one canned response.

use std::io::Read;
use std::sync::{Arc, Mutex};

use crate::catalog::RealDebrid;
use crate::client::Session;
use crate::dispatch::{Dispatcher, Transport};
use crate::error::{Error, Result};
use crate::http::{HttpBody, HttpMethod, HttpRequest, HttpResponse};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Recorded {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
    pub streamed: bool,
}

impl Recorded {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn body_str(&self) -> &str {
        std::str::from_utf8(&self.body).unwrap()
    }
}

/// Clones share one request log.
#[derive(Debug, Clone)]
pub(crate) struct RecordingTransport {
    response: std::result::Result<HttpResponse, String>,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl RecordingTransport {
    pub fn new(status: u16, body: &str) -> Self {
        Self {
            response: Ok(HttpResponse::new(status, body)),
            requests: Arc::default(),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            requests: Arc::default(),
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last(&self) -> Recorded {
        self.requests().pop().expect("no request recorded")
    }
}

impl Transport for RecordingTransport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let (body, streamed) = match request.body {
            HttpBody::Empty => (Vec::new(), false),
            HttpBody::Form(form) => (form.into_bytes(), false),
            HttpBody::Stream(mut reader) => {
                let mut bytes = Vec::new();
                reader.read_to_end(&mut bytes)?;
                (bytes, true)
            }
        };
        self.requests.lock().unwrap().push(Recorded {
            method: request.method,
            url: request.url,
            headers: request.headers,
            body,
            streamed,
        });
        match &self.response {
            Ok(response) => Ok(response.clone()),
            Err(message) => Err(Error::transport(message.clone())),
        }
    }
}

pub(crate) const BASE_URL: &str = "https://api.test/rest/1.0/";

/// A catalog client whose every call answers `status` / `body`.
pub(crate) fn client(status: u16, body: &str) -> RealDebrid<RecordingTransport> {
    RealDebrid::with_dispatcher(Dispatcher::with_transport(
        Session::with_base_url("tok", BASE_URL),
        RecordingTransport::new(status, body),
    ))
}
