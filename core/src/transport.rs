//! Blocking HTTP transport backed by `ureq`.

use ureq::typestate::{WithBody, WithoutBody};
use ureq::{http, Agent, Body, RequestBuilder, SendBody};

use crate::dispatch::Transport;
use crate::error::{Error, Result};
use crate::http::{HttpBody, HttpMethod, HttpRequest, HttpResponse};

/// Default `Transport`.
///
/// The agent is configured to return 4xx/5xx responses as data rather than
/// `Err`, so API error payloads reach the classifier.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    /// Use a caller-configured agent. It should keep `http_status_as_error`
    /// disabled.
    pub fn with_agent(agent: Agent) -> Self {
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let HttpRequest {
            method,
            url,
            headers,
            body,
        } = request;

        let result = match method {
            HttpMethod::Get => send_without_body(self.agent.get(&url), &headers, body),
            HttpMethod::Delete => send_without_body(self.agent.delete(&url), &headers, body),
            HttpMethod::Post => send_with_body(self.agent.post(&url), &headers, body),
            HttpMethod::Put => send_with_body(self.agent.put(&url), &headers, body),
        };

        let mut response = result.map_err(Error::transport)?;
        let status = response.status().as_u16();
        // The server answered, so the whole body goes to the classifier
        // whatever its size or encoding.
        let bytes = response
            .body_mut()
            .with_config()
            .limit(u64::MAX)
            .read_to_vec()
            .map_err(Error::transport)?;
        let body = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        };

        Ok(HttpResponse { status, body })
    }
}

fn send_without_body(
    mut builder: RequestBuilder<WithoutBody>,
    headers: &[(String, String)],
    body: HttpBody,
) -> std::result::Result<http::Response<Body>, ureq::Error> {
    for (name, value) in headers {
        builder = builder.header(name, value);
    }
    match body {
        HttpBody::Empty => builder.call(),
        HttpBody::Form(form) => builder.force_send_body().send(form.as_str()),
        HttpBody::Stream(reader) => builder
            .force_send_body()
            .send(SendBody::from_owned_reader(reader)),
    }
}

fn send_with_body(
    mut builder: RequestBuilder<WithBody>,
    headers: &[(String, String)],
    body: HttpBody,
) -> std::result::Result<http::Response<Body>, ureq::Error> {
    for (name, value) in headers {
        builder = builder.header(name, value);
    }
    match body {
        HttpBody::Empty => builder.send_empty(),
        HttpBody::Form(form) => builder.send(form.as_str()),
        HttpBody::Stream(reader) => builder.send(SendBody::from_owned_reader(reader)),
    }
}
