//! The request dispatcher: build, send once, classify.

use serde_json::Value;
use tracing::debug;

use crate::catalog::Endpoint;
use crate::client::{parse_response, Session};
use crate::error::Result;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::request::{Payload, Request};
use crate::transport::UreqTransport;

/// Executes a single HTTP round-trip.
///
/// Implementations return every HTTP status as data. Only failures that
/// prevent a response (connection, TLS, timeout) become `Error::Transport`.
pub trait Transport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        (**self).send(request)
    }
}

/// Funnels every catalog call through one build/send/classify routine.
#[derive(Debug, Clone)]
pub struct Dispatcher<T = UreqTransport> {
    session: Session,
    transport: T,
}

impl Dispatcher<UreqTransport> {
    pub fn new(session: Session) -> Self {
        Self::with_transport(session, UreqTransport::new())
    }
}

impl<T: Transport> Dispatcher<T> {
    pub fn with_transport(session: Session, transport: T) -> Self {
        Self { session, transport }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Perform one call. No retries; the first outcome is final.
    pub fn execute(&self, request: Request) -> Result<Option<Value>> {
        let mode = request.payload.response_mode();
        let http = self.session.build(request)?;
        debug!(method = %http.method, url = %http.url, "dispatching request");
        // The request, and any upload stream it owns, is consumed here and
        // dropped before classification on every path.
        let response = self.transport.send(http)?;
        parse_response(response, mode)
    }

    pub fn get(&self, path: impl Into<String>, payload: Payload) -> Result<Option<Value>> {
        self.execute(Request::new(HttpMethod::Get, path, payload))
    }

    pub fn post(&self, path: impl Into<String>, payload: Payload) -> Result<Option<Value>> {
        self.execute(Request::new(HttpMethod::Post, path, payload))
    }

    pub fn put(&self, path: impl Into<String>, payload: Payload) -> Result<Option<Value>> {
        self.execute(Request::new(HttpMethod::Put, path, payload))
    }

    pub fn delete(&self, path: impl Into<String>, payload: Payload) -> Result<Option<Value>> {
        self.execute(Request::new(HttpMethod::Delete, path, payload))
    }

    /// Call a catalog endpoint through the helper for its verb. `id` is
    /// appended as a trailing path segment.
    pub fn call(&self, endpoint: &Endpoint, id: Option<&str>, payload: Payload) -> Result<Option<Value>> {
        let path = endpoint.path_for(id);
        match endpoint.method {
            HttpMethod::Get => self.get(path, payload),
            HttpMethod::Post => self.post(path, payload),
            HttpMethod::Put => self.put(path, payload),
            HttpMethod::Delete => self.delete(path, payload),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::Error;
    use crate::request::Params;
    use crate::testing::RecordingTransport;

    fn dispatcher(status: u16, body: &str) -> Dispatcher<RecordingTransport> {
        Dispatcher::with_transport(
            Session::with_base_url("tok", "http://mock/"),
            RecordingTransport::new(status, body),
        )
    }

    #[test]
    fn verb_helpers_fix_the_method() {
        let d = dispatcher(200, "{}");
        d.get("a", Payload::None).unwrap();
        d.post("b", Payload::None).unwrap();
        d.put("c", Payload::None).unwrap();
        d.delete("d", Payload::None).unwrap();
        let methods: Vec<_> = d.transport().requests().iter().map(|r| r.method).collect();
        assert_eq!(
            methods,
            vec![HttpMethod::Get, HttpMethod::Post, HttpMethod::Put, HttpMethod::Delete]
        );
    }

    #[test]
    fn execute_returns_body() {
        let d = dispatcher(200, r#"{"points":10}"#);
        let value = d
            .post("settings/update", Payload::Form(Params::new().with("setting_name", "x")))
            .unwrap();
        assert_eq!(value, Some(json!({"points": 10})));
        let recorded = &d.transport().requests()[0];
        assert_eq!(recorded.url, "http://mock/settings/update");
        assert_eq!(recorded.body, b"setting_name=x");
    }

    #[test]
    fn transport_failure_is_passed_through() {
        let d = Dispatcher::with_transport(
            Session::new("tok"),
            RecordingTransport::failing("connection refused"),
        );
        let err = d.get("time", Payload::None).unwrap_err();
        match err {
            Error::Transport(inner) => assert_eq!(inner.to_string(), "connection refused"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn open_failure_never_reaches_transport() {
        let d = dispatcher(200, "{}");
        let err = d
            .put("unrestrict/containerFile", Payload::binary("/missing/file.dlc"))
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
        assert!(d.transport().requests().is_empty());
    }
}
