//! Supported hosters.

use serde_json::Value;

use super::Endpoint;
use crate::dispatch::{Dispatcher, Transport};
use crate::error::Result;
use crate::http::HttpMethod;
use crate::request::Payload;

pub const GET: Endpoint = Endpoint::new("hosts.get", HttpMethod::Get, "hosts");
pub const STATUS: Endpoint = Endpoint::new("hosts.status", HttpMethod::Get, "hosts/status");
pub const REGEX: Endpoint = Endpoint::new("hosts.regex", HttpMethod::Get, "hosts/regex");
pub const DOMAINS: Endpoint = Endpoint::new("hosts.domains", HttpMethod::Get, "hosts/domains");

#[derive(Debug)]
pub struct Hosts<'a, T> {
    api: &'a Dispatcher<T>,
}

impl<'a, T: Transport> Hosts<'a, T> {
    pub(crate) fn new(api: &'a Dispatcher<T>) -> Self {
        Self { api }
    }

    pub fn get(&self) -> Result<Option<Value>> {
        self.api.call(&GET, None, Payload::None)
    }

    pub fn status(&self) -> Result<Option<Value>> {
        self.api.call(&STATUS, None, Payload::None)
    }

    /// Regexes matching supported links.
    pub fn regex(&self) -> Result<Option<Value>> {
        self.api.call(&REGEX, None, Payload::None)
    }

    pub fn domains(&self) -> Result<Option<Value>> {
        self.api.call(&DOMAINS, None, Payload::None)
    }
}
