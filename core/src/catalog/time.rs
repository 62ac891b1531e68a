//! Server time.

use serde_json::Value;

use super::Endpoint;
use crate::dispatch::{Dispatcher, Transport};
use crate::error::Result;
use crate::http::HttpMethod;
use crate::request::Payload;

pub const GET: Endpoint = Endpoint::new("time.get", HttpMethod::Get, "time");
pub const ISO: Endpoint = Endpoint::new("time.ISO", HttpMethod::Get, "time/iso");

#[derive(Debug)]
pub struct Time<'a, T> {
    api: &'a Dispatcher<T>,
}

impl<'a, T: Transport> Time<'a, T> {
    pub(crate) fn new(api: &'a Dispatcher<T>) -> Self {
        Self { api }
    }

    /// Server time as `Y-m-d H:i:s`.
    pub fn get(&self) -> Result<Option<Value>> {
        self.api.call(&GET, None, Payload::None)
    }

    /// Server time in ISO 8601.
    pub fn iso(&self) -> Result<Option<Value>> {
        self.api.call(&ISO, None, Payload::None)
    }
}
