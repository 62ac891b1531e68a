//! Traffic statistics.

use serde_json::Value;

use super::Endpoint;
use crate::dispatch::{Dispatcher, Transport};
use crate::error::Result;
use crate::http::HttpMethod;
use crate::request::{Params, Payload};

pub const GET: Endpoint = Endpoint::new("traffic.get", HttpMethod::Get, "traffic");
pub const DETAILS: Endpoint = Endpoint::new("traffic.details", HttpMethod::Get, "traffic/details");

#[derive(Debug)]
pub struct Traffic<'a, T> {
    api: &'a Dispatcher<T>,
}

impl<'a, T: Transport> Traffic<'a, T> {
    pub(crate) fn new(api: &'a Dispatcher<T>) -> Self {
        Self { api }
    }

    /// Remaining traffic per limited hoster.
    pub fn get(&self) -> Result<Option<Value>> {
        self.api.call(&GET, None, Payload::None)
    }

    /// Traffic per day between `start` and `end` (`YYYY-MM-DD`).
    pub fn details(&self, start: Option<&str>, end: Option<&str>) -> Result<Option<Value>> {
        let query = Params::new().with("start", start).with("end", end);
        self.api.call(&DETAILS, None, Payload::Query(query))
    }
}
