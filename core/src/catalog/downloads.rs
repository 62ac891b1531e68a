//! Download history.

use serde_json::Value;

use super::{Endpoint, Pagination};
use crate::dispatch::{Dispatcher, Transport};
use crate::error::Result;
use crate::http::HttpMethod;
use crate::request::{Params, Payload};

pub const GET: Endpoint = Endpoint::new("downloads.get", HttpMethod::Get, "downloads");
// The remote deletes through a GET on this path.
pub const DELETE: Endpoint = Endpoint::new("downloads.delete", HttpMethod::Get, "downloads/delete");

#[derive(Debug)]
pub struct Downloads<'a, T> {
    api: &'a Dispatcher<T>,
}

impl<'a, T: Transport> Downloads<'a, T> {
    pub(crate) fn new(api: &'a Dispatcher<T>) -> Self {
        Self { api }
    }

    pub fn get(&self, pagination: &Pagination) -> Result<Option<Value>> {
        let query = Params::new()
            .with("offset", pagination.offset)
            .with("page", pagination.page)
            .with("limit", pagination.limit);
        self.api.call(&GET, None, Payload::Query(query))
    }

    pub fn delete(&self, id: &str) -> Result<Option<Value>> {
        self.api.call(&DELETE, Some(id), Payload::None)
    }
}
