//! Current user.

use serde_json::Value;

use super::Endpoint;
use crate::dispatch::{Dispatcher, Transport};
use crate::error::Result;
use crate::http::HttpMethod;
use crate::request::Payload;

pub const GET: Endpoint = Endpoint::new("user.get", HttpMethod::Get, "user");

#[derive(Debug)]
pub struct User<'a, T> {
    api: &'a Dispatcher<T>,
}

impl<'a, T: Transport> User<'a, T> {
    pub(crate) fn new(api: &'a Dispatcher<T>) -> Self {
        Self { api }
    }

    /// Account details of the token's owner.
    pub fn get(&self) -> Result<Option<Value>> {
        self.api.call(&GET, None, Payload::None)
    }
}
