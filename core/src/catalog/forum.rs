//! Forum listing.

use serde_json::Value;

use super::Endpoint;
use crate::dispatch::{Dispatcher, Transport};
use crate::error::Result;
use crate::http::HttpMethod;
use crate::request::Payload;

pub const GET: Endpoint = Endpoint::new("forum.get", HttpMethod::Get, "forum");
pub const TOPIC: Endpoint = Endpoint::new("forum.topic", HttpMethod::Get, "forum");

#[derive(Debug)]
pub struct Forum<'a, T> {
    api: &'a Dispatcher<T>,
}

impl<'a, T: Transport> Forum<'a, T> {
    pub(crate) fn new(api: &'a Dispatcher<T>) -> Self {
        Self { api }
    }

    /// The forum index, or a single forum when `id` is given.
    pub fn get(&self, id: Option<&str>) -> Result<Option<Value>> {
        match id {
            Some(id) => self.topic(id),
            None => self.api.call(&GET, None, Payload::None),
        }
    }

    pub fn topic(&self, id: &str) -> Result<Option<Value>> {
        self.api.call(&TOPIC, Some(id), Payload::None)
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::client;

    #[test]
    fn get_without_id_lists_forums() {
        let rd = client(200, "[]");
        rd.forum().get(None).unwrap();
        assert_eq!(rd.dispatcher().transport().last().url, "https://api.test/rest/1.0/forum");
    }

    #[test]
    fn get_with_id_and_topic_agree() {
        let rd = client(200, "{}");
        rd.forum().get(Some("12")).unwrap();
        rd.forum().topic("12").unwrap();
        let reqs = rd.dispatcher().transport().requests();
        assert_eq!(reqs[0].url, "https://api.test/rest/1.0/forum/12");
        assert_eq!(reqs[0], reqs[1]);
    }
}
