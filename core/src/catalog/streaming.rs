//! Streaming metadata for unrestricted files.

use serde_json::Value;

use super::Endpoint;
use crate::dispatch::{Dispatcher, Transport};
use crate::error::Result;
use crate::http::HttpMethod;
use crate::request::Payload;

pub const TRANSCODE: Endpoint =
    Endpoint::new("streaming.transcode", HttpMethod::Get, "streaming/transcode");
pub const MEDIA_INFOS: Endpoint =
    Endpoint::new("streaming.mediaInfos", HttpMethod::Get, "streaming/mediaInfos");

#[derive(Debug)]
pub struct Streaming<'a, T> {
    api: &'a Dispatcher<T>,
}

impl<'a, T: Transport> Streaming<'a, T> {
    pub(crate) fn new(api: &'a Dispatcher<T>) -> Self {
        Self { api }
    }

    /// Transcoding links for a download id.
    pub fn transcode(&self, id: &str) -> Result<Option<Value>> {
        self.api.call(&TRANSCODE, Some(id), Payload::None)
    }

    /// Media details (codecs, duration, tracks) for a download id.
    pub fn media_infos(&self, id: &str) -> Result<Option<Value>> {
        self.api.call(&MEDIA_INFOS, Some(id), Payload::None)
    }
}
