//! Link unrestriction.

use serde_json::Value;

use super::Endpoint;
use crate::dispatch::{Dispatcher, Transport};
use crate::error::Result;
use crate::http::HttpMethod;
use crate::request::{FileInput, Params, Payload};

pub const CHECK: Endpoint = Endpoint::new("unrestrict.check", HttpMethod::Post, "unrestrict/check");
pub const LINK: Endpoint = Endpoint::new("unrestrict.link", HttpMethod::Post, "unrestrict/link");
pub const FOLDER: Endpoint = Endpoint::new("unrestrict.folder", HttpMethod::Post, "unrestrict/folder");
pub const CONTAINER_FILE: Endpoint = Endpoint::new(
    "unrestrict.containerFile",
    HttpMethod::Put,
    "unrestrict/containerFile",
);
pub const CONTAINER_LINK: Endpoint = Endpoint::new(
    "unrestrict.containerLink",
    HttpMethod::Post,
    "unrestrict/containerLink",
);

#[derive(Debug)]
pub struct Unrestrict<'a, T> {
    api: &'a Dispatcher<T>,
}

impl<'a, T: Transport> Unrestrict<'a, T> {
    pub(crate) fn new(api: &'a Dispatcher<T>) -> Self {
        Self { api }
    }

    /// Check whether a hoster link is supported and available.
    pub fn check(&self, link: &str, password: Option<&str>) -> Result<Option<Value>> {
        let form = Params::new().with("link", link).with("password", password);
        self.api.call(&CHECK, None, Payload::Form(form))
    }

    /// Unrestrict a hoster link. `remote` is `0` for the default, `1` to use
    /// remote traffic.
    pub fn link(&self, link: &str, password: Option<&str>, remote: u8) -> Result<Option<Value>> {
        let form = Params::new()
            .with("link", link)
            .with("password", password)
            .with("remote", remote);
        self.api.call(&LINK, None, Payload::Form(form))
    }

    /// Expand a folder link into its file links.
    pub fn folder(&self, link: &str) -> Result<Option<Value>> {
        let form = Params::new().with("link", link);
        self.api.call(&FOLDER, None, Payload::Form(form))
    }

    /// Decrypt an uploaded container file (RSDF, CCF, CCF3, DLC).
    pub fn container_file(&self, file: impl Into<FileInput>) -> Result<Option<Value>> {
        self.api.call(&CONTAINER_FILE, None, Payload::binary(file))
    }

    /// Decrypt a container file hosted at `link`.
    pub fn container_link(&self, link: &str) -> Result<Option<Value>> {
        let form = Params::new().with("link", link);
        self.api.call(&CONTAINER_LINK, None, Payload::Form(form))
    }
}
