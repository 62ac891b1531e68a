//! Torrent management.

use serde_json::Value;

use super::{Endpoint, Pagination};
use crate::dispatch::{Dispatcher, Transport};
use crate::error::Result;
use crate::http::HttpMethod;
use crate::request::{FileInput, Params, Payload};

pub const GET: Endpoint = Endpoint::new("torrents.get", HttpMethod::Get, "torrents");
pub const INFO: Endpoint = Endpoint::new("torrents.info", HttpMethod::Get, "torrents/info");
pub const AVAILABLE_HOSTS: Endpoint = Endpoint::new(
    "torrents.availableHosts",
    HttpMethod::Get,
    "torrents/availableHosts",
);
pub const ADD_TORRENT: Endpoint =
    Endpoint::new("torrents.addTorrent", HttpMethod::Put, "torrents/addTorrent");
pub const ADD_MAGNET: Endpoint =
    Endpoint::new("torrents.addMagnet", HttpMethod::Post, "torrents/addMagnet");
pub const SELECT_FILES: Endpoint =
    Endpoint::new("torrents.selectFiles", HttpMethod::Post, "torrents/selectFiles");
pub const DELETE: Endpoint = Endpoint::new("torrents.delete", HttpMethod::Delete, "torrents/delete");

/// Query for `torrents.get`. Defaults to the first 50 active torrents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TorrentsQuery {
    pub pagination: Pagination,
    pub filter: Option<String>,
}

impl Default for TorrentsQuery {
    fn default() -> Self {
        Self {
            pagination: Pagination::default(),
            filter: Some("active".to_string()),
        }
    }
}

/// Which files of a torrent to download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSelection {
    /// Comma-separated file ids, or `all`.
    pub files: Option<String>,
    pub check_cache: Option<u8>,
}

impl FileSelection {
    pub fn ids<I: ToString>(ids: impl IntoIterator<Item = I>) -> Self {
        let files = ids.into_iter().map(|id| id.to_string()).collect::<Vec<_>>().join(",");
        Self {
            files: Some(files),
            ..Self::default()
        }
    }
}

impl Default for FileSelection {
    fn default() -> Self {
        Self {
            files: Some("all".to_string()),
            check_cache: Some(1),
        }
    }
}

#[derive(Debug)]
pub struct Torrents<'a, T> {
    api: &'a Dispatcher<T>,
}

impl<'a, T: Transport> Torrents<'a, T> {
    pub(crate) fn new(api: &'a Dispatcher<T>) -> Self {
        Self { api }
    }

    pub fn get(&self, query: &TorrentsQuery) -> Result<Option<Value>> {
        let query = Params::new()
            .with("offset", query.pagination.offset)
            .with("page", query.pagination.page)
            .with("limit", query.pagination.limit)
            .with("filter", query.filter.as_deref());
        self.api.call(&GET, None, Payload::Query(query))
    }

    pub fn info(&self, id: &str) -> Result<Option<Value>> {
        self.api.call(&INFO, Some(id), Payload::None)
    }

    /// Hosts a torrent can be downloaded to.
    pub fn available_hosts(&self) -> Result<Option<Value>> {
        self.api.call(&AVAILABLE_HOSTS, None, Payload::None)
    }

    /// Upload a `.torrent` file. `split` is the maximum part size in GB.
    pub fn add_torrent(
        &self,
        file: impl Into<FileInput>,
        host: Option<&str>,
        split: Option<u32>,
    ) -> Result<Option<Value>> {
        let payload = Payload::Binary {
            file: file.into(),
            query: Params::new().with("host", host).with("split", split),
        };
        self.api.call(&ADD_TORRENT, None, payload)
    }

    pub fn add_magnet(&self, magnet: &str, host: Option<&str>, split: Option<u32>) -> Result<Option<Value>> {
        let form = Params::new()
            .with("magnet", magnet)
            .with("host", host)
            .with("split", split);
        self.api.call(&ADD_MAGNET, None, Payload::Form(form))
    }

    pub fn select_files(&self, id: &str, selection: &FileSelection) -> Result<Option<Value>> {
        let form = Params::new()
            .with("files", selection.files.as_deref())
            .with("check_cache", selection.check_cache);
        self.api.call(&SELECT_FILES, Some(id), Payload::Form(form))
    }

    pub fn delete(&self, id: &str) -> Result<Option<Value>> {
        self.api.call(&DELETE, Some(id), Payload::None)
    }
}
