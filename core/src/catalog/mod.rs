//! The endpoint catalog.
//!
//! Every remote operation is an `Endpoint` row (dotted name, verb, path) in
//! `ENDPOINTS`, plus a typed method on one of the group handles returned by
//! `RealDebrid`. Group methods only assemble parameters; all I/O goes through
//! `Dispatcher::call`.

mod downloads;
mod forum;
mod hosts;
mod settings;
mod streaming;
mod time;
mod torrents;
mod traffic;
mod unrestrict;
mod user;

use serde_json::Value;

use crate::client::Session;
use crate::dispatch::{Dispatcher, Transport};
use crate::error::Result;
use crate::http::HttpMethod;
use crate::request::Payload;
use crate::transport::UreqTransport;

pub use downloads::Downloads;
pub use forum::Forum;
pub use hosts::Hosts;
pub use settings::Settings;
pub use streaming::Streaming;
pub use time::Time;
pub use torrents::{FileSelection, Torrents, TorrentsQuery};
pub use traffic::Traffic;
pub use unrestrict::Unrestrict;
pub use user::User;

/// One remote operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub name: &'static str,
    pub method: HttpMethod,
    /// Path relative to the base URL, without the trailing id segment for
    /// operations that take one.
    pub path: &'static str,
}

impl Endpoint {
    pub const fn new(name: &'static str, method: HttpMethod, path: &'static str) -> Self {
        Self { name, method, path }
    }

    pub fn path_for(&self, id: Option<&str>) -> String {
        match id {
            Some(id) => format!("{}/{}", self.path, id),
            None => self.path.to_string(),
        }
    }
}

pub const DISABLE_ACCESS_TOKEN: Endpoint =
    Endpoint::new("disableAccessToken", HttpMethod::Get, "disable_access_token");

/// Every operation the client exposes.
pub const ENDPOINTS: &[Endpoint] = &[
    DISABLE_ACCESS_TOKEN,
    time::GET,
    time::ISO,
    user::GET,
    unrestrict::CHECK,
    unrestrict::LINK,
    unrestrict::FOLDER,
    unrestrict::CONTAINER_FILE,
    unrestrict::CONTAINER_LINK,
    traffic::GET,
    traffic::DETAILS,
    streaming::TRANSCODE,
    streaming::MEDIA_INFOS,
    downloads::GET,
    downloads::DELETE,
    torrents::GET,
    torrents::INFO,
    torrents::AVAILABLE_HOSTS,
    torrents::ADD_TORRENT,
    torrents::ADD_MAGNET,
    torrents::SELECT_FILES,
    torrents::DELETE,
    hosts::GET,
    hosts::STATUS,
    hosts::REGEX,
    hosts::DOMAINS,
    forum::GET,
    forum::TOPIC,
    settings::GET,
    settings::UPDATE,
    settings::CONVERT_POINTS,
    settings::CHANGE_PASSWORD,
    settings::AVATAR_FILE,
    settings::DELETE_AVATAR,
];

/// Look up an operation by its dotted name, e.g. `torrents.addMagnet`.
pub fn endpoint(name: &str) -> Option<&'static Endpoint> {
    ENDPOINTS.iter().find(|e| e.name == name)
}

/// `offset`/`page`/`limit` for listing endpoints. Unset values are sent as
/// empty fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub offset: Option<u64>,
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            offset: None,
            page: None,
            limit: Some(50),
        }
    }
}

/// Client for the REST API, grouped by resource.
#[derive(Debug, Clone)]
pub struct RealDebrid<T = UreqTransport> {
    api: Dispatcher<T>,
}

impl RealDebrid<UreqTransport> {
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_dispatcher(Dispatcher::new(Session::new(token)))
    }

    /// Session from `REAL_DEBRID_TOKEN` / `REAL_DEBRID_BASE_URL`.
    pub fn from_env() -> Result<Self> {
        Ok(Self::with_dispatcher(Dispatcher::new(Session::from_env()?)))
    }
}

impl<T: Transport> RealDebrid<T> {
    pub fn with_dispatcher(api: Dispatcher<T>) -> Self {
        Self { api }
    }

    pub fn dispatcher(&self) -> &Dispatcher<T> {
        &self.api
    }

    pub fn time(&self) -> Time<'_, T> {
        Time::new(&self.api)
    }

    pub fn user(&self) -> User<'_, T> {
        User::new(&self.api)
    }

    pub fn unrestrict(&self) -> Unrestrict<'_, T> {
        Unrestrict::new(&self.api)
    }

    pub fn traffic(&self) -> Traffic<'_, T> {
        Traffic::new(&self.api)
    }

    pub fn streaming(&self) -> Streaming<'_, T> {
        Streaming::new(&self.api)
    }

    pub fn downloads(&self) -> Downloads<'_, T> {
        Downloads::new(&self.api)
    }

    pub fn torrents(&self) -> Torrents<'_, T> {
        Torrents::new(&self.api)
    }

    pub fn hosts(&self) -> Hosts<'_, T> {
        Hosts::new(&self.api)
    }

    pub fn forum(&self) -> Forum<'_, T> {
        Forum::new(&self.api)
    }

    pub fn settings(&self) -> Settings<'_, T> {
        Settings::new(&self.api)
    }

    /// Revoke the current token. The client is consumed: the session is dead
    /// whether or not the call succeeds from the caller's point of view.
    pub fn disable_access_token(self) -> Result<Option<Value>> {
        self.api.call(&DISABLE_ACCESS_TOKEN, None, Payload::None)
    }
}
