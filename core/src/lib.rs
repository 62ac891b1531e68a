//! Blocking client for the Real-Debrid REST API.
//!
//! # Overview
//! Every operation funnels through one dispatcher that builds the request,
//! sends it once and classifies the response. The operations themselves are
//! a static catalog grouped by resource (`time`, `user`, `unrestrict`,
//! `traffic`, `streaming`, `downloads`, `torrents`, `hosts`, `forum`,
//! `settings`).
//!
//! # Design
//! - `Session` builds `HttpRequest` values and `parse_response` classifies
//!   `HttpResponse` values without touching the network; a `Transport`
//!   executes the round-trip in between (`UreqTransport` by default).
//! - Outcomes are `Result<Option<serde_json::Value>>`: `None` only for
//!   204 No Content.
//! - Remote `error` payloads become `Error::Api` with the message looked up in
//!   `codes::ERROR_CODES`.
//!
//! ```no_run
//! use debrid_core::{RealDebrid, TorrentsQuery};
//!
//! # fn main() -> debrid_core::Result<()> {
//! let rd = RealDebrid::from_env()?;
//! let user = rd.user().get()?;
//! let active = rd.torrents().get(&TorrentsQuery::default())?;
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod client;
pub mod codes;
pub mod dispatch;
pub mod error;
pub mod http;
pub mod request;
pub mod transport;

#[cfg(test)]
pub(crate) mod testing;

pub use catalog::{endpoint, Endpoint, FileSelection, Pagination, RealDebrid, TorrentsQuery, ENDPOINTS};
pub use client::{parse_response, Session, DEFAULT_BASE_URL};
pub use dispatch::{Dispatcher, Transport};
pub use error::{ApiError, Error, Result};
pub use http::{HttpBody, HttpMethod, HttpRequest, HttpResponse};
pub use request::{FileInput, IntoParam, ParamValue, Params, Payload, Request, ResponseMode};
pub use transport::UreqTransport;
