//! Account settings.

use serde_json::Value;

use super::Endpoint;
use crate::dispatch::{Dispatcher, Transport};
use crate::error::Result;
use crate::http::HttpMethod;
use crate::request::{FileInput, Params, Payload};

pub const GET: Endpoint = Endpoint::new("settings.get", HttpMethod::Get, "settings");
pub const UPDATE: Endpoint = Endpoint::new("settings.update", HttpMethod::Post, "settings/update");
pub const CONVERT_POINTS: Endpoint = Endpoint::new(
    "settings.convertPoints",
    HttpMethod::Post,
    "settings/convertPoints",
);
pub const CHANGE_PASSWORD: Endpoint = Endpoint::new(
    "settings.changePassword",
    HttpMethod::Post,
    "settings/changePassword",
);
pub const AVATAR_FILE: Endpoint =
    Endpoint::new("settings.avatarFile", HttpMethod::Put, "settings/avatarFile");
pub const DELETE_AVATAR: Endpoint =
    Endpoint::new("settings.deleteAvatar", HttpMethod::Post, "settings/avatarDelete");

#[derive(Debug)]
pub struct Settings<'a, T> {
    api: &'a Dispatcher<T>,
}

impl<'a, T: Transport> Settings<'a, T> {
    pub(crate) fn new(api: &'a Dispatcher<T>) -> Self {
        Self { api }
    }

    pub fn get(&self) -> Result<Option<Value>> {
        self.api.call(&GET, None, Payload::None)
    }

    pub fn update(&self, setting_name: Option<&str>, setting_value: Option<&str>) -> Result<Option<Value>> {
        let form = Params::new()
            .with("setting_name", setting_name)
            .with("setting_value", setting_value);
        self.api.call(&UPDATE, None, Payload::Form(form))
    }

    /// Convert fidelity points into premium days.
    pub fn convert_points(&self) -> Result<Option<Value>> {
        self.api.call(&CONVERT_POINTS, None, Payload::None)
    }

    /// Ask the remote to send a password-change email.
    pub fn change_password(&self) -> Result<Option<Value>> {
        self.api.call(&CHANGE_PASSWORD, None, Payload::None)
    }

    pub fn avatar_file(&self, file: impl Into<FileInput>) -> Result<Option<Value>> {
        self.api.call(&AVATAR_FILE, None, Payload::binary(file))
    }

    pub fn delete_avatar(&self) -> Result<Option<Value>> {
        self.api.call(&DELETE_AVATAR, None, Payload::None)
    }
}
