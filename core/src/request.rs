//! Request descriptors produced by the endpoint catalog.
//!
//! A `Request` is built once per call and never mutated afterwards. Its
//! `Payload` selects one of the dispatcher's body encodings: nothing,
//! structured key/value pairs (form or query), or a binary upload.

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::http::HttpMethod;

/// A single form or query value. `None` is still transmitted, as an empty
/// value (`key=`).
pub type ParamValue = Option<String>;

/// Conversion into a nullable parameter value.
pub trait IntoParam {
    fn into_param(self) -> ParamValue;
}

impl IntoParam for &str {
    fn into_param(self) -> ParamValue {
        Some(self.to_string())
    }
}

impl IntoParam for String {
    fn into_param(self) -> ParamValue {
        Some(self)
    }
}

impl IntoParam for &String {
    fn into_param(self) -> ParamValue {
        Some(self.clone())
    }
}

macro_rules! int_param {
    ($($ty:ty),*) => {
        $(impl IntoParam for $ty {
            fn into_param(self) -> ParamValue {
                Some(self.to_string())
            }
        })*
    };
}

int_param!(u8, u16, u32, u64, i32, i64, usize);

impl<T: IntoParam> IntoParam for Option<T> {
    fn into_param(self) -> ParamValue {
        self.and_then(IntoParam::into_param)
    }
}

/// Ordered key/value pairs for a form body or a query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(&'static str, ParamValue)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field. Null values are kept.
    pub fn with(mut self, key: &'static str, value: impl IntoParam) -> Self {
        self.0.push((key, value.into_param()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `None` when the key is absent, `Some(None)` when it is present but null.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Option<&str>)> + '_ {
        self.0.iter().map(|(k, v)| (*k, v.as_deref()))
    }

    /// `application/x-www-form-urlencoded` rendering, declaration order.
    pub fn encode(&self) -> String {
        self.iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(key),
                    urlencoding::encode(value.unwrap_or(""))
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// File content for an upload: either a reader the caller already opened,
/// or a path that is opened when the request is built.
pub enum FileInput {
    Stream(Box<dyn Read + Send>),
    Path(PathBuf),
}

impl FileInput {
    pub fn stream(reader: impl Read + Send + 'static) -> Self {
        FileInput::Stream(Box::new(reader))
    }

    pub fn path(path: impl Into<PathBuf>) -> Self {
        FileInput::Path(path.into())
    }

    /// Turn the input into a reader. Only `Path` touches the filesystem; a
    /// `Stream` is handed back untouched.
    pub fn open(self) -> io::Result<Box<dyn Read + Send>> {
        match self {
            FileInput::Stream(reader) => Ok(reader),
            FileInput::Path(path) => Ok(Box::new(File::open(path)?)),
        }
    }
}

impl fmt::Debug for FileInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileInput::Stream(_) => f.write_str("Stream(..)"),
            FileInput::Path(path) => f.debug_tuple("Path").field(path).finish(),
        }
    }
}

impl From<PathBuf> for FileInput {
    fn from(path: PathBuf) -> Self {
        FileInput::Path(path)
    }
}

impl From<&Path> for FileInput {
    fn from(path: &Path) -> Self {
        FileInput::Path(path.to_path_buf())
    }
}

impl From<&str> for FileInput {
    fn from(path: &str) -> Self {
        FileInput::Path(PathBuf::from(path))
    }
}

impl From<File> for FileInput {
    fn from(file: File) -> Self {
        FileInput::stream(file)
    }
}

/// What a request carries besides its method and path.
#[derive(Debug, Default)]
pub enum Payload {
    #[default]
    None,
    /// Form-encoded body.
    Form(Params),
    /// Query string, no body.
    Query(Params),
    /// Raw upload, optionally with a query string.
    Binary { file: FileInput, query: Params },
}

impl Payload {
    pub fn binary(file: impl Into<FileInput>) -> Self {
        Payload::Binary {
            file: file.into(),
            query: Params::new(),
        }
    }

    pub fn response_mode(&self) -> ResponseMode {
        match self {
            Payload::Binary { .. } => ResponseMode::Binary,
            _ => ResponseMode::Structured,
        }
    }
}

/// How the response body of a call must be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseMode {
    /// Parsed as JSON when it is JSON; other text is kept as a JSON string.
    Structured,
    /// The request was a raw upload; the body must be JSON.
    Binary,
}

/// One call against the API, relative to the session's base URL.
#[derive(Debug)]
pub struct Request {
    pub method: HttpMethod,
    pub path: String,
    pub payload: Payload,
}

impl Request {
    pub fn new(method: HttpMethod, path: impl Into<String>, payload: Payload) -> Self {
        Self {
            method,
            path: path.into(),
            payload,
        }
    }
}
