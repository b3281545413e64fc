use std::fmt;
use std::time::Duration;

/// HTTP methods used by the job service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
        }
    }

    /// Only idempotent requests are eligible for retry.
    pub fn is_idempotent(self) -> bool {
        matches!(self, Method::Get)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A service endpoint: method, path relative to the base URL, and whether it
/// needs a bearer token.
///
/// Path is kept as segments so ids are percent-encoded when the URL is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub method: Method,
    pub segments: Vec<String>,
    pub auth_required: bool,
}

impl Route {
    /// `path` is split on `/`; a trailing slash is preserved as an empty segment.
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            segments: path
                .trim_start_matches('/')
                .split('/')
                .map(str::to_string)
                .collect(),
            auth_required: true,
        }
    }

    pub fn public(mut self) -> Self {
        self.auth_required = false;
        self
    }

    /// Appends a raw path argument (e.g. a job id).
    pub fn arg(mut self, value: &str) -> Self {
        self.segments.push(value.to_string());
        self
    }

    pub fn path(&self) -> String {
        self.segments.join("/")
    }
}

/// One file attached to a multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub field: String,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Multipart/form-data body: text fields plus optional file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartForm {
    pub fields: Vec<(String, String)>,
    pub file: Option<FilePart>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.fields.push((name.to_string(), value.to_string()));
        self
    }

    pub fn file(mut self, part: FilePart) -> Self {
        self.file = Some(part);
        self
    }
}

/// Request body encoding.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Empty,
    Json(serde_json::Value),
    Multipart(MultipartForm),
}

/// Fully resolved request handed to a [`crate::http::Transport`].
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    /// `(name, value)` pairs; includes `Authorization` when a token is attached.
    pub headers: Vec<(String, String)>,
    pub body: Body,
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Raw status and body returned by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u32, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn json(status: u32, value: &serde_json::Value) -> Self {
        Self::new(status, value.to_string())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
