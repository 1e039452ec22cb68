//! Wire-level HTTP request handed to a `Transport`.

use bytes::Bytes;
use serde::Serialize;

use crate::codec::{Codec, ContentKind};
use crate::error::Result;
use crate::multipart::MultipartForm;

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl RequestMethod {
    /// Convert to reqwest::Method.
    pub fn to_reqwest(&self) -> reqwest::Method {
        match self {
            RequestMethod::Get => reqwest::Method::GET,
            RequestMethod::Post => reqwest::Method::POST,
            RequestMethod::Put => reqwest::Method::PUT,
            RequestMethod::Patch => reqwest::Method::PATCH,
            RequestMethod::Delete => reqwest::Method::DELETE,
        }
    }

    /// Upper-case method name.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestMethod::Get => "GET",
            RequestMethod::Post => "POST",
            RequestMethod::Put => "PUT",
            RequestMethod::Patch => "PATCH",
            RequestMethod::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload of an outgoing request, tagged with how it was produced.
#[derive(Debug, Clone)]
pub enum RequestBody {
    /// No body; `GET`, `DELETE` and bodiless `POST`s.
    Empty,
    /// A resource serialized with its family's codec.
    Encoded { codec: Codec, bytes: Bytes },
    /// A file upload form.
    Multipart(MultipartForm),
}

impl RequestBody {
    /// Serialize `value` with `codec`.
    pub fn encode<T: Serialize + ?Sized>(codec: Codec, value: &T) -> Result<Self> {
        Ok(RequestBody::Encoded {
            codec,
            bytes: codec.encode(value)?,
        })
    }

    /// Body format.
    pub fn kind(&self) -> ContentKind {
        match self {
            RequestBody::Empty => ContentKind::None,
            RequestBody::Encoded { codec, .. } => codec.kind(),
            RequestBody::Multipart(_) => ContentKind::Multipart,
        }
    }

    /// `Content-Type` header value, if there is a body.
    pub fn content_type(&self) -> Option<String> {
        match self {
            RequestBody::Empty => None,
            RequestBody::Encoded { codec, .. } => Some(codec.content_type().to_string()),
            RequestBody::Multipart(form) => Some(form.content_type()),
        }
    }
}

/// A fully built HTTP request: method, absolute URL, headers and body.
///
/// The Authorization header value is redacted in Debug output.
#[derive(Clone)]
pub struct HttpRequest {
    pub method: RequestMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Bytes>,
}

impl std::fmt::Debug for HttpRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(name, value)| {
                if name.eq_ignore_ascii_case("authorization") {
                    (name.as_str(), "[REDACTED]")
                } else {
                    (name.as_str(), value.as_str())
                }
            })
            .collect();
        f.debug_struct("HttpRequest")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("headers", &headers)
            .field("body_len", &self.body.as_ref().map(Bytes::len))
            .finish()
    }
}

impl HttpRequest {
    /// Create a new request without headers or body.
    pub fn new(method: RequestMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Add a header. An existing header with the same name is replaced.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(&name));
        self.headers.push((name, value.into()));
        self
    }

    /// Set the bearer token for authentication.
    pub fn bearer_auth(self, token: &str) -> Self {
        self.header("Authorization", format!("Bearer {}", token))
    }

    /// Set the Accept header.
    pub fn accept(self, content_type: &str) -> Self {
        self.header("Accept", content_type)
    }

    /// Set a body together with its Content-Type.
    pub fn body(mut self, content_type: impl Into<String>, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self.header("Content-Type", content_type)
    }

    /// Attach a [`RequestBody`]. `RequestBody::Empty` leaves the request untouched.
    pub fn with_body(self, body: RequestBody) -> Self {
        match body {
            RequestBody::Empty => self,
            RequestBody::Encoded { codec, bytes } => self.body(codec.content_type(), bytes),
            RequestBody::Multipart(form) => {
                let content_type = form.content_type();
                self.body(content_type, form.encode())
            }
        }
    }

    /// Look up a header value (case-insensitive).
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}
