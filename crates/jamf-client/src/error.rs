//! Error types for jamfpro-client.
//!
//! `ErrorKind` is the classified outcome surface of every dispatched request.
//! Callers decide on retries from `Error::is_retryable()` and `Error::status()`.

use std::path::PathBuf;

use serde::Deserialize;

/// Result type alias for jamfpro-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for jamfpro-client operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Returns true if the caller may reasonably retry the request.
    pub fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }

    /// Returns true if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication { .. })
    }

    /// Returns true if the remote service answered 404.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// HTTP status of a request failure.
    pub fn status(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::RequestFailure { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body of a request failure, unmodified.
    pub fn body(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::RequestFailure { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Structured errors from a Jamf Pro API error envelope, if the body has one.
    ///
    /// Classic API failures answer with HTML and yield an empty list.
    pub fn api_errors(&self) -> Vec<ApiErrorDetail> {
        self.body()
            .and_then(|body| serde_json::from_str::<ApiErrorEnvelope>(body).ok())
            .map(|envelope| envelope.errors)
            .unwrap_or_default()
    }
}

/// The kind of error that occurred.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// The token endpoint rejected the credentials (terminal) or could not be
    /// reached (retryable).
    #[error("Authentication error: {message}")]
    Authentication { message: String, retryable: bool },

    /// The network call itself failed.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The network call timed out.
    #[error("Request timeout")]
    Timeout,

    /// Non-success HTTP status. `body` holds the raw response body.
    #[error("Request failed: HTTP {status}: {}", sanitize_error_message(body))]
    RequestFailure { status: u16, body: String },

    /// The request payload could not be serialized.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// A success response could not be parsed into the expected shape.
    #[error("Decoding error: {0}")]
    Decoding(String),

    /// A file referenced for upload could not be read.
    #[error("Failed to read file {}", path.display())]
    FileRead { path: PathBuf },

    /// A caller-supplied value cannot be used to build a request.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The client has been shut down.
    #[error("Client is shut down")]
    Closed,
}

impl ErrorKind {
    /// Returns true if this error kind is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            ErrorKind::Authentication { retryable, .. } => *retryable,
            ErrorKind::Transport(_) | ErrorKind::Timeout => true,
            ErrorKind::RequestFailure { status, .. } => is_retryable_status(*status),
            _ => false,
        }
    }
}

/// Check if an HTTP status code is typically retryable.
pub(crate) fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

/// One entry of the Jamf Pro API error envelope.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiErrorDetail {
    /// Machine-readable error code, e.g. `INVALID_ID`.
    #[serde(default)]
    pub code: Option<String>,
    /// Human-readable description.
    #[serde(default)]
    pub description: Option<String>,
    /// Identifier of the offending object.
    #[serde(default)]
    pub id: Option<String>,
    /// Offending field.
    #[serde(default)]
    pub field: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    #[serde(default)]
    errors: Vec<ApiErrorDetail>,
}

/// Sanitize an error message to prevent exposing sensitive data.
///
/// Bearer tokens and JWT-shaped strings are redacted; messages longer than
/// 500 characters are truncated.
pub(crate) fn sanitize_error_message(message: &str) -> String {
    const MAX_LENGTH: usize = 500;

    let mut sanitized = message.to_string();

    if let Ok(bearer) = regex_lite::Regex::new(r"(?i)bearer\s+[A-Za-z0-9._~+/=-]+") {
        sanitized = bearer
            .replace_all(&sanitized, "Bearer [REDACTED]")
            .to_string();
    }

    // JWTs: three base64url segments, the first starting with "eyJ"
    if let Ok(jwt) = regex_lite::Regex::new(r"eyJ[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+") {
        sanitized = jwt.replace_all(&sanitized, "[REDACTED_TOKEN]").to_string();
    }

    if sanitized.len() > MAX_LENGTH {
        let mut cut = MAX_LENGTH;
        while !sanitized.is_char_boundary(cut) {
            cut -= 1;
        }
        sanitized.truncate(cut);
        sanitized.push_str("...[truncated]");
    }

    sanitized
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            ErrorKind::Timeout
        } else {
            ErrorKind::Transport(sanitize_error_message(&err.to_string()))
        };

        Error::with_source(kind, err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(ErrorKind::Config(format!("Invalid URL: {}", err)), err)
    }
}
