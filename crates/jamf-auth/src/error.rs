//! Error types for jamfpro-auth.
//!
//! Error messages never carry credential values or token strings.

use jamfpro_client::ErrorKind as ClientErrorKind;

/// Result type alias for jamfpro-auth operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for jamfpro-auth operations.
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

    /// Whether obtaining a token may succeed if tried again later.
    pub fn is_retryable(&self) -> bool {
        matches!(self.kind, ErrorKind::Unavailable(_))
    }
}

/// The kind of error that occurred.
///
/// `Clone` so one refresh failure can be handed to every waiter.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ErrorKind {
    /// The token endpoint refused the credentials. Terminal.
    #[error("Credentials rejected (HTTP {status}): {message}")]
    CredentialsRejected { status: u16, message: String },

    /// The token endpoint could not be reached or is temporarily failing.
    #[error("Token endpoint unavailable: {0}")]
    Unavailable(String),

    /// The token endpoint answered with an unexpected shape.
    #[error("Invalid token response: {0}")]
    InvalidResponse(String),

    /// Invalid credentials configuration.
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Environment variable not set.
    #[error("Environment variable not set: {0}")]
    EnvVar(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(String),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Json(err.to_string()), err)
    }
}

impl From<serde_urlencoded::ser::Error> for Error {
    fn from(err: serde_urlencoded::ser::Error) -> Self {
        Error::with_source(ErrorKind::Serialization(err.to_string()), err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::with_source(ErrorKind::Io(err.to_string()), err)
    }
}

impl From<jamfpro_client::Error> for Error {
    fn from(err: jamfpro_client::Error) -> Self {
        let kind = match &err.kind {
            ClientErrorKind::Transport(_) | ClientErrorKind::Timeout => {
                ErrorKind::Unavailable(err.to_string())
            }
            _ => ErrorKind::InvalidCredentials(err.to_string()),
        };
        Error::with_source(kind, err)
    }
}

impl From<Error> for jamfpro_client::Error {
    fn from(err: Error) -> Self {
        let kind = match &err.kind {
            ErrorKind::CredentialsRejected { .. } => ClientErrorKind::Authentication {
                message: err.kind.to_string(),
                retryable: false,
            },
            ErrorKind::Unavailable(_) => ClientErrorKind::Authentication {
                message: err.kind.to_string(),
                retryable: true,
            },
            ErrorKind::InvalidResponse(message) => ClientErrorKind::Decoding(message.clone()),
            _ => ClientErrorKind::Config(err.kind.to_string()),
        };
        jamfpro_client::Error::with_source(kind, err)
    }
}
