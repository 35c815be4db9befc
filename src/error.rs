//! Error types for the dossier library.
//!
//! Errors only surface from the generation client's fallible internals and
//! from configuration parsing. The session layer never sees them: the
//! client's `generate` method maps every failure to displayable fallback
//! text before it reaches the terminal.

use std::error;
use std::fmt;
use std::sync::Arc;

/// The main error type for the dossier library.
#[derive(Clone, Debug)]
pub enum Error {
    /// A generic API error occurred.
    Api {
        /// HTTP status code.
        status_code: u16,
        /// Error type string from the API.
        error_type: Option<String>,
        /// Human-readable error message.
        message: String,
    },

    /// Authentication error.
    Authentication {
        /// Human-readable error message.
        message: String,
    },

    /// Authorization/Permission error.
    Permission {
        /// Human-readable error message.
        message: String,
    },

    /// Resource not found.
    NotFound {
        /// Human-readable error message.
        message: String,
    },

    /// Rate limit exceeded.
    RateLimit {
        /// Human-readable error message.
        message: String,
        /// Time to wait before retrying, in seconds.
        retry_after: Option<u64>,
    },

    /// Bad request due to invalid parameters.
    BadRequest {
        /// Human-readable error message.
        message: String,
        /// Parameter that caused the error.
        param: Option<String>,
    },

    /// API timeout error.
    Timeout {
        /// Human-readable error message.
        message: String,
        /// Duration of the timeout in seconds.
        duration: Option<f64>,
    },

    /// Connection error.
    Connection {
        /// Human-readable error message.
        message: String,
        /// Underlying cause.
        source: Option<Arc<dyn error::Error + Send + Sync>>,
    },

    /// Server returned a 500 internal error.
    InternalServer {
        /// Human-readable error message.
        message: String,
    },

    /// Server is overloaded or unavailable.
    ServiceUnavailable {
        /// Human-readable error message.
        message: String,
        /// Time to wait before retrying, in seconds.
        retry_after: Option<u64>,
    },

    /// HTTP client error.
    HttpClient {
        /// Human-readable error message.
        message: String,
        /// The underlying error.
        source: Option<Arc<dyn error::Error + Send + Sync>>,
    },

    /// Error during JSON serialization or deserialization.
    Serialization {
        /// Human-readable error message.
        message: String,
        /// The underlying error.
        source: Option<Arc<dyn error::Error + Send + Sync>>,
    },

    /// A URL parsing or manipulation error.
    Url {
        /// Human-readable error message.
        message: String,
        /// The underlying error.
        source: Option<url::ParseError>,
    },
}

impl Error {
    /// Creates a new API error.
    pub fn api(status_code: u16, error_type: Option<String>, message: String) -> Self {
        Error::Api {
            status_code,
            error_type,
            message,
        }
    }

    /// Creates a new authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Error::Authentication {
            message: message.into(),
        }
    }

    /// Creates a new permission error.
    pub fn permission(message: impl Into<String>) -> Self {
        Error::Permission {
            message: message.into(),
        }
    }

    /// Creates a new not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Error::NotFound {
            message: message.into(),
        }
    }

    /// Creates a new rate limit error.
    pub fn rate_limit(message: impl Into<String>, retry_after: Option<u64>) -> Self {
        Error::RateLimit {
            message: message.into(),
            retry_after,
        }
    }

    /// Creates a new bad request error.
    pub fn bad_request(message: impl Into<String>, param: Option<String>) -> Self {
        Error::BadRequest {
            message: message.into(),
            param,
        }
    }

    /// Creates a new timeout error.
    pub fn timeout(message: impl Into<String>, duration: Option<f64>) -> Self {
        Error::Timeout {
            message: message.into(),
            duration,
        }
    }

    /// Creates a new connection error.
    pub fn connection(
        message: impl Into<String>,
        source: Option<Box<dyn error::Error + Send + Sync>>,
    ) -> Self {
        Error::Connection {
            message: message.into(),
            source: source.map(Arc::from),
        }
    }

    /// Creates a new internal server error.
    pub fn internal_server(message: impl Into<String>) -> Self {
        Error::InternalServer {
            message: message.into(),
        }
    }

    /// Creates a new service unavailable error.
    pub fn service_unavailable(message: impl Into<String>, retry_after: Option<u64>) -> Self {
        Error::ServiceUnavailable {
            message: message.into(),
            retry_after,
        }
    }

    /// Creates a new HTTP client error.
    pub fn http_client(
        message: impl Into<String>,
        source: Option<Box<dyn error::Error + Send + Sync>>,
    ) -> Self {
        Error::HttpClient {
            message: message.into(),
            source: source.map(Arc::from),
        }
    }

    /// Creates a new serialization error.
    pub fn serialization(
        message: impl Into<String>,
        source: Option<Box<dyn error::Error + Send + Sync>>,
    ) -> Self {
        Error::Serialization {
            message: message.into(),
            source: source.map(Arc::from),
        }
    }

    /// Creates a new URL error.
    pub fn url(message: impl Into<String>, source: Option<url::ParseError>) -> Self {
        Error::Url {
            message: message.into(),
            source,
        }
    }

    /// Returns true if this error is related to authentication.
    pub fn is_authentication(&self) -> bool {
        matches!(self, Error::Authentication { .. })
    }

    /// Returns true if this error is related to rate limiting.
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, Error::RateLimit { .. })
    }

    /// Returns true if this error is a timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout { .. })
    }

    /// Returns true if this error is a connection error.
    pub fn is_connection(&self) -> bool {
        matches!(self, Error::Connection { .. })
    }

    /// Returns true if this error is a server error.
    pub fn is_server_error(&self) -> bool {
        matches!(
            self,
            Error::InternalServer { .. } | Error::ServiceUnavailable { .. }
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Api {
                status_code,
                error_type,
                message,
            } => match error_type {
                Some(error_type) => {
                    write!(f, "API error {status_code} ({error_type}): {message}")
                }
                None => write!(f, "API error {status_code}: {message}"),
            },
            Error::Authentication { message } => write!(f, "authentication error: {message}"),
            Error::Permission { message } => write!(f, "permission error: {message}"),
            Error::NotFound { message } => write!(f, "not found: {message}"),
            Error::RateLimit {
                message,
                retry_after,
            } => match retry_after {
                Some(seconds) => {
                    write!(f, "rate limited (retry after {seconds}s): {message}")
                }
                None => write!(f, "rate limited: {message}"),
            },
            Error::BadRequest { message, param } => match param {
                Some(param) => write!(f, "bad request ({param}): {message}"),
                None => write!(f, "bad request: {message}"),
            },
            Error::Timeout { message, duration } => match duration {
                Some(seconds) => write!(f, "timeout after {seconds}s: {message}"),
                None => write!(f, "timeout: {message}"),
            },
            Error::Connection { message, .. } => write!(f, "connection error: {message}"),
            Error::InternalServer { message } => write!(f, "internal server error: {message}"),
            Error::ServiceUnavailable { message, .. } => {
                write!(f, "service unavailable: {message}")
            }
            Error::HttpClient { message, .. } => write!(f, "HTTP client error: {message}"),
            Error::Serialization { message, .. } => write!(f, "serialization error: {message}"),
            Error::Url { message, .. } => write!(f, "URL error: {message}"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Connection {
                source: Some(source),
                ..
            }
            | Error::HttpClient {
                source: Some(source),
                ..
            }
            | Error::Serialization {
                source: Some(source),
                ..
            } => Some(source.as_ref()),
            Error::Url {
                source: Some(source),
                ..
            } => Some(source),
            _ => None,
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::url(err.to_string(), Some(err))
    }
}

/// A specialized Result type for dossier operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats() {
        let err = Error::timeout("request timed out", Some(30.0));
        assert_eq!(err.to_string(), "timeout after 30s: request timed out");

        let err = Error::rate_limit("slow down", Some(7));
        assert_eq!(err.to_string(), "rate limited (retry after 7s): slow down");
    }

    #[test]
    fn predicates() {
        assert!(Error::authentication("no key").is_authentication());
        assert!(Error::connection("refused", None).is_connection());
        assert!(Error::internal_server("oops").is_server_error());
        assert!(Error::service_unavailable("busy", None).is_server_error());
        assert!(!Error::bad_request("nope", None).is_timeout());
    }

    #[test]
    fn url_parse_errors_convert() {
        let err: Error = url::Url::parse("not a url").unwrap_err().into();
        assert!(matches!(err, Error::Url { .. }));
    }
}
