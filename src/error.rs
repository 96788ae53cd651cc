//! Error types for the Coinbase client library.

use std::fmt;

use thiserror::Error;

/// The main error type for all Coinbase client operations.
#[derive(Error, Debug)]
pub enum CoinbaseError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Timestamp formatting error
    #[error("Time formatting error: {0}")]
    Time(#[from] time::error::Format),

    /// Coinbase answered with a non-success response
    #[error("Coinbase API error: {0}")]
    Api(ApiError),

    /// A credential required by the active authentication mode is missing
    #[error("Missing credentials: `{0}` is required for private endpoints")]
    MissingCredential(&'static str),

    /// A successful response did not carry the `data` envelope
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The request could not be built locally
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl CoinbaseError {
    /// The classified kind of this error, if it belongs to the exchange taxonomy.
    ///
    /// Transport, decoding and local request-building failures return `None`.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Api(api) => Some(api.kind),
            Self::MissingCredential(_) => Some(ErrorKind::Authentication),
            Self::MalformedResponse(_) => Some(ErrorKind::GenericExchange),
            Self::Http(_)
            | Self::HttpMiddleware(_)
            | Self::Json(_)
            | Self::Url(_)
            | Self::Time(_)
            | Self::InvalidRequest(_) => None,
        }
    }

    /// Check if this is an authentication error (local or remote).
    pub fn is_authentication(&self) -> bool {
        self.kind() == Some(ErrorKind::Authentication)
    }

    /// Check if this is a rate limit error.
    pub fn is_rate_limit(&self) -> bool {
        self.kind() == Some(ErrorKind::RateLimit)
    }

    /// Check if the service reported itself unavailable.
    pub fn is_service_unavailable(&self) -> bool {
        self.kind() == Some(ErrorKind::ServiceUnavailable)
    }
}

/// Error classes a failed Coinbase call is sorted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Missing or rejected credentials (401, 402, 403).
    Authentication,
    /// The connection is being rate limited (429).
    RateLimit,
    /// Internal error or maintenance (500, 503).
    ServiceUnavailable,
    /// Bad request, unknown object, malformed envelope, or any other status.
    GenericExchange,
}

impl ErrorKind {
    /// Map an HTTP status to its error kind.
    ///
    /// Total over `u16`; anything not listed is `GenericExchange`.
    pub fn from_status(status: u16) -> Self {
        match status {
            401..=403 => Self::Authentication,
            429 => Self::RateLimit,
            500 | 503 => Self::ServiceUnavailable,
            _ => Self::GenericExchange,
        }
    }

    /// Stable name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Authentication => "AuthenticationError",
            Self::RateLimit => "RateLimitError",
            Self::ServiceUnavailable => "ServiceUnavailableError",
            Self::GenericExchange => "GenericExchangeError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed response, classified by its HTTP status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// Error class derived from the status.
    pub kind: ErrorKind,
    /// Message extracted from the response body. Never empty.
    pub message: String,
    /// HTTP status of the response.
    pub status: u16,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (HTTP {}): {}", self.kind, self.status, self.message)
    }
}

impl ApiError {
    /// Create a new API error, classifying the status.
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::from_status(status),
            message: message.into(),
            status,
        }
    }
}

/// Documented Coinbase v2 status codes.
pub mod status_codes {
    /// Successful request
    pub const OK: u16 = 200;
    /// New object saved
    pub const CREATED: u16 = 201;
    /// Object deleted, no body
    pub const NO_CONTENT: u16 = 204;
    /// Returns JSON with the error message
    pub const BAD_REQUEST: u16 = 400;
    /// Couldn't authenticate the request
    pub const UNAUTHORIZED: u16 = 401;
    /// 2FA token required
    pub const TWO_FACTOR_REQUIRED: u16 = 402;
    /// User hasn't authorized the necessary scope
    pub const INVALID_SCOPE: u16 = 403;
    /// No such object
    pub const NOT_FOUND: u16 = 404;
    /// The connection is being rate limited
    pub const TOO_MANY_REQUESTS: u16 = 429;
    /// Something went wrong
    pub const INTERNAL_SERVER_ERROR: u16 = 500;
    /// Throttled or down for maintenance
    pub const SERVICE_UNAVAILABLE: u16 = 503;
}
