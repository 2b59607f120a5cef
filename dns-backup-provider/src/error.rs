use serde::{Deserialize, Serialize};

/// Unified error type for DNS provider and object store operations.
///
/// Each variant carries a `provider` field naming the service that produced
/// it (`route53`, `s3`, or whatever a test double reports), plus
/// variant-specific context. All variants are serializable for structured
/// error reporting.
///
/// No variant is retried anywhere in this crate; a failed call surfaces
/// immediately.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The request timed out.
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The credentials are invalid, expired, or the request signature was rejected.
    InvalidCredentials {
        /// Provider that produced the error.
        provider: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The authenticated principal lacks permission for the requested operation.
    PermissionDenied {
        /// Provider that produced the error.
        provider: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The specified hosted zone does not exist.
    ZoneNotFound {
        /// Provider that produced the error.
        provider: String,
        /// Zone identifier that was not found.
        zone_id: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The specified bucket does not exist.
    BucketNotFound {
        /// Provider that produced the error.
        provider: String,
        /// Bucket that was not found.
        bucket: String,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// An object that had to exist was not found.
    ///
    /// [`ObjectStore::get_object`](crate::ObjectStore::get_object) never
    /// returns this; callers raise it when a missing object is fatal for them.
    ObjectNotFound {
        /// Provider that produced the error.
        provider: String,
        /// Bucket that was searched.
        bucket: String,
        /// Key that was not found.
        key: String,
    },

    /// A record set with the same name/type already exists in the target zone.
    RecordExists {
        /// Provider that produced the error.
        provider: String,
        /// Name of the conflicting record as reported by the provider, or
        /// `<unknown>`.
        record_name: String,
        /// Raw error code from the API, if available.
        raw_code: Option<String>,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// The provider rejected a change batch as a whole.
    InvalidChangeBatch {
        /// Provider that produced the error.
        provider: String,
        /// Original error message from the provider API.
        raw_message: String,
    },

    /// A request parameter is invalid.
    InvalidParameter {
        /// Provider that produced the error.
        provider: String,
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// The API rate limit has been exceeded, or a conflicting request is
    /// still in progress.
    RateLimited {
        /// Provider that produced the error.
        provider: String,
        /// Raw error code from the API, if available.
        raw_code: Option<String>,
        /// Original error message from the provider API, if available.
        raw_message: Option<String>,
    },

    /// Failed to parse the provider's response.
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to build a request from local data.
    SerializationError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the serialization failure.
        detail: String,
    },

    /// An unrecognized error from the provider API.
    ///
    /// This is a catch-all for error codes not mapped to a specific variant.
    Unknown {
        /// Provider that produced the error.
        provider: String,
        /// Raw error code from the API, if available.
        raw_code: Option<String>,
        /// Raw error message from the API.
        raw_message: String,
    },
}

impl ProviderError {
    /// Whether this is expected behavior (bad input, missing resource, denied
    /// access), used to pick the log level.
    ///
    /// Use `warn` when this returns `true` and `error` otherwise.
    /// **Update this method when adding variants.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials { .. }
                | Self::PermissionDenied { .. }
                | Self::ZoneNotFound { .. }
                | Self::BucketNotFound { .. }
                | Self::ObjectNotFound { .. }
                | Self::RecordExists { .. }
                | Self::InvalidChangeBatch { .. }
                | Self::InvalidParameter { .. }
        )
    }

    /// Name of the service that produced this error.
    #[must_use]
    pub fn provider(&self) -> &str {
        match self {
            Self::NetworkError { provider, .. }
            | Self::Timeout { provider, .. }
            | Self::InvalidCredentials { provider, .. }
            | Self::PermissionDenied { provider, .. }
            | Self::ZoneNotFound { provider, .. }
            | Self::BucketNotFound { provider, .. }
            | Self::ObjectNotFound { provider, .. }
            | Self::RecordExists { provider, .. }
            | Self::InvalidChangeBatch { provider, .. }
            | Self::InvalidParameter { provider, .. }
            | Self::RateLimited { provider, .. }
            | Self::ParseError { provider, .. }
            | Self::SerializationError { provider, .. }
            | Self::Unknown { provider, .. } => provider,
        }
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::InvalidCredentials {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Invalid credentials: {msg}")
                } else {
                    write!(f, "[{provider}] Invalid credentials")
                }
            }
            Self::PermissionDenied {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Permission denied: {msg}")
                } else {
                    write!(f, "[{provider}] Permission denied")
                }
            }
            Self::ZoneNotFound {
                provider,
                zone_id,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Zone '{zone_id}' not found: {msg}")
                } else {
                    write!(f, "[{provider}] Zone '{zone_id}' not found")
                }
            }
            Self::BucketNotFound {
                provider,
                bucket,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Bucket '{bucket}' not found: {msg}")
                } else {
                    write!(f, "[{provider}] Bucket '{bucket}' not found")
                }
            }
            Self::ObjectNotFound {
                provider,
                bucket,
                key,
            } => {
                write!(f, "[{provider}] Object '{key}' not found in bucket '{bucket}'")
            }
            Self::RecordExists {
                provider,
                record_name,
                raw_code,
                raw_message,
            } => {
                write!(f, "[{provider}] Record '{record_name}' already exists")?;
                match (raw_code, raw_message) {
                    (Some(code), Some(msg)) => write!(f, " ({code}: {msg})"),
                    (None, Some(msg)) => write!(f, " ({msg})"),
                    _ => Ok(()),
                }
            }
            Self::InvalidChangeBatch {
                provider,
                raw_message,
            } => {
                write!(f, "[{provider}] Invalid change batch: {raw_message}")
            }
            Self::InvalidParameter {
                provider,
                param,
                detail,
            } => {
                write!(f, "[{provider}] Invalid parameter '{param}': {detail}")
            }
            Self::RateLimited {
                provider,
                raw_message,
                ..
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Rate limited: {msg}")
                } else {
                    write!(f, "[{provider}] Rate limited")
                }
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
            Self::SerializationError { provider, detail } => {
                write!(f, "[{provider}] Serialization error: {detail}")
            }
            Self::Unknown {
                provider,
                raw_code,
                raw_message,
            } => {
                if let Some(code) = raw_code {
                    write!(f, "[{provider}] {code}: {raw_message}")
                } else {
                    write!(f, "[{provider}] {raw_message}")
                }
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
