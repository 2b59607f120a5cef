use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::providers::common::SdkFailure;
use crate::types::{
    ChangeBatch, ChangeReceipt, ObjectFetch, PaginatedResponse, ProviderZone, RecordCursor,
    RecordSet,
};

/// Raw API error (internal)
#[derive(Debug, Clone)]
pub(crate) struct RawApiError {
    /// Error code (e.g. `InvalidChangeBatch`, `NoSuchBucket`)
    pub code: Option<String>,
    /// Original error message
    pub message: String,
}

impl RawApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }
}

/// Extra information used while mapping errors (internal)
#[derive(Debug, Clone, Default)]
pub(crate) struct ErrorContext {
    /// Hosted zone the request targeted
    pub zone_id: Option<String>,
    /// Bucket the request targeted
    pub bucket: Option<String>,
}

/// Maps raw service errors onto [`ProviderError`] (internal).
pub(crate) trait ProviderErrorMapper {
    /// Provider identifier
    fn provider_name(&self) -> &'static str;

    /// Maps a service-level error code onto the unified error type
    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError;

    /// Maps any SDK failure, delegating service errors to [`map_error`](Self::map_error)
    fn map_failure(&self, failure: SdkFailure, context: ErrorContext) -> ProviderError {
        let provider = self.provider_name().to_string();
        match failure {
            SdkFailure::Service(raw) => self.map_error(raw, context),
            SdkFailure::Network(detail) => ProviderError::NetworkError { provider, detail },
            SdkFailure::Timeout(detail) => ProviderError::Timeout { provider, detail },
            SdkFailure::Response(detail) => ProviderError::ParseError { provider, detail },
            SdkFailure::Construction(detail) => {
                ProviderError::SerializationError { provider, detail }
            }
        }
    }

    /// Shortcut: request construction error
    fn serialization_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::SerializationError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// Shortcut: response parse error
    fn parse_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::ParseError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// Shortcut: unknown error (fallback)
    fn unknown_error(&self, raw: RawApiError) -> ProviderError {
        ProviderError::Unknown {
            provider: self.provider_name().to_string(),
            raw_code: raw.code,
            raw_message: raw.message,
        }
    }
}

/// DNS provider capability: zone listing, record listing, batched changes.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// Provider identifier
    fn id(&self) -> &'static str;

    /// Lists one page of hosted zones.
    ///
    /// Pass the previous page's `next_cursor` to continue; `None` starts
    /// from the beginning.
    async fn list_zones(&self, cursor: Option<&str>) -> Result<PaginatedResponse<ProviderZone>>;

    /// Lists one page of record sets in a zone, in provider order.
    async fn list_record_sets(
        &self,
        zone_id: &str,
        cursor: Option<&RecordCursor>,
    ) -> Result<PaginatedResponse<RecordSet, RecordCursor>>;

    /// Submits one change batch. The provider applies it all or nothing.
    async fn change_record_sets(&self, zone_id: &str, batch: &ChangeBatch)
    -> Result<ChangeReceipt>;
}

/// Object storage capability addressed by bucket + key.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store identifier
    fn id(&self) -> &'static str;

    /// Writes `body` at `key`, replacing any existing object unconditionally.
    async fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<()>;

    /// Reads the object at `key`.
    ///
    /// A missing key yields [`ObjectFetch::NotFound`]; every other failure is
    /// an error.
    async fn get_object(&self, bucket: &str, key: &str) -> Result<ObjectFetch>;
}
