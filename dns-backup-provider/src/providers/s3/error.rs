//! S3 error mapping

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::{PROVIDER_NAME, S3ObjectStore};

/// S3 error code mapping
/// Reference: <https://docs.aws.amazon.com/AmazonS3/latest/API/ErrorResponses.html>
impl ProviderErrorMapper for S3ObjectStore {
    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code.as_deref() {
            Some("NoSuchBucket") => ProviderError::BucketNotFound {
                provider: self.provider_name().to_string(),
                bucket: context.bucket.unwrap_or_else(|| "<unknown>".to_string()),
                raw_message: Some(raw.message),
            },

            Some("AccessDenied" | "AllAccessDisabled") => ProviderError::PermissionDenied {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            Some(
                "InvalidAccessKeyId" | "SignatureDoesNotMatch" | "ExpiredToken" | "InvalidToken",
            ) => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            Some(code @ ("SlowDown" | "ServiceUnavailable")) => ProviderError::RateLimited {
                provider: self.provider_name().to_string(),
                raw_code: Some(code.to_string()),
                raw_message: Some(raw.message),
            },

            _ => self.unknown_error(raw),
        }
    }
}
