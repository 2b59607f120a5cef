//! Shared helpers for the AWS-backed implementations

use aws_sdk_route53::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};

use crate::traits::RawApiError;

/// Service-agnostic classification of an AWS SDK failure.
///
/// Both SDK crates re-export the same `SdkError`, so one classifier serves
/// Route 53 and S3.
#[derive(Debug, Clone)]
pub(crate) enum SdkFailure {
    /// The service answered with an error code
    Service(RawApiError),
    /// The request never reached the service
    Network(String),
    /// The request timed out
    Timeout(String),
    /// The response could not be understood
    Response(String),
    /// The request could not be built
    Construction(String),
}

/// Classifies an SDK error, keeping the service code and message when present.
pub(crate) fn classify_sdk_error<E, R>(err: &SdkError<E, R>) -> SdkFailure
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    let detail = DisplayErrorContext(err).to_string();
    match err {
        SdkError::ServiceError(service) => {
            let inner = service.err();
            let message = inner.message().map_or(detail, str::to_string);
            SdkFailure::Service(match inner.code() {
                Some(code) => RawApiError::with_code(code, message),
                None => RawApiError::new(message),
            })
        }
        SdkError::DispatchFailure(_) => SdkFailure::Network(detail),
        SdkError::TimeoutError(_) => SdkFailure::Timeout(detail),
        SdkError::ConstructionFailure(_) => SdkFailure::Construction(detail),
        _ => SdkFailure::Response(detail),
    }
}

/// Trims a message for debug logging.
pub(crate) fn truncate_for_log(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_chars).collect();
        format!("{head}...")
    }
}
