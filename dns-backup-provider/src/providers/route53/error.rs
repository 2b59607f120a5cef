//! Route 53 error mapping

use crate::error::ProviderError;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::{PROVIDER_NAME, Route53Provider};

/// Route 53 error code mapping
/// Reference: <https://docs.aws.amazon.com/Route53/latest/APIReference/CommonErrors.html>
impl ProviderErrorMapper for Route53Provider {
    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }

    fn map_error(&self, raw: RawApiError, context: ErrorContext) -> ProviderError {
        match raw.code.as_deref() {
            // Authentication error
            Some(
                "InvalidClientTokenId"
                | "UnrecognizedClientException"
                | "ExpiredToken"
                | "SignatureDoesNotMatch"
                | "IncompleteSignature"
                | "MissingAuthenticationToken",
            ) => ProviderError::InvalidCredentials {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            Some("AccessDenied" | "AccessDeniedException") => ProviderError::PermissionDenied {
                provider: self.provider_name().to_string(),
                raw_message: Some(raw.message),
            },

            Some("NoSuchHostedZone") => ProviderError::ZoneNotFound {
                provider: self.provider_name().to_string(),
                zone_id: context.zone_id.unwrap_or_else(|| "<unknown>".to_string()),
                raw_message: Some(raw.message),
            },

            // CREATE of a record set that is already present
            Some(code @ "InvalidChangeBatch") if raw.message.contains("already exists") => {
                ProviderError::RecordExists {
                    provider: self.provider_name().to_string(),
                    record_name: conflicting_record_name(&raw.message)
                        .unwrap_or("<unknown>")
                        .to_string(),
                    raw_code: Some(code.to_string()),
                    raw_message: Some(raw.message),
                }
            }

            Some("InvalidChangeBatch") => ProviderError::InvalidChangeBatch {
                provider: self.provider_name().to_string(),
                raw_message: raw.message,
            },

            Some(code @ ("InvalidInput" | "InvalidPaginationToken")) => {
                let param = match code {
                    "InvalidPaginationToken" => "marker",
                    _ => "input",
                };
                ProviderError::InvalidParameter {
                    provider: self.provider_name().to_string(),
                    param: param.to_string(),
                    detail: raw.message,
                }
            }

            // PriorRequestNotComplete: a previous change to the zone is still pending
            Some(code @ ("Throttling" | "ThrottlingException" | "PriorRequestNotComplete")) => {
                ProviderError::RateLimited {
                    provider: self.provider_name().to_string(),
                    raw_code: Some(code.to_string()),
                    raw_message: Some(raw.message),
                }
            }

            _ => self.unknown_error(raw),
        }
    }
}

/// Pulls the record name out of a rejection such as
/// `Tried to create resource record set [name='www.example.com.', type='A'] but it already exists`.
fn conflicting_record_name(message: &str) -> Option<&str> {
    let start = message.find("name='")? + "name='".len();
    let len = message[start..].find('\'')?;
    Some(&message[start..start + len])
}
